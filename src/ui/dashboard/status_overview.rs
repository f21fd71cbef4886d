//! Status distribution and AI score range summaries.

use leptos::prelude::*;

use crate::domain::{ScoreRange, StatusShare, Tone};
use crate::fixtures;

fn bar_classes(tone: Tone) -> &'static str {
    match tone {
        Tone::Success => "h-2 rounded-full bg-success",
        Tone::Info => "h-2 rounded-full bg-info",
        Tone::Warning => "h-2 rounded-full bg-warning",
    }
}

/// Share of stocks per pool status, one bar each.
#[component]
pub fn StatusDistribution(
    /// Shares in display order.
    #[prop(default = fixtures::status_distribution())]
    shares: &'static [StatusShare],
) -> impl IntoView {
    shares
        .iter()
        .map(|share| {
            let percent = format!("{}%", share.percent);
            let width = format!("width: {}%", share.percent.min(100));

            view! {
                <div>
                    <div class="flex items-center justify-between text-sm mb-2">
                        <span class="text-muted-foreground">{share.label}</span>
                        <span class="font-medium text-foreground">{percent}</span>
                    </div>
                    <div class="h-2 rounded-full bg-muted">
                        <div class=bar_classes(share.tone) style=width />
                    </div>
                </div>
            }
        })
        .collect_view()
}

/// Count of analyzed stocks per AI score band.
#[component]
pub fn ScoreRanges(
    /// Bands from highest to lowest.
    #[prop(default = fixtures::score_ranges())]
    ranges: &'static [ScoreRange],
) -> impl IntoView {
    let rows = ranges
        .iter()
        .map(|range| {
            view! {
                <div class="flex justify-between">
                    <span class="text-muted-foreground">{range.label}</span>
                    <span class="font-mono text-foreground">
                        {format!("{} stocks", range.stocks)}
                    </span>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="pt-4 border-t border-border">
            <h4 class="text-sm font-semibold text-foreground mb-3">"AI Score Range"</h4>
            <div class="space-y-2 text-sm">{rows}</div>
        </div>
    }
}
