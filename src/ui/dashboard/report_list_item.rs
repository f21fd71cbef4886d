//! Selectable AI report row.

use leptos::prelude::*;

use crate::domain::Report;
use crate::ui::components::{Badge, BadgeVariant};

use super::PriceChange;

const ITEM_BASE: &str = "block w-full text-left p-4 rounded-lg border transition-colors";
const ITEM_SELECTED: &str = "border-primary bg-primary/10";
const ITEM_IDLE: &str = "border-border hover:border-primary/50 hover:bg-accent/50";

/// One report in the AI reports list.
///
/// The row links to `href` (the page with `?selected=<id>`). With HTMX it
/// instead loads `/ai-reports/<id>/detail` into `#report-detail` and pushes
/// `href` onto the history.
#[component]
pub fn ReportListItem(
    /// Report to show.
    report: Report,
    /// Whether this row is the current selection.
    #[prop(default = false)]
    selected: bool,
    /// Link that selects this row.
    #[prop(into)]
    href: String,
) -> impl IntoView {
    let classes = format!(
        "{} {}",
        ITEM_BASE,
        if selected { ITEM_SELECTED } else { ITEM_IDLE }
    );

    let selected_attr = if selected { "true" } else { "false" };
    let detail_url = format!("/ai-reports/{}/detail", report.id);
    let push_url = href.clone();

    view! {
        <a
            href=href
            hx-get=detail_url
            hx-target="#report-detail"
            hx-swap="innerHTML"
            hx-push-url=push_url
            class=classes
            data-report=report.id
            data-selected=selected_attr
        >
            <div class="flex items-start gap-3">
                // Rank
                <div class="flex h-8 w-8 shrink-0 items-center justify-center rounded-full bg-muted font-mono text-sm font-bold text-foreground">
                    {report.rank.to_string()}
                </div>

                <div class="flex-1 min-w-0">
                    <div class="flex items-start justify-between gap-2 mb-2">
                        <div>
                            <div class="flex items-center gap-2">
                                <span class="font-mono text-sm font-semibold text-foreground">
                                    {report.code}
                                </span>
                                <Badge
                                    variant=BadgeVariant::from(report.recommendation)
                                    class="text-xs"
                                >
                                    {report.recommendation.label()}
                                </Badge>
                            </div>
                            <p class="text-sm text-muted-foreground mt-0.5">{report.name}</p>
                        </div>
                        <PriceChange value=report.price_change class="text-sm" />
                    </div>

                    <div class="flex items-center gap-4 mb-2 text-xs">
                        <div>
                            <span class="text-muted-foreground">"Score: "</span>
                            <span class="font-mono font-semibold text-foreground">
                                {report.score.to_string()}
                            </span>
                        </div>
                        <div>
                            <span class="text-muted-foreground">"Confidence: "</span>
                            <span class="font-mono font-semibold text-foreground">
                                {format!("{}%", report.confidence)}
                            </span>
                        </div>
                    </div>

                    <p class="text-xs text-muted-foreground line-clamp-2">{report.summary}</p>
                </div>
            </div>
        </a>
    }
}
