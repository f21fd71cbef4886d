//! AI reports page.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::{Report, ScoreTier};
use crate::fixtures;
use crate::ui::components::{Badge, BadgeVariant, Card, CardContent, CardHeader, TitleSize};
use crate::ui::dashboard::{PriceChange, ReportListItem};

use super::layout::{PageHeader, PageLayout};
use super::selected_or_first;

/// Ranked AI reports with the selected report expanded on the right.
#[component]
pub fn AiReportsPage(
    /// Sidebar branding.
    branding: DashboardConfig,
    /// Id of the selected report.
    #[prop(default = None)]
    selected: Option<String>,
    /// Reports ordered by rank.
    #[prop(default = fixtures::ai_reports())]
    reports: &'static [Report],
) -> impl IntoView {
    let current = selected_or_first(reports, selected.as_deref(), |r| r.id);
    let current_id = current.map(|r| r.id);

    let detail = current.map(|&report| view! { <ReportDetail report=report /> });
    let title = format!("Top Ranked Reports ({})", reports.len());

    view! {
        <PageLayout current_path="/ai-reports" branding=branding spacing="space-y-6">
            <PageHeader title="AI Reports" subtitle="Daily AI analysis of the top-ranked pool stocks" />

            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <Card section="report-list">
                        <CardHeader title=title />
                        <CardContent>
                            <ReportRows reports=reports current_id=current_id />
                        </CardContent>
                    </Card>
                </div>

                <div id="report-detail" class="space-y-6">{detail}</div>
            </div>
        </PageLayout>
    }
}

/// The report list, optionally marked for an out-of-band swap.
#[component]
pub fn ReportRows(
    reports: &'static [Report],
    current_id: Option<&'static str>,
    #[prop(default = false)]
    oob: bool,
) -> impl IntoView {
    let items = reports
        .iter()
        .map(|report| {
            let report = *report;
            let is_selected = current_id == Some(report.id);
            let href = format!("/ai-reports?selected={}", report.id);
            view! { <ReportListItem report=report selected=is_selected href=href /> }
        })
        .collect_view();
    let swap_oob = oob.then_some("true");

    view! {
        <div id="report-rows" class="space-y-2" hx-swap-oob=swap_oob>{items}</div>
    }
}

/// Expanded view of one report, also the body of the detail fragment.
#[component]
pub fn ReportDetail(
    /// Report to expand.
    report: Report,
) -> impl IntoView {
    let score_badge = BadgeVariant::from(ScoreTier::from_score(report.score));
    let queued = fixtures::approval_queue()
        .iter()
        .find(|c| c.code == report.code)
        .map(|c| {
            let href = format!("/approval-queue?selected={}", c.id);
            view! {
                <a href=href class="text-xs font-medium text-primary hover:underline">
                    "Open in approval queue"
                </a>
            }
        });

    view! {
        <Card section="report-detail">
            <CardHeader title="Report Detail" size=TitleSize::Lg />
            <CardContent class="space-y-4">
                <div class="flex items-start justify-between">
                    <div>
                        <h3 class="font-mono text-xl font-bold text-foreground">{report.code}</h3>
                        <p class="text-sm text-muted-foreground">{report.name}</p>
                    </div>
                    <Badge variant=BadgeVariant::from(report.recommendation)>
                        {report.recommendation.label()}
                    </Badge>
                </div>

                <div class="space-y-3">
                    <div class="flex items-center justify-between">
                        <span class="text-sm text-muted-foreground">"Rank"</span>
                        <span class="font-mono text-sm font-semibold text-foreground">
                            {format!("#{}", report.rank)}
                        </span>
                    </div>
                    <div class="flex items-center justify-between">
                        <span class="text-sm text-muted-foreground">"AI Score"</span>
                        <Badge variant=score_badge>{report.score.to_string()}</Badge>
                    </div>
                    <div class="flex items-center justify-between">
                        <span class="text-sm text-muted-foreground">"Confidence"</span>
                        <span class="font-mono text-sm font-semibold text-foreground">
                            {format!("{}%", report.confidence)}
                        </span>
                    </div>
                    <div class="flex items-center justify-between">
                        <span class="text-sm text-muted-foreground">"Price Change"</span>
                        <PriceChange value=report.price_change class="text-sm font-semibold" />
                    </div>
                </div>

                <div class="rounded-lg bg-muted p-4">
                    <p class="text-xs text-muted-foreground mb-2">"Summary"</p>
                    <p class="text-sm text-foreground">{report.summary}</p>
                </div>

                {queued}
            </CardContent>
        </Card>
    }
}
