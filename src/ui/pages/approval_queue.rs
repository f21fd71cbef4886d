//! Approval queue page and its quick analysis panel.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::{
    ApprovalBadge, Assessment, MacdSignal, ScoreTier, StockCandidate, VolumeLevel,
};
use crate::fixtures;
use crate::format::format_won;
use crate::ui::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    Icon, IconKind, TitleSize,
};
use crate::ui::dashboard::PriceChange;

use super::layout::{PageHeader, PageLayout};
use super::selected_or_first;

const ROW_BASE: &str = "block w-full rounded-lg border p-4 text-left transition-colors";
const ROW_SELECTED: &str = "border-primary bg-primary/10";
const ROW_IDLE: &str = "border-border hover:border-primary/50";

fn macd_classes(signal: MacdSignal) -> &'static str {
    match signal {
        MacdSignal::Bullish => "font-mono text-success",
        MacdSignal::Neutral => "font-mono text-foreground",
        MacdSignal::Bearish => "font-mono text-destructive",
    }
}

fn volume_classes(level: VolumeLevel) -> &'static str {
    match level {
        VolumeLevel::High => "font-mono text-success",
        VolumeLevel::Normal => "font-mono text-foreground",
        VolumeLevel::Low => "font-mono text-muted-foreground",
    }
}

fn risk_note(badge: ApprovalBadge) -> &'static str {
    match badge {
        ApprovalBadge::StrongApprove => {
            "Moderate volatility. Suggested position: 2-3% of portfolio"
        }
        ApprovalBadge::WatchMore => "Mixed signals. Suggested position: 1-2% of portfolio",
        ApprovalBadge::DoNotApprove => "Elevated risk. Hold off on opening a position",
    }
}

/// Review list of candidates with a detail panel for the selected one.
///
/// `selected` is a candidate id; a missing or unknown id selects the first
/// candidate.
#[component]
pub fn ApprovalQueuePage(
    /// Sidebar branding.
    branding: DashboardConfig,
    /// Id of the selected candidate.
    #[prop(default = None)]
    selected: Option<String>,
    /// Candidates awaiting approval.
    #[prop(default = fixtures::approval_queue())]
    queue: &'static [StockCandidate],
) -> impl IntoView {
    let current = selected_or_first(queue, selected.as_deref(), |c| c.id);
    let current_id = current.map(|c| c.id);

    let detail = match current {
        Some(&candidate) => view! { <CandidatePanel candidate=candidate /> }.into_any(),
        None => view! {
            <Card>
                <CardContent class="p-6">
                    <p class="text-sm text-muted-foreground">"The approval queue is empty."</p>
                </CardContent>
            </Card>
        }
        .into_any(),
    };

    let title = format!("Pending Approvals ({})", queue.len());

    view! {
        <PageLayout current_path="/approval-queue" branding=branding spacing="space-y-6">
            <PageHeader title="Approval Queue" subtitle="Review and approve stocks for trading" />

            <div class="grid gap-6 lg:grid-cols-3">
                // Queue
                <div class="lg:col-span-2">
                    <Card section="approval-queue">
                        <CardHeader title=title />
                        <CardContent>
                            <QueueRows queue=queue current_id=current_id />
                        </CardContent>
                    </Card>
                </div>

                // Detail panel, swapped by the rows' hx-get
                <div id="quick-analysis" class="space-y-6">{detail}</div>
            </div>
        </PageLayout>
    }
}

/// The queue list. With `oob` set it is marked for an out-of-band swap, so a
/// fragment response can move the highlight along with the detail panel.
#[component]
pub fn QueueRows(
    queue: &'static [StockCandidate],
    current_id: Option<&'static str>,
    #[prop(default = false)]
    oob: bool,
) -> impl IntoView {
    let rows = queue
        .iter()
        .map(|candidate| {
            let is_selected = current_id == Some(candidate.id);
            let candidate = *candidate;
            view! { <QueueRow candidate=candidate selected=is_selected /> }
        })
        .collect_view();
    let swap_oob = oob.then_some("true");

    view! {
        <div id="queue-rows" class="space-y-2" hx-swap-oob=swap_oob>{rows}</div>
    }
}

/// One candidate row.
///
/// With HTMX loaded, a click fetches the quick analysis fragment into
/// `#quick-analysis` and pushes `?selected=<id>`; without it the `href`
/// reloads the whole page with the same selection.
#[component]
fn QueueRow(
    /// Candidate to show.
    candidate: StockCandidate,
    /// Whether this row is the current selection.
    selected: bool,
) -> impl IntoView {
    let classes = format!(
        "{} {}",
        ROW_BASE,
        if selected { ROW_SELECTED } else { ROW_IDLE }
    );
    let href = format!("/approval-queue?selected={}", candidate.id);
    let analysis_url = format!("/approval-queue/{}/analysis", candidate.id);
    let push_url = href.clone();
    let selected_attr = if selected { "true" } else { "false" };

    view! {
        <a
            href=href
            hx-get=analysis_url
            hx-target="#quick-analysis"
            hx-swap="innerHTML"
            hx-push-url=push_url
            class=classes
            data-candidate=candidate.id
            data-selected=selected_attr
        >
            <div class="flex items-center justify-between">
                <div>
                    <div class="flex items-center gap-2">
                        <span class="font-mono text-sm font-semibold text-foreground">
                            {candidate.code}
                        </span>
                        <Badge variant=BadgeVariant::Secondary class="text-xs">
                            {format!("Score: {}", candidate.ai_score)}
                        </Badge>
                    </div>
                    <p class="text-sm text-muted-foreground mt-0.5">{candidate.name}</p>
                </div>
                <div class="flex items-center gap-6">
                    <div class="text-right">
                        <div class="font-mono text-sm font-semibold text-foreground">
                            {format_won(candidate.price)}
                        </div>
                        <PriceChange value=candidate.price_change class="text-xs" icon_class="h-3 w-3" />
                    </div>
                    <Badge variant=BadgeVariant::Outline class="text-xs">
                        {candidate.added_date}
                    </Badge>
                </div>
            </div>
        </a>
    }
}

/// Everything inside `#quick-analysis`: the analysis card and the reviewer
/// actions.
#[component]
pub fn CandidatePanel(
    /// Selected candidate.
    candidate: StockCandidate,
) -> impl IntoView {
    view! {
        <QuickAnalysis candidate=candidate />
        <ApprovalActions candidate=candidate />
    }
}

/// Quick analysis card for one candidate.
#[component]
pub fn QuickAnalysis(
    /// Candidate to analyze.
    candidate: StockCandidate,
) -> impl IntoView {
    let assessment = ApprovalBadge::evaluate(&candidate, fixtures::report_by_code(candidate.code));
    let indicators = candidate.indicators;
    let score_badge = BadgeVariant::from(ScoreTier::from_score(candidate.ai_score));

    view! {
        <Card section="quick-analysis">
            <CardHeader title="Quick Analysis" size=TitleSize::Lg />
            <CardContent class="space-y-4">
                <div>
                    <h3 class="font-mono text-xl font-bold text-foreground">{candidate.code}</h3>
                    <p class="text-sm text-muted-foreground">{candidate.name}</p>
                </div>

                <div class="space-y-3">
                    <div class="flex items-center justify-between">
                        <span class="text-sm text-muted-foreground">"Current Price"</span>
                        <span class="font-mono text-lg font-semibold text-foreground">
                            {format_won(candidate.price)}
                        </span>
                    </div>
                    <div class="flex items-center justify-between">
                        <span class="text-sm text-muted-foreground">"AI Score"</span>
                        <Badge variant=score_badge>
                            {candidate.ai_score.to_string()}
                        </Badge>
                    </div>
                    <div class="flex items-center justify-between">
                        <span class="text-sm text-muted-foreground">"Price Change"</span>
                        <PriceChange value=candidate.price_change class="text-sm font-semibold" />
                    </div>
                </div>

                <div class="rounded-lg bg-muted p-4">
                    <div class="flex items-start gap-2">
                        <Icon kind=IconKind::BarChart class="h-4 w-4 text-muted-foreground mt-0.5" />
                        <div class="flex-1">
                            <p class="text-xs text-muted-foreground mb-2">"Technical Indicators"</p>
                            <div class="space-y-2 text-xs">
                                <div class="flex justify-between">
                                    <span class="text-muted-foreground">"RSI:"</span>
                                    <span class="font-mono text-foreground">
                                        {format!("{:.1}", indicators.rsi)}
                                    </span>
                                </div>
                                <div class="flex justify-between">
                                    <span class="text-muted-foreground">"MACD:"</span>
                                    <span class=macd_classes(indicators.macd)>
                                        {indicators.macd.label()}
                                    </span>
                                </div>
                                <div class="flex justify-between">
                                    <span class="text-muted-foreground">"Volume:"</span>
                                    <span class=volume_classes(indicators.volume)>
                                        {indicators.volume.label()}
                                    </span>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <ApprovalRecommendation assessment=assessment />

                <div class="rounded-lg bg-warning/10 border border-warning/30 p-3">
                    <div class="flex items-start gap-2">
                        <Icon kind=IconKind::AlertCircle class="h-4 w-4 text-warning mt-0.5" />
                        <div>
                            <p class="text-xs font-semibold text-foreground">"Risk Assessment"</p>
                            <p class="text-xs text-muted-foreground mt-1">
                                {risk_note(assessment.badge)}
                            </p>
                        </div>
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}

#[component]
fn ApprovalRecommendation(assessment: Assessment) -> impl IntoView {
    view! {
        <div class="space-y-2" data-approval=assessment.badge.label()>
            <div class="flex items-center justify-between">
                <span class="text-sm text-muted-foreground">"Approval Recommendation"</span>
                <Badge variant=BadgeVariant::from(assessment.badge)>
                    {format!("{} | Score: {}", assessment.badge.label(), assessment.score)}
                </Badge>
            </div>
            <p class="text-xs text-muted-foreground">{assessment.explanation()}</p>
        </div>
    }
}

/// Reviewer actions. "Start Trading" is disabled when the badge advises
/// against approval.
#[component]
fn ApprovalActions(
    /// Candidate the actions apply to.
    candidate: StockCandidate,
) -> impl IntoView {
    let assessment = ApprovalBadge::evaluate(&candidate, fixtures::report_by_code(candidate.code));
    let trading_disabled = !assessment.allows_approval();

    view! {
        <div class="space-y-2">
            <Button
                size=ButtonSize::Lg
                variant=ButtonVariant::Success
                action=Some("start-trading")
                disabled=trading_disabled
                class="w-full"
            >
                "Start Trading"
            </Button>
            <Button
                size=ButtonSize::Lg
                variant=ButtonVariant::Outline
                action=Some("re-evaluate")
                class="w-full bg-transparent"
            >
                "Re-evaluate"
            </Button>
            <Button
                size=ButtonSize::Lg
                variant=ButtonVariant::Destructive
                action=Some("remove")
                class="w-full"
            >
                "Remove from Queue"
            </Button>
        </div>
    }
}
