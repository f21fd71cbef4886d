//! Dashboard overview page.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::fixtures;
use crate::format::format_thousands;
use crate::ui::components::{Card, CardContent, CardHeader, IconKind, TitleSize};
use crate::ui::dashboard::{
    ActionItems, KpiCard, KpiVariant, ScoreRanges, StatusDistribution, Trend, WorkflowProgress,
};

use super::layout::{PageHeader, PageLayout};

/// System overview: KPIs, pipeline progress and the next actions.
#[component]
pub fn DashboardPage(
    /// Sidebar branding.
    branding: DashboardConfig,
) -> impl IntoView {
    let stats = fixtures::quick_stats();

    view! {
        <PageLayout current_path="/" branding=branding>
            <PageHeader title="Dashboard" subtitle="System overview and next actions" />

            // KPI cards
            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                <KpiCard
                    title="Stock Pool"
                    value=format_thousands(i64::from(stats.pool_size))
                    icon=IconKind::Database
                    variant=KpiVariant::Info
                />
                <KpiCard
                    title="AI Reports Today"
                    value=format_thousands(i64::from(stats.ai_reports))
                    icon=IconKind::FileText
                />
                <KpiCard
                    title="Approval Queue"
                    value=format_thousands(i64::from(stats.approval_queue))
                    icon=IconKind::CheckSquare
                    variant=KpiVariant::Warning
                    trend=Some(Trend::new("+2 from yesterday", false))
                />
                <KpiCard
                    title="Active Trades"
                    value=format_thousands(i64::from(stats.active_trades))
                    icon=IconKind::TrendingUp
                    variant=KpiVariant::Success
                    trend=Some(Trend::new("+12.5% P/L", true))
                />
            </div>

            // Workflow progress
            <Card section="workflow">
                <CardContent class="p-6">
                    <WorkflowProgress />
                </CardContent>
            </Card>

            // Action items & status distribution
            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <ActionItems />
                </div>

                <Card section="status-distribution">
                    <CardHeader title="Status Distribution" size=TitleSize::Lg />
                    <CardContent class="space-y-4">
                        <div class="space-y-3">
                            <StatusDistribution />
                        </div>
                        <ScoreRanges />
                    </CardContent>
                </Card>
            </div>
        </PageLayout>
    }
}
