//! Active trades page.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::{PortfolioSummary, Position};
use crate::fixtures;
use crate::format::{
    ChangeDirection, format_percent_fixed, format_signed_won, format_thousands, format_won,
};
use crate::ui::components::{Card, CardContent, CardHeader, IconKind, TitleSize};
use crate::ui::dashboard::{KpiCard, KpiVariant, Trend};

use super::layout::{PageHeader, PageLayout};

/// Portfolio KPIs and the table of open positions.
#[component]
pub fn ActiveTradesPage(
    /// Sidebar branding.
    branding: DashboardConfig,
    /// Open positions.
    #[prop(default = fixtures::active_positions())]
    positions: &'static [Position],
) -> impl IntoView {
    let summary = PortfolioSummary::from_positions(positions);
    let subtitle = format!("Monitoring {} open positions", summary.positions);

    let pnl_up = ChangeDirection::of(summary.total_pnl_pct) == ChangeDirection::Up;
    let pnl_variant = if pnl_up {
        KpiVariant::Success
    } else {
        KpiVariant::Warning
    };
    let pnl_trend = Trend::new(format_percent_fixed(summary.total_pnl_pct, 2), pnl_up);

    let rows = positions
        .iter()
        .map(|position| {
            let pnl_classes = format!(
                "px-4 py-3 text-right font-mono {}",
                ChangeDirection::of(position.pnl_pct()).text_class()
            );
            let pnl = format!(
                "{} ({})",
                format_signed_won(position.pnl()),
                format_percent_fixed(position.pnl_pct(), 2)
            );

            view! {
                <tr class="border-b border-border" data-ticker=position.ticker>
                    <td class="px-4 py-3 font-mono font-semibold text-foreground">{position.ticker}</td>
                    <td class="px-4 py-3 text-foreground">{position.company}</td>
                    <td class="px-4 py-3 text-right font-mono">{format_won(position.entry_price)}</td>
                    <td class="px-4 py-3 text-right font-mono">{format_won(position.current_price)}</td>
                    <td class="px-4 py-3 text-right font-mono">{format_thousands(position.quantity)}</td>
                    <td class="px-4 py-3 text-right font-mono">{format_won(position.position_value())}</td>
                    <td class=pnl_classes>{pnl}</td>
                    <td class="px-4 py-3 text-muted-foreground">{position.open_date}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <PageLayout current_path="/active-trades" branding=branding>
            <PageHeader title="Active Trades" subtitle=subtitle />

            <div class="grid gap-6 md:grid-cols-2 lg:grid-cols-4">
                <KpiCard
                    title="Total P&L"
                    value=format_signed_won(summary.total_pnl)
                    icon=IconKind::TrendingUp
                    variant=pnl_variant
                    trend=Some(pnl_trend)
                />
                <KpiCard
                    title="Average P&L"
                    value=format_percent_fixed(summary.average_pnl_pct, 2)
                    icon=IconKind::Activity
                    variant=KpiVariant::Info
                />
                <KpiCard
                    title="Total Value"
                    value=format_won(summary.total_value)
                    icon=IconKind::Wallet
                />
                <KpiCard
                    title="Positions"
                    value=summary.positions.to_string()
                    icon=IconKind::CheckSquare
                />
            </div>

            <Card section="positions">
                <CardHeader title="Active Positions" size=TitleSize::Lg />
                <CardContent>
                    <div class="overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="border-b border-border text-xs text-muted-foreground">
                                    <th class="px-4 py-2 text-left">"Ticker"</th>
                                    <th class="px-4 py-2 text-left">"Company"</th>
                                    <th class="px-4 py-2 text-right">"Entry Price"</th>
                                    <th class="px-4 py-2 text-right">"Current Price"</th>
                                    <th class="px-4 py-2 text-right">"Qty"</th>
                                    <th class="px-4 py-2 text-right">"Position Value"</th>
                                    <th class="px-4 py-2 text-right">"P&L"</th>
                                    <th class="px-4 py-2 text-left">"Open Date"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                </CardContent>
            </Card>
        </PageLayout>
    }
}
