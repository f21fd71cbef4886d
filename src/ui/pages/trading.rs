//! Trading page: account, market and order status panels.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::{AccountBalance, MarketIndex, Order, TradingLimits, whole_millions};
use crate::fixtures;
use crate::format::{format_decimal, format_thousands, format_won};
use crate::ui::components::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, Icon, IconKind, TitleSize,
};
use crate::ui::dashboard::PriceChange;

use super::layout::{PageHeader, PageLayout};

/// Label on the left, value on the right.
#[component]
fn StatRow(
    label: &'static str,
    #[prop(into)]
    value: String,
    #[prop(default = "font-mono text-sm font-semibold text-foreground")]
    value_class: &'static str,
) -> impl IntoView {
    view! {
        <div class="flex items-center justify-between">
            <span class="text-sm text-muted-foreground">{label}</span>
            <span class=value_class>{value}</span>
        </div>
    }
}

/// Recent orders on the left, account panels on the right.
#[component]
pub fn TradingPage(
    /// Sidebar branding.
    branding: DashboardConfig,
    #[prop(default = fixtures::account_balance())]
    balance: AccountBalance,
    #[prop(default = fixtures::market_indices())]
    indices: &'static [MarketIndex],
    #[prop(default = fixtures::trading_limits())]
    limits: TradingLimits,
    /// Orders, newest first.
    #[prop(default = fixtures::recent_orders())]
    orders: &'static [Order],
) -> impl IntoView {
    let margin_used = format!("{}%", balance.margin_used_pct);
    let max_position = format!("₩{}M", whole_millions(limits.max_position_size));
    let max_daily_loss = format!("₩{}M", whole_millions(limits.max_daily_loss));
    let max_leverage = format!("{}x", limits.max_leverage);

    view! {
        <PageLayout current_path="/trading" branding=branding spacing="space-y-6">
            <PageHeader title="Trading" subtitle="Account, market and order status" />

            <div class="grid gap-6 lg:grid-cols-3">
                <div class="lg:col-span-2">
                    <RecentOrders orders=orders />
                </div>

                <div class="space-y-6">
                    <Card section="account-balance">
                        <CardHeader title="Account Balance" />
                        <CardContent class="space-y-3">
                            <StatRow label="Available Cash" value=format_won(balance.available_cash) />
                            <StatRow
                                label="Buying Power"
                                value=format_won(balance.buying_power)
                                value_class="font-mono text-sm font-semibold text-success"
                            />
                            <StatRow label="Margin Used" value=margin_used />
                        </CardContent>
                    </Card>

                    <MarketStatus indices=indices />

                    <Card section="trading-limits">
                        <CardHeader title="Trading Limits" />
                        <CardContent class="space-y-3">
                            <StatRow label="Max Position Size" value=max_position />
                            <StatRow label="Max Daily Loss" value=max_daily_loss />
                            <StatRow label="Max Leverage" value=max_leverage />
                        </CardContent>
                    </Card>
                </div>
            </div>
        </PageLayout>
    }
}

#[component]
fn MarketStatus(indices: &'static [MarketIndex]) -> impl IntoView {
    let rows = indices
        .iter()
        .map(|index| {
            view! {
                <div class="flex items-center justify-between" data-index=index.name>
                    <span class="text-sm font-semibold text-foreground">{index.name}</span>
                    <div class="text-right">
                        <div class="font-mono text-sm font-semibold text-foreground">
                            {format_decimal(index.value, 2)}
                        </div>
                        <PriceChange value=index.change class="text-xs" icon_class="h-3 w-3" />
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <Card section="market-status">
            <CardHeader title="Market Status" />
            <CardContent class="space-y-3">{rows}</CardContent>
        </Card>
    }
}

/// Order log. An empty log shows a hint instead of the list.
#[component]
pub fn RecentOrders(orders: &'static [Order]) -> impl IntoView {
    let body = if orders.is_empty() {
        view! {
            <div class="flex items-center gap-2 rounded-lg bg-muted p-4">
                <Icon kind=IconKind::Clock class="h-4 w-4 text-muted-foreground" />
                <p class="text-sm text-muted-foreground">"No recent orders."</p>
            </div>
        }
        .into_any()
    } else {
        orders
            .iter()
            .map(|order| view! { <OrderRow order=*order /> })
            .collect_view()
            .into_any()
    };

    view! {
        <Card section="recent-orders">
            <CardHeader title="Recent Orders" size=TitleSize::Lg />
            <CardContent class="space-y-2">{body}</CardContent>
        </Card>
    }
}

#[component]
fn OrderRow(order: Order) -> impl IntoView {
    let detail = format!(
        "{} {} @ {}",
        order.kind.label(),
        format_thousands(order.quantity),
        format_won(order.price)
    );
    let placed = format!("{} · {}", format_won(order.total()), order.placed_at);

    view! {
        <div class="flex items-center justify-between rounded-lg border border-border p-4" data-order=order.ticker>
            <div>
                <div class="flex items-center gap-2">
                    <span class="font-mono text-sm font-semibold text-foreground">{order.ticker}</span>
                    <Badge variant=BadgeVariant::from(order.side) class="text-xs">
                        {order.side.label()}
                    </Badge>
                </div>
                <p class="text-sm text-muted-foreground mt-0.5">{order.company}</p>
            </div>
            <div class="text-right">
                <div class="font-mono text-sm text-foreground">{detail}</div>
                <div class="text-xs text-muted-foreground">
                    {placed}
                </div>
            </div>
        </div>
    }
}
