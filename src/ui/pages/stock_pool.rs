//! Stock pool page: the screened universe with search and filters.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::{PoolFilter, PoolStatus, PoolStock, Sector};
use crate::fixtures;
use crate::format::{format_decimal, format_percent_fixed, format_won};
use crate::ui::components::{Badge, BadgeVariant, Card, CardContent, CardHeader, TitleSize};

use super::layout::{PageHeader, PageLayout};

const FIELD: &str = "h-10 rounded-md border border-border bg-background px-3 text-sm text-foreground";
const SUBMIT: &str = "inline-flex h-10 items-center justify-center rounded-md bg-primary px-4 \
                      text-sm font-medium text-primary-foreground hover:bg-primary/90";

/// Green for gains, red for losses, neutral when flat.
fn change_class(change: f64) -> &'static str {
    if change > 0.0 {
        "px-4 py-3 text-right font-mono text-success"
    } else if change < 0.0 {
        "px-4 py-3 text-right font-mono text-destructive"
    } else {
        "px-4 py-3 text-right font-mono text-foreground"
    }
}

/// Pool table narrowed by `filter`.
///
/// The filter form submits with GET, so every filtered view has its own URL
/// (`/stock-pool?q=samsung&sector=Technology&status=qualified`).
#[component]
pub fn StockPoolPage(
    /// Sidebar branding.
    branding: DashboardConfig,
    /// Current search and filters.
    #[prop(default = PoolFilter::default())]
    filter: PoolFilter,
    /// The whole pool.
    #[prop(default = fixtures::stock_pool())]
    stocks: &'static [PoolStock],
) -> impl IntoView {
    let shown = filter.apply(stocks);
    let caption = format!("Showing {} of {} stocks", shown.len(), stocks.len());
    let subtitle = format!("Monitoring {} stocks", stocks.len());

    let rows = if shown.is_empty() {
        view! {
            <tr>
                <td colspan="8" class="px-4 py-8 text-center text-sm text-muted-foreground">
                    "No stocks match the current filters."
                </td>
            </tr>
        }
        .into_any()
    } else {
        shown
            .into_iter()
            .map(|stock| view! { <PoolRow stock=*stock /> })
            .collect_view()
            .into_any()
    };

    view! {
        <PageLayout current_path="/stock-pool" branding=branding spacing="space-y-6">
            <PageHeader title="Stock Pool" subtitle=subtitle />

            <PoolFilterForm filter=filter />

            <Card section="stock-pool">
                <CardHeader title="Pool" size=TitleSize::Lg>
                    <span class="text-xs text-muted-foreground" data-caption="pool">
                        {caption}
                    </span>
                </CardHeader>
                <CardContent>
                    <div class="overflow-x-auto">
                        <table class="w-full text-sm">
                            <thead>
                                <tr class="border-b border-border text-xs text-muted-foreground">
                                    <th class="px-4 py-2 text-left">"Ticker"</th>
                                    <th class="px-4 py-2 text-left">"Company Name"</th>
                                    <th class="px-4 py-2 text-left">"Sector"</th>
                                    <th class="px-4 py-2 text-right">"Price"</th>
                                    <th class="px-4 py-2 text-right">"Change %"</th>
                                    <th class="px-4 py-2 text-right">"Volume"</th>
                                    <th class="px-4 py-2 text-right">"AI Score"</th>
                                    <th class="px-4 py-2 text-left">"Status"</th>
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

/// Search box plus sector and status selects. Each select starts with an
/// empty "All" choice.
#[component]
fn PoolFilterForm(filter: PoolFilter) -> impl IntoView {
    let query = filter.query.clone().unwrap_or_default();
    let any_sector = filter.sector.is_none();
    let any_status = filter.status.is_none();
    let search_classes = format!("{FIELD} flex-1 min-w-64");

    let sectors = Sector::ALL
        .into_iter()
        .map(|sector| {
            let chosen = filter.sector == Some(sector);
            view! { <option value=sector.label() selected=chosen>{sector.label()}</option> }
        })
        .collect_view();
    let statuses = PoolStatus::ALL
        .into_iter()
        .map(|status| {
            let chosen = filter.status == Some(status);
            view! { <option value=status.label() selected=chosen>{status.label()}</option> }
        })
        .collect_view();

    view! {
        <form method="get" action="/stock-pool" hx-boost="true" class="flex flex-wrap gap-3">
            <input
                type="search"
                name="q"
                value=query
                placeholder="Search by ticker or company name"
                class=search_classes
            />
            <select name="sector" class=FIELD>
                <option value="" selected=any_sector>"All Sectors"</option>
                {sectors}
            </select>
            <select name="status" class=FIELD>
                <option value="" selected=any_status>"All Status"</option>
                {statuses}
            </select>
            <button type="submit" class=SUBMIT>"Filter"</button>
        </form>
    }
}

#[component]
fn PoolRow(stock: PoolStock) -> impl IntoView {
    let volume = format!("{}M", format_decimal(stock.volume_m, 1));

    view! {
        <tr class="border-b border-border" data-ticker=stock.ticker data-status=stock.status.label()>
            <td class="px-4 py-3 font-mono font-semibold text-foreground">{stock.ticker}</td>
            <td class="px-4 py-3 text-foreground">{stock.company}</td>
            <td class="px-4 py-3 text-muted-foreground">{stock.sector.label()}</td>
            <td class="px-4 py-3 text-right font-mono">{format_won(stock.price)}</td>
            <td class=change_class(stock.change)>{format_percent_fixed(stock.change, 2)}</td>
            <td class="px-4 py-3 text-right font-mono">{volume}</td>
            <td class="px-4 py-3 text-right font-mono">{stock.ai_score.to_string()}</td>
            <td class="px-4 py-3">
                <Badge variant=BadgeVariant::from(stock.status) class="text-xs">
                    {stock.status.label()}
                </Badge>
            </td>
        </tr>
    }
}
