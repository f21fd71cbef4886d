//! Full pages and HTMX fragments.
//!
//! The `render_*` functions produce complete HTML strings for the server
//! handlers. Row selection arrives as an optional id from `?selected=`.
//!
//! Fragments carry the detail panel plus the list marked `hx-swap-oob`, so
//! the highlighted row moves with the swapped panel.

mod active_trades;
mod ai_reports;
mod approval_queue;
mod dashboard;
mod layout;
mod placeholder;
mod stock_pool;
mod trading;

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::{PoolFilter, Report, StockCandidate};
use crate::fixtures;

use super::{render_document, render_fragment};

pub use active_trades::ActiveTradesPage;
pub use ai_reports::{AiReportsPage, ReportDetail, ReportRows};
pub use approval_queue::{ApprovalQueuePage, CandidatePanel, QueueRows, QuickAnalysis};
pub use dashboard::DashboardPage;
pub use layout::{PageHeader, PageLayout};
pub use placeholder::{NotFoundPage, PlaceholderPage};
pub use stock_pool::StockPoolPage;
pub use trading::{RecentOrders, TradingPage};

/// Resolve the selected item, falling back to the first one.
fn selected_or_first<T>(
    items: &'static [T],
    selected: Option<&str>,
    id: impl Fn(&T) -> &str,
) -> Option<&'static T> {
    selected
        .and_then(|wanted| {
            let found = items.iter().find(|item| id(item) == wanted);
            if found.is_none() {
                tracing::debug!(selected = wanted, "Unknown selection, showing first item");
            }
            found
        })
        .or_else(|| items.first())
}

fn page_title(page: &str, branding: &DashboardConfig) -> String {
    format!("{page} - {}", branding.brand)
}

pub fn render_dashboard(branding: &DashboardConfig) -> String {
    let branding = branding.clone();
    render_document(&page_title("Dashboard", &branding), move || {
        view! { <DashboardPage branding=branding /> }
    })
}

pub fn render_approval_queue(branding: &DashboardConfig, selected: Option<String>) -> String {
    let branding = branding.clone();
    render_document(&page_title("Approval Queue", &branding), move || {
        view! { <ApprovalQueuePage branding=branding selected=selected /> }
    })
}

pub fn render_ai_reports(branding: &DashboardConfig, selected: Option<String>) -> String {
    let branding = branding.clone();
    render_document(&page_title("AI Reports", &branding), move || {
        view! { <AiReportsPage branding=branding selected=selected /> }
    })
}

pub fn render_active_trades(branding: &DashboardConfig) -> String {
    let branding = branding.clone();
    render_document(&page_title("Active Trades", &branding), move || {
        view! { <ActiveTradesPage branding=branding /> }
    })
}

pub fn render_stock_pool(branding: &DashboardConfig, filter: PoolFilter) -> String {
    let branding = branding.clone();
    render_document(&page_title("Stock Pool", &branding), move || {
        view! { <StockPoolPage branding=branding filter=filter /> }
    })
}

pub fn render_trading(branding: &DashboardConfig) -> String {
    let branding = branding.clone();
    render_document(&page_title("Trading", &branding), move || {
        view! { <TradingPage branding=branding /> }
    })
}

pub fn render_placeholder(
    branding: &DashboardConfig,
    title: &'static str,
    path: &'static str,
) -> String {
    let branding = branding.clone();
    render_document(&page_title(title, &branding), move || {
        view! { <PlaceholderPage branding=branding title=title path=path /> }
    })
}

pub fn render_not_found(branding: &DashboardConfig) -> String {
    let branding = branding.clone();
    render_document(&page_title("Not Found", &branding), move || {
        view! { <NotFoundPage branding=branding /> }
    })
}

/// Body of `#quick-analysis` for one candidate, plus the re-highlighted queue.
pub fn render_quick_analysis(candidate: StockCandidate) -> String {
    render_fragment(move || {
        view! {
            <CandidatePanel candidate=candidate />
            <QueueRows queue=fixtures::approval_queue() current_id=Some(candidate.id) oob=true />
        }
    })
}

/// Body of `#report-detail` for one report, plus the re-highlighted list.
pub fn render_report_detail(report: Report) -> String {
    render_fragment(move || {
        view! {
            <ReportDetail report=report />
            <ReportRows reports=fixtures::ai_reports() current_id=Some(report.id) oob=true />
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PoolStatus;
    use crate::ui::components::BadgeVariant;

    fn branding() -> DashboardConfig {
        DashboardConfig::default()
    }

    /// Count `disabled` attributes, ignoring `disabled:` class variants.
    fn disabled_attrs(html: &str) -> usize {
        html.match_indices("disabled")
            .filter(|(i, m)| !html[i + m.len()..].starts_with(':'))
            .count()
    }

    /// The opening tag that contains `needle`.
    fn tag_containing<'a>(html: &'a str, needle: &str) -> &'a str {
        let at = html.find(needle).expect("needle present");
        let start = html[..at].rfind('<').expect("tag start");
        let end = at + html[at..].find('>').expect("tag end");
        &html[start..=end]
    }

    #[test]
    fn test_selected_or_first() {
        let queue = fixtures::approval_queue();
        assert_eq!(selected_or_first(queue, Some("2"), |c| c.id).map(|c| c.id), Some("2"));
        assert_eq!(selected_or_first(queue, Some("zz"), |c| c.id).map(|c| c.id), Some("1"));
        assert_eq!(selected_or_first(queue, None, |c| c.id).map(|c| c.id), Some("1"));

        let empty: &'static [StockCandidate] = &[];
        assert!(selected_or_first(empty, Some("1"), |c| c.id).is_none());
    }

    #[test]
    fn test_dashboard_document() {
        let html = render_dashboard(&branding());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Dashboard - StockGravity</title>"));
        assert!(html.contains("System overview and next actions"));
        assert!(html.contains("AI Reports Today"));
        assert!(html.contains("+2 from yesterday"));
        assert!(html.contains("Workflow Progress"));
        assert!(html.contains("Action Needed"));
        assert!(html.contains("Status Distribution"));
        assert!(html.contains("width: 40%"));
        assert!(html.contains("8 stocks"));
    }

    #[test]
    fn test_approval_queue_highlights_exactly_one_row() {
        for candidate in fixtures::approval_queue() {
            let html = render_approval_queue(&branding(), Some(candidate.id.to_string()));

            assert_eq!(html.matches("data-selected=\"true\"").count(), 1);
            assert_eq!(
                html.matches("data-selected=\"false\"").count(),
                fixtures::approval_queue().len() - 1
            );
            let row = tag_containing(&html, "data-selected=\"true\"");
            assert!(row.contains(&format!("data-candidate=\"{}\"", candidate.id)));
        }
    }

    #[test]
    fn test_approval_queue_defaults_to_first_candidate() {
        let html = render_approval_queue(&branding(), None);

        assert!(html.contains("Pending Approvals (3)"));
        let row = tag_containing(&html, "data-selected=\"true\"");
        assert!(row.contains("data-candidate=\"1\""));
        assert!(html.contains("₩68,500"));
        assert!(html.contains("+3.2%"));
        assert!(html.contains("STRONG APPROVE"));
    }

    #[test]
    fn test_start_trading_disabled_for_rejected_badge() {
        let approve = render_approval_queue(&branding(), Some("1".to_string()));
        let reject = render_approval_queue(&branding(), Some("3".to_string()));

        assert_eq!(disabled_attrs(&approve), 0);
        assert!(reject.contains("DO NOT APPROVE"));
        assert_eq!(disabled_attrs(&reject), 1);
    }

    #[test]
    fn test_ai_reports_selection() {
        let html = render_ai_reports(&branding(), Some("r4".to_string()));

        assert_eq!(html.matches("data-selected=\"true\"").count(), 1);
        assert!(html.contains("Report Detail"));
        assert!(html.contains("#4"));
        assert!(html.contains("-1.2%"));
    }

    #[test]
    fn test_active_trades_table() {
        let html = render_active_trades(&branding());

        assert!(html.contains("Monitoring 8 open positions"));
        assert!(html.contains("+₩816,000"));
        assert!(html.contains("₩87,300,000"));
        assert!(html.contains("+1.03%"));
        assert!(html.contains("+₩405,000 (+3.94%)"));
        assert!(html.contains("-₩280,000 (-2.46%)"));
        assert_eq!(
            html.matches("data-ticker=").count(),
            fixtures::active_positions().len()
        );
    }

    #[test]
    fn test_stock_pool_unfiltered() {
        let html = render_stock_pool(&branding(), PoolFilter::default());
        let total = fixtures::stock_pool().len();

        assert!(html.contains(&format!("Showing {total} of {total} stocks")));
        assert_eq!(html.matches("data-ticker=").count(), total);
        assert!(html.contains("₩71,200"));
        assert!(html.contains("+3.94%"));
        assert!(html.contains("-4.41%"));
        assert!(html.contains("9.8M"));
        let active = tag_containing(&html, "aria-current=\"page\"");
        assert!(active.contains("href=\"/stock-pool\""));
    }

    #[test]
    fn test_stock_pool_filtered_rows_and_caption() {
        let filter = PoolFilter::from_params(None, Some("Technology"), Some("qualified"));
        let html = render_stock_pool(&branding(), filter);
        let total = fixtures::stock_pool().len();

        assert!(html.contains(&format!("Showing 3 of {total} stocks")));
        assert_eq!(html.matches("data-ticker=").count(), 3);
        assert_eq!(html.matches("data-status=\"qualified\"").count(), 3);
        assert!(!html.contains("data-ticker=\"STK478\""));
        assert!(html.contains(BadgeVariant::from(PoolStatus::Qualified).classes()));
    }

    #[test]
    fn test_stock_pool_form_keeps_current_filter() {
        let filter = PoolFilter::from_params(Some("samsung"), Some("healthcare"), None);
        let html = render_stock_pool(&branding(), filter);

        let search = tag_containing(&html, "name=\"q\"");
        assert!(search.contains("value=\"samsung\""));
        let sector = tag_containing(&html, "value=\"Healthcare\"");
        assert!(sector.contains("selected"));
        let tech = tag_containing(&html, "value=\"Technology\"");
        assert!(!tech.contains("selected"));
        assert!(html.contains("Showing 1 of"));
    }

    #[test]
    fn test_stock_pool_empty_result() {
        let filter = PoolFilter::from_params(Some("no such company"), None, None);
        let html = render_stock_pool(&branding(), filter);

        assert!(html.contains("Showing 0 of"));
        assert!(html.contains("No stocks match the current filters."));
        assert_eq!(html.matches("data-ticker=").count(), 0);
    }

    #[test]
    fn test_trading_panels() {
        let html = render_trading(&branding());

        assert!(html.contains("Account Balance"));
        assert!(html.contains("₩125,430,000"));
        assert!(html.contains("₩501,720,000"));
        assert!(html.contains("35%"));
        assert!(html.contains("2,647.35"));
        assert!(html.contains("+0.82%"));
        assert!(html.contains("-0.39%"));
        assert!(html.contains("₩50M"));
        assert!(html.contains("₩10M"));
        assert!(html.contains("4x"));
        assert_eq!(
            html.matches("data-order=").count(),
            fixtures::recent_orders().len()
        );
        assert!(!html.contains("This view is not available yet."));
    }

    #[test]
    fn test_placeholder_activates_its_nav_item() {
        let html = render_placeholder(&branding(), "Trade History", "/trade-history");

        assert!(html.contains("This view is not available yet."));
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        let active = tag_containing(&html, "aria-current=\"page\"");
        assert!(active.contains("href=\"/trade-history\""));
    }

    #[test]
    fn test_queue_rows_load_quick_analysis() {
        let html = render_approval_queue(&branding(), None);

        for candidate in fixtures::approval_queue() {
            let row = tag_containing(&html, &format!("data-candidate=\"{}\"", candidate.id));
            assert!(row.contains(&format!(
                "hx-get=\"/approval-queue/{}/analysis\"",
                candidate.id
            )));
            assert!(row.contains("hx-target=\"#quick-analysis\""));
            assert!(row.contains(&format!(
                "hx-push-url=\"/approval-queue?selected={}\"",
                candidate.id
            )));
        }
        assert!(html.contains("id=\"quick-analysis\""));
        assert!(!html.contains("hx-swap-oob"));
    }

    #[test]
    fn test_report_rows_load_report_detail() {
        let html = render_ai_reports(&branding(), None);

        let row = tag_containing(&html, "data-report=\"r3\"");
        assert!(row.contains("hx-get=\"/ai-reports/r3/detail\""));
        assert!(row.contains("hx-target=\"#report-detail\""));
        assert!(row.contains("hx-push-url=\"/ai-reports?selected=r3\""));
        assert!(html.contains("id=\"report-detail\""));
    }

    #[test]
    fn test_analysis_fragment_moves_highlight() {
        let candidate = fixtures::approval_queue()[2];
        let html = render_quick_analysis(candidate);

        assert!(html.contains("Start Trading"));
        assert_eq!(disabled_attrs(&html), 1);
        let list = tag_containing(&html, "id=\"queue-rows\"");
        assert!(list.contains("hx-swap-oob=\"true\""));
        assert_eq!(html.matches("data-selected=\"true\"").count(), 1);
        let row = tag_containing(&html, "data-selected=\"true\"");
        assert!(row.contains("data-candidate=\"3\""));
    }

    #[test]
    fn test_detail_fragment_moves_highlight() {
        let report = fixtures::ai_reports()[4];
        let html = render_report_detail(report);

        let list = tag_containing(&html, "id=\"report-rows\"");
        assert!(list.contains("hx-swap-oob=\"true\""));
        let row = tag_containing(&html, "data-selected=\"true\"");
        assert!(row.contains("data-report=\"r5\""));
    }

    #[test]
    fn test_fragments_have_no_document_shell() {
        let candidate = fixtures::approval_queue()[1];
        let html = render_quick_analysis(candidate);

        assert!(!html.contains("<html"));
        assert!(html.contains("Quick Analysis"));
        assert!(html.contains("NAVER"));
        assert!(html.contains("WATCH MORE"));

        let report = fixtures::ai_reports()[0];
        let html = render_report_detail(report);
        assert!(html.contains("Open in approval queue"));
        assert!(html.contains("BUY"));
    }
}
