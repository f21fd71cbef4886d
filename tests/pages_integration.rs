//! Router-level tests: pages, fragments, JSON endpoints and static files.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_test::TestServer;
use std::sync::Arc;
use stock_gravity::AppState;
use stock_gravity::config::{AppConfig, DashboardConfig, LogConfig, ServerConfig};
use stock_gravity::server::build_router;
use stock_gravity::ui::HTMX_SCRIPT;
use tower::ServiceExt;

// =============================================================================
// Test Utilities
// =============================================================================

fn test_config(static_dir: &str) -> AppConfig {
    AppConfig {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: static_dir.to_string(),
        },
        dashboard: DashboardConfig::default(),
        log: LogConfig { json: false },
    }
}

fn test_server() -> TestServer {
    let state = AppState::new(Arc::new(test_config("static")));
    TestServer::new(build_router(state)).expect("test server")
}

async fn body_text(response: axum::response::Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

// =============================================================================
// Pages
// =============================================================================

#[tokio::test]
async fn test_dashboard_page() {
    let server = test_server();

    let response = server.get("/").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("StockGravity"));
    assert!(html.contains("Workflow Progress"));
    assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
}

#[tokio::test]
async fn test_approval_queue_selection_via_query() {
    let server = test_server();

    let html = server
        .get("/approval-queue")
        .add_query_param("selected", "2")
        .await
        .text();

    assert_eq!(html.matches("data-selected=\"true\"").count(), 1);
    assert!(html.contains("WATCH MORE"));
}

#[tokio::test]
async fn test_approval_queue_unknown_selection_falls_back() {
    let server = test_server();

    let response = server
        .get("/approval-queue")
        .add_query_param("selected", "does-not-exist")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert_eq!(html.matches("data-selected=\"true\"").count(), 1);
    assert!(html.contains("STRONG APPROVE"));
}

#[tokio::test]
async fn test_supplementary_pages_render() {
    let server = test_server();

    for path in [
        "/ai-reports",
        "/active-trades",
        "/stock-pool",
        "/trading",
        "/trade-history",
    ] {
        let response = server.get(path).await;
        response.assert_status_ok();
        assert!(response.text().contains("<html"), "{path} is a full document");
    }
}

#[tokio::test]
async fn test_stock_pool_filters_via_query() {
    let server = test_server();

    let response = server
        .get("/stock-pool")
        .add_query_param("sector", "Energy")
        .add_query_param("status", "")
        .await;
    response.assert_status_ok();

    let html = response.text();
    assert!(html.contains("Showing 3 of 14 stocks"));
    for ticker in ["STK199", "STK234", "STK345"] {
        assert!(html.contains(&format!("data-ticker=\"{ticker}\"")), "{ticker} listed");
    }
    assert!(!html.contains("data-ticker=\"STK023\""));
}

#[tokio::test]
async fn test_stock_pool_ignores_unknown_filter_values() {
    let server = test_server();

    let html = server
        .get("/stock-pool")
        .add_query_param("sector", "Utilities")
        .add_query_param("q", "kakao")
        .await
        .text();

    assert!(html.contains("Showing 1 of 14 stocks"));
    assert!(html.contains("data-ticker=\"STK478\""));
}

#[tokio::test]
async fn test_trading_page_panels() {
    let server = test_server();

    let html = server.get("/trading").await.text();
    assert!(html.contains("Market Status"));
    assert!(html.contains("data-index=\"KOSDAQ\""));
    assert!(html.contains("Recent Orders"));
    assert!(!html.contains("Coming soon"));
}

#[tokio::test]
async fn test_unknown_path_is_404_page() {
    let response = build_router(AppState::new(Arc::new(test_config("static"))))
        .oneshot(
            Request::builder()
                .uri("/no-such-page")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_text(response).await;
    assert!(html.contains("Page not found"));
}

// =============================================================================
// Fragments
// =============================================================================

#[tokio::test]
async fn test_quick_analysis_fragment() {
    let server = test_server();

    let response = server.get("/approval-queue/3/analysis").await;
    response.assert_status_ok();

    let html = response.text();
    assert!(!html.contains("<html"));
    assert!(html.contains("Quick Analysis"));
    assert!(html.contains("DO NOT APPROVE"));
}

#[tokio::test]
async fn test_rows_point_at_served_fragments() {
    let server = test_server();

    let html = server.get("/approval-queue").await.text();
    assert!(html.contains("hx-get=\"/approval-queue/2/analysis\""));
    server.get("/approval-queue/2/analysis").await.assert_status_ok();

    let html = server.get("/ai-reports").await.text();
    assert!(html.contains("hx-get=\"/ai-reports/r6/detail\""));
    server.get("/ai-reports/r6/detail").await.assert_status_ok();
}

#[tokio::test]
async fn test_unknown_fragment_ids_are_404() {
    let server = test_server();

    let response = server.get("/approval-queue/99/analysis").await;
    response.assert_status_not_found();
    assert!(response.text().contains("99"));

    let response = server.get("/ai-reports/r99/detail").await;
    response.assert_status_not_found();
}

#[tokio::test]
async fn test_report_detail_fragment() {
    let server = test_server();

    let html = server.get("/ai-reports/r2/detail").await.text();
    assert!(html.contains("Report Detail"));
    assert!(html.contains("#2"));
}

// =============================================================================
// JSON + health
// =============================================================================

#[tokio::test]
async fn test_health() {
    let server = test_server();

    let response = server.get("/health").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "ok");
}

#[tokio::test]
async fn test_api_approval_queue_includes_assessment() {
    let server = test_server();

    let entries: serde_json::Value = server.get("/api/approval-queue").await.json();
    let entries = entries.as_array().expect("array");

    assert_eq!(entries.len(), 3);
    assert_eq!(entries[0]["code"], "005930");
    assert_eq!(entries[0]["assessment"]["badge"], "STRONG_APPROVE");
    assert_eq!(entries[2]["assessment"]["badge"], "DO_NOT_APPROVE");
}

#[tokio::test]
async fn test_api_ai_reports_in_rank_order() {
    let server = test_server();

    let reports: serde_json::Value = server.get("/api/ai-reports").await.json();
    let ranks: Vec<u64> = reports
        .as_array()
        .expect("array")
        .iter()
        .map(|r| r["rank"].as_u64().expect("rank"))
        .collect();

    assert_eq!(ranks, vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(reports[0]["recommendation"], "buy");
}

#[tokio::test]
async fn test_api_active_trades_summary() {
    let server = test_server();

    let body: serde_json::Value = server.get("/api/active-trades").await.json();

    assert_eq!(body["positions"].as_array().expect("array").len(), 8);
    assert_eq!(body["summary"]["total_pnl"], 816_000);
    assert_eq!(body["summary"]["total_value"], 87_300_000);
    assert_eq!(body["summary"]["positions"], 8);
}

#[tokio::test]
async fn test_api_stock_pool_filtered() {
    let server = test_server();

    let stocks: serde_json::Value = server
        .get("/api/stock-pool")
        .add_query_param("status", "rejected")
        .await
        .json();
    let stocks = stocks.as_array().expect("array");

    assert_eq!(stocks.len(), 2);
    assert!(stocks.iter().all(|s| s["status"] == "rejected"));
    assert_eq!(stocks[0]["ticker"], "STK199");
    assert_eq!(stocks[0]["sector"], "energy");
}

// =============================================================================
// Static files
// =============================================================================

#[tokio::test]
async fn test_static_files_served_from_configured_dir() {
    let dir = tempfile::tempdir().expect("temp dir");
    std::fs::write(dir.path().join("app.css"), "body { margin: 0; }").expect("write css");

    let config = test_config(&dir.path().to_string_lossy());
    let server = TestServer::new(build_router(AppState::new(Arc::new(config)))).expect("server");

    let response = server.get("/static/app.css").await;
    response.assert_status_ok();
    assert_eq!(response.text(), "body { margin: 0; }");
}

#[tokio::test]
async fn test_htmx_fetch_step_documented() {
    let html = test_server().get("/").await.text();
    assert!(html.contains(&format!("src=\"{HTMX_SCRIPT}\"")));

    // Both operator docs must name the exact file the pages request
    let vendored = HTMX_SCRIPT.trim_start_matches('/');
    for (name, doc) in [
        ("README.md", include_str!("../README.md")),
        ("config.example.yaml", include_str!("../config.example.yaml")),
    ] {
        assert!(doc.contains(vendored), "{name} names {vendored}");
        assert!(doc.contains("curl"), "{name} shows the fetch command");
    }
}

#[tokio::test]
async fn test_pages_work_without_vendored_htmx() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = test_config(&dir.path().to_string_lossy());
    let server = TestServer::new(build_router(AppState::new(Arc::new(config)))).expect("server");

    server.get(HTMX_SCRIPT).await.assert_status_not_found();

    // Rows keep a plain href to the same selection the fragment would show
    let html = server.get("/approval-queue").await.text();
    assert!(html.contains("href=\"/approval-queue?selected=3\""));
    server
        .get("/approval-queue")
        .add_query_param("selected", "3")
        .await
        .assert_status_ok();
}
