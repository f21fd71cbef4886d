use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use tracing::info;

use crate::AppState;
use crate::config::AppConfig;
use crate::domain::{
    ApprovalBadge, Assessment, PoolFilter, PoolStock, PortfolioSummary, Position, Report,
    StockCandidate,
};
use crate::error::PageError;
use crate::fixtures;
use crate::ui::pages;

/// Start the Axum server with the provided configuration.
pub async fn start_server(config: Arc<AppConfig>) -> anyhow::Result<()> {
    info!(
        name: "dashboard.config.loaded",
        brand = %config.dashboard.brand,
        static_dir = %config.server.static_dir,
        "Dashboard configuration loaded"
    );

    let addr = config.bind_address();
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!(
        name: "server.started",
        address = %addr,
        "Server started"
    );

    axum::serve(listener, app.into_make_service()).await?;
    Ok(())
}

/// Build the full router: pages, fragments, JSON and static assets.
pub fn build_router(state: AppState) -> Router {
    let static_dir = state.config.server.static_dir.clone();

    Router::new()
        // HTML pages
        .route("/", get(dashboard_handler))
        .route("/approval-queue", get(approval_queue_handler))
        .route("/ai-reports", get(ai_reports_handler))
        .route("/active-trades", get(active_trades_handler))
        .route("/stock-pool", get(stock_pool_handler))
        .route("/trading", get(trading_handler))
        .route("/trade-history", get(trade_history_handler))
        // HTMX fragments
        .route("/approval-queue/{id}/analysis", get(quick_analysis_fragment))
        .route("/ai-reports/{id}/detail", get(report_detail_fragment))
        // JSON
        .route("/api/approval-queue", get(api_approval_queue))
        .route("/api/ai-reports", get(api_ai_reports))
        .route("/api/active-trades", get(api_active_trades))
        .route("/api/stock-pool", get(api_stock_pool))
        .route("/health", get(health_handler))
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .fallback(not_found_handler)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ─────────────────────────────────────────────────────────────────────────────
// HTML Page Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// `?selected=<id>` on list pages.
#[derive(Debug, Default, Deserialize)]
pub struct SelectionQuery {
    #[serde(default)]
    pub selected: Option<String>,
}

/// `?q=&sector=&status=` on the stock pool.
#[derive(Debug, Default, Deserialize)]
pub struct PoolQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl PoolQuery {
    fn filter(&self) -> PoolFilter {
        PoolFilter::from_params(
            self.q.as_deref(),
            self.sector.as_deref(),
            self.status.as_deref(),
        )
    }
}

/// GET / - Dashboard overview.
async fn dashboard_handler(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_dashboard(&state.config.dashboard))
}

/// GET /approval-queue - Candidates awaiting approval.
async fn approval_queue_handler(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Html<String> {
    Html(pages::render_approval_queue(
        &state.config.dashboard,
        query.selected,
    ))
}

/// GET /ai-reports - Ranked AI analysis reports.
async fn ai_reports_handler(
    State(state): State<AppState>,
    Query(query): Query<SelectionQuery>,
) -> Html<String> {
    Html(pages::render_ai_reports(&state.config.dashboard, query.selected))
}

/// GET /active-trades - Open positions and P&L.
async fn active_trades_handler(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_active_trades(&state.config.dashboard))
}

/// GET /stock-pool - Screened stocks, filtered by the query.
async fn stock_pool_handler(
    State(state): State<AppState>,
    Query(query): Query<PoolQuery>,
) -> Html<String> {
    Html(pages::render_stock_pool(&state.config.dashboard, query.filter()))
}

/// GET /trading - Account, market and order panels.
async fn trading_handler(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_trading(&state.config.dashboard))
}

/// GET /trade-history - Not built yet.

async fn trade_history_handler(State(state): State<AppState>) -> Html<String> {
    Html(pages::render_placeholder(
        &state.config.dashboard,
        "Trade History",
        "/trade-history",
    ))
}

async fn not_found_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Html(pages::render_not_found(&state.config.dashboard)),
    )
}

// ─────────────────────────────────────────────────────────────────────────────
// HTMX Fragment Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// GET /approval-queue/:id/analysis - Quick Analysis card for one candidate.
async fn quick_analysis_fragment(Path(id): Path<String>) -> Result<Html<String>, PageError> {
    let candidate = fixtures::candidate_by_id(&id).ok_or(PageError::UnknownCandidate(id))?;
    Ok(Html(pages::render_quick_analysis(*candidate)))
}

/// GET /ai-reports/:id/detail - Detail card for one report.
async fn report_detail_fragment(Path(id): Path<String>) -> Result<Html<String>, PageError> {
    let report = fixtures::report_by_id(&id).ok_or(PageError::UnknownReport(id))?;
    Ok(Html(pages::render_report_detail(*report)))
}

// ─────────────────────────────────────────────────────────────────────────────
// API Handlers
// ─────────────────────────────────────────────────────────────────────────────

/// A queued candidate with its approval assessment.
#[derive(Debug, Serialize)]
struct QueueEntryDto {
    #[serde(flatten)]
    candidate: StockCandidate,
    assessment: Assessment,
}

/// Open positions plus their rollup.
#[derive(Debug, Serialize)]
struct ActiveTradesDto {
    positions: &'static [Position],
    summary: PortfolioSummary,
}

/// GET /api/approval-queue
async fn api_approval_queue() -> Json<Vec<QueueEntryDto>> {
    let entries = fixtures::approval_queue()
        .iter()
        .map(|candidate| QueueEntryDto {
            candidate: *candidate,
            assessment: ApprovalBadge::evaluate(
                candidate,
                fixtures::report_by_code(candidate.code),
            ),
        })
        .collect();
    Json(entries)
}

/// GET /api/ai-reports
async fn api_ai_reports() -> Json<&'static [Report]> {
    Json(fixtures::ai_reports())
}

/// GET /api/active-trades
async fn api_active_trades() -> Json<ActiveTradesDto> {
    let positions = fixtures::active_positions();
    Json(ActiveTradesDto {
        positions,
        summary: PortfolioSummary::from_positions(positions),
    })
}

/// GET /api/stock-pool - Same filter as the page.
async fn api_stock_pool(Query(query): Query<PoolQuery>) -> Json<Vec<PoolStock>> {
    let filter = query.filter();
    Json(
        filter
            .apply(fixtures::stock_pool())
            .into_iter()
            .copied()
            .collect(),
    )
}

async fn health_handler() -> &'static str {
    "ok"
}
