//! Static mock data rendered by the dashboard.
//!
//! Every view reads from these arrays. They are compiled into the binary and
//! never change while the server runs.

use crate::domain::{
    AccountBalance, ActionItem, ActionKind, CandidateStatus, MacdSignal, MarketIndex, NavIcon,
    NavigationItem, Order, OrderKind, OrderSide, PoolStatus, PoolStock, Position, Priority,
    QuickStats, Recommendation, Report, ScoreRange, Sector, StatusShare, StepStatus,
    StockCandidate, TechnicalIndicators, Tone, TradingLimits, VolumeLevel, WorkflowStep,
};

static NAVIGATION: [NavigationItem; 7] = [
    NavigationItem { label: "Dashboard", href: "/", icon: NavIcon::Dashboard },
    NavigationItem { label: "Stock Pool", href: "/stock-pool", icon: NavIcon::Database },
    NavigationItem { label: "AI Reports", href: "/ai-reports", icon: NavIcon::FileText },
    NavigationItem { label: "Trading", href: "/trading", icon: NavIcon::TrendingUp },
    NavigationItem { label: "Approval Queue", href: "/approval-queue", icon: NavIcon::CheckSquare },
    NavigationItem { label: "Active Trades", href: "/active-trades", icon: NavIcon::Activity },
    NavigationItem { label: "Trade History", href: "/trade-history", icon: NavIcon::History },
];

static WORKFLOW_STEPS: [WorkflowStep; 5] = [
    WorkflowStep { name: "Filter", count: 2790, status: StepStatus::Complete },
    WorkflowStep { name: "Pool", count: 500, status: StepStatus::Complete },
    WorkflowStep { name: "AI Analysis", count: 20, status: StepStatus::Active },
    WorkflowStep { name: "Approval", count: 5, status: StepStatus::Pending },
    WorkflowStep { name: "Trading", count: 8, status: StepStatus::Pending },
];

static ACTION_ITEMS: [ActionItem; 3] = [
    ActionItem {
        id: 1,
        kind: ActionKind::Review,
        title: "5 AI Reports need review",
        description: "Top 20 stocks analyzed, awaiting approval decision",
        priority: Priority::High,
    },
    ActionItem {
        id: 2,
        kind: ActionKind::Reevaluate,
        title: "3 Stocks need re-evaluation",
        description: "Price movement triggers requiring attention",
        priority: Priority::Medium,
    },
    ActionItem {
        id: 3,
        kind: ActionKind::Warning,
        title: "2 Active trades approaching stop-loss",
        description: "Monitor positions: Samsung Electronics, NAVER",
        priority: Priority::High,
    },
];

static QUICK_STATS: QuickStats = QuickStats {
    pool_size: 500,
    ai_reports: 20,
    approval_queue: 5,
    active_trades: 8,
    updated: "Updated 2 min ago",
};

static STATUS_DISTRIBUTION: [StatusShare; 3] = [
    StatusShare { label: "Approved", percent: 40, tone: Tone::Success },
    StatusShare { label: "Monitoring", percent: 35, tone: Tone::Info },
    StatusShare { label: "Pending", percent: 25, tone: Tone::Warning },
];

static SCORE_RANGES: [ScoreRange; 3] = [
    ScoreRange { label: "High (80-100)", stocks: 8 },
    ScoreRange { label: "Medium (60-79)", stocks: 7 },
    ScoreRange { label: "Low (40-59)", stocks: 5 },
];

static APPROVAL_QUEUE: [StockCandidate; 3] = [
    StockCandidate {
        id: "1",
        code: "005930",
        name: "Samsung Electronics",
        price: 68_500,
        price_change: 3.2,
        ai_score: 92,
        added_date: "2025-01-15",
        status: CandidateStatus::Pending,
        indicators: TechnicalIndicators {
            rsi: 68.5,
            macd: MacdSignal::Bullish,
            volume: VolumeLevel::High,
            change_5d: 4.6,
            vol_ratio: 1.8,
        },
    },
    StockCandidate {
        id: "2",
        code: "035420",
        name: "NAVER",
        price: 185_000,
        price_change: 2.8,
        ai_score: 89,
        added_date: "2025-01-15",
        status: CandidateStatus::Pending,
        indicators: TechnicalIndicators {
            rsi: 58.2,
            macd: MacdSignal::Bullish,
            volume: VolumeLevel::Normal,
            change_5d: 2.1,
            vol_ratio: 1.3,
        },
    },
    StockCandidate {
        id: "3",
        code: "035720",
        name: "Kakao",
        price: 45_200,
        price_change: 4.1,
        ai_score: 86,
        added_date: "2025-01-14",
        status: CandidateStatus::Pending,
        indicators: TechnicalIndicators {
            rsi: 73.4,
            macd: MacdSignal::Neutral,
            volume: VolumeLevel::Low,
            change_5d: 5.3,
            vol_ratio: 0.9,
        },
    },
];

static AI_REPORTS: [Report; 6] = [
    Report {
        id: "r1",
        rank: 1,
        code: "005930",
        name: "Samsung Electronics",
        recommendation: Recommendation::Buy,
        score: 92,
        confidence: 87,
        price_change: 3.2,
        summary: "Memory pricing recovery and HBM supply agreements support earnings upside. \
                  Momentum and volume confirm institutional accumulation.",
    },
    Report {
        id: "r2",
        rank: 2,
        code: "035420",
        name: "NAVER",
        recommendation: Recommendation::Hold,
        score: 89,
        confidence: 78,
        price_change: 2.8,
        summary: "Search advertising is stable and commerce growth is steady. \
                  Valuation already reflects most of the near-term upside.",
    },
    Report {
        id: "r3",
        rank: 3,
        code: "035720",
        name: "Kakao",
        recommendation: Recommendation::Monitor,
        score: 86,
        confidence: 64,
        price_change: 4.1,
        summary: "Sharp rebound on platform restructuring news. RSI is in overbought \
                  territory; wait for consolidation before entry.",
    },
    Report {
        id: "r4",
        rank: 4,
        code: "000660",
        name: "SK Hynix",
        recommendation: Recommendation::Buy,
        score: 84,
        confidence: 81,
        price_change: -1.2,
        summary: "Short-term pullback after a strong run. AI server demand keeps the \
                  HBM order book full through next year.",
    },
    Report {
        id: "r5",
        rank: 5,
        code: "005380",
        name: "Hyundai Motor",
        recommendation: Recommendation::Hold,
        score: 79,
        confidence: 72,
        price_change: -0.6,
        summary: "Export volumes are solid but currency tailwinds are fading. \
                  Dividend policy provides a floor.",
    },
    Report {
        id: "r6",
        rank: 6,
        code: "051910",
        name: "LG Chem",
        recommendation: Recommendation::Monitor,
        score: 71,
        confidence: 58,
        price_change: 0.0,
        summary: "Battery materials margins remain under pressure. Watch for a \
                  turnaround in cathode pricing.",
    },
];

static ACTIVE_POSITIONS: [Position; 8] = [
    Position {
        ticker: "STK023",
        company: "Samsung Electronics",
        entry_price: 68_500,
        current_price: 71_200,
        quantity: 150,
        open_date: "2025-12-28",
    },
    Position {
        ticker: "STK089",
        company: "SK Hynix",
        entry_price: 142_000,
        current_price: 138_500,
        quantity: 80,
        open_date: "2025-12-27",
    },
    Position {
        ticker: "STK156",
        company: "Hyundai Motor",
        entry_price: 187_000,
        current_price: 194_300,
        quantity: 50,
        open_date: "2025-12-29",
    },
    Position {
        ticker: "STK234",
        company: "POSCO Holdings",
        entry_price: 365_000,
        current_price: 372_400,
        quantity: 30,
        open_date: "2025-12-26",
    },
    Position {
        ticker: "STK345",
        company: "LG Energy Solution",
        entry_price: 425_000,
        current_price: 418_200,
        quantity: 25,
        open_date: "2025-12-30",
    },
    Position {
        ticker: "STK412",
        company: "Naver Corp",
        entry_price: 198_000,
        current_price: 205_600,
        quantity: 60,
        open_date: "2025-12-28",
    },
    Position {
        ticker: "STK478",
        company: "Kakao Corp",
        entry_price: 56_700,
        current_price: 54_200,
        quantity: 200,
        open_date: "2025-12-29",
    },
    Position {
        ticker: "STK501",
        company: "Samsung Biologics",
        entry_price: 892_000,
        current_price: 918_500,
        quantity: 12,
        open_date: "2025-12-27",
    },
];

/// Ordered by ticker.
static STOCK_POOL: [PoolStock; 14] = [
    PoolStock {
        ticker: "STK012",
        company: "Celltrion",
        sector: Sector::Healthcare,
        price: 178_400,
        change: -1.35,
        volume_m: 2.4,
        ai_score: 64,
        status: PoolStatus::Watching,
    },
    PoolStock {
        ticker: "STK023",
        company: "Samsung Electronics",
        sector: Sector::Technology,
        price: 71_200,
        change: 3.94,
        volume_m: 9.8,
        ai_score: 92,
        status: PoolStatus::Qualified,
    },
    PoolStock {
        ticker: "STK067",
        company: "KB Financial",
        sector: Sector::Finance,
        price: 82_300,
        change: 0.61,
        volume_m: 1.9,
        ai_score: 71,
        status: PoolStatus::Analyzing,
    },
    PoolStock {
        ticker: "STK089",
        company: "SK Hynix",
        sector: Sector::Technology,
        price: 138_500,
        change: -2.46,
        volume_m: 6.7,
        ai_score: 84,
        status: PoolStatus::Qualified,
    },
    PoolStock {
        ticker: "STK118",
        company: "Shinhan Financial",
        sector: Sector::Finance,
        price: 46_850,
        change: -0.32,
        volume_m: 2.2,
        ai_score: 58,
        status: PoolStatus::Watching,
    },
    PoolStock {
        ticker: "STK156",
        company: "Hyundai Motor",
        sector: Sector::Consumer,
        price: 194_300,
        change: 3.9,
        volume_m: 3.1,
        ai_score: 79,
        status: PoolStatus::Qualified,
    },
    PoolStock {
        ticker: "STK199",
        company: "SK Innovation",
        sector: Sector::Energy,
        price: 112_600,
        change: -4.12,
        volume_m: 1.4,
        ai_score: 38,
        status: PoolStatus::Rejected,
    },
    PoolStock {
        ticker: "STK234",
        company: "POSCO Holdings",
        sector: Sector::Energy,
        price: 372_400,
        change: 2.03,
        volume_m: 0.9,
        ai_score: 76,
        status: PoolStatus::Analyzing,
    },
    PoolStock {
        ticker: "STK277",
        company: "Amorepacific",
        sector: Sector::Consumer,
        price: 131_900,
        change: 0.0,
        volume_m: 0.7,
        ai_score: 45,
        status: PoolStatus::Rejected,
    },
    PoolStock {
        ticker: "STK345",
        company: "LG Energy Solution",
        sector: Sector::Energy,
        price: 418_200,
        change: -1.6,
        volume_m: 0.8,
        ai_score: 81,
        status: PoolStatus::Watching,
    },
    PoolStock {
        ticker: "STK412",
        company: "Naver Corp",
        sector: Sector::Technology,
        price: 205_600,
        change: 3.84,
        volume_m: 1.2,
        ai_score: 89,
        status: PoolStatus::Qualified,
    },
    PoolStock {
        ticker: "STK420",
        company: "Hanmi Pharm",
        sector: Sector::Healthcare,
        price: 297_500,
        change: 1.18,
        volume_m: 0.4,
        ai_score: 67,
        status: PoolStatus::Analyzing,
    },
    PoolStock {
        ticker: "STK478",
        company: "Kakao Corp",
        sector: Sector::Technology,
        price: 54_200,
        change: -4.41,
        volume_m: 4.3,
        ai_score: 62,
        status: PoolStatus::Watching,
    },
    PoolStock {
        ticker: "STK501",
        company: "Samsung Biologics",
        sector: Sector::Healthcare,
        price: 918_500,
        change: 2.97,
        volume_m: 0.2,
        ai_score: 86,
        status: PoolStatus::Qualified,
    },
];

static ACCOUNT_BALANCE: AccountBalance = AccountBalance {
    available_cash: 125_430_000,
    buying_power: 501_720_000,
    margin_used_pct: 35,
};

static MARKET_INDICES: [MarketIndex; 2] = [
    MarketIndex { name: "KOSPI", value: 2647.35, change: 0.82 },
    MarketIndex { name: "KOSDAQ", value: 782.14, change: -0.39 },
];

static TRADING_LIMITS: TradingLimits = TradingLimits {
    max_position_size: 50_000_000,
    max_daily_loss: 10_000_000,
    max_leverage: 4,
};

/// Newest first.
static RECENT_ORDERS: [Order; 4] = [
    Order {
        ticker: "STK199",
        company: "SK Innovation",
        side: OrderSide::Sell,
        kind: OrderKind::StopLoss,
        quantity: 40,
        price: 113_000,
        placed_at: "2025-12-30 14:41",
    },
    Order {
        ticker: "STK023",
        company: "Samsung Electronics",
        side: OrderSide::Buy,
        kind: OrderKind::Limit,
        quantity: 150,
        price: 68_500,
        placed_at: "2025-12-28 09:05",
    },
    Order {
        ticker: "STK089",
        company: "SK Hynix",
        side: OrderSide::Buy,
        kind: OrderKind::Market,
        quantity: 80,
        price: 142_000,
        placed_at: "2025-12-27 10:02",
    },
    Order {
        ticker: "STK501",
        company: "Samsung Biologics",
        side: OrderSide::Buy,
        kind: OrderKind::Limit,
        quantity: 12,
        price: 892_000,
        placed_at: "2025-12-27 09:14",
    },
];

pub fn navigation() -> &'static [NavigationItem] {
    &NAVIGATION
}

pub fn workflow_steps() -> &'static [WorkflowStep] {
    &WORKFLOW_STEPS
}

pub fn action_items() -> &'static [ActionItem] {
    &ACTION_ITEMS
}

pub fn quick_stats() -> QuickStats {
    QUICK_STATS
}

pub fn status_distribution() -> &'static [StatusShare] {
    &STATUS_DISTRIBUTION
}

pub fn score_ranges() -> &'static [ScoreRange] {
    &SCORE_RANGES
}

pub fn approval_queue() -> &'static [StockCandidate] {
    &APPROVAL_QUEUE
}

/// Reports ordered by rank.
pub fn ai_reports() -> &'static [Report] {
    &AI_REPORTS
}

pub fn active_positions() -> &'static [Position] {
    &ACTIVE_POSITIONS
}

pub fn stock_pool() -> &'static [PoolStock] {
    &STOCK_POOL
}

pub fn account_balance() -> AccountBalance {
    ACCOUNT_BALANCE
}

pub fn market_indices() -> &'static [MarketIndex] {
    &MARKET_INDICES
}

pub fn trading_limits() -> TradingLimits {
    TRADING_LIMITS
}

/// Orders newest first.
pub fn recent_orders() -> &'static [Order] {
    &RECENT_ORDERS
}

pub fn candidate_by_id(id: &str) -> Option<&'static StockCandidate> {
    APPROVAL_QUEUE.iter().find(|c| c.id == id)
}

pub fn report_by_id(id: &str) -> Option<&'static Report> {
    AI_REPORTS.iter().find(|r| r.id == id)
}

/// Latest report for a stock code, if one was generated.
pub fn report_by_code(code: &str) -> Option<&'static Report> {
    AI_REPORTS.iter().find(|r| r.code == code)
}
