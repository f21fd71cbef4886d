//! Display records for the dashboard views.
//!
//! These types describe fixture data only. Nothing in the application creates,
//! mutates or persists them at runtime.
//!
//! # Modules
//!
//! - [`candidate`]: Approval-queue candidates and their indicators
//! - [`report`]: AI analysis reports and recommendations
//! - [`workflow`]: Navigation, workflow steps and action items
//! - [`portfolio`]: Active positions and the portfolio summary
//! - [`pool`]: Screened pool stocks and the pool table filter
//! - [`trading`]: Account balance, market indices, limits and orders
//! - [`approval`]: Approval recommendation badge scoring

pub mod approval;
pub mod candidate;
pub mod pool;
pub mod portfolio;
pub mod report;
pub mod trading;
pub mod workflow;

pub use approval::{ApprovalBadge, Assessment};
pub use candidate::{
    CandidateStatus, MacdSignal, ScoreTier, StockCandidate, TechnicalIndicators, VolumeLevel,
};
pub use pool::{PoolFilter, PoolStatus, PoolStock, Sector};
pub use portfolio::{PortfolioSummary, Position};
pub use report::{Recommendation, Report};
pub use trading::{
    AccountBalance, MarketIndex, Order, OrderKind, OrderSide, TradingLimits, whole_millions,
};
pub use workflow::{
    ActionItem, ActionKind, NavIcon, NavigationItem, Priority, QuickStats, ScoreRange,
    StatusShare, StepStatus, Tone, WorkflowStep,
};
