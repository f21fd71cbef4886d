//! Dashboard building blocks.
//!
//! Each component is a pure function of its props. The only choices they make
//! are which color class to apply for a status, priority or sign.
//!
//! # Components
//!
//! - [`AppSidebar`]: Brand, quick stats and navigation
//! - [`KpiCard`]: Single KPI figure with optional trend
//! - [`WorkflowProgress`]: Linear pipeline stepper
//! - [`ActionItems`]: Items awaiting a decision
//! - [`ReportListItem`]: Selectable AI report row
//! - [`PriceChange`]: Signed percent change with direction color
//! - [`StatusDistribution`], [`ScoreRanges`]: Dashboard summary card parts

mod action_items;
mod change;
mod kpi_card;
mod report_list_item;
mod sidebar;
mod status_overview;
mod workflow_progress;

pub use action_items::ActionItems;
pub use change::PriceChange;
pub use kpi_card::{KpiCard, KpiVariant, Trend};
pub use report_list_item::ReportListItem;
pub use sidebar::AppSidebar;
pub use status_overview::{ScoreRanges, StatusDistribution};
pub use workflow_progress::WorkflowProgress;
