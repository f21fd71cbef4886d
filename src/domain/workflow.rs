use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavigationItem {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: NavIcon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NavIcon {
    Dashboard,
    Database,
    FileText,
    TrendingUp,
    CheckSquare,
    Activity,
    History,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WorkflowStep {
    pub name: &'static str,
    pub count: u32,
    pub status: StepStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Complete,
    Active,
    Pending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ActionItem {
    pub id: u32,
    pub kind: ActionKind,
    pub title: &'static str,
    pub description: &'static str,
    pub priority: Priority,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionKind {
    Review,
    Reevaluate,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
}

/// Counters shown in the sidebar and the dashboard KPI row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub pool_size: u32,
    pub ai_reports: u32,
    pub approval_queue: u32,
    pub active_trades: u32,
    pub updated: &'static str,
}

/// Semantic color shared by progress bars and badges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Tone {
    Success,
    Info,
    Warning,
}

/// One bar of the status distribution card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusShare {
    pub label: &'static str,
    pub percent: u8,
    pub tone: Tone,
}

/// One row of the AI score range breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreRange {
    pub label: &'static str,
    pub stocks: u32,
}
