//! Pill labels: counts, dates, recommendations and approval verdicts.
//!
//! Domain values map to a color through `From`, so every page shows the same
//! recommendation or score tier in the same color.

use leptos::prelude::*;

use crate::domain::{ApprovalBadge, OrderSide, PoolStatus, Recommendation, ScoreTier};

const BASE: &str = "inline-flex items-center rounded-md border px-2.5 py-0.5 text-xs \
                    font-semibold transition-colors";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    /// Neutral counters ("Pool: 24").
    Secondary,
    /// Dates and other secondary facts.
    Outline,
    Success,
    Warning,
    Info,
    Destructive,
    Muted,
}

impl BadgeVariant {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Default => "border-transparent bg-primary text-primary-foreground",
            Self::Secondary => "border-transparent bg-muted text-foreground",
            Self::Outline => "border-border text-muted-foreground",
            Self::Success => "border-transparent bg-success text-success-foreground",
            Self::Warning => "border-transparent bg-warning text-background",
            Self::Info => "border-transparent bg-info text-background",
            Self::Destructive => "border-transparent bg-destructive text-destructive-foreground",
            Self::Muted => "border-transparent bg-muted text-muted-foreground",
        }
    }
}

impl From<Recommendation> for BadgeVariant {
    fn from(recommendation: Recommendation) -> Self {
        match recommendation {
            Recommendation::Buy => Self::Success,
            Recommendation::Hold => Self::Warning,
            Recommendation::Monitor => Self::Info,
        }
    }
}

impl From<ScoreTier> for BadgeVariant {
    fn from(tier: ScoreTier) -> Self {
        match tier {
            ScoreTier::High => Self::Success,
            ScoreTier::Medium => Self::Warning,
            ScoreTier::Low => Self::Info,
            ScoreTier::Weak => Self::Muted,
        }
    }
}

impl From<ApprovalBadge> for BadgeVariant {
    fn from(badge: ApprovalBadge) -> Self {
        match badge {
            ApprovalBadge::StrongApprove => Self::Success,
            ApprovalBadge::WatchMore => Self::Warning,
            ApprovalBadge::DoNotApprove => Self::Destructive,
        }
    }
}

impl From<PoolStatus> for BadgeVariant {
    fn from(status: PoolStatus) -> Self {
        match status {
            PoolStatus::Analyzing => Self::Info,
            PoolStatus::Qualified => Self::Success,
            PoolStatus::Rejected => Self::Destructive,
            PoolStatus::Watching => Self::Warning,
        }
    }
}

impl From<OrderSide> for BadgeVariant {
    fn from(side: OrderSide) -> Self {
        match side {
            OrderSide::Buy => Self::Success,
            OrderSide::Sell => Self::Destructive,
        }
    }
}

/// # Example
///
/// ```rust,ignore
/// view! {
///     <Badge variant=BadgeVariant::from(report.recommendation)>"BUY"</Badge>
///     <Badge variant=BadgeVariant::Outline class="text-xs">"2025-01-15"</Badge>
/// }
/// ```
#[component]
pub fn Badge(
    #[prop(default = BadgeVariant::Default)]
    variant: BadgeVariant,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("{BASE} {} {class}", variant.classes());

    view! { <span class=classes>{children()}</span> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tier_colors() {
        let tiers = [95, 72, 45, 12].map(|score| BadgeVariant::from(ScoreTier::from_score(score)));

        assert_eq!(
            tiers,
            [
                BadgeVariant::Success,
                BadgeVariant::Warning,
                BadgeVariant::Info,
                BadgeVariant::Muted
            ]
        );
    }

    #[test]
    fn test_only_rejection_is_destructive() {
        assert_eq!(BadgeVariant::from(ApprovalBadge::DoNotApprove), BadgeVariant::Destructive);
        assert_ne!(BadgeVariant::from(ApprovalBadge::WatchMore), BadgeVariant::Destructive);
        assert_eq!(BadgeVariant::from(Recommendation::Buy), BadgeVariant::Success);
    }

    #[test]
    fn test_pool_status_colors() {
        let colors = PoolStatus::ALL.map(BadgeVariant::from);

        assert_eq!(
            colors,
            [
                BadgeVariant::Info,
                BadgeVariant::Success,
                BadgeVariant::Destructive,
                BadgeVariant::Warning
            ]
        );
    }

    #[test]
    fn test_badge_markup() {
        let html = view! { <Badge variant=BadgeVariant::Info class="text-xs">"MONITOR"</Badge> }
            .to_html();

        assert!(html.starts_with("<span"));
        assert!(html.contains(BadgeVariant::Info.classes()));
        assert!(html.contains("MONITOR"));
    }
}
