//! SVG icon components.
//!
//! Icons are rendered inline as SVG elements (Lucide outlines) so they pick
//! up the surrounding text color through `currentColor`.

use leptos::prelude::*;

/// Common icon size class, used when no classes are given.
const ICON_SIZE: &str = "h-4 w-4";

/// Every icon the dashboard draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconKind {
    LayoutDashboard,
    Database,
    FileText,
    TrendingUp,
    TrendingDown,
    CheckSquare,
    Activity,
    History,
    Zap,
    Clock,
    CheckCircle,
    Circle,
    AlertCircle,
    RefreshCw,
    BarChart,
    Wallet,
}

impl IconKind {
    /// Lowercase name written to the `data-icon` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::LayoutDashboard => "layout-dashboard",
            Self::Database => "database",
            Self::FileText => "file-text",
            Self::TrendingUp => "trending-up",
            Self::TrendingDown => "trending-down",
            Self::CheckSquare => "check-square",
            Self::Activity => "activity",
            Self::History => "history",
            Self::Zap => "zap",
            Self::Clock => "clock",
            Self::CheckCircle => "check-circle",
            Self::Circle => "circle",
            Self::AlertCircle => "alert-circle",
            Self::RefreshCw => "refresh-cw",
            Self::BarChart => "bar-chart",
            Self::Wallet => "wallet",
        }
    }
}

/// Inline SVG icon.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Icon kind=IconKind::TrendingUp class="h-4 w-4 text-success" />
/// }
/// ```
#[component]
pub fn Icon(
    /// Which icon to draw.
    kind: IconKind,
    /// CSS classes; defaults to a 16px square.
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    let classes = if class.is_empty() { ICON_SIZE } else { class };

    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-icon=kind.name()
            class=classes
        >
            {icon_body(kind)}
        </svg>
    }
}

fn icon_body(kind: IconKind) -> AnyView {
    match kind {
        IconKind::LayoutDashboard => view! {
            <rect width="7" height="9" x="3" y="3" rx="1" />
            <rect width="7" height="5" x="14" y="3" rx="1" />
            <rect width="7" height="9" x="14" y="12" rx="1" />
            <rect width="7" height="5" x="3" y="16" rx="1" />
        }
        .into_any(),
        IconKind::Database => view! {
            <ellipse cx="12" cy="5" rx="9" ry="3" />
            <path d="M3 5V19A9 3 0 0 0 21 19V5" />
            <path d="M3 12A9 3 0 0 0 21 12" />
        }
        .into_any(),
        IconKind::FileText => view! {
            <path d="M15 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V7Z" />
            <path d="M14 2v4a2 2 0 0 0 2 2h4" />
            <path d="M10 9H8" />
            <path d="M16 13H8" />
            <path d="M16 17H8" />
        }
        .into_any(),
        IconKind::TrendingUp => view! {
            <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
            <polyline points="16 7 22 7 22 13" />
        }
        .into_any(),
        IconKind::TrendingDown => view! {
            <polyline points="22 17 13.5 8.5 8.5 13.5 2 7" />
            <polyline points="16 17 22 17 22 11" />
        }
        .into_any(),
        IconKind::CheckSquare => view! {
            <path d="m9 11 3 3L22 4" />
            <path d="M21 12v7a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h11" />
        }
        .into_any(),
        IconKind::Activity => view! {
            <path d="M22 12h-4l-3 9L9 3l-3 9H2" />
        }
        .into_any(),
        IconKind::History => view! {
            <path d="M3 12a9 9 0 1 0 9-9 9.75 9.75 0 0 0-6.74 2.74L3 8" />
            <path d="M3 3v5h5" />
            <path d="M12 7v5l4 2" />
        }
        .into_any(),
        IconKind::Zap => view! {
            <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
        }
        .into_any(),
        IconKind::Clock => view! {
            <circle cx="12" cy="12" r="10" />
            <polyline points="12 6 12 12 16 14" />
        }
        .into_any(),
        IconKind::CheckCircle => view! {
            <circle cx="12" cy="12" r="10" />
            <path d="m9 12 2 2 4-4" />
        }
        .into_any(),
        IconKind::Circle => view! {
            <circle cx="12" cy="12" r="10" />
        }
        .into_any(),
        IconKind::AlertCircle => view! {
            <circle cx="12" cy="12" r="10" />
            <line x1="12" x2="12" y1="8" y2="12" />
            <line x1="12" x2="12.01" y1="16" y2="16" />
        }
        .into_any(),
        IconKind::RefreshCw => view! {
            <path d="M3 12a9 9 0 0 1 9-9 9.75 9.75 0 0 1 6.74 2.74L21 8" />
            <path d="M21 3v5h-5" />
            <path d="M21 12a9 9 0 0 1-9 9 9.75 9.75 0 0 1-6.74-2.74L3 16" />
            <path d="M8 16H3v5" />
        }
        .into_any(),
        IconKind::BarChart => view! {
            <path d="M3 3v18h18" />
            <path d="M18 17V9" />
            <path d="M13 17V5" />
            <path d="M8 17v-3" />
        }
        .into_any(),
        IconKind::Wallet => view! {
            <path d="M21 12V7H5a2 2 0 0 1 0-4h14v4" />
            <path d="M3 5v14a2 2 0 0 0 2 2h16v-5" />
            <path d="M18 12a2 2 0 0 0 0 4h4v-4Z" />
        }
        .into_any(),
    }
}
