//! Fixed application sidebar.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::domain::{NavIcon, NavigationItem, QuickStats};
use crate::fixtures;
use crate::format::format_thousands;
use crate::ui::components::{Badge, BadgeVariant, Icon, IconKind};

const NAV_BASE: &str =
    "flex items-center gap-3 rounded-lg px-3 py-2 text-sm font-medium transition-colors";
const NAV_ACTIVE: &str = "bg-sidebar-accent text-sidebar-accent-foreground";
const NAV_IDLE: &str = "text-sidebar-foreground hover:bg-sidebar-accent/50";

fn nav_icon(icon: NavIcon) -> IconKind {
    match icon {
        NavIcon::Dashboard => IconKind::LayoutDashboard,
        NavIcon::Database => IconKind::Database,
        NavIcon::FileText => IconKind::FileText,
        NavIcon::TrendingUp => IconKind::TrendingUp,
        NavIcon::CheckSquare => IconKind::CheckSquare,
        NavIcon::Activity => IconKind::Activity,
        NavIcon::History => IconKind::History,
    }
}

/// Sidebar with brand, quick stats, navigation and engine status.
///
/// The navigation entry whose `href` equals `current_path` is highlighted;
/// an unknown path highlights nothing.
#[component]
pub fn AppSidebar(
    /// Path of the page being rendered.
    #[prop(into)]
    current_path: String,
    /// Brand and engine labels.
    branding: DashboardConfig,
    /// Navigation entries in display order.
    #[prop(default = fixtures::navigation())]
    items: &'static [NavigationItem],
    /// Counters for the quick stats block.
    #[prop(default = fixtures::quick_stats())]
    stats: QuickStats,
) -> impl IntoView {
    let links = items
        .iter()
        .map(|item| {
            let active = item.href == current_path;
            let classes = format!("{} {}", NAV_BASE, if active { NAV_ACTIVE } else { NAV_IDLE });
            let current = active.then_some("page");

            view! {
                <a
                    href=item.href
                    class=classes
                    aria-current=current
                >
                    <Icon kind=nav_icon(item.icon) class="h-4 w-4" />
                    <span>{item.label}</span>
                </a>
            }
        })
        .collect_view();

    let DashboardConfig {
        brand,
        tagline,
        engine_label,
    } = branding;

    view! {
        <aside class="fixed left-0 top-0 z-40 h-screen w-64 border-r border-sidebar-border bg-sidebar">
            <div class="flex h-full flex-col">
                // Logo & title
                <div class="flex h-16 items-center gap-3 border-b border-sidebar-border px-6">
                    <div class="flex h-8 w-8 items-center justify-center rounded-lg bg-primary">
                        <Icon kind=IconKind::Zap class="h-5 w-5 text-primary-foreground" />
                    </div>
                    <div>
                        <h1 class="text-lg font-semibold text-sidebar-foreground">{brand}</h1>
                        <p class="text-xs text-muted-foreground">{tagline}</p>
                    </div>
                </div>

                // Quick stats
                <div class="border-b border-sidebar-border p-4">
                    <div class="space-y-2">
                        <div class="flex items-center justify-between text-sm">
                            <span class="text-muted-foreground">"Pool Size"</span>
                            <Badge variant=BadgeVariant::Secondary class="text-xs">
                                {format_thousands(i64::from(stats.pool_size))}
                            </Badge>
                        </div>
                        <div class="flex items-center justify-between text-sm">
                            <span class="text-muted-foreground">"AI Reports"</span>
                            <Badge variant=BadgeVariant::Secondary class="text-xs">
                                {format_thousands(i64::from(stats.ai_reports))}
                            </Badge>
                        </div>
                        <div class="flex items-center justify-between text-sm">
                            <span class="text-muted-foreground">"Active Trades"</span>
                            <Badge variant=BadgeVariant::Success class="text-xs">
                                {format_thousands(i64::from(stats.active_trades))}
                            </Badge>
                        </div>
                    </div>
                    <div class="mt-3 flex items-center gap-1 text-xs text-muted-foreground">
                        <Icon kind=IconKind::Clock class="h-3 w-3" />
                        <span>{stats.updated}</span>
                    </div>
                </div>

                // Navigation
                <nav class="flex-1 space-y-1 overflow-y-auto p-4" hx-boost="true">
                    {links}
                </nav>

                // AI engine status
                <div class="border-t border-sidebar-border p-4">
                    <div class="rounded-lg bg-sidebar-accent p-3">
                        <div class="flex items-center gap-2">
                            <div class="h-2 w-2 rounded-full bg-success animate-pulse" />
                            <span class="text-xs font-medium text-sidebar-foreground">
                                "AI Engine Active"
                            </span>
                        </div>
                        <p class="mt-1 text-xs text-muted-foreground">{engine_label}</p>
                    </div>
                </div>
            </div>
        </aside>
    }
}
