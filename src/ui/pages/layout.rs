//! Shared page frame.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::ui::dashboard::AppSidebar;

/// Sidebar plus the scrolling main column.
#[component]
pub fn PageLayout(
    /// Path of the page, used to highlight the navigation.
    #[prop(into)]
    current_path: String,
    /// Sidebar branding.
    branding: DashboardConfig,
    /// Spacing class for the content stack.
    #[prop(default = "space-y-8")]
    spacing: &'static str,
    /// Page content.
    children: Children,
) -> impl IntoView {
    let content_classes = format!("mx-auto max-w-7xl {spacing}");

    view! {
        <div class="flex min-h-screen">
            <AppSidebar current_path=current_path branding=branding />

            <main id="app" class="ml-64 flex-1 p-8">
                <div class=content_classes>{children()}</div>
            </main>
        </div>
    }
}

/// Page title and subtitle.
#[component]
pub fn PageHeader(
    /// Page title.
    title: &'static str,
    /// Line under the title.
    #[prop(into)]
    subtitle: String,
) -> impl IntoView {
    view! {
        <div>
            <h1 class="text-3xl font-bold text-foreground">{title}</h1>
            <p class="mt-1 text-sm text-muted-foreground">{subtitle}</p>
        </div>
    }
}
