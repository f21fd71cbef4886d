//! Pages linked from the sidebar that have no view yet, and the 404 page.

use leptos::prelude::*;

use crate::config::DashboardConfig;
use crate::ui::components::{Button, ButtonVariant, Card, CardContent, Icon, IconKind};

use super::layout::{PageHeader, PageLayout};

/// Sidebar-framed page announcing a view that is not built yet.
#[component]
pub fn PlaceholderPage(
    /// Sidebar branding.
    branding: DashboardConfig,
    /// Page title.
    title: &'static str,
    /// Route of the page.
    path: &'static str,
) -> impl IntoView {
    view! {
        <PageLayout current_path=path branding=branding>
            <PageHeader title=title subtitle="Coming soon" />
            <Card>
                <CardContent class="flex flex-col items-center gap-3 p-12">
                    <Icon kind=IconKind::Clock class="h-8 w-8 text-muted-foreground" />
                    <p class="text-sm text-muted-foreground">"This view is not available yet."</p>
                </CardContent>
            </Card>
        </PageLayout>
    }
}

/// 404 page.
#[component]
pub fn NotFoundPage(
    /// Sidebar branding.
    branding: DashboardConfig,
) -> impl IntoView {
    view! {
        <PageLayout current_path="" branding=branding>
            <div class="flex flex-col items-center justify-center py-20">
                <h1 class="text-4xl font-bold mb-4">"404"</h1>
                <p class="text-muted-foreground mb-6">"Page not found"</p>
                <Button variant=ButtonVariant::Primary href=Some("/")>"Go to Dashboard"</Button>
            </div>
        </PageLayout>
    }
}
