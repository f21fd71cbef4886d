//! "Action Needed" card.

use leptos::prelude::*;

use crate::domain::{ActionItem, ActionKind, Priority};
use crate::fixtures;
use crate::ui::components::{
    Badge, BadgeVariant, Button, ButtonSize, ButtonVariant, Card, CardContent, CardHeader,
    Icon, IconKind, TitleSize,
};

fn action_icon(kind: ActionKind) -> IconKind {
    match kind {
        ActionKind::Review => IconKind::FileText,
        ActionKind::Reevaluate => IconKind::RefreshCw,
        ActionKind::Warning => IconKind::AlertCircle,
    }
}

/// Page the "View" button opens.
fn action_target(kind: ActionKind) -> &'static str {
    match kind {
        ActionKind::Review => "/ai-reports",
        ActionKind::Reevaluate => "/approval-queue",
        ActionKind::Warning => "/active-trades",
    }
}

/// Tile background and icon classes for a priority.
fn priority_tones(priority: Priority) -> (&'static str, &'static str) {
    match priority {
        Priority::High => ("bg-warning/20", "h-5 w-5 text-warning"),
        Priority::Medium => ("bg-info/20", "h-5 w-5 text-info"),
    }
}

/// Items that need a reviewer decision. High-priority items get warning
/// tones and a "High Priority" badge.
#[component]
pub fn ActionItems(
    /// Items in display order.
    #[prop(default = fixtures::action_items())]
    items: &'static [ActionItem],
) -> impl IntoView {
    let rows = items
        .iter()
        .map(|item| {
            let (tile, icon_class) = priority_tones(item.priority);
            let tile_classes =
                format!("flex h-10 w-10 items-center justify-center rounded-lg {tile}");
            let high = item.priority == Priority::High;

            view! {
                <div class="flex items-start justify-between gap-4 rounded-lg border border-border p-4">
                    <div class="flex gap-3">
                        <div class=tile_classes>
                            <Icon kind=action_icon(item.kind) class=icon_class />
                        </div>
                        <div class="flex-1">
                            <div class="flex items-center gap-2">
                                <h4 class="text-sm font-semibold text-foreground">{item.title}</h4>
                                {high.then(|| view! {
                                    <Badge variant=BadgeVariant::Destructive class="text-xs">
                                        "High Priority"
                                    </Badge>
                                })}
                            </div>
                            <p class="mt-1 text-xs text-muted-foreground">{item.description}</p>
                        </div>
                    </div>
                    <Button
                        size=ButtonSize::Sm
                        variant=ButtonVariant::Outline
                        href=Some(action_target(item.kind))
                    >
                        "View"
                    </Button>
                </div>
            }
        })
        .collect_view();

    let open = format!("{} open", items.len());

    view! {
        <Card section="action-items">
            <CardHeader title="Action Needed" size=TitleSize::Lg>
                <Badge variant=BadgeVariant::Secondary>{open}</Badge>
            </CardHeader>
            <CardContent class="space-y-4">
                {rows}
            </CardContent>
        </Card>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_tones() {
        let html = view! { <ActionItems /> }.to_html();

        let high = fixtures::action_items()
            .iter()
            .filter(|item| item.priority == Priority::High)
            .count();

        assert_eq!(html.matches("High Priority").count(), high);
        assert_eq!(html.matches("h-5 w-5 text-warning").count(), high);
        assert_eq!(
            html.matches("h-5 w-5 text-info").count(),
            fixtures::action_items().len() - high
        );
        assert!(html.contains("Action Needed"));
        assert!(html.contains(&format!("{} open", fixtures::action_items().len())));
        assert!(html.contains("2 Active trades approaching stop-loss"));
        assert!(html.contains("href=\"/active-trades\""));
    }
}
