//! Workflow progress stepper.

use leptos::prelude::*;

use crate::domain::{StepStatus, WorkflowStep};
use crate::fixtures;
use crate::format::format_thousands;
use crate::ui::components::{Icon, IconKind};

fn status_name(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Complete => "complete",
        StepStatus::Active => "active",
        StepStatus::Pending => "pending",
    }
}

fn ring_classes(status: StepStatus) -> &'static str {
    match status {
        StepStatus::Complete => "border-success bg-success/20",
        StepStatus::Active => "border-warning bg-warning/20",
        StepStatus::Pending => "border-muted bg-muted",
    }
}

fn marker(status: StepStatus) -> (IconKind, &'static str) {
    match status {
        StepStatus::Complete => (IconKind::CheckCircle, "h-5 w-5 text-success"),
        StepStatus::Active => (IconKind::Circle, "h-5 w-5 text-warning"),
        StepStatus::Pending => (IconKind::Circle, "h-5 w-5 text-muted-foreground"),
    }
}

/// Connector after a step is filled once that step is complete.
fn connector_classes(status: StepStatus) -> &'static str {
    if status == StepStatus::Complete {
        "mx-2 h-0.5 flex-1 bg-success"
    } else {
        "mx-2 h-0.5 flex-1 bg-muted"
    }
}

/// Horizontal stepper of the screening pipeline, rendered in the given order.
#[component]
pub fn WorkflowProgress(
    /// Steps in pipeline order.
    #[prop(default = fixtures::workflow_steps())]
    steps: &'static [WorkflowStep],
) -> impl IntoView {
    let last = steps.len().saturating_sub(1);

    let items = steps
        .iter()
        .enumerate()
        .map(|(index, step)| {
            let ring = format!(
                "flex h-10 w-10 items-center justify-center rounded-full border-2 {}",
                ring_classes(step.status)
            );
            let (icon, icon_class) = marker(step.status);
            let connector = (index < last).then(|| {
                view! { <div class=connector_classes(step.status) data-connector="" /> }
            });

            view! {
                <div class="flex flex-1 items-center" data-step=step.name data-status=status_name(step.status)>
                    <div class="flex flex-col items-center">
                        <div class=ring>
                            <Icon kind=icon class=icon_class />
                        </div>
                        <div class="mt-2 text-center">
                            <p class="text-xs font-medium text-foreground">{step.name}</p>
                            <p class="text-xs text-muted-foreground">
                                {format_thousands(i64::from(step.count))}
                            </p>
                        </div>
                    </div>
                    {connector}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="space-y-4">
            <h3 class="text-sm font-semibold text-foreground">"Workflow Progress"</h3>
            <div class="flex items-center justify-between">
                {items}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_in_configured_order() {
        let html = view! { <WorkflowProgress /> }.to_html();

        let mut cursor = 0;
        for step in fixtures::workflow_steps() {
            let marker = format!("data-step=\"{}\"", step.name);
            let found = html[cursor..]
                .find(&marker)
                .unwrap_or_else(|| panic!("step {} missing or out of order", step.name));
            cursor += found + marker.len();
        }

        assert!(html.contains("2,790"));
        assert!(html.contains("500"));
    }

    #[test]
    fn test_status_styles() {
        let html = view! { <WorkflowProgress /> }.to_html();

        assert_eq!(html.matches("data-status=\"complete\"").count(), 2);
        assert_eq!(html.matches("data-status=\"active\"").count(), 1);
        assert_eq!(html.matches("data-status=\"pending\"").count(), 2);
        assert_eq!(html.matches("border-success bg-success/20").count(), 2);
        assert_eq!(html.matches("border-warning bg-warning/20").count(), 1);
    }

    #[test]
    fn test_connectors_between_steps() {
        let html = view! { <WorkflowProgress /> }.to_html();

        // Five steps, four connectors; the first two follow complete steps.
        assert_eq!(html.matches("data-connector").count(), 4);
        assert_eq!(html.matches("mx-2 h-0.5 flex-1 bg-success").count(), 2);
        assert_eq!(html.matches("mx-2 h-0.5 flex-1 bg-muted").count(), 2);
    }
}
