//! Signed percent change indicator.

use leptos::prelude::*;

use crate::format::{ChangeDirection, format_signed_percent};
use crate::ui::components::{Icon, IconKind};

/// Percent change rendered green with a rising arrow when `>= 0`, red with a
/// falling arrow otherwise.
#[component]
pub fn PriceChange(
    /// Change in percent.
    value: f64,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Icon classes (size only; color follows the direction).
    #[prop(default = "h-4 w-4")]
    icon_class: &'static str,
) -> impl IntoView {
    let direction = ChangeDirection::of(value);
    let (icon, name) = match direction {
        ChangeDirection::Up => (IconKind::TrendingUp, "up"),
        ChangeDirection::Down => (IconKind::TrendingDown, "down"),
    };

    let classes = format!(
        "inline-flex items-center gap-1 font-mono font-medium {} {}",
        direction.text_class(),
        class
    );

    view! {
        <span class=classes data-direction=name>
            <Icon kind=icon class=icon_class />
            <span>{format_signed_percent(value)}</span>
        </span>
    }
}
