//! Action buttons. A button with an `href` renders as a link styled the same
//! way, so navigation stays plain HTML that `hx-boost` can pick up.

use leptos::prelude::*;

const BASE: &str = "inline-flex items-center justify-center rounded-md font-medium \
                    transition-colors focus-visible:outline-none focus-visible:ring-2 \
                    focus-visible:ring-ring disabled:pointer-events-none disabled:opacity-50";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    /// Confirming action, e.g. starting a trade.
    Success,
    /// Removing or rejecting.
    Destructive,
    Outline,
    Ghost,
}

impl ButtonVariant {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Success => "bg-success text-success-foreground hover:bg-success/90",
            Self::Destructive => {
                "bg-destructive text-destructive-foreground hover:bg-destructive/90"
            }
            Self::Outline => "border border-border bg-transparent text-foreground hover:bg-accent",
            Self::Ghost => "bg-transparent text-foreground hover:bg-accent",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    /// Inline row actions ("View").
    Sm,
    #[default]
    Md,
    /// Full-width panel actions.
    Lg,
}

impl ButtonSize {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "h-8 px-3 text-xs",
            Self::Md => "h-10 px-4 text-sm",
            Self::Lg => "h-11 px-8 text-base",
        }
    }
}

/// Button or link-button.
///
/// `action` is written to `data-action` and names what the control does
/// (`start-trading`, `remove`); it is the hook client scripts bind to.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Button variant=ButtonVariant::Outline size=ButtonSize::Sm href=Some("/ai-reports")>
///         "View"
///     </Button>
/// }
/// ```
#[component]
pub fn Button(
    #[prop(default = ButtonVariant::Primary)]
    variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)]
    size: ButtonSize,
    /// Render as `<a href=..>` instead of `<button>`.
    #[prop(default = None)]
    href: Option<&'static str>,
    /// Value for `data-action`.
    #[prop(default = None)]
    action: Option<&'static str>,
    /// Disables a `<button>`; links get `aria-disabled` instead.
    #[prop(default = false)]
    disabled: bool,
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("{BASE} {} {} {class}", variant.classes(), size.classes());

    match href {
        Some(href) => {
            let aria_disabled = disabled.then_some("true");
            view! {
                <a href=href class=classes data-action=action aria-disabled=aria_disabled>
                    {children()}
                </a>
            }
            .into_any()
        }
        None => view! {
            <button type="button" class=classes data-action=action disabled=disabled>
                {children()}
            </button>
        }
        .into_any(),
    }
}
