//! Panel container used by every dashboard section.

use leptos::prelude::*;

/// Heading size for [`CardHeader`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TitleSize {
    /// List panels.
    #[default]
    Md,
    /// Standalone sections such as "Quick Analysis".
    Lg,
}

impl TitleSize {
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Md => "text-base",
            Self::Lg => "text-lg",
        }
    }
}

/// Bordered panel.
///
/// `section` is written to `data-section` so HTMX targets and tests can find
/// a panel without relying on its heading.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Card section="action-items">
///         <CardHeader title="Action Needed" size=TitleSize::Lg />
///         <CardContent class="space-y-4">{rows}</CardContent>
///     </Card>
/// }
/// ```
#[component]
pub fn Card(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    /// Value for the `data-section` attribute.
    #[prop(optional)]
    section: Option<&'static str>,
    /// Card content.
    children: Children,
) -> impl IntoView {
    let classes = format!("rounded-lg border border-border bg-card text-foreground {class}");

    view! {
        <div class=classes data-section=section>
            {children()}
        </div>
    }
}

/// Title row of a card. Children, when given, are placed at the trailing
/// edge (count badges, small actions).
#[component]
pub fn CardHeader(
    /// Heading text.
    #[prop(into)]
    title: String,
    #[prop(default = TitleSize::Md)]
    size: TitleSize,
    /// Trailing content.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    let heading = format!("font-semibold leading-none tracking-tight {}", size.classes());

    view! {
        <div class="flex items-center justify-between p-6">
            <h3 class=heading>{title}</h3>
            {children.map(|trailing| trailing())}
        </div>
    }
}

#[component]
pub fn CardContent(
    /// Additional CSS classes.
    #[prop(default = "")]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let classes = format!("p-6 pt-0 {class}");

    view! { <div class=classes>{children()}</div> }
}
