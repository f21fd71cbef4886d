//! KPI card component.

use leptos::prelude::*;

use crate::ui::components::{Card, CardContent, Icon, IconKind};

/// KPI card accent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum KpiVariant {
    /// Neutral card.
    #[default]
    Default,
    /// Healthy figure.
    Success,
    /// Figure that needs attention.
    Warning,
    /// Informational figure.
    Info,
}

impl KpiVariant {
    /// Card border and background classes.
    #[must_use]
    pub fn card_classes(self) -> &'static str {
        match self {
            Self::Default => "border-2 border-border",
            Self::Success => "border-2 border-success/30 bg-success/5",
            Self::Warning => "border-2 border-warning/30 bg-warning/5",
            Self::Info => "border-2 border-info/30 bg-info/5",
        }
    }

    /// Background of the icon tile.
    #[must_use]
    pub fn icon_box_classes(self) -> &'static str {
        match self {
            Self::Default => "bg-muted",
            Self::Success => "bg-success/20",
            Self::Warning => "bg-warning/20",
            Self::Info => "bg-info/20",
        }
    }

    /// Icon size and color.
    #[must_use]
    pub fn icon_classes(self) -> &'static str {
        match self {
            Self::Default => "h-6 w-6 text-foreground",
            Self::Success => "h-6 w-6 text-success",
            Self::Warning => "h-6 w-6 text-warning",
            Self::Info => "h-6 w-6 text-info",
        }
    }
}

/// Short trend line under the KPI value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trend {
    pub label: String,
    pub positive: bool,
}

impl Trend {
    pub fn new(label: impl Into<String>, positive: bool) -> Self {
        Self {
            label: label.into(),
            positive,
        }
    }

    fn classes(&self) -> &'static str {
        if self.positive {
            "mt-1 text-xs text-success"
        } else {
            "mt-1 text-xs text-destructive"
        }
    }
}

/// Single KPI figure with an icon tile and optional trend.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <KpiCard
///         title="Approval Queue"
///         value="5"
///         icon=IconKind::CheckSquare
///         variant=KpiVariant::Warning
///         trend=Some(Trend::new("+2 from yesterday", false))
///     />
/// }
/// ```
#[component]
pub fn KpiCard(
    /// Caption above the value.
    #[prop(into)]
    title: String,
    /// Preformatted value.
    #[prop(into)]
    value: String,
    /// Icon in the tile.
    icon: IconKind,
    /// Optional trend line.
    #[prop(default = None)]
    trend: Option<Trend>,
    /// Accent variant.
    #[prop(default = KpiVariant::Default)]
    variant: KpiVariant,
) -> impl IntoView {
    let tile_classes = format!(
        "flex h-12 w-12 items-center justify-center rounded-lg {}",
        variant.icon_box_classes()
    );

    let trend = trend.map(|trend| {
        let classes = trend.classes();
        view! { <p class=classes>{trend.label}</p> }
    });

    view! {
        <Card class=variant.card_classes()>
            <CardContent class="p-6">
                <div class="flex items-center justify-between">
                    <div>
                        <p class="text-sm font-medium text-muted-foreground">{title}</p>
                        <p class="mt-2 text-3xl font-bold text-foreground">{value}</p>
                        {trend}
                    </div>
                    <div class=tile_classes>
                        <Icon kind=icon class=variant.icon_classes() />
                    </div>
                </div>
            </CardContent>
        </Card>
    }
}
