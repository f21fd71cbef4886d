//! Shared primitives the dashboard widgets and pages are built from.
//!
//! - [`Button`]: button or link-button with a `data-action` hook
//! - [`Card`], [`CardHeader`], [`CardContent`]: bordered panels
//! - [`Badge`]: pill labels, colored from domain values via `From`
//! - [`Icon`]: inline Lucide SVG outlines

mod badge;
mod button;
mod card;
mod icons;

pub use badge::{Badge, BadgeVariant};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardHeader, TitleSize};
pub use icons::{Icon, IconKind};
