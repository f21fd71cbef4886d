//! StockGravity: Axum + Leptos SSR trading dashboard
//!
//! Server-rendered presentation layer for an AI-assisted stock trading
//! workflow. Every page is static HTML built from fixture data; HTMX boosts
//! navigation and swaps detail fragments.
//!
//! # Architecture
//!
//! - **Server**: Axum router with page, fragment and JSON routes
//! - **UI**: Leptos SSR components rendered to strings
//! - **Data**: fixture records shaped like the live pipeline output
//!
//! # Modules
//!
//! - [`format`]: number, currency and percentage formatting
//! - [`domain`]: record types and the approval badge scoring
//! - [`fixtures`]: the demo dataset every page renders
//! - [`ui`]: components, dashboard widgets and full pages
//! - [`server`]: router construction and startup

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::cargo_common_metadata)]
#![allow(clippy::multiple_crate_versions)]
#![allow(clippy::unused_async)]
#![allow(clippy::needless_pass_by_value)]

pub mod config;
pub mod domain;
pub mod error;
pub mod fixtures;
pub mod format;
pub mod server;
pub mod ui;

use std::sync::Arc;

use crate::config::AppConfig;

/// Application state shared across all handlers.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Loaded configuration; handlers read the branding from it.
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(config: Arc<AppConfig>) -> Self {
        Self { config }
    }
}
