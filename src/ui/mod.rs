//! UI components and page layouts.
//!
//! Views are Leptos SSR components rendered to HTML strings; there is no
//! client-side hydration. Navigation is plain links boosted by HTMX; list
//! rows also carry `hx-get` to swap in their detail fragment.
//!
//! # Structure
//!
//! - [`components`]: Reusable ShadCN-style UI primitives
//! - [`dashboard`]: Sidebar, KPI cards, stepper, action items, report rows
//! - [`pages`]: Full pages and HTMX fragments

mod document;

pub mod components;
pub mod dashboard;
pub mod pages;

pub use document::{HTMX_SCRIPT, render_document, render_fragment};
