//! HTML document rendering.

use leptos::prelude::*;

/// Vendored htmx build. The file is not committed; README.md and
/// config.example.yaml give the fetch command.
pub const HTMX_SCRIPT: &str = "/static/vendor/htmx-2.0.8.min.js";

/// Render a full HTML document around `body`.
///
/// Rendering happens inside a fresh reactive [`Owner`] that is dropped
/// afterwards, so nothing leaks between requests.
pub fn render_document<F, V>(title: &str, body: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let title = title.to_string();
    let html = Owner::new().with(move || {
        view! {
            <html lang="en" class="dark">
                <head>
                    <meta charset="utf-8" />
                    <meta name="viewport" content="width=device-width, initial-scale=1" />
                    <meta name="description" content="AI-assisted stock screening and trading dashboard" />
                    <title>{title}</title>

                    // Local assets only (no CDN)
                    <script src=HTMX_SCRIPT></script>
                    <link rel="stylesheet" href="/static/app.css" />
                </head>
                <body class="min-h-screen bg-background text-foreground antialiased">
                    {body()}
                </body>
            </html>
        }
        .to_html()
    });

    format!("<!DOCTYPE html>{html}")
}

/// Render a view without the document shell, for HTMX swaps.
pub fn render_fragment<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    Owner::new().with(move || view().to_html())
}
