// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// RedactGuide — local-only PDF redaction front-end
//
// Entry point. Initialises logging, the ingestion controller, and launches the
// Dioxus UI.

mod components;
mod pages;
mod services;
mod state;

use dioxus::prelude::*;
use redactguide_ingest::IngestionController;

use components::footer::Footer;
use components::header::Header;
use pages::home::Home;
use pages::not_found::NotFound;
use pages::upload::Upload;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    tracing::info!("RedactGuide starting");

    dioxus::launch(app);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
enum Route {
    #[layout(PageLayout)]
    #[route("/")]
    Home {},
    #[route("/upload")]
    Upload {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root component.
fn app() -> Element {
    // One controller for the whole app; pages read it from context.
    let controller = use_hook(|| {
        let config = services::settings::load_ingest_config();
        IngestionController::for_pdf(&config)
    });
    use_context_provider(|| controller.clone());
    use_context_provider(|| Signal::new(state::PickerNotice::default()));

    rsx! {
        Router::<Route> {}
    }
}

/// Header, page body, footer.
#[component]
fn PageLayout() -> Element {
    rsx! {
        div { class: "app-container",
            style: "display: flex; flex-direction: column; min-height: 100vh; background: #f9fafb; font-family: system-ui, -apple-system, sans-serif;",
            Header {}
            main { class: "page-content",
                style: "flex: 1; padding: 32px 16px;",
                Outlet::<Route> {}
            }
            Footer {}
        }
    }
}
