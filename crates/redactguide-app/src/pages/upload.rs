// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Upload page — mirrors the controller's state and picks the matching view.

use dioxus::prelude::*;
use redactguide_core::types::{IngestionState, IngestionView};
use redactguide_ingest::IngestionController;

use crate::components::file_preview::FilePreviewCard;
use crate::components::upload_zone::UploadZone;

#[component]
pub fn Upload() -> Element {
    let controller = use_context::<IngestionController>();
    let mut state = use_signal(|| controller.state());

    // Follow the controller's watch channel for as long as the page is mounted.
    let ctl = controller.clone();
    use_future(move || {
        let mut rx = ctl.subscribe();
        async move {
            loop {
                let current: IngestionState = rx.borrow_and_update().clone();
                state.set(current);
                if rx.changed().await.is_err() {
                    break;
                }
            }
        }
    });

    let view = state.read().view();
    rsx! {
        div { style: "max-width: 720px; margin: 0 auto;",
            h2 { style: "color: #111827;", "Open a Document" }
            match view {
                IngestionView::Preview(preview) => rsx! {
                    FilePreviewCard { preview }
                },
                IngestionView::Processing => rsx! {
                    div { style: "width: 100%; max-width: 640px; margin: 0 auto; padding: 48px; border: 2px dashed #d1d5db; border-radius: 12px; background: white; text-align: center;",
                        h3 { style: "color: #111827;", "Processing PDF..." }
                        p { style: "color: #6b7280; font-size: 14px;", "Reading pages" }
                    }
                },
                other => rsx! {
                    UploadZone { view: other }
                },
            }
        }
    }
}
