// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Drop zone — forwards drag and drop events to the ingestion controller and
// opens the native picker when clicked.

use dioxus::prelude::*;
use redactguide_core::human_errors::humanize_error;
use redactguide_core::types::IngestionView;
use redactguide_ingest::IngestionController;

use crate::services::files::{candidate_from_drop, drive, pick_and_submit};
use crate::state::{DragDepth, PickerNotice};

#[component]
pub fn UploadZone(view: IngestionView) -> Element {
    let controller = use_context::<IngestionController>();
    let mut notice = use_context::<Signal<PickerNotice>>();
    let mut depth = use_signal(DragDepth::default);

    let (dragging, validating, error) = match &view {
        IngestionView::DropTarget {
            dragging,
            validating,
        } => (*dragging, *validating, None),
        IngestionView::Error {
            message,
            suggestion,
        } => (false, false, Some((message.clone(), suggestion.clone()))),
        _ => (false, false, None),
    };

    let (border, background) = if error.is_some() {
        ("#ef4444", "#fef2f2")
    } else if dragging {
        ("#3b82f6", "#eff6ff")
    } else {
        ("#d1d5db", "white")
    };

    let on_enter = {
        let controller = controller.clone();
        move |evt: DragEvent| {
            evt.prevent_default();
            if depth.write().enter() {
                controller.drag_enter();
            }
        }
    };
    let on_leave = {
        let controller = controller.clone();
        move |evt: DragEvent| {
            evt.prevent_default();
            if depth.write().leave() {
                controller.drag_leave();
            }
        }
    };
    let on_drop = {
        let controller = controller.clone();
        move |evt: DragEvent| {
            evt.prevent_default();
            depth.write().reset();
            notice.write().message = None;
            let first = evt.files().into_iter().next().map(|file| {
                candidate_from_drop(file.name(), file.size(), file.content_type(), file.path())
            });
            drive(controller.drop_files(first));
        }
    };
    let on_browse = {
        let controller = controller.clone();
        move |_: MouseEvent| {
            notice.write().message = None;
            if let Err(err) = pick_and_submit(&controller) {
                tracing::warn!(error = %err, "picked file could not be opened");
                notice.write().message = Some(humanize_error(&err).message);
            }
        }
    };

    // Children never take pointer events, so moving across them does not
    // fire dragleave on the zone. The whole zone is the click target.
    rsx! {
        div {
            style: "width: 100%; max-width: 640px; margin: 0 auto; padding: 48px; border: 2px dashed {border}; border-radius: 12px; background: {background}; text-align: center; cursor: pointer;",
            ondragenter: on_enter,
            ondragleave: on_leave,
            ondragover: move |evt: DragEvent| evt.prevent_default(),
            ondrop: on_drop,
            onclick: on_browse,

            div { style: "pointer-events: none;",
                if let Some((message, suggestion)) = error {
                    h3 { style: "color: #111827;", "Upload Failed" }
                    p { style: "color: #dc2626; font-size: 14px;", "{message}" }
                    p { style: "color: #6b7280; font-size: 13px;", "{suggestion}" }
                } else if validating {
                    h3 { style: "color: #111827;", "Checking file..." }
                } else {
                    h3 { style: "color: #111827;", "Upload PDF Document" }
                    p { style: "color: #4b5563; font-size: 14px;",
                        "Drag and drop your PDF here, or click to browse"
                    }
                    p { style: "color: #6b7280; font-size: 12px;", "Maximum file size: 50MB" }
                }

                if let Some(ref msg) = notice.read().message {
                    p { style: "color: #dc2626; font-size: 13px;", "{msg}" }
                }

                span {
                    style: "display: inline-block; margin-top: 16px; padding: 10px 20px; border-radius: 8px; border: 1px solid #2563eb; color: #2563eb; background: white; font-size: 15px;",
                    "Browse Files"
                }
            }
        }
    }
}
