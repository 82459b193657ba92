// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Preview card for a decoded document: name, size, page count.

use dioxus::prelude::*;
use redactguide_core::format::{DEFAULT_NAME_WIDTH, format_file_size, truncate_file_name};
use redactguide_core::human_errors::humanize_error;
use redactguide_core::types::FilePreview;
use redactguide_ingest::IngestionController;

use crate::services::files::pick_and_submit;
use crate::state::PickerNotice;

fn page_label(count: u32) -> String {
    if count == 1 {
        "1 page".to_string()
    } else {
        format!("{count} pages")
    }
}

#[component]
pub fn FilePreviewCard(preview: FilePreview) -> Element {
    let controller = use_context::<IngestionController>();
    let mut notice = use_context::<Signal<PickerNotice>>();
    let name = truncate_file_name(&preview.display_name, DEFAULT_NAME_WIDTH);
    let size = format_file_size(preview.byte_length);
    let pages = page_label(preview.page_count);

    let on_choose_another = {
        let controller = controller.clone();
        move |_| {
            controller.clear();
            notice.write().message = None;
            if let Err(err) = pick_and_submit(&controller) {
                tracing::warn!(error = %err, "picked file could not be opened");
                notice.write().message = Some(humanize_error(&err).message);
            }
        }
    };
    let on_clear = {
        let controller = controller.clone();
        move |_| controller.clear()
    };

    rsx! {
        div {
            style: "width: 100%; max-width: 640px; margin: 0 auto; padding: 24px; border: 1px solid #e5e7eb; border-radius: 12px; background: white; box-shadow: 0 2px 8px rgba(0,0,0,0.04);",
            div { style: "display: flex; align-items: flex-start; gap: 16px;",
                div { style: "width: 48px; height: 48px; border-radius: 8px; background: #eff6ff; display: flex; align-items: center; justify-content: center; color: #2563eb; font-weight: bold;",
                    "PDF"
                }
                div { style: "flex: 1; min-width: 0;",
                    h3 { style: "margin: 0; font-size: 16px; color: #111827; white-space: nowrap; overflow: hidden; text-overflow: ellipsis;",
                        title: "{preview.display_name}",
                        "{name}"
                    }
                    div { style: "margin-top: 4px; display: flex; gap: 16px; font-size: 14px; color: #4b5563;",
                        span { "{size}" }
                        span { "{pages}" }
                    }
                    div { style: "margin-top: 16px; display: flex; gap: 8px;",
                        button {
                            style: "padding: 8px 16px; border-radius: 6px; border: none; background: #2563eb; color: white; font-weight: 600;",
                            onclick: on_choose_another,
                            "Choose Another File"
                        }
                        button {
                            style: "padding: 8px 16px; border-radius: 6px; border: 1px solid #d1d5db; background: white; color: #374151; font-weight: 600;",
                            onclick: on_clear,
                            "Clear"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_label_pluralises() {
        assert_eq!(page_label(1), "1 page");
        assert_eq!(page_label(3), "3 pages");
    }
}
