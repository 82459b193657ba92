// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Home page — what the tool does and a way in.

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Home() -> Element {
    rsx! {
        div { style: "max-width: 720px; margin: 0 auto; text-align: center;",
            h1 { style: "font-size: 40px; color: #111827; margin-bottom: 8px;",
                "Local-Only Document Redaction"
            }
            p { style: "color: #4b5563; font-size: 18px;",
                "Your documents never leave this machine. Open a PDF, review it, and redact what should stay private."
            }

            Link {
                to: Route::Upload {},
                style: "display: inline-block; margin-top: 24px; padding: 12px 24px; border-radius: 8px; background: #2563eb; color: white; text-decoration: none; font-weight: 600;",
                "Start Redacting"
            }

            div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px; margin-top: 48px; text-align: left;",
                Feature { title: "Private", body: "No uploads, no accounts, no network." }
                Feature { title: "PDF First", body: "Drop in any unencrypted PDF up to 50MB." }
                Feature { title: "Fast", body: "Documents open in the background while you keep working." }
            }
        }
    }
}

#[component]
fn Feature(title: &'static str, body: &'static str) -> Element {
    rsx! {
        div { style: "padding: 16px; border: 1px solid #e5e7eb; border-radius: 8px; background: white;",
            h3 { style: "margin: 0 0 4px 0; color: #111827;", "{title}" }
            p { style: "margin: 0; color: #6b7280; font-size: 14px;", "{body}" }
        }
    }
}
