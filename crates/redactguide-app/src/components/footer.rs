// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dioxus::prelude::*;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer {
            style: "padding: 16px 32px; border-top: 1px solid #e5e7eb; background: white; color: #6b7280; font-size: 13px; text-align: center;",
            "Your documents never leave this device."
        }
    }
}
