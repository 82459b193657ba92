// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Header() -> Element {
    rsx! {
        header {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 16px 32px; background: white; box-shadow: 0 1px 2px rgba(0,0,0,0.05);",
            Link { to: Route::Home {},
                style: "font-size: 22px; font-weight: bold; color: #111827; text-decoration: none;",
                "RedactGuide"
            }
            nav { style: "display: flex; gap: 24px;",
                Link { to: Route::Home {}, style: "color: #4b5563; text-decoration: none;", "Home" }
                Link { to: Route::Upload {}, style: "color: #4b5563; text-decoration: none;", "Upload" }
            }
        }
    }
}
