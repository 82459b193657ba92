// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service layer — bridges the Dioxus UI to the ingestion controller.
//
// Converts what the UI hands over (picked paths, drop payloads) into
// candidate files and drives accepted submissions on the UI runtime.

pub mod data_dir;
pub mod files;
pub mod settings;
