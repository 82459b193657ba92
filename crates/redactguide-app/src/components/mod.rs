// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Shared UI components.

pub mod file_preview;
pub mod footer;
pub mod header;
pub mod upload_zone;
