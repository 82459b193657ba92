// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// RedactGuide — Core types and error definitions shared across all crates.

pub mod config;
pub mod error;
pub mod file;
pub mod format;
pub mod human_errors;
pub mod types;

pub use config::IngestConfig;
pub use error::RedactGuideError;
pub use file::{CandidateFile, FileContents};
pub use types::*;
