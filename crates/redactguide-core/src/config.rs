// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Ingestion configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// MIME label of the only document type the pipeline accepts.
pub const PDF_MIME_TYPE: &str = "application/pdf";

/// Default upper bound on a submitted file (50 MiB).
pub const DEFAULT_MAX_FILE_BYTES: u64 = 50 * 1024 * 1024;

/// Acceptance rules and limits for the ingestion pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// MIME label a candidate file must carry exactly.
    pub accepted_mime_type: String,
    /// Largest accepted file, in bytes (inclusive).
    pub max_file_bytes: u64,
    /// Give up on a decode after this many seconds. `None` waits indefinitely.
    pub decode_timeout_secs: Option<u64>,
}

impl IngestConfig {
    /// Decode timeout as a `Duration`, if one is configured.
    pub fn decode_timeout(&self) -> Option<Duration> {
        self.decode_timeout_secs.map(Duration::from_secs)
    }

    /// Read a config from a JSON file. Missing fields take their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            accepted_mime_type: PDF_MIME_TYPE.to_string(),
            max_file_bytes: DEFAULT_MAX_FILE_BYTES,
            decode_timeout_secs: None,
        }
    }
}
