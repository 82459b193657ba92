// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Ingestion settings, read once at startup from `config.json` in the data dir.

use std::path::Path;

use redactguide_core::IngestConfig;
use redactguide_core::error::RedactGuideError;
use tracing::{info, warn};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";

/// Load the ingestion config, falling back to defaults.
pub fn load_ingest_config() -> IngestConfig {
    load_from(&data_dir::data_dir().join(CONFIG_FILE))
}

fn load_from(path: &Path) -> IngestConfig {
    match IngestConfig::load(path) {
        Ok(config) => {
            info!(path = %path.display(), "ingest config loaded");
            config
        }
        Err(RedactGuideError::Io(err)) if err.kind() == std::io::ErrorKind::NotFound => {
            IngestConfig::default()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "ignoring unreadable config");
            IngestConfig::default()
        }
    }
}
