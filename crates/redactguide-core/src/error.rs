// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for RedactGuide.

use std::time::Duration;

use thiserror::Error;

/// Top-level error type for all RedactGuide operations.
#[derive(Debug, Error)]
pub enum RedactGuideError {
    // -- Read errors --
    #[error("file changed after it was chosen: expected {expected} bytes, read {actual}")]
    SizeChanged { expected: u64, actual: u64 },

    // -- Decode errors --
    #[error("PDF operation failed: {0}")]
    PdfError(String),

    #[error("document is encrypted or password-protected")]
    EncryptedDocument,

    #[error("document has no pages")]
    NoPages,

    #[error("decoding did not finish within {0:?}")]
    DecodeTimedOut(Duration),

    #[error("decoder worker stopped: {0}")]
    Worker(String),

    // -- Storage / persistence --
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, RedactGuideError>;
