// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Document decoder — the capability that turns raw bytes into page-level
// metadata.
//
// The ingestion controller depends only on the `DocumentDecoder` trait, so any
// parser can stand in for lopdf. Decoding is one attempt per call: no retries
// and no cancel signal. Callers cancel by ignoring the result.

use std::sync::Arc;

use async_trait::async_trait;
use redactguide_core::error::{RedactGuideError, Result};
use redactguide_core::types::DecodedDocument;
use tracing::{debug, info, instrument};

use crate::integrity::hash_bytes;
use crate::pdf::reader::PdfReader;

/// Structural parse of a paged document.
#[async_trait]
pub trait DocumentDecoder: Send + Sync {
    /// Parse `bytes` and report page count and version.
    ///
    /// Corrupt, encrypted and zero-page documents are errors.
    async fn decode(&self, bytes: Arc<[u8]>) -> Result<DecodedDocument>;
}

/// `lopdf`-backed decoder. Parsing runs on tokio's blocking pool.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfDecoder;

#[async_trait]
impl DocumentDecoder for PdfDecoder {
    #[instrument(skip_all, fields(bytes_len = bytes.len()))]
    async fn decode(&self, bytes: Arc<[u8]>) -> Result<DecodedDocument> {
        tokio::task::spawn_blocking(move || decode_pdf(&bytes))
            .await
            .map_err(|err| RedactGuideError::Worker(err.to_string()))?
    }
}

/// Synchronous decode used by [`PdfDecoder`].
pub fn decode_pdf(bytes: &[u8]) -> Result<DecodedDocument> {
    let reader = PdfReader::from_bytes(bytes)?;

    let page_count = reader.page_count();
    if page_count == 0 {
        debug!("PDF parsed but page tree is empty");
        return Err(RedactGuideError::NoPages);
    }
    let page_count = u32::try_from(page_count)
        .map_err(|_| RedactGuideError::PdfError(format!("{page_count} pages is out of range")))?;

    info!(page_count, version = reader.version(), "PDF decoded");

    Ok(DecodedDocument {
        page_count,
        pdf_version: reader.version().to_string(),
        fingerprint: hash_bytes(bytes),
    })
}
