// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// redactguide-document — Document decoding for the RedactGuide ingestion pipeline.
//
// Provides the decoder capability (bytes in, page-level metadata out), a
// lopdf-backed implementation, and SHA-256 fingerprinting of decoded bytes.

pub mod decoder;
#[cfg(any(test, feature = "fixtures"))]
pub mod fixtures;
pub mod integrity;
pub mod pdf;

// Re-export the primary items so callers can use `redactguide_document::PdfDecoder` etc.
pub use decoder::{DocumentDecoder, PdfDecoder};
pub use integrity::hash_bytes;
pub use pdf::reader::PdfReader;
