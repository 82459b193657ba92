// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// PDF reader — parse a PDF byte stream with `lopdf` and answer structural
// questions about it (page count, header version).

use lopdf::Document;
use redactguide_core::error::RedactGuideError;
use tracing::{debug, instrument};

/// Read-only view over a parsed PDF.
///
/// Wraps `lopdf::Document`. Encrypted documents are refused at construction,
/// so anything holding a `PdfReader` can inspect its page tree freely.
pub struct PdfReader {
    /// The underlying lopdf document.
    document: Document,
}

impl PdfReader {
    // -- Construction ---------------------------------------------------------

    /// Parse raw PDF bytes already in memory.
    #[instrument(skip_all, fields(bytes_len = data.len()))]
    pub fn from_bytes(data: &[u8]) -> Result<Self, RedactGuideError> {
        let document = Document::load_mem(data).map_err(|err| {
            RedactGuideError::PdfError(format!("failed to load PDF from memory: {}", err))
        })?;

        if document.is_encrypted() {
            debug!("PDF is encrypted, refusing");
            return Err(RedactGuideError::EncryptedDocument);
        }

        debug!(pages = document.get_pages().len(), "PDF loaded from bytes");

        Ok(Self { document })
    }

    // -- Inspection -----------------------------------------------------------

    /// Number of pages reachable from the page tree.
    pub fn page_count(&self) -> usize {
        self.document.get_pages().len()
    }

    /// Version from the `%PDF-x.y` header.
    pub fn version(&self) -> &str {
        &self.document.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{blank_pdf, locked_pdf};

    #[test]
    fn counts_pages() {
        let reader = PdfReader::from_bytes(&blank_pdf(3)).expect("parse");
        assert_eq!(reader.page_count(), 3);
        assert_eq!(reader.version(), "1.5");
    }

    #[test]
    fn zero_page_document_parses_with_no_pages() {
        let reader = PdfReader::from_bytes(&blank_pdf(0)).expect("parse");
        assert_eq!(reader.page_count(), 0);
    }

    #[test]
    fn garbage_is_pdf_error() {
        let result = PdfReader::from_bytes(b"this is not a pdf at all");
        assert!(matches!(result, Err(RedactGuideError::PdfError(_))));
    }

    #[test]
    fn encrypted_is_refused() {
        assert!(PdfReader::from_bytes(&locked_pdf()).is_err());
    }
}
