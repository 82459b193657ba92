// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// File validator — synchronous acceptance rules checked before any bytes are
// read.
//
// Rules run in a fixed order and the first failure wins:
//   1. MIME label equals the accepted type   → else WrongType
//   2. byte length ≤ configured maximum      → else TooLarge
//   3. byte length > 0                       → else Empty
//
// This is an input boundary, not a security control: the MIME label is taken
// at face value and no content sniffing happens here.

use redactguide_core::config::IngestConfig;
use redactguide_core::file::CandidateFile;
use redactguide_core::types::{Rejection, ValidationOutcome};

/// Acceptance rules for candidate files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileValidator {
    accepted_mime_type: String,
    max_file_bytes: u64,
}

impl FileValidator {
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            accepted_mime_type: config.accepted_mime_type.clone(),
            max_file_bytes: config.max_file_bytes,
        }
    }

    pub fn max_file_bytes(&self) -> u64 {
        self.max_file_bytes
    }

    /// Check `file` against the rules. Pure; never touches the file's bytes.
    pub fn validate(&self, file: &CandidateFile) -> ValidationOutcome {
        if file.mime_type() != self.accepted_mime_type {
            return ValidationOutcome::Rejected(Rejection::WrongType);
        }
        if file.byte_len() > self.max_file_bytes {
            return ValidationOutcome::Rejected(Rejection::TooLarge {
                limit_bytes: self.max_file_bytes,
            });
        }
        if file.byte_len() == 0 {
            return ValidationOutcome::Rejected(Rejection::Empty);
        }
        ValidationOutcome::Accepted
    }
}

impl Default for FileValidator {
    fn default() -> Self {
        Self::new(&IngestConfig::default())
    }
}

/// Validate against the default rules (PDF only, 50 MiB maximum).
pub fn validate(file: &CandidateFile) -> ValidationOutcome {
    FileValidator::default().validate(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use redactguide_core::config::DEFAULT_MAX_FILE_BYTES;
    use redactguide_core::file::FileContents;

    const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

    /// A handle that only declares its size; the path is never read.
    fn declared(name: &str, mime: &str, size: u64) -> CandidateFile {
        CandidateFile::new(
            name,
            mime,
            size,
            FileContents::Path(format!("/nonexistent/{name}").into()),
        )
    }

    #[test]
    fn wrong_type_regardless_of_size() {
        for size in [0, 1, 1000, DEFAULT_MAX_FILE_BYTES, DEFAULT_MAX_FILE_BYTES + 1, u64::MAX] {
            assert_eq!(
                validate(&declared("report.docx", DOCX, size)),
                ValidationOutcome::Rejected(Rejection::WrongType),
                "size {size}"
            );
        }
    }

    #[test]
    fn mime_must_match_exactly() {
        for mime in ["application/PDF", "application/pdf ", "", "application/x-pdf"] {
            assert_eq!(
                validate(&declared("a.pdf", mime, 10)),
                ValidationOutcome::Rejected(Rejection::WrongType),
                "mime {mime:?}"
            );
        }
    }

    #[test]
    fn too_large_even_with_correct_type() {
        let outcome = validate(&declared("big.pdf", "application/pdf", 60_000_000));
        assert_eq!(
            outcome,
            ValidationOutcome::Rejected(Rejection::TooLarge {
                limit_bytes: 52_428_800
            })
        );
    }

    #[test]
    fn size_limit_is_inclusive() {
        let at_limit = declared("edge.pdf", "application/pdf", DEFAULT_MAX_FILE_BYTES);
        let over = declared("edge.pdf", "application/pdf", DEFAULT_MAX_FILE_BYTES + 1);
        assert_eq!(validate(&at_limit), ValidationOutcome::Accepted);
        assert!(matches!(
            validate(&over),
            ValidationOutcome::Rejected(Rejection::TooLarge { .. })
        ));
    }

    #[test]
    fn zero_length_is_empty() {
        assert_eq!(
            validate(&declared("blank.pdf", "application/pdf", 0)),
            ValidationOutcome::Rejected(Rejection::Empty)
        );
    }

    #[test]
    fn one_byte_is_accepted() {
        assert_eq!(
            validate(&declared("tiny.pdf", "application/pdf", 1)),
            ValidationOutcome::Accepted
        );
    }

    #[test]
    fn configured_limit_applies() {
        let validator = FileValidator::new(&IngestConfig {
            max_file_bytes: 100,
            ..IngestConfig::default()
        });
        assert_eq!(validator.max_file_bytes(), 100);
        assert_eq!(
            validator.validate(&declared("a.pdf", "application/pdf", 101)),
            ValidationOutcome::Rejected(Rejection::TooLarge { limit_bytes: 100 })
        );
    }
}
