// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages.
//
// Every failure the pipeline can surface maps to a short message and a
// suggestion. None of them are fatal: the user can always pick another file.

use crate::error::RedactGuideError;
use crate::format::format_file_size;
use crate::types::FailureReason;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// User can fix it by choosing a different file.
    ActionRequired,
    /// This file will never work.
    Permanent,
    /// May work if tried again (disk hiccup, worker stopped).
    Transient,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives icon/colour in UI).
    pub severity: Severity,
}

/// Convert an ingestion failure into what the error view shows.
pub fn humanize_failure(reason: &FailureReason) -> HumanError {
    match reason {
        FailureReason::WrongType => HumanError {
            message: "Please upload a PDF file".into(),
            suggestion: "Only PDF documents can be redacted. Save or export the file as a PDF first."
                .into(),
            severity: Severity::ActionRequired,
        },
        FailureReason::TooLarge { limit_bytes } => HumanError {
            message: format!(
                "File size must be less than {}",
                format_file_size(*limit_bytes)
            ),
            suggestion: "Try splitting the document into smaller parts.".into(),
            severity: Severity::ActionRequired,
        },
        FailureReason::Empty => HumanError {
            message: "File is empty".into(),
            suggestion: "The file has no contents. Check you picked the right one.".into(),
            severity: Severity::ActionRequired,
        },
        FailureReason::DecodeFailure => HumanError {
            message: "We couldn't open this PDF".into(),
            suggestion: "The file may be damaged or password-protected. Remove the password or try a different copy."
                .into(),
            severity: Severity::Permanent,
        },
    }
}

/// Convert a `RedactGuideError` into a `HumanError`.
pub fn humanize_error(err: &RedactGuideError) -> HumanError {
    match err {
        RedactGuideError::SizeChanged { .. } => HumanError {
            message: "The file changed after it was chosen".into(),
            suggestion: "Wait until it has finished saving, then choose it again.".into(),
            severity: Severity::ActionRequired,
        },

        RedactGuideError::PdfError(_)
        | RedactGuideError::EncryptedDocument
        | RedactGuideError::NoPages => humanize_failure(&FailureReason::DecodeFailure),

        RedactGuideError::DecodeTimedOut(_) => HumanError {
            message: "Opening this PDF took too long".into(),
            suggestion: "The document may be unusually complex. Try a smaller file.".into(),
            severity: Severity::Transient,
        },

        RedactGuideError::Worker(_) => HumanError {
            message: "Something went wrong while opening the file".into(),
            suggestion: "Try again.".into(),
            severity: Severity::Transient,
        },

        RedactGuideError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "The file couldn't be found".into(),
                suggestion: "It may have been moved or deleted. Try choosing the file again.".into(),
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "The app doesn't have permission to read that file".into(),
                suggestion: "Check the file permissions, or copy the file somewhere else first."
                    .into(),
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "There was a problem reading the file".into(),
                suggestion: "Try again.".into(),
                severity: Severity::Transient,
            },
        },

        RedactGuideError::Serialization(_) => HumanError {
            message: "The app's settings couldn't be read".into(),
            suggestion: "Default settings are being used instead.".into(),
            severity: Severity::Transient,
        },
    }
}
