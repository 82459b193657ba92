// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types for the RedactGuide ingestion pipeline.

use serde::{Deserialize, Serialize};

use crate::file::CandidateFile;
use crate::human_errors::humanize_failure;

/// Document types recognised by file extension.
///
/// Only [`DocumentType::Pdf`] is ever accepted; the others exist so that a
/// picked `.docx` carries its real MIME label into validation and is rejected
/// as the wrong type rather than as an unknown blob.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentType {
    Pdf,
    /// Office Open XML word processing (DOCX).
    WordProcessing,
    /// Legacy binary Word (DOC).
    LegacyWord,
    PlainText,
    Jpeg,
    Png,
    Unknown,
}

impl DocumentType {
    /// MIME label for this document type.
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Pdf => "application/pdf",
            Self::WordProcessing => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
            Self::LegacyWord => "application/msword",
            Self::PlainText => "text/plain",
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Unknown => "application/octet-stream",
        }
    }

    /// Infer document type from file extension.
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Self::Pdf,
            "docx" => Self::WordProcessing,
            "doc" => Self::LegacyWord,
            "txt" => Self::PlainText,
            "jpg" | "jpeg" => Self::Jpeg,
            "png" => Self::Png,
            _ => Self::Unknown,
        }
    }
}

/// Why the validator turned a file away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rejection {
    /// MIME label is not the accepted document type.
    WrongType,
    /// Byte length exceeds the configured maximum.
    TooLarge { limit_bytes: u64 },
    /// Zero-length file.
    Empty,
}

/// Result of running the validator over a candidate file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationOutcome {
    Accepted,
    Rejected(Rejection),
}

/// Closed set of reasons an ingestion attempt can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FailureReason {
    WrongType,
    TooLarge { limit_bytes: u64 },
    Empty,
    /// Corrupt, encrypted, zero-page, unreadable, or otherwise unparsable.
    DecodeFailure,
}

impl From<Rejection> for FailureReason {
    fn from(rejection: Rejection) -> Self {
        match rejection {
            Rejection::WrongType => Self::WrongType,
            Rejection::TooLarge { limit_bytes } => Self::TooLarge { limit_bytes },
            Rejection::Empty => Self::Empty,
        }
    }
}

/// Structural facts a decoder extracts from a byte sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedDocument {
    pub page_count: u32,
    /// Version from the `%PDF-x.y` header.
    pub pdf_version: String,
    /// Lowercase hex SHA-256 of the decoded bytes.
    pub fingerprint: String,
}

/// Metadata for a successfully decoded document, tied to the file it came from.
#[derive(Debug, Clone)]
pub struct DocumentMetadata {
    pub source: CandidateFile,
    pub byte_length: u64,
    pub page_count: u32,
    pub pdf_version: String,
    pub fingerprint: String,
}

impl DocumentMetadata {
    pub fn new(source: CandidateFile, decoded: DecodedDocument) -> Self {
        Self {
            byte_length: source.byte_len(),
            source,
            page_count: decoded.page_count,
            pdf_version: decoded.pdf_version,
            fingerprint: decoded.fingerprint,
        }
    }

    pub fn display_name(&self) -> &str {
        self.source.name()
    }
}

/// Where the current submission stands in the pipeline.
#[derive(Debug, Clone, Default)]
pub enum IngestionState {
    #[default]
    Idle,
    DraggingOver,
    Validating,
    Decoding,
    Ready(DocumentMetadata),
    Failed(FailureReason),
}

impl IngestionState {
    /// Whether a drag may start from this state.
    pub fn accepts_drag(&self) -> bool {
        matches!(self, Self::Idle | Self::Ready(_) | Self::Failed(_))
    }

    /// `Ready` or `Failed`: the submission has an outcome.
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Ready(_) | Self::Failed(_))
    }

    pub fn metadata(&self) -> Option<&DocumentMetadata> {
        match self {
            Self::Ready(metadata) => Some(metadata),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<FailureReason> {
        match self {
            Self::Failed(reason) => Some(*reason),
            _ => None,
        }
    }

    /// Short lowercase label for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::DraggingOver => "dragging_over",
            Self::Validating => "validating",
            Self::Decoding => "decoding",
            Self::Ready(_) => "ready",
            Self::Failed(_) => "failed",
        }
    }

    /// Project the state into what the presentation layer renders.
    pub fn view(&self) -> IngestionView {
        match self {
            Self::Idle => IngestionView::DropTarget {
                dragging: false,
                validating: false,
            },
            Self::DraggingOver => IngestionView::DropTarget {
                dragging: true,
                validating: false,
            },
            Self::Validating => IngestionView::DropTarget {
                dragging: false,
                validating: true,
            },
            Self::Decoding => IngestionView::Processing,
            Self::Ready(metadata) => IngestionView::Preview(FilePreview {
                display_name: metadata.display_name().to_string(),
                byte_length: metadata.byte_length,
                page_count: metadata.page_count,
            }),
            Self::Failed(reason) => {
                let human = humanize_failure(reason);
                IngestionView::Error {
                    message: human.message,
                    suggestion: human.suggestion,
                }
            }
        }
    }
}

/// Display-only summary of a ready document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePreview {
    pub display_name: String,
    pub byte_length: u64,
    pub page_count: u32,
}

/// Renderable projection of [`IngestionState`]. Carries no file bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IngestionView {
    DropTarget { dragging: bool, validating: bool },
    Processing,
    Preview(FilePreview),
    Error { message: String, suggestion: String },
}
