// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Candidate files — handles to user-selected documents awaiting validation.
//
// A handle exposes name, declared size and MIME label up front. The bytes are
// only read once validation has accepted the file.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::io::AsyncReadExt;

use crate::error::Result;
use crate::types::DocumentType;

/// Where a candidate file's bytes come from.
#[derive(Clone)]
pub enum FileContents {
    /// Already in memory (e.g. a drop payload the shell has buffered).
    Memory(Arc<[u8]>),
    /// On the local filesystem, read lazily.
    Path(PathBuf),
}

/// A user-provided file handle.
#[derive(Clone)]
pub struct CandidateFile {
    name: String,
    byte_len: u64,
    mime_type: String,
    contents: FileContents,
}

impl CandidateFile {
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        byte_len: u64,
        contents: FileContents,
    ) -> Self {
        Self {
            name: name.into(),
            byte_len,
            mime_type: mime_type.into(),
            contents,
        }
    }

    /// Wrap an in-memory buffer. The byte length is the buffer length.
    pub fn from_bytes(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        bytes: impl Into<Arc<[u8]>>,
    ) -> Self {
        let bytes = bytes.into();
        Self::new(
            name,
            mime_type,
            bytes.len() as u64,
            FileContents::Memory(bytes),
        )
    }

    /// Build a handle for a file on disk.
    ///
    /// Size comes from filesystem metadata and the MIME label from the
    /// extension, the same way a browser labels a picked file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let byte_len = std::fs::metadata(path)?.len();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".into());
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_string())
            .unwrap_or_default();
        let mime_type = DocumentType::from_extension(&ext).mime_type();

        Ok(Self::new(
            name,
            mime_type,
            byte_len,
            FileContents::Path(path.to_path_buf()),
        ))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn byte_len(&self) -> u64 {
        self.byte_len
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    /// Read the contents, stopping after `limit + 1` bytes.
    ///
    /// A file that grew past `limit` since it was picked comes back one byte
    /// over, never whole.
    pub async fn read_bytes(&self, limit: u64) -> Result<Arc<[u8]>> {
        match &self.contents {
            FileContents::Memory(bytes) => Ok(Arc::clone(bytes)),
            FileContents::Path(path) => {
                let file = tokio::fs::File::open(path).await?;
                let mut bytes = Vec::new();
                file.take(limit.saturating_add(1))
                    .read_to_end(&mut bytes)
                    .await?;
                Ok(Arc::from(bytes))
            }
        }
    }
}

// Contents are never printed.
impl fmt::Debug for CandidateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateFile")
            .field("name", &self.name)
            .field("byte_len", &self.byte_len)
            .field("mime_type", &self.mime_type)
            .finish_non_exhaustive()
    }
}
