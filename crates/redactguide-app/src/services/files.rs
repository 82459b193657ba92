// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Turning picked and dropped files into submissions.

use std::path::{Path, PathBuf};

use redactguide_core::error::Result;
use redactguide_core::types::DocumentType;
use redactguide_core::{CandidateFile, FileContents};
use redactguide_ingest::{IngestionController, PendingDecode};
use tracing::debug;

/// Show the native picker (PDF only) and submit the chosen file.
///
/// Cancelling the dialog is not an error and leaves the state untouched.
pub fn pick_and_submit(controller: &IngestionController) -> Result<()> {
    let Some(path) = rfd::FileDialog::new()
        .add_filter("PDF documents", &["pdf"])
        .pick_file()
    else {
        debug!("file picker cancelled");
        return Ok(());
    };

    let file = CandidateFile::from_path(&path)?;
    drive(controller.submit(file));
    Ok(())
}

/// Run an accepted submission's decode to completion.
///
/// The task goes on the tokio runtime, not a component scope: the component
/// that submitted is unmounted as soon as the state leaves the drop zone.
pub fn drive(pending: Option<PendingDecode>) {
    if let Some(pending) = pending {
        tokio::spawn(async move {
            let ticket = pending.ticket();
            if !pending.run().await {
                debug!(ticket = ticket.generation(), "decode result superseded");
            }
        });
    }
}

/// Build a candidate from what a drop event reports about a file.
///
/// Webviews often leave the content type blank for local files; the
/// extension decides in that case.
pub fn candidate_from_drop(
    name: String,
    size: u64,
    content_type: Option<String>,
    path: PathBuf,
) -> CandidateFile {
    let mime_type = content_type
        .filter(|mime| !mime.is_empty())
        .unwrap_or_else(|| mime_from_name(&name).to_string());
    CandidateFile::new(name, mime_type, size, FileContents::Path(path))
}

fn mime_from_name(name: &str) -> &'static str {
    let ext = Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    DocumentType::from_extension(&ext).mime_type()
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::prelude::*;
    use redactguide_core::IngestConfig;
    use redactguide_document::fixtures::blank_pdf;

    fn submitter(controller: IngestionController) -> Element {
        use_hook(|| {
            let file = CandidateFile::from_bytes("record.pdf", "application/pdf", blank_pdf(3));
            drive(controller.submit(file));
        });
        rsx! {}
    }

    #[tokio::test]
    async fn decode_outlives_the_submitting_component() {
        let controller = IngestionController::for_pdf(&IngestConfig::default());
        let mut rx = controller.subscribe();

        let mut dom = VirtualDom::new_with_props(submitter, controller.clone());
        dom.rebuild_in_place();
        drop(dom);

        while !rx.borrow_and_update().is_finished() {
            rx.changed().await.expect("controller alive");
        }
        assert_eq!(controller.state().metadata().map(|m| m.page_count), Some(3));
    }

    #[test]
    fn reported_content_type_wins() {
        let file = candidate_from_drop(
            "scan.pdf".into(),
            10,
            Some("application/octet-stream".into()),
            PathBuf::from("/tmp/scan.pdf"),
        );
        assert_eq!(file.mime_type(), "application/octet-stream");
    }

    #[test]
    fn blank_content_type_falls_back_to_extension() {
        let file = candidate_from_drop(
            "scan.pdf".into(),
            10,
            Some(String::new()),
            PathBuf::from("/tmp/scan.pdf"),
        );
        assert_eq!(file.mime_type(), "application/pdf");
        assert_eq!(file.byte_len(), 10);

        let file = candidate_from_drop("notes.docx".into(), 5, None, PathBuf::from("/tmp/n"));
        assert_eq!(
            file.mime_type(),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        );
    }
}
