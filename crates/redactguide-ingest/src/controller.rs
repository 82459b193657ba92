// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Ingestion controller — the state machine between "user offered a file" and
// "document metadata is ready".
//
//   Idle ──drag-enter──▶ DraggingOver ──drag-leave──▶ (prior state)
//     │                      │
//     └──────submit──────────┴──drop──▶ Validating ──rejected──▶ Failed
//                                           │
//                                       accepted
//                                           ▼
//                                       Decoding ──error──▶ Failed
//                                           │
//                                        decoded
//                                           ▼
//                                         Ready
//
// `clear()` returns to Idle from anywhere. Every submission bumps a generation
// counter and gets a `Ticket`; a decode result is applied only while its ticket
// is still current, so the last submission wins and superseded results vanish.
//
// The inner mutex is held for transitions only, never across an await. State
// snapshots are published on a `watch` channel for the presentation layer.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use redactguide_core::config::IngestConfig;
use redactguide_core::error::{RedactGuideError, Result};
use redactguide_core::file::CandidateFile;
use redactguide_core::types::{
    DecodedDocument, DocumentMetadata, FailureReason, IngestionState, IngestionView,
    ValidationOutcome,
};
use redactguide_document::{DocumentDecoder, PdfDecoder};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::validator::FileValidator;

/// Identifies one submission. Only the newest ticket may change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    pub fn generation(&self) -> u64 {
        self.0
    }
}

struct Inner {
    generation: u64,
    /// State to restore when a drag leaves without dropping.
    before_drag: Option<IngestionState>,
    /// Bytes of the `Ready` document.
    buffer: Option<Arc<[u8]>>,
}

/// Owner of the single ingestion state.
///
/// Cheap to clone: all clones drive the same state.
#[derive(Clone)]
pub struct IngestionController {
    inner: Arc<Mutex<Inner>>,
    state_tx: Arc<watch::Sender<IngestionState>>,
    decoder: Arc<dyn DocumentDecoder>,
    validator: FileValidator,
    decode_timeout: Option<Duration>,
}

impl IngestionController {
    pub fn new(decoder: Arc<dyn DocumentDecoder>, config: &IngestConfig) -> Self {
        let (state_tx, _) = watch::channel(IngestionState::Idle);
        Self {
            inner: Arc::new(Mutex::new(Inner {
                generation: 0,
                before_drag: None,
                buffer: None,
            })),
            state_tx: Arc::new(state_tx),
            decoder,
            validator: FileValidator::new(config),
            decode_timeout: config.decode_timeout(),
        }
    }

    /// Controller backed by the lopdf decoder.
    pub fn for_pdf(config: &IngestConfig) -> Self {
        Self::new(Arc::new(PdfDecoder), config)
    }

    // -- Reading --------------------------------------------------------------

    /// Snapshot of the current state.
    pub fn state(&self) -> IngestionState {
        self.state_tx.borrow().clone()
    }

    /// Current state projected for rendering.
    pub fn view(&self) -> IngestionView {
        self.state_tx.borrow().view()
    }

    /// Receive every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<IngestionState> {
        self.state_tx.subscribe()
    }

    /// Bytes of the ready document, for downstream processing stages.
    /// `None` unless the state is `Ready`.
    pub fn document_bytes(&self) -> Option<Arc<[u8]>> {
        self.lock().buffer.clone()
    }

    // -- Drag feedback --------------------------------------------------------

    /// A drag carrying files entered the drop zone.
    ///
    /// Only honoured from `Idle`, `Ready` and `Failed`; a drag over an
    /// in-flight submission changes nothing until it is dropped.
    pub fn drag_enter(&self) {
        let mut inner = self.lock();
        let current = self.state();
        if !current.accepts_drag() {
            return;
        }
        inner.before_drag = Some(current);
        self.publish(IngestionState::DraggingOver);
    }

    /// The drag left the drop zone without dropping.
    pub fn drag_leave(&self) {
        let mut inner = self.lock();
        if !matches!(*self.state_tx.borrow(), IngestionState::DraggingOver) {
            return;
        }
        let restored = inner.before_drag.take().unwrap_or_default();
        self.publish(restored);
    }

    // -- Submission -----------------------------------------------------------

    /// Files were dropped. The first is submitted; the rest are ignored.
    ///
    /// An empty drop just ends the drag.
    #[must_use = "an accepted file stays in Decoding until the returned decode is run"]
    pub fn drop_files(
        &self,
        files: impl IntoIterator<Item = CandidateFile>,
    ) -> Option<PendingDecode> {
        match files.into_iter().next() {
            Some(file) => self.submit(file),
            None => {
                self.drag_leave();
                None
            }
        }
    }

    /// Start a new submission, superseding any in flight.
    ///
    /// Validation runs synchronously. A rejected file leaves the controller in
    /// `Failed` and returns `None`. An accepted file leaves it in `Decoding` and
    /// returns the read-and-decode step for the caller to drive.
    #[must_use = "an accepted file stays in Decoding until the returned decode is run"]
    pub fn submit(&self, file: CandidateFile) -> Option<PendingDecode> {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.before_drag = None;
        inner.buffer = None;
        let ticket = Ticket(inner.generation);

        self.publish(IngestionState::Validating);

        match self.validator.validate(&file) {
            ValidationOutcome::Rejected(rejection) => {
                info!(
                    ticket = ticket.0,
                    byte_len = file.byte_len(),
                    ?rejection,
                    "file rejected"
                );
                self.publish(IngestionState::Failed(rejection.into()));
                None
            }
            ValidationOutcome::Accepted => {
                debug!(ticket = ticket.0, byte_len = file.byte_len(), "file accepted");
                self.publish(IngestionState::Decoding);
                Some(PendingDecode {
                    controller: self.clone(),
                    ticket,
                    file,
                })
            }
        }
    }

    /// Submit `file` and drive it to an outcome. Returns the resulting state,
    /// which reflects a newer submission if one superseded this one.
    pub async fn ingest(&self, file: CandidateFile) -> IngestionState {
        if let Some(pending) = self.submit(file) {
            pending.run().await;
        }
        self.state()
    }

    /// Drop the current document (or abandon the in-flight one) and return
    /// to `Idle`.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.generation += 1;
        inner.before_drag = None;
        inner.buffer = None;
        debug!(generation = inner.generation, "cleared");
        self.publish(IngestionState::Idle);
    }

    // -- Internals ------------------------------------------------------------

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: IngestionState) {
        debug!(state = state.label(), "ingestion state");
        self.state_tx.send_replace(state);
    }

    fn is_current(&self, ticket: Ticket) -> bool {
        self.lock().generation == ticket.0
    }

    async fn read_and_decode(
        &self,
        file: &CandidateFile,
    ) -> Result<(Arc<[u8]>, DecodedDocument)> {
        let work = async {
            // The validator vetted the declared size; the bytes must match it.
            let bytes = file.read_bytes(self.validator.max_file_bytes()).await?;
            let actual = bytes.len() as u64;
            if actual != file.byte_len() {
                return Err(RedactGuideError::SizeChanged {
                    expected: file.byte_len(),
                    actual,
                });
            }
            let decoded = self.decoder.decode(Arc::clone(&bytes)).await?;
            Ok::<_, RedactGuideError>((bytes, decoded))
        };

        match self.decode_timeout {
            Some(limit) => tokio::time::timeout(limit, work)
                .await
                .unwrap_or_else(|_| Err(RedactGuideError::DecodeTimedOut(limit))),
            None => work.await,
        }
    }

    /// Apply a decode outcome if `ticket` is still current.
    fn finish(
        &self,
        ticket: Ticket,
        file: CandidateFile,
        outcome: Result<(Arc<[u8]>, DecodedDocument)>,
    ) -> bool {
        let mut inner = self.lock();
        if inner.generation != ticket.0 {
            debug!(
                ticket = ticket.0,
                current = inner.generation,
                "discarding superseded decode result"
            );
            return false;
        }

        match outcome {
            Ok((bytes, decoded)) if decoded.page_count >= 1 => {
                info!(
                    ticket = ticket.0,
                    page_count = decoded.page_count,
                    byte_len = file.byte_len(),
                    "document ready"
                );
                inner.buffer = Some(bytes);
                self.publish(IngestionState::Ready(DocumentMetadata::new(file, decoded)));
            }
            Ok(_) => {
                warn!(ticket = ticket.0, "decoder reported zero pages");
                inner.buffer = None;
                self.publish(IngestionState::Failed(FailureReason::DecodeFailure));
            }
            Err(err) => {
                warn!(ticket = ticket.0, error = %err, "decode failed");
                inner.buffer = None;
                self.publish(IngestionState::Failed(FailureReason::DecodeFailure));
            }
        }
        true
    }
}

/// The asynchronous half of an accepted submission: read the bytes, decode
/// them, and apply the result if nothing has superseded it meanwhile.
#[must_use = "the controller stays in Decoding until this is run"]
pub struct PendingDecode {
    controller: IngestionController,
    ticket: Ticket,
    file: CandidateFile,
}

impl PendingDecode {
    pub fn ticket(&self) -> Ticket {
        self.ticket
    }

    /// Drive the decode. Returns `true` if the outcome was applied, `false`
    /// if a newer submission or a clear made it stale.
    pub async fn run(self) -> bool {
        let Self {
            controller,
            ticket,
            file,
        } = self;

        if !controller.is_current(ticket) {
            debug!(ticket = ticket.0, "submission superseded before decoding");
            return false;
        }

        let outcome = controller.read_and_decode(&file).await;
        controller.finish(ticket, file, outcome)
    }
}
