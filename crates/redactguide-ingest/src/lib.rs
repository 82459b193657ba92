// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// redactguide-ingest — Document ingestion for RedactGuide.
//
// A user-supplied file is validated, read, decoded and surfaced as metadata.
// `IngestionController` owns the single ingestion state and is the only
// writer; presentation shells subscribe to it and call its commands.

pub mod controller;
pub mod validator;

pub use controller::{IngestionController, PendingDecode, Ticket};
pub use validator::{FileValidator, validate};
