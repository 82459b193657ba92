// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// UI-only state shared through context. Ingestion state lives in the
// controller, not here.

/// A problem with a picked file that happened before the controller saw it
/// (file vanished, no permission to read it).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickerNotice {
    pub message: Option<String>,
}

/// How deep a drag is inside the drop zone. Children fire their own
/// enter/leave pairs; only the outermost pair starts and ends the drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragDepth(u32);

impl DragDepth {
    /// Returns `true` when the drag has just entered the zone.
    pub fn enter(&mut self) -> bool {
        self.0 += 1;
        self.0 == 1
    }

    /// Returns `true` when the drag has just left the zone entirely.
    pub fn leave(&mut self) -> bool {
        if self.0 == 0 {
            return false;
        }
        self.0 -= 1;
        self.0 == 0
    }

    pub fn reset(&mut self) {
        self.0 = 0;
    }
}
