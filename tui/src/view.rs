//! Observer side of the controller: what the screen needs to repaint.

use std::mem;

use cubist_core::{EditorObserver, Selection};
use cubist_types::{Cubie, ParityReport};
use tracing::warn;

#[derive(Debug, Default)]
pub struct ViewModel {
    parity: ParityReport,
    selection: Selection,
    dirty: bool,
}

impl ViewModel {
    #[must_use]
    pub fn parity(&self) -> ParityReport {
        self.parity
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// True once after any update since the last call.
    pub fn take_dirty(&mut self) -> bool {
        mem::take(&mut self.dirty)
    }
}

impl EditorObserver for ViewModel {
    fn parity_changed(&mut self, report: ParityReport) {
        if !report.is_consistent() && self.parity.is_consistent() {
            warn!(parity = %report, "Parity check flagged the current state");
        }
        self.parity = report;
        self.dirty = true;
    }

    fn selection_changed(&mut self, selection: Selection) {
        self.selection = selection;
        self.dirty = true;
    }

    fn stickers_changed(&mut self, _cubie: Cubie, _stickers: &str) {
        self.dirty = true;
    }
}
