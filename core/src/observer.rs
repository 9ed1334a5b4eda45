//! Selection state and the observer hooks the controller drives.

use cubist_types::{Cubie, ParityReport};

/// How a selected cubie is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    /// Open for edits.
    Editable,
    /// Fixed or already confirmed; drawn dimmer and all controls disabled.
    Locked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected { cubie: Cubie, locked: bool },
}

impl Selection {
    #[must_use]
    pub fn cubie(self) -> Option<Cubie> {
        match self {
            Selection::Idle => None,
            Selection::Selected { cubie, .. } => Some(cubie),
        }
    }

    #[must_use]
    pub fn highlight(self) -> Option<(Cubie, Highlight)> {
        match self {
            Selection::Idle => None,
            Selection::Selected { cubie, locked } => {
                let highlight = if locked {
                    Highlight::Locked
                } else {
                    Highlight::Editable
                };
                Some((cubie, highlight))
            }
        }
    }
}

/// Receives updates from the controller. Every hook defaults to a no-op.
///
/// Render surfaces use this to repaint cubies and the selection box; status
/// displays use it to show the parity line.
pub trait EditorObserver {
    fn parity_changed(&mut self, _report: ParityReport) {}

    fn selection_changed(&mut self, _selection: Selection) {}

    fn stickers_changed(&mut self, _cubie: Cubie, _stickers: &str) {}
}

impl EditorObserver for () {}
