//! Parity residues reported for a state.

use std::fmt;

/// The three residues a parity checker reports.
///
/// All zero means the configuration is physically reachable. Anything else
/// is still a valid editing state, just one that cannot be solved as is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ParityReport {
    pub edge: i32,
    pub corner: i32,
    pub permutation: i32,
}

impl ParityReport {
    #[must_use]
    pub const fn new(edge: i32, corner: i32, permutation: i32) -> Self {
        Self {
            edge,
            corner,
            permutation,
        }
    }

    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        self.edge == 0 && self.corner == 0 && self.permutation == 0
    }
}

impl fmt::Display for ParityReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "EP: {}, CP: {}, PP: {}",
            self.edge, self.corner, self.permutation
        )
    }
}
