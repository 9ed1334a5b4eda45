//! Parity checking strategy.
//!
//! The controller never computes parity itself. It hands the concatenated
//! `permutation ++ orientation` vector to a [`ParityOracle`] after every
//! mutation and forwards the three residues to its observer.

use cubist_types::{CONCAT_LEN, ParityReport, StateVector};

pub trait ParityOracle {
    fn edge_parity(&self, state: &[i32; CONCAT_LEN]) -> i32;
    fn corner_parity(&self, state: &[i32; CONCAT_LEN]) -> i32;
    fn permutation_parity(&self, state: &[i32; CONCAT_LEN]) -> i32;

    /// Run all three checks against `state`.
    fn report(&self, state: &StateVector) -> ParityReport {
        let concat = state.concat();
        ParityReport::new(
            self.edge_parity(&concat),
            self.corner_parity(&concat),
            self.permutation_parity(&concat),
        )
    }
}

impl<T: ParityOracle + ?Sized> ParityOracle for Box<T> {
    fn edge_parity(&self, state: &[i32; CONCAT_LEN]) -> i32 {
        (**self).edge_parity(state)
    }

    fn corner_parity(&self, state: &[i32; CONCAT_LEN]) -> i32 {
        (**self).corner_parity(state)
    }

    fn permutation_parity(&self, state: &[i32; CONCAT_LEN]) -> i32 {
        (**self).permutation_parity(state)
    }
}

/// Reports every state as consistent.
///
/// Stands in when no checker is linked, so editing still works and the
/// parity line simply stays neutral.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeutralParity;

impl ParityOracle for NeutralParity {
    fn edge_parity(&self, _state: &[i32; CONCAT_LEN]) -> i32 {
        0
    }

    fn corner_parity(&self, _state: &[i32; CONCAT_LEN]) -> i32 {
        0
    }

    fn permutation_parity(&self, _state: &[i32; CONCAT_LEN]) -> i32 {
        0
    }
}
