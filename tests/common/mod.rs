//! Shared test utilities and fixtures
//!
//! Test doubles for the controller's collaborators and name lookups.

#![allow(dead_code)]

use std::cell::Cell;

use cubist_core::{AssignmentController, EditorObserver, ParityOracle, Selection};
use cubist_types::{AnswerState, CONCAT_LEN, Cubie, ParityReport, Position, StateVector};

pub fn cubie(name: &str) -> Cubie {
    Cubie::from_name(name).unwrap_or_else(|| panic!("unknown cubie {name:?}"))
}

pub fn pos(name: &str) -> Position {
    Position::from_name(name).unwrap_or_else(|| panic!("unknown position {name:?}"))
}

/// Flags every empty slot as an edge residue and counts how often it ran.
#[derive(Debug, Default)]
pub struct EmptySlotParity {
    pub runs: Cell<usize>,
}

impl ParityOracle for EmptySlotParity {
    fn edge_parity(&self, state: &[i32; CONCAT_LEN]) -> i32 {
        self.runs.set(self.runs.get() + 1);
        state[..20].iter().filter(|v| **v < 0).count() as i32
    }

    fn corner_parity(&self, _state: &[i32; CONCAT_LEN]) -> i32 {
        0
    }

    fn permutation_parity(&self, _state: &[i32; CONCAT_LEN]) -> i32 {
        0
    }
}

/// Remembers every hook call in order.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    pub parity: Vec<ParityReport>,
    pub selections: Vec<Selection>,
    pub stickers: Vec<(Cubie, String)>,
}

impl EditorObserver for RecordingObserver {
    fn parity_changed(&mut self, report: ParityReport) {
        self.parity.push(report);
    }

    fn selection_changed(&mut self, selection: Selection) {
        self.selections.push(selection);
    }

    fn stickers_changed(&mut self, cubie: Cubie, stickers: &str) {
        self.stickers.push((cubie, stickers.to_string()));
    }
}

pub type TestController = AssignmentController<EmptySlotParity, RecordingObserver>;

pub fn controller() -> TestController {
    controller_with_answer(AnswerState::identity())
}

pub fn controller_with_answer(answer: AnswerState) -> TestController {
    AssignmentController::new(
        answer,
        EmptySlotParity::default(),
        RecordingObserver::default(),
    )
}

/// Checks the state-vector invariants from the outside.
pub fn assert_well_formed(state: &StateVector) {
    let mut seen = Vec::new();
    for slot in Position::all() {
        if let Some(piece) = state.slot(slot).piece() {
            assert_eq!(piece.category(), slot.category(), "{piece} in {slot}");
            assert!(!seen.contains(&piece), "{piece} appears twice");
            seen.push(piece);
        }
        assert!(state.orientation_at(slot) < slot.category().rotations());
    }
}
