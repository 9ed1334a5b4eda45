//! Permutation and orientation state vectors.
//!
//! # Invariants
//!
//! - Both vectors hold exactly [`POSITION_COUNT`] entries (fixed-size arrays).
//! - `orientation[i] < rotations(category(i))`.
//! - No piece is assigned to more than one slot.
//!
//! Every constructor and mutator upholds these; there is no way to observe a
//! `StateVector` that violates them.
//!
//! # Raw form
//!
//! Persisted and handed to parity checkers as integer arrays, with `-1`
//! standing for an empty slot. Decoding validates every invariant.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{POSITION_COUNT, Position};

/// Raw integer that encodes [`SlotValue::Empty`].
pub const EMPTY_SLOT: i32 = -1;

/// Length of the concatenated `permutation ++ orientation` form.
pub const CONCAT_LEN: usize = POSITION_COUNT * 2;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("{field} must have {expected} entries (got {actual})")]
    WrongLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("slot {slot} holds unknown piece {value}")]
    PieceOutOfRange { slot: Position, value: i32 },
    #[error("slot {slot} has orientation {value}, expected 0..{rotations}")]
    OrientationOutOfRange {
        slot: Position,
        value: i32,
        rotations: u8,
    },
    #[error("piece {piece} is assigned to both {first} and {second}")]
    DuplicatePiece {
        piece: Position,
        first: Position,
        second: Position,
    },
}

/// Contents of one permutation slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SlotValue {
    #[default]
    Empty,
    Assigned(Position),
}

impl SlotValue {
    #[must_use]
    pub fn piece(self) -> Option<Position> {
        match self {
            SlotValue::Empty => None,
            SlotValue::Assigned(piece) => Some(piece),
        }
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        matches!(self, SlotValue::Empty)
    }

    #[must_use]
    pub fn to_raw(self) -> i32 {
        match self {
            SlotValue::Empty => EMPTY_SLOT,
            SlotValue::Assigned(piece) => piece.index() as i32,
        }
    }
}

/// Serialized shape of a [`StateVector`]: two JSON integer arrays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawStateVector {
    pub permutation: Vec<i32>,
    pub orientation: Vec<i32>,
}

/// Which piece sits in each slot and how it is turned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawStateVector", into = "RawStateVector")]
pub struct StateVector {
    permutation: [SlotValue; POSITION_COUNT],
    orientation: [u8; POSITION_COUNT],
}

impl StateVector {
    /// Every piece in its home slot with orientation 0.
    #[must_use]
    pub fn identity() -> Self {
        let mut permutation = [SlotValue::Empty; POSITION_COUNT];
        for position in Position::all() {
            permutation[position.index()] = SlotValue::Assigned(position);
        }
        Self {
            permutation,
            orientation: [0; POSITION_COUNT],
        }
    }

    /// Every slot empty.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            permutation: [SlotValue::Empty; POSITION_COUNT],
            orientation: [0; POSITION_COUNT],
        }
    }

    /// Decode and validate the raw integer form.
    pub fn from_raw(permutation: &[i32], orientation: &[i32]) -> Result<Self, StateError> {
        check_len("permutation", permutation.len())?;
        check_len("orientation", orientation.len())?;

        let mut state = Self::empty();
        let mut holders: [Option<Position>; POSITION_COUNT] = [None; POSITION_COUNT];

        for slot in Position::all() {
            let raw_piece = permutation[slot.index()];
            if raw_piece != EMPTY_SLOT {
                let piece = usize::try_from(raw_piece)
                    .ok()
                    .and_then(Position::from_index)
                    .ok_or(StateError::PieceOutOfRange {
                        slot,
                        value: raw_piece,
                    })?;
                if let Some(first) = holders[piece.index()] {
                    return Err(StateError::DuplicatePiece {
                        piece,
                        first,
                        second: slot,
                    });
                }
                holders[piece.index()] = Some(slot);
                state.permutation[slot.index()] = SlotValue::Assigned(piece);
            }

            let raw_orientation = orientation[slot.index()];
            let rotations = slot.category().rotations();
            state.orientation[slot.index()] = u8::try_from(raw_orientation)
                .ok()
                .filter(|value| *value < rotations)
                .ok_or(StateError::OrientationOutOfRange {
                    slot,
                    value: raw_orientation,
                    rotations,
                })?;
        }

        Ok(state)
    }

    /// Decode the 40-entry `permutation ++ orientation` form.
    pub fn from_concat(values: &[i32]) -> Result<Self, StateError> {
        if values.len() != CONCAT_LEN {
            return Err(StateError::WrongLength {
                field: "state",
                expected: CONCAT_LEN,
                actual: values.len(),
            });
        }
        let (permutation, orientation) = values.split_at(POSITION_COUNT);
        Self::from_raw(permutation, orientation)
    }

    #[must_use]
    pub fn to_raw(&self) -> RawStateVector {
        RawStateVector {
            permutation: self.permutation.iter().map(|slot| slot.to_raw()).collect(),
            orientation: self.orientation.iter().map(|&o| i32::from(o)).collect(),
        }
    }

    /// The 40-entry `permutation ++ orientation` form.
    #[must_use]
    pub fn concat(&self) -> [i32; CONCAT_LEN] {
        let mut out = [0; CONCAT_LEN];
        for (i, slot) in self.permutation.iter().enumerate() {
            out[i] = slot.to_raw();
        }
        for (i, &o) in self.orientation.iter().enumerate() {
            out[POSITION_COUNT + i] = i32::from(o);
        }
        out
    }

    #[must_use]
    pub fn permutation(&self) -> &[SlotValue; POSITION_COUNT] {
        &self.permutation
    }

    #[must_use]
    pub fn orientation(&self) -> &[u8; POSITION_COUNT] {
        &self.orientation
    }

    #[must_use]
    pub fn slot(&self, position: Position) -> SlotValue {
        self.permutation[position.index()]
    }

    #[must_use]
    pub fn orientation_at(&self, position: Position) -> u8 {
        self.orientation[position.index()]
    }

    /// The slot currently holding `piece`, if any.
    #[must_use]
    pub fn holder_of(&self, piece: Position) -> Option<Position> {
        Position::all().find(|slot| self.slot(*slot) == SlotValue::Assigned(piece))
    }

    #[must_use]
    pub fn is_active(&self, piece: Position) -> bool {
        self.holder_of(piece).is_some()
    }

    /// True when both vectors agree with `other` at `position`.
    #[must_use]
    pub fn matches_at(&self, other: &StateVector, position: Position) -> bool {
        self.slot(position) == other.slot(position)
            && self.orientation_at(position) == other.orientation_at(position)
    }

    /// Put `piece` into `slot` with orientation reset to 0.
    ///
    /// Fails without modifying anything if `piece` is already assigned
    /// to any slot, including `slot` itself.
    pub fn assign(&mut self, slot: Position, piece: Position) -> Result<(), StateError> {
        if let Some(first) = self.holder_of(piece) {
            return Err(StateError::DuplicatePiece {
                piece,
                first,
                second: slot,
            });
        }
        self.permutation[slot.index()] = SlotValue::Assigned(piece);
        self.orientation[slot.index()] = 0;
        Ok(())
    }

    /// Clear `slot`. The orientation entry is kept but carries no meaning
    /// until a piece is assigned again.
    pub fn erase(&mut self, slot: Position) {
        self.permutation[slot.index()] = SlotValue::Empty;
    }

    /// Step the orientation of `slot` back by one, wrapping within its
    /// category's range. Returns the new value.
    pub fn rotate(&mut self, slot: Position) -> u8 {
        let k = slot.category().rotations();
        let current = self.orientation[slot.index()];
        let next = (current + k - 1) % k;
        self.orientation[slot.index()] = next;
        next
    }
}

impl Default for StateVector {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<RawStateVector> for StateVector {
    type Error = StateError;

    fn try_from(raw: RawStateVector) -> Result<Self, Self::Error> {
        Self::from_raw(&raw.permutation, &raw.orientation)
    }
}

impl From<StateVector> for RawStateVector {
    fn from(state: StateVector) -> Self {
        state.to_raw()
    }
}

fn check_len(field: &'static str, actual: usize) -> Result<(), StateError> {
    if actual == POSITION_COUNT {
        Ok(())
    } else {
        Err(StateError::WrongLength {
            field,
            expected: POSITION_COUNT,
            actual,
        })
    }
}

/// The goal configuration. Fixed for the lifetime of an editing session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerState(StateVector);

impl AnswerState {
    #[must_use]
    pub fn new(state: StateVector) -> Self {
        Self(state)
    }

    /// The solved cube.
    #[must_use]
    pub fn identity() -> Self {
        Self(StateVector::identity())
    }

    pub fn from_concat(values: &[i32]) -> Result<Self, StateError> {
        StateVector::from_concat(values).map(Self)
    }

    #[must_use]
    pub fn state(&self) -> &StateVector {
        &self.0
    }
}

impl Default for AnswerState {
    fn default() -> Self {
        Self::identity()
    }
}

/// The state as it was last persisted.
///
/// Only the locking policy reads this; live edits never touch it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot(StateVector);

impl Snapshot {
    #[must_use]
    pub fn new(state: StateVector) -> Self {
        Self(state)
    }

    #[must_use]
    pub fn state(&self) -> &StateVector {
        &self.0
    }

    /// True when the persisted slot already matches the goal.
    #[must_use]
    pub fn confirms(&self, answer: &AnswerState, position: Position) -> bool {
        self.0.matches_at(answer.state(), position)
    }
}
