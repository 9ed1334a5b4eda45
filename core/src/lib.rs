//! Editing logic for cubist.
//!
//! The [`AssignmentController`] owns the live state vector and stickers and
//! is the only thing that mutates them. Parity checking and persistence sit
//! behind traits so front ends can plug in their own.

mod controller;
mod locking;
mod observer;
mod oracle;
mod persist;

pub use controller::{AssignmentController, Candidate, EditError, PickerView};
pub use locking::{is_locked, slot_confirmed};
pub use observer::{EditorObserver, Highlight, Selection};
pub use oracle::{NeutralParity, ParityOracle};
pub use persist::{
    KeyValueStore, ORIENTATION_KEY, PERMUTATION_KEY, PersistError, PersistenceGateway, SavedState,
    StoreError,
};
