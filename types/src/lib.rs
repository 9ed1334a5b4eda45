//! Core domain types for cubist.
//!
//! Pure data with no IO: the position catalog, the 27-cell layout, state
//! vectors and their invariants, sticker strings and parity reports. Every
//! other crate builds on these.

pub mod catalog;
pub mod layout;
mod parity;
pub mod state;
mod stickers;

pub use catalog::{CORNER_COUNT, Category, EDGE_COUNT, POSITION_COUNT, Position};
pub use layout::{CUBIE_COUNT, Cubie, CubieKind, Face};
pub use parity::ParityReport;
pub use state::{
    AnswerState, CONCAT_LEN, EMPTY_SLOT, RawStateVector, SlotValue, Snapshot, StateError,
    StateVector,
};
pub use stickers::{StickerError, Stickers};
