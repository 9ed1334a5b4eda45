//! Position catalog: the 20 trackable slots of a 3x3x3 cube.
//!
//! Index order is fixed and shared with the persisted permutation and
//! orientation vectors, so it must never change.

use std::fmt;

/// Number of trackable positions (12 edges followed by 8 corners).
pub const POSITION_COUNT: usize = 20;

/// Number of edge positions. Indices below this are edges.
pub const EDGE_COUNT: usize = 12;

/// Number of corner positions.
pub const CORNER_COUNT: usize = POSITION_COUNT - EDGE_COUNT;

const POSITION_NAMES: [&str; POSITION_COUNT] = [
    "UF", "UR", "UB", "UL", "DF", "DR", "DB", "DL", "FR", "FL", "BR", "BL", "UFR", "URB", "UBL",
    "ULF", "DRF", "DFL", "DLB", "DBR",
];

const EDGE_PICKER_ORDER: [Position; EDGE_COUNT] = [
    Position(2),
    Position(3),
    Position(6),
    Position(7),
    Position(11),
    Position(9),
    Position(0),
    Position(1),
    Position(4),
    Position(5),
    Position(10),
    Position(8),
];

const CORNER_PICKER_ORDER: [Position; CORNER_COUNT] = [
    Position(14),
    Position(15),
    Position(12),
    Position(13),
    Position(18),
    Position(17),
    Position(16),
    Position(19),
];

/// Piece category. Determines how many rotation states a slot has and
/// which pieces may occupy it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Edge,
    Corner,
}

impl Category {
    /// Number of distinct orientations (2 for edges, 3 for corners).
    #[must_use]
    pub const fn rotations(self) -> u8 {
        match self {
            Category::Edge => 2,
            Category::Corner => 3,
        }
    }

    /// Every piece of this category, in the order a picker lists them.
    #[must_use]
    pub fn picker_order(self) -> &'static [Position] {
        match self {
            Category::Edge => &EDGE_PICKER_ORDER,
            Category::Corner => &CORNER_PICKER_ORDER,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Edge => "edge",
            Category::Corner => "corner",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trackable slot, and equally the identity of the piece that belongs there
/// when solved.
///
/// Holding a `Position` proves the index is in `0..POSITION_COUNT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position(u8);

impl Position {
    /// Look up a position by catalog index.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < POSITION_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Look up a position by its canonical face-letter name.
    ///
    /// Centers (`"U"`, `"F"`, ...) and the hidden core (`""`) are not tracked
    /// and yield `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        POSITION_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(Self::from_index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        POSITION_NAMES[self.0 as usize]
    }

    #[must_use]
    pub const fn category(self) -> Category {
        if (self.0 as usize) < EDGE_COUNT {
            Category::Edge
        } else {
            Category::Corner
        }
    }

    /// All positions in catalog order.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..POSITION_COUNT as u8).map(Self)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Catalog index of a named position, or `None` for untracked names.
#[must_use]
pub fn index(name: &str) -> Option<usize> {
    Position::from_name(name).map(Position::index)
}

/// Name at a catalog index.
#[must_use]
pub fn name_at(index: usize) -> Option<&'static str> {
    Position::from_index(index).map(Position::name)
}
