//! The 27-cell layout of a 3x3x3 cube.
//!
//! Cell `(i, j, k)` sits at coordinates `(i - 1, j - 1, k - 1)` with x running
//! L to R, y running D to U and z running B to F.

use std::fmt;

use crate::catalog::{Category, Position};

pub const CUBIE_COUNT: usize = 27;

const CUBIE_NAMES: [&str; CUBIE_COUNT] = [
    "DLB", "DL", "DFL", "BL", "L", "FL", "UBL", "UL", "ULF", //
    "DB", "D", "DF", "B", "", "F", "UB", "U", "UF", //
    "DBR", "DR", "DRF", "BR", "R", "FR", "URB", "UR", "UFR",
];

/// One face of the cube, identified by its letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Face {
    U,
    D,
    F,
    B,
    L,
    R,
}

impl Face {
    #[must_use]
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            _ => None,
        }
    }

    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    #[must_use]
    pub fn all() -> &'static [Face] {
        &[Face::U, Face::D, Face::F, Face::B, Face::L, Face::R]
    }
}

/// What occupies a layout cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubieKind {
    /// The hidden center of the cube. Never visible.
    Core,
    /// A face center. Fixed in place.
    Center(Face),
    /// An edge or corner slot from the position catalog.
    Tracked(Position),
}

/// A cell of the 3x3x3 layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cubie(u8);

impl Cubie {
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < CUBIE_COUNT {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        CUBIE_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(Self::from_index)
    }

    /// Cell at the given coordinates, each in `-1..=1`.
    #[must_use]
    pub fn at(x: i8, y: i8, z: i8) -> Option<Self> {
        let axis = |v: i8| -> Option<usize> {
            if (-1..=1).contains(&v) {
                Some((v + 1) as usize)
            } else {
                None
            }
        };
        let (i, j, k) = (axis(x)?, axis(y)?, axis(z)?);
        Self::from_index(i * 9 + j * 3 + k)
    }

    /// The layout cell that holds a tracked position.
    #[must_use]
    pub fn of_position(position: Position) -> Self {
        Self::from_name(position.name()).unwrap_or(Self::core())
    }

    #[must_use]
    pub const fn core() -> Self {
        Self(13)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        CUBIE_NAMES[self.0 as usize]
    }

    /// `(x, y, z)` coordinates, each in `-1..=1`.
    #[must_use]
    pub const fn coords(self) -> (i8, i8, i8) {
        let i = self.0 / 9;
        let j = (self.0 / 3) % 3;
        let k = self.0 % 3;
        (i as i8 - 1, j as i8 - 1, k as i8 - 1)
    }

    #[must_use]
    pub fn kind(self) -> CubieKind {
        let name = self.name();
        if name.is_empty() {
            return CubieKind::Core;
        }
        if let Some(position) = Position::from_name(name) {
            return CubieKind::Tracked(position);
        }
        name.chars()
            .next()
            .and_then(Face::from_letter)
            .map_or(CubieKind::Core, CubieKind::Center)
    }

    /// The catalog slot for this cell, if it is tracked.
    #[must_use]
    pub fn position(self) -> Option<Position> {
        match self.kind() {
            CubieKind::Tracked(position) => Some(position),
            CubieKind::Core | CubieKind::Center(_) => None,
        }
    }

    #[must_use]
    pub fn category(self) -> Option<Category> {
        self.position().map(Position::category)
    }

    /// Every cell, in layout order.
    pub fn all() -> impl Iterator<Item = Cubie> {
        (0..CUBIE_COUNT as u8).map(Self)
    }

    /// Every cell that can be seen from outside (all but the core).
    pub fn visible() -> impl Iterator<Item = Cubie> {
        Self::all().filter(|cubie| cubie.kind() != CubieKind::Core)
    }
}

impl fmt::Display for Cubie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind() {
            CubieKind::Core => f.write_str("core"),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CUBIE_COUNT, Cubie, CubieKind, Face};
    use crate::catalog::{POSITION_COUNT, Position};

    #[test]
    fn coordinates_match_names() {
        for cubie in Cubie::all() {
            let (x, y, z) = cubie.coords();
            let name = cubie.name();
            assert_eq!(name.contains('L'), x == -1, "{name}");
            assert_eq!(name.contains('R'), x == 1, "{name}");
            assert_eq!(name.contains('D'), y == -1, "{name}");
            assert_eq!(name.contains('U'), y == 1, "{name}");
            assert_eq!(name.contains('B'), z == -1, "{name}");
            assert_eq!(name.contains('F'), z == 1, "{name}");
            assert_eq!(Cubie::at(x, y, z), Some(cubie));
        }
    }

    #[test]
    fn every_position_has_a_cell() {
        let tracked: Vec<Position> = Cubie::all().filter_map(Cubie::position).collect();
        assert_eq!(tracked.len(), POSITION_COUNT);
        for position in Position::all() {
            assert_eq!(Cubie::of_position(position).position(), Some(position));
        }
    }

    #[test]
    fn kinds() {
        assert_eq!(Cubie::core().kind(), CubieKind::Core);
        assert_eq!(Cubie::from_name("U").unwrap().kind(), CubieKind::Center(Face::U));
        assert!(matches!(
            Cubie::from_name("UFR").unwrap().kind(),
            CubieKind::Tracked(p) if p.index() == 12
        ));
        assert_eq!(Cubie::visible().count(), CUBIE_COUNT - 1);
    }

    #[test]
    fn out_of_range_coordinates() {
        assert_eq!(Cubie::at(2, 0, 0), None);
        assert_eq!(Cubie::at(0, -2, 0), None);
        assert_eq!(Cubie::at(0, 0, 0), Some(Cubie::core()));
    }
}
