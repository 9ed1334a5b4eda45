//! Screen geometry of the three layer grids.
//!
//! The cube is drawn as three 3x3 grids side by side: the U layer, the
//! middle (E) layer and the D layer. Within a grid, rows run back to front
//! and columns left to right, so each grid reads as the layer seen from
//! above.

use ratatui::layout::Rect;

use cubist_types::{Cubie, CubieKind};

pub const CELL_WIDTH: u16 = 7;
pub const CELL_HEIGHT: u16 = 3;
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;
const GRID_GAP: u16 = 2;

pub const BOARD_WIDTH: u16 = GRID_WIDTH * 3 + GRID_GAP * 2;
pub const BOARD_HEIGHT: u16 = GRID_HEIGHT;

/// Layer titles, left to right.
pub const LAYER_TITLES: [&str; 3] = ["U layer", "E layer", "D layer"];

/// Where each grid sits on screen, anchored at the board's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    x: u16,
    y: u16,
}

impl BoardLayout {
    #[must_use]
    pub fn new(area: Rect) -> Self {
        Self {
            x: area.x,
            y: area.y,
        }
    }

    /// y coordinate of the cubies shown in grid `layer` (0 = leftmost).
    #[must_use]
    pub fn layer_y(layer: usize) -> i8 {
        1 - layer as i8
    }

    /// Grid index showing cubies at height `y`.
    #[must_use]
    pub fn layer_of(y: i8) -> usize {
        (1 - y) as usize
    }

    /// Outer rect of grid `layer`, border included.
    #[must_use]
    pub fn layer_rect(&self, layer: usize) -> Rect {
        Rect::new(
            self.x + layer as u16 * (GRID_WIDTH + GRID_GAP),
            self.y,
            GRID_WIDTH,
            GRID_HEIGHT,
        )
    }

    #[must_use]
    pub fn cell_rect(&self, cubie: Cubie) -> Rect {
        let (x, y, z) = cubie.coords();
        let grid = self.layer_rect(Self::layer_of(y));
        Rect::new(
            grid.x + 1 + (x + 1) as u16 * CELL_WIDTH,
            grid.y + 1 + (z + 1) as u16 * CELL_HEIGHT,
            CELL_WIDTH,
            CELL_HEIGHT,
        )
    }

    /// The visible cubie drawn at a terminal cell, if any.
    #[must_use]
    pub fn pick(&self, column: u16, row: u16) -> Option<Cubie> {
        (0..LAYER_TITLES.len()).find_map(|layer| {
            let grid = self.layer_rect(layer);
            let left = grid.x + 1;
            let top = grid.y + 1;
            if column < left || row < top {
                return None;
            }
            let col = (column - left) / CELL_WIDTH;
            let line = (row - top) / CELL_HEIGHT;
            if col > 2 || line > 2 {
                return None;
            }
            Cubie::at(col as i8 - 1, Self::layer_y(layer), line as i8 - 1)
                .filter(|cubie| cubie.kind() != CubieKind::Core)
        })
    }
}
