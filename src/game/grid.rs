use serde::{Deserialize, Serialize};

use super::action::Direction;

/// A cell on the game grid
///
/// Coordinates are signed so a head that has just stepped off the board
/// (x == -1 for instance) is still representable until the tick resets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Pixel-space rectangle covered by a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// Fixed board geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cols: u32,
    rows: u32,
    cell_size: u32,
}

impl Grid {
    pub fn new(cols: u32, rows: u32, cell_size: u32) -> Self {
        Self {
            cols,
            rows,
            cell_size,
        }
    }

    pub fn cols(&self) -> u32 {
        self.cols
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Board width in pixels
    pub fn width_px(&self) -> u32 {
        self.cols.saturating_mul(self.cell_size)
    }

    /// Board height in pixels
    pub fn height_px(&self) -> u32 {
        self.rows.saturating_mul(self.cell_size)
    }

    /// Check if a cell is within the grid bounds
    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.x >= 0
            && i64::from(cell.x) < i64::from(self.cols)
            && cell.y >= 0
            && i64::from(cell.y) < i64::from(self.rows)
    }

    /// Pixel rectangle with its top-left corner at the cell's origin
    pub fn cell_to_pixel(&self, cell: Cell) -> PixelRect {
        let size = i32::try_from(self.cell_size).unwrap_or(i32::MAX);
        PixelRect {
            x: cell.x.saturating_mul(size),
            y: cell.y.saturating_mul(size),
            width: self.cell_size,
            height: self.cell_size,
        }
    }

    /// Every cell of the grid in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        let rows = i32::try_from(self.rows).unwrap_or(i32::MAX);
        let cols = i32::try_from(self.cols).unwrap_or(i32::MAX);
        (0..rows).flat_map(move |y| (0..cols).map(move |x| Cell::new(x, y)))
    }
}
