//! Floor plan parsing from newline-separated rows of characters

use crate::io::configuration::FREE_CELL;
use ndarray::Array2;

/// Contents of a single grid position
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    /// Tileable position, written as a space in the input
    Free,
    /// Wall or any other blocked position; never receives a domino half
    Obstacle,
}

/// Rectangular floor plan decoded from row-separated text
///
/// Width is fixed by the first row. Ragged input is a documented limitation
/// of the format rather than a detected error: rows shorter than the first
/// are padded with obstacles, and characters beyond the first row's width
/// are ignored.
#[derive(Clone, Debug)]
pub struct FloorPlan {
    cells: Array2<Cell>,
}

impl FloorPlan {
    /// Decode a floor plan from text, one row per line
    ///
    /// Spaces are free cells; every other character, including the newline
    /// separator itself, blocks its position. Parsing never fails: text with
    /// no free cells simply yields a plan with nothing to tile.
    pub fn parse(floor: &str) -> Self {
        let width = floor.lines().next().map_or(0, |row| row.chars().count());
        let height = floor.lines().count();

        let mut cells = Array2::from_elem((height, width), Cell::Obstacle);
        for (row, line) in floor.lines().enumerate() {
            for (col, character) in line.chars().take(width).enumerate() {
                if character == FREE_CELL {
                    if let Some(cell) = cells.get_mut([row, col]) {
                        *cell = Cell::Free;
                    }
                }
            }
        }

        Self { cells }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns, fixed by the first input row
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Whether the position holds a free, tileable cell
    ///
    /// Out-of-bounds positions read as obstacles, which keeps neighbor
    /// probing at the grid edge branch-free for callers.
    pub fn is_free(&self, row: usize, col: usize) -> bool {
        self.cells.get([row, col]) == Some(&Cell::Free)
    }

    /// Iterate over the coordinates of every free cell in row-major order
    pub fn free_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| **cell == Cell::Free)
            .map(|(position, _)| position)
    }
}
