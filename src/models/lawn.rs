use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::program::GridSize;
use crate::models::{Coordinate, Matrix};

/// One parcel of the lawn. Identity is the (x, y) pair; `is_mown` only
/// ever transitions false→true during a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LawnCell {
    pub x: usize,
    pub y: usize,
    pub is_mown: bool,
}

/// The lawn as a single mutable grid, exclusively owned by the running
/// simulation. `cells[y][x]` holds the cell at (x, y); row 0 is the
/// bottom of the lawn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LawnGrid {
    pub width: usize,
    pub height: usize,
    pub cells: Matrix<LawnCell>,
}

impl LawnGrid {
    /// Builds a lawn of the given size with every cell unmown (tall grass).
    pub fn new(size: GridSize) -> Self {
        let cells = (0..size.height)
            .map(|y| {
                (0..size.width)
                    .map(|x| LawnCell {
                        x,
                        y,
                        is_mown: false,
                    })
                    .collect()
            })
            .collect();
        Self {
            width: size.width,
            height: size.height,
            cells,
        }
    }

    /// Marks (x, y) as mown. Returns true if the cell was still unmown.
    /// Out-of-range coordinates are ignored.
    pub fn mow(&mut self, x: usize, y: usize) -> bool {
        match self.cells.get_mut(y).and_then(|row| row.get_mut(x)) {
            Some(cell) if !cell.is_mown => {
                cell.is_mown = true;
                true
            }
            _ => false,
        }
    }

    pub fn is_mown(&self, x: usize, y: usize) -> bool {
        self.cells
            .get(y)
            .and_then(|row| row.get(x))
            .map(|cell| cell.is_mown)
            .unwrap_or(false)
    }

    /// Number of mown cells.
    pub fn mown_count(&self) -> usize {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_mown)
            .count()
    }

    /// All mown cells, bottom-left to top-right.
    pub fn mown_cells(&self) -> Vec<Coordinate> {
        self.cells
            .iter()
            .flat_map(|row| row.iter())
            .filter(|cell| cell.is_mown)
            .map(|cell| Coordinate {
                x: cell.x,
                y: cell.y,
            })
            .collect()
    }
}
