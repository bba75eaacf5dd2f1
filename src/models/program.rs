use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::mower::Mower;

/// Dimensions of the lawn, fixed for the duration of one run. Both sides
/// are single digits on the wire, so 1..=9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GridSize {
    pub width: usize,
    pub height: usize,
}

impl GridSize {
    /// True when (x, y) lies within [0, width) × [0, height).
    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }
}

/// A fully validated mowing program: the lawn dimensions plus the mowers
/// in the order they appear in the source text. Invalid input never
/// produces a partial program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MowingProgram {
    pub grid: GridSize,
    pub mowers: Vec<Mower>,
}
