use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub mod lawn;
pub mod mower;
pub mod program;
pub mod request;

/// Convenience alias for a two-dimensional grid.
pub type Matrix<T> = Vec<Vec<T>>;

/// A zero-based (x, y) cell position within the lawn grid, (0, 0) being
/// the bottom-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Coordinate {
    pub x: usize,
    pub y: usize,
}
