use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use utoipa::ToSchema;

use crate::models::{
    lawn::LawnCell,
    mower::{Instruction, Pose},
    program::GridSize,
    Coordinate, Matrix,
};

/// Body of the validate and simulate endpoints: the raw program text,
/// exactly as read from an instruction file or typed into a text box.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulationRequest {
    /// Grid line, then one position line + one instruction line per mower.
    pub program: String,
}

/// Outcome of validating a program without running it: the lawn
/// dimensions and how many mowers were found.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub grid_size: GridSize,
    pub mower_count: usize,
}

/// Final pose of one mower. Ids are 1-based, in program order.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MowerReport {
    pub id: usize,
    #[serde(flatten)]
    pub pose: Pose,
}

/// One applied instruction of the replay. `mowed` is present only when a
/// forward move committed and marked its destination cell.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StepReport {
    /// 1-based id of the mower the step belongs to.
    pub mower: usize,
    pub instruction: Instruction,
    /// Pose after the instruction was applied.
    pub pose: Pose,
    pub mowed: Option<Coordinate>,
}

/// Full deterministic replay of a program: identical program text always
/// yields an identical response body.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResponse {
    pub grid_size: GridSize,
    pub mowers: Vec<MowerReport>,
    pub steps: Vec<StepReport>,
    /// Lawn state after the run, `lawn[y][x]`, row 0 at the bottom.
    pub lawn: Matrix<LawnCell>,
    pub mown_count: usize,
}

/// Error envelope shared by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
