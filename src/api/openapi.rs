use utoipa::OpenApi;

use crate::models::{
    lawn::LawnCell,
    mower::{Direction, Instruction, Pose},
    program::GridSize,
    request::{
        ErrorResponse, MowerReport, SimulationRequest, SimulationResponse, StepReport,
        ValidationResponse,
    },
    Coordinate,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Pelouse API",
        description = "Lawn-mowing simulator: validate a plain-text mowing program and replay it deterministically into final poses, a per-step movement trace and mown-cell state, ready for a client to animate at its own pace.",
        version = "1.0.0",
        license(name = "MIT"),
    ),
    paths(
        crate::api::handlers::get_health,
        crate::api::handlers::validate_program,
        crate::api::handlers::post_simulation,
    ),
    components(
        schemas(
            // Enums
            Direction, Instruction,
            // Core
            Coordinate, GridSize, Pose, LawnCell,
            // Requests & responses
            SimulationRequest, ValidationResponse, MowerReport, StepReport,
            SimulationResponse, ErrorResponse,
        )
    ),
    tags(
        (name = "program",    description = "Program validation: parse and report lawn size and mower count"),
        (name = "simulation", description = "Simulation: replay a program into final poses and mown cells"),
        (name = "health",     description = "Service liveness"),
    )
)]
pub struct ApiDoc;
