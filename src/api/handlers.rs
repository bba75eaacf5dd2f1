use actix_web::{get, post, web, HttpResponse, Responder};
use chrono::Utc;
use log::{info, warn};

use crate::{
    logic::{parser::parse, simulator::run},
    models::request::{
        ErrorResponse, MowerReport, SimulationRequest, SimulationResponse, StepReport,
        ValidationResponse,
    },
};

/// GET /api/health
/// Liveness probe.
#[utoipa::path(
    context_path = "/api",
    tag = "health",
    responses((status = 200, description = "Service is up"))
)]
#[get("/health")]
pub async fn get_health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "time": Utc::now(),
    }))
}

/// POST /api/program/validate
/// Parses a program without running it and reports what was found.
#[utoipa::path(
    context_path = "/api",
    tag = "program",
    request_body = SimulationRequest,
    responses(
        (status = 200, description = "Program accepted", body = ValidationResponse),
        (status = 400, description = "Program rejected", body = ErrorResponse),
    )
)]
#[post("/program/validate")]
pub async fn validate_program(body: web::Json<SimulationRequest>) -> impl Responder {
    match parse(&body.program) {
        Ok(program) => {
            info!(
                "program accepted: {}x{} lawn, {} mower(s)",
                program.grid.width,
                program.grid.height,
                program.mowers.len()
            );
            HttpResponse::Ok().json(ValidationResponse {
                grid_size: program.grid,
                mower_count: program.mowers.len(),
            })
        }
        Err(e) => {
            warn!("program rejected: {e}");
            HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            })
        }
    }
}

/// POST /api/simulation
/// Parses a program and replays it to completion.
#[utoipa::path(
    context_path = "/api",
    tag = "simulation",
    request_body = SimulationRequest,
    responses(
        (status = 200, description = "Full replay of the program", body = SimulationResponse),
        (status = 400, description = "Program rejected", body = ErrorResponse),
    )
)]
#[post("/simulation")]
pub async fn post_simulation(body: web::Json<SimulationRequest>) -> impl Responder {
    let program = match parse(&body.program) {
        Ok(program) => program,
        Err(e) => {
            warn!("program rejected: {e}");
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: e.to_string(),
            });
        }
    };

    let outcome = run(&program);

    let mowers: Vec<MowerReport> = outcome
        .mowers
        .iter()
        .enumerate()
        .map(|(index, pose)| MowerReport {
            id: index + 1,
            pose: *pose,
        })
        .collect();
    for report in &mowers {
        info!(
            "mower {} finished at [{}, {}] facing {}",
            report.id, report.pose.x, report.pose.y, report.pose.direction
        );
    }

    let steps: Vec<StepReport> = outcome
        .steps
        .iter()
        .map(|step| StepReport {
            mower: step.mower + 1,
            instruction: step.instruction,
            pose: step.pose,
            mowed: step.mowed,
        })
        .collect();

    let mown_count = outcome.lawn.mown_count();
    info!(
        "mowing finished: {mown_count}/{} cell(s) mown in {} step(s)",
        outcome.lawn.width * outcome.lawn.height,
        steps.len()
    );

    HttpResponse::Ok().json(SimulationResponse {
        grid_size: program.grid,
        mowers,
        steps,
        lawn: outcome.lawn.cells,
        mown_count,
    })
}
