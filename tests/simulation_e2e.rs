use actix_web::{test, web, App};
use pelouse::api::routes::configure;

fn build_app() -> actix_web::App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .configure(configure)
        .app_data(
            web::JsonConfig::default().error_handler(|err, _req| {
                let message = format!("{err}");
                actix_web::error::InternalError::from_response(
                    err,
                    actix_web::HttpResponse::BadRequest()
                        .json(serde_json::json!({ "error": message })),
                )
                .into()
            }),
        )
}

fn simulation_request(program: &str) -> test::TestRequest {
    test::TestRequest::post()
        .uri("/api/simulation")
        .set_json(serde_json::json!({ "program": program }))
}

// ---------------------------------------------------------------------------
// Scenario 1: one mower per column, each driving straight to the top.
// The whole lawn ends up mown.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_five_mowers_mow_the_whole_lawn() {
    let app = test::init_service(build_app()).await;
    let program = "55\n00 N\nFFFFF\n10 N\nFFFFF\n20 N\nFFFFF\n30 N\nFFFFF\n40 N\nFFFFF";
    let body: serde_json::Value =
        test::call_and_read_body_json(&app, simulation_request(program).to_request()).await;

    assert_eq!(body["mownCount"], 25, "Every cell must be mown");

    let mowers = body["mowers"].as_array().expect("mowers array");
    assert_eq!(mowers.len(), 5);
    for (index, mower) in mowers.iter().enumerate() {
        assert_eq!(mower["id"], index + 1);
        assert_eq!(mower["x"], index, "Mower {} must stay in its column", index + 1);
        assert_eq!(mower["y"], 4, "Mower {} must reach the top row", index + 1);
        assert_eq!(mower["direction"], "N");
    }

    for row in body["lawn"].as_array().expect("lawn rows") {
        for cell in row.as_array().expect("lawn cells") {
            assert_eq!(cell["isMown"], true, "No tall grass may remain");
        }
    }
}

// ---------------------------------------------------------------------------
// Scenario 2: forward into the fence is absorbed: pose unchanged, no
// extra cell mown, and the step carries no mowed coordinate.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_fence_absorbs_forward_moves() {
    let app = test::init_service(build_app()).await;
    let body: serde_json::Value =
        test::call_and_read_body_json(&app, simulation_request("55\n44 N\nFFF").to_request()).await;

    assert_eq!(body["mowers"][0]["x"], 4);
    assert_eq!(body["mowers"][0]["y"], 4);
    assert_eq!(body["mowers"][0]["direction"], "N");
    assert_eq!(body["mownCount"], 1, "Only the starting cell is mown");

    for step in body["steps"].as_array().expect("steps array") {
        assert!(
            step.get("mowed").is_none(),
            "An absorbed move must not report a mowed cell: {step}"
        );
    }
}

// ---------------------------------------------------------------------------
// Scenario 3: turning in place. Four left turns close the cycle and mow
// nothing beyond the starting cell.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_turning_in_place_mows_only_the_start() {
    let app = test::init_service(build_app()).await;
    let body: serde_json::Value =
        test::call_and_read_body_json(&app, simulation_request("55\n22 N\nLLLL").to_request()).await;

    assert_eq!(body["mowers"][0]["x"], 2);
    assert_eq!(body["mowers"][0]["y"], 2);
    assert_eq!(body["mowers"][0]["direction"], "N", "Four lefts return to north");
    assert_eq!(body["mownCount"], 1);
    assert_eq!(body["steps"].as_array().map(|s| s.len()), Some(4));
}

// ---------------------------------------------------------------------------
// Scenario 4: the compact and expanded position forms describe the same
// mower and must replay identically.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_compact_and_expanded_forms_replay_identically() {
    let app = test::init_service(build_app()).await;
    let compact: serde_json::Value =
        test::call_and_read_body_json(&app, simulation_request("55\n12 E\nFFRF").to_request()).await;
    let expanded: serde_json::Value =
        test::call_and_read_body_json(&app, simulation_request("55\n1 2 E\nFFRF").to_request()).await;
    assert_eq!(compact, expanded);
}

// ---------------------------------------------------------------------------
// Scenario 5: identical program text always yields an identical response
// body: the replay is deterministic end to end.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_replay_is_deterministic() {
    let app = test::init_service(build_app()).await;
    let program = "55\n12 N\nLFLFLFLFF\n33 E\nFFRFFRFRRF";
    let first: serde_json::Value =
        test::call_and_read_body_json(&app, simulation_request(program).to_request()).await;
    let second: serde_json::Value =
        test::call_and_read_body_json(&app, simulation_request(program).to_request()).await;
    assert_eq!(first, second);
}

// ---------------------------------------------------------------------------
// Scenario 6: two mowers replay strictly one after the other, and the
// response preserves program order.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_mowers_replay_in_program_order() {
    let app = test::init_service(build_app()).await;
    let body: serde_json::Value =
        test::call_and_read_body_json(&app, simulation_request("55\n00 N\nFF\n44 S\nFF").to_request()).await;

    let steps = body["steps"].as_array().expect("steps array");
    let owners: Vec<u64> = steps.iter().map(|s| s["mower"].as_u64().unwrap()).collect();
    assert_eq!(owners, vec![1, 1, 2, 2], "Mower 1 must finish before mower 2 starts");

    assert_eq!(body["mowers"][0]["id"], 1);
    assert_eq!(body["mowers"][0]["y"], 2);
    assert_eq!(body["mowers"][1]["id"], 2);
    assert_eq!(body["mowers"][1]["y"], 2);
}

// ---------------------------------------------------------------------------
// Scenario 7: a committed forward reports the cell it mowed, so a client
// can animate the grass disappearing step by step.
// ---------------------------------------------------------------------------
#[actix_web::test]
async fn scenario_steps_carry_mowed_cells_for_animation() {
    let app = test::init_service(build_app()).await;
    let body: serde_json::Value =
        test::call_and_read_body_json(&app, simulation_request("55\n00 N\nFF").to_request()).await;

    let steps = body["steps"].as_array().expect("steps array");
    assert_eq!(steps[0]["mowed"]["x"], 0);
    assert_eq!(steps[0]["mowed"]["y"], 1);
    assert_eq!(steps[1]["mowed"]["x"], 0);
    assert_eq!(steps[1]["mowed"]["y"], 2);
    assert_eq!(steps[0]["pose"]["direction"], "N");
}
