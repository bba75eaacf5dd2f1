use actix_web::web;

use crate::api::handlers::{get_health, post_simulation, validate_program};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(get_health)
            .service(validate_program)
            .service(post_simulation),
    );
}
