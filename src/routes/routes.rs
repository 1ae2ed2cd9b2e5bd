use actix_web::web;

use crate::handlers::health_handlers::health_check;
use crate::handlers::report_handlers::view_logs;
use crate::handlers::visit_handlers::{check_assignment, log_visit};

/// Configure the routes
pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/log", web::post().to(log_visit))
        .route("/check-assignment", web::get().to(check_assignment))
        .route("/logs", web::get().to(view_logs))
        .route("/health", web::get().to(health_check));
}
