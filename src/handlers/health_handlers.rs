use actix_web::{HttpResponse, web};
use mongodb::bson::doc;

use crate::state::app_state::AppState;

pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    match &state.db {
        // Perform a simple ping operation to check the store connection
        Some(db) => match db.run_command(doc! { "ping": 1 }).await {
            Ok(_) => HttpResponse::Ok().json(serde_json::json!({ "success": true })),
            Err(_) => HttpResponse::InternalServerError().json(
                serde_json::json!({ "success": false, "error": "Store connection failed" }),
            ),
        },
        // No store configured is a valid (no-op) mode, not an outage.
        None => {
            HttpResponse::Ok().json(serde_json::json!({ "success": true, "store": "disabled" }))
        }
    }
}
