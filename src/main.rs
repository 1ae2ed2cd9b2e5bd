mod db;
mod handlers;
mod models;
mod routes;
mod state;
mod structs;
mod utils;


use crate::state::app_state::AppState;
use actix_cors::Cors;
use actix_web::{App, HttpServer, http, middleware::Logger, web};
use db::mongodb::get_database;
use dotenv::dotenv;
use env_logger::Env;
use routes::init_routes;
use std::env;
use utils::bot_filter::BotFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(Env::default().default_filter_or("info"));

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    // The store may be absent or unreachable; the service still starts and
    // the handlers degrade to no-op results.
    let db = get_database().await;

    let logs_password = env::var("LOGS_PASSWORD").ok();
    if logs_password.is_none() {
        log::warn!("LOGS_PASSWORD not set; the /logs report will reject every request");
    }

    // Create shared state
    let app_state = web::Data::new(AppState {
        db,
        bot_filter: BotFilter::from_env(),
        logs_password,
    });

    // Start the Actix Web server
    HttpServer::new(move || {
        // Create a logger with a custom format instead
        let logger = Logger::new("%a \"%r\" %s %b \"%{Referer}i\" \"%{User-Agent}i\" %D ms");
        // Callers are scripts on third-party static pages, so cross-origin
        // access stays wide open
        let cors = Cors::default()
            .allow_any_origin()
            .send_wildcard()
            .allowed_methods(vec!["GET", "POST"])
            .allowed_header(http::header::CONTENT_TYPE)
            .max_age(3600);
        App::new()
            .wrap(logger)
            .wrap(cors)
            .app_data(app_state.clone())
            .configure(init_routes)
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}
