use actix_web::{HttpRequest, HttpResponse, Responder, web};
use log::{debug, error, info};
use mongodb::Database;
use mongodb::bson::doc;

use crate::models::channel::{ASSIGNMENT_PRECEDENCE, Channel};
use crate::models::visit::VisitRecord;
use crate::state::app_state::AppState;
use crate::structs::assignment::AssignmentResponse;
use crate::structs::log_request::{LogRequest, LogResponse};
use crate::utils::client_info::{ClientInfo, client_ip};

/// Record one redirect event. The calling page's script fires this right
/// before navigating away, so every outcome is a 200: success reflects
/// whether a row was actually persisted, nothing more.
pub async fn log_visit(
    app_state: web::Data<AppState>,
    req: HttpRequest,
    body: web::Bytes,
) -> impl Responder {
    // Parsed leniently: a garbled body degrades to an all-defaults payload
    // instead of a 400.
    let payload: LogRequest = serde_json::from_slice(&body).unwrap_or_default();
    let client = ClientInfo::from_request(&req);

    // Automated hits are acknowledged as success but never persisted, so
    // crawlers cannot tell they were filtered.
    if app_state.bot_filter.is_automated(&client.user_agent) {
        debug!(
            "Discarding automated hit from {} ({})",
            client.ip, client.user_agent
        );
        return HttpResponse::Ok().json(LogResponse::skipped());
    }

    let channel = Channel::from_flags(payload.is_secondary_channel, payload.is_tertiary_channel);
    let record = VisitRecord::new(
        payload.destination.unwrap_or_default(),
        client,
        payload.language,
        payload.inquiry_id,
        payload.referrer_url,
        payload.note,
        payload.redirect_time,
    );

    match &app_state.db {
        Some(db) => {
            let visits = db.collection::<VisitRecord>(channel.collection_name());
            match visits.insert_one(&record).await {
                Ok(_) => {
                    info!(
                        "Recorded {} visit from {} to {}",
                        channel, record.visitor_ip, record.destination
                    );
                    HttpResponse::Ok().json(LogResponse::recorded())
                }
                Err(e) => {
                    error!("Failed to record {} visit: {}", channel, e);
                    HttpResponse::Ok().json(LogResponse::not_recorded())
                }
            }
        }
        None => HttpResponse::Ok().json(LogResponse::not_recorded()),
    }
}

/// Tell a returning visitor's page which destination they were already
/// assigned, if any.
pub async fn check_assignment(
    app_state: web::Data<AppState>,
    req: HttpRequest,
) -> impl Responder {
    let visitor_ip = client_ip(&req);

    let result = match &app_state.db {
        Some(db) => resolve_assignment(db, &visitor_ip).await,
        None => AssignmentResponse::not_found(),
    };

    HttpResponse::Ok().json(result)
}

/// Walk the channels in precedence order and return the newest recorded
/// destination from the first channel that has one for this IP. A visitor
/// assigned through a higher-priority surface keeps that assignment on every
/// surface, even when a lower-priority channel has a more recent row.
pub async fn resolve_assignment(db: &Database, visitor_ip: &str) -> AssignmentResponse {
    for channel in ASSIGNMENT_PRECEDENCE {
        let visits = db.collection::<VisitRecord>(channel.collection_name());
        let newest = visits
            .find_one(doc! { "visitor_ip": visitor_ip })
            .sort(doc! { "created_at": -1 })
            .await;

        match newest {
            Ok(Some(record)) if !record.destination.is_empty() => {
                return AssignmentResponse::found(record.destination, channel);
            }
            // No usable row in this channel; try the next one.
            Ok(_) => {}
            // Fail open: a broken channel query must not abort the walk or
            // surface an error to the caller.
            Err(e) => {
                error!("Assignment lookup failed on {}: {}", channel, e);
            }
        }
    }

    AssignmentResponse::not_found()
}
