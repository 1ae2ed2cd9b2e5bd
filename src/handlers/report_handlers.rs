use actix_web::{HttpResponse, Responder, web};
use futures_util::TryStreamExt;
use log::{error, warn};
use mongodb::Database;
use mongodb::bson::doc;

use crate::models::channel::Channel;
use crate::models::visit::VisitRecord;
use crate::state::app_state::AppState;
use crate::structs::log_request::{LogEntryResponse, LogsQuery};

const MAX_REPORT_ROWS: i64 = 50;

/// Operator-facing listing of the most recent visits in one channel, newest
/// first, behind a static shared secret. JSON by default, an HTML table with
/// `format=html`.
pub async fn view_logs(
    app_state: web::Data<AppState>,
    query: web::Query<LogsQuery>,
) -> impl Responder {
    let authorized = match (&app_state.logs_password, &query.pwd) {
        (Some(expected), Some(given)) => expected == given,
        (None, _) => {
            warn!("LOGS_PASSWORD not configured; rejecting report request");
            false
        }
        _ => false,
    };

    if !authorized {
        return HttpResponse::Unauthorized().body("Access denied.");
    }

    let channel = query
        .category
        .as_deref()
        .and_then(Channel::from_name)
        .unwrap_or(Channel::Primary);
    let limit = query.limit.unwrap_or(MAX_REPORT_ROWS).clamp(1, MAX_REPORT_ROWS);

    let records = match &app_state.db {
        Some(db) => fetch_recent(db, channel, limit).await,
        None => Vec::new(),
    };

    if query.format.as_deref() == Some("html") {
        HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(render_report(channel, &records))
    } else {
        let rows: Vec<LogEntryResponse> =
            records.into_iter().map(LogEntryResponse::from).collect();
        HttpResponse::Ok().json(rows)
    }
}

async fn fetch_recent(db: &Database, channel: Channel, limit: i64) -> Vec<VisitRecord> {
    let visits = db.collection::<VisitRecord>(channel.collection_name());

    let cursor = match visits
        .find(doc! {})
        .sort(doc! { "created_at": -1 })
        .limit(limit)
        .await
    {
        Ok(cursor) => cursor,
        Err(e) => {
            error!("Report query failed on {}: {}", channel, e);
            return Vec::new();
        }
    };

    match cursor.try_collect().await {
        Ok(records) => records,
        Err(e) => {
            error!("Failed to read {} report rows: {}", channel, e);
            Vec::new()
        }
    }
}

fn render_report(channel: Channel, records: &[VisitRecord]) -> String {
    let mut html = String::from(
        "<!DOCTYPE html><html><head><meta charset=\"utf-8\"><title>Visit log</title>\
         <style>body{font-family:sans-serif;margin:20px}\
         table{border-collapse:collapse;width:100%}\
         th,td{border:1px solid #ccc;padding:4px 8px;font-size:13px;text-align:left}\
         th{background:#f0f0f0}</style></head><body>",
    );

    html.push_str(&format!(
        "<h2>Visit log: {} ({} rows)</h2>",
        channel,
        records.len()
    ));
    html.push_str(
        "<table><tr><th>Time</th><th>IP</th><th>Country</th><th>City</th>\
         <th>Destination</th><th>Language</th><th>Referrer</th><th>Inquiry</th>\
         <th>Note</th><th>User agent</th></tr>",
    );

    for record in records {
        html.push_str(&format!(
            "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            escape_html(&record.timestamp),
            escape_html(&record.visitor_ip),
            escape_html(&record.country),
            escape_html(&record.city),
            escape_html(&record.destination),
            escape_html(&record.language),
            escape_html(&record.referrer_url),
            escape_html(&record.inquiry_id),
            escape_html(&record.note),
            escape_html(&record.user_agent),
        ));
    }

    html.push_str("</table></body></html>");
    html
}

// Field values come straight from request headers, so they are attacker
// controlled and must not become markup.
fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
