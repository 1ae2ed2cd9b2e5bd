use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

use crate::utils::client_info::ClientInfo;
use crate::utils::time::{now_millis, report_timestamp};

/// One accepted (non-automated) redirect event. Append-only: records are
/// inserted once and never updated or deleted.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VisitRecord {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub destination: String, // Contact the visitor was redirected to
    pub visitor_ip: String,
    pub timestamp: String, // Display form, report time zone
    pub created_at: i64,   // Sort key, epoch milliseconds
    pub country: String,
    pub city: String,
    pub user_agent: String,
    pub language: String,
    pub inquiry_id: String,
    pub referrer_url: String,
    pub note: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_time: Option<String>, // The calling page's own clock
}

impl VisitRecord {
    pub fn new(
        destination: String,
        client: ClientInfo,
        language: Option<String>,
        inquiry_id: Option<String>,
        referrer_url: Option<String>,
        note: Option<String>,
        client_time: Option<String>,
    ) -> Self {
        Self {
            id: None,
            destination,
            visitor_ip: client.ip,
            timestamp: report_timestamp(),
            created_at: now_millis(),
            country: client.country,
            city: client.city,
            user_agent: client.user_agent,
            language: language.unwrap_or_else(|| "unknown".to_string()),
            inquiry_id: inquiry_id.unwrap_or_else(|| "N/A".to_string()),
            referrer_url: referrer_url.unwrap_or_else(|| "Direct/Unknown".to_string()),
            note: note.unwrap_or_default(),
            client_time,
        }
    }
}
