use serde::{Deserialize, Serialize};

use crate::models::visit::VisitRecord;

/// Body of `POST /log`, as sent by the redirect pages' inline script. Keys
/// are camelCase because the pages predate this service. Every field is
/// optional: a sparse or garbled payload still gets logged with defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogRequest {
    pub destination: Option<String>,
    pub redirect_time: Option<String>,
    pub language: Option<String>,
    pub inquiry_id: Option<String>,
    pub referrer_url: Option<String>,
    pub note: Option<String>,
    pub is_secondary_channel: bool,
    pub is_tertiary_channel: bool,
}

#[derive(Serialize)]
pub struct LogResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
}

impl LogResponse {
    /// Row persisted.
    pub fn recorded() -> Self {
        Self {
            success: true,
            skipped: None,
        }
    }

    /// Automated hit, acknowledged but intentionally not persisted.
    pub fn skipped() -> Self {
        Self {
            success: true,
            skipped: Some(true),
        }
    }

    /// Store failed or is not configured; the caller still gets a 200.
    pub fn not_recorded() -> Self {
        Self {
            success: false,
            skipped: None,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct LogsQuery {
    pub pwd: Option<String>,
    pub category: Option<String>,
    pub format: Option<String>,
    pub limit: Option<i64>,
}

/// Report row: a stored record minus its ObjectId.
#[derive(Serialize)]
pub struct LogEntryResponse {
    pub timestamp: String,
    pub visitor_ip: String,
    pub country: String,
    pub city: String,
    pub destination: String,
    pub language: String,
    pub inquiry_id: String,
    pub referrer_url: String,
    pub note: String,
    pub user_agent: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_time: Option<String>,
}

impl From<VisitRecord> for LogEntryResponse {
    fn from(record: VisitRecord) -> Self {
        Self {
            timestamp: record.timestamp,
            visitor_ip: record.visitor_ip,
            country: record.country,
            city: record.city,
            destination: record.destination,
            language: record.language,
            inquiry_id: record.inquiry_id,
            referrer_url: record.referrer_url,
            note: record.note,
            user_agent: record.user_agent,
            client_time: record.client_time,
        }
    }
}
