use serde::Serialize;

use crate::models::channel::Channel;

/// Outcome of the sticky-assignment lookup. Derived per request, never
/// stored.
#[derive(Debug, Serialize)]
pub struct AssignmentResponse {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<Channel>,
}

impl AssignmentResponse {
    pub fn found(destination: String, source: Channel) -> Self {
        Self {
            found: true,
            destination: Some(destination),
            source: Some(source),
        }
    }

    pub fn not_found() -> Self {
        Self {
            found: false,
            destination: None,
            source: None,
        }
    }
}
