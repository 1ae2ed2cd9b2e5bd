use actix_web::{HttpRequest, http};
use percent_encoding::percent_decode_str;

/// First entry of the forwarded chain is the real client as seen by the edge.
const FORWARDED_FOR_HEADER: &str = "X-Forwarded-For";

// Geolocation headers derived by the edge layer. The city value arrives
// percent-encoded.
const EDGE_COUNTRY_HEADER: &str = "X-Vercel-IP-Country";
const EDGE_CITY_HEADER: &str = "X-Vercel-IP-City";

/// Request metadata captured for every accepted visit.
#[derive(Debug, Clone)]
pub struct ClientInfo {
    pub ip: String,
    pub country: String,
    pub city: String,
    pub user_agent: String,
}

impl ClientInfo {
    pub fn from_request(req: &HttpRequest) -> Self {
        let country = header_value(req, EDGE_COUNTRY_HEADER)
            .map(str::to_string)
            .unwrap_or_else(|| "Unknown".to_string());

        let city = header_value(req, EDGE_CITY_HEADER)
            .map(decode_city)
            .unwrap_or_else(|| "Unknown".to_string());

        let user_agent = req
            .headers()
            .get(http::header::USER_AGENT)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        Self {
            ip: client_ip(req),
            country,
            city,
            user_agent,
        }
    }
}

/// Best-effort client IP: first forwarded-for entry, then the connection
/// peer, then a placeholder.
pub fn client_ip(req: &HttpRequest) -> String {
    if let Some(forwarded) = header_value(req, FORWARDED_FOR_HEADER) {
        if let Some(first) = forwarded.split(',').next() {
            let first = first.trim();
            if !first.is_empty() {
                return first.to_string();
            }
        }
    }

    req.connection_info()
        .peer_addr()
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

/// Percent-decode the edge's city value. A value that fails to decode is kept
/// as-is; a bad header must never fail the request.
fn decode_city(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

fn header_value<'a>(req: &'a HttpRequest, name: &str) -> Option<&'a str> {
    req.headers().get(name).and_then(|v| v.to_str().ok())
}
