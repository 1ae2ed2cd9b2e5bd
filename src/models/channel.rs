use serde::{Deserialize, Serialize};
use std::fmt;

/// Entry surface a visit came through. Each channel gets its own collection
/// so the per-surface logs stay independent.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Primary,
    Secondary,
    Tertiary,
}

/// Lookup order for sticky assignments: once a visitor has a destination
/// recorded through an earlier channel here, later channels never override it.
/// Adding a channel means adding a variant and picking its slot in this list.
pub const ASSIGNMENT_PRECEDENCE: [Channel; 3] =
    [Channel::Primary, Channel::Secondary, Channel::Tertiary];

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Channel {
    pub fn name(&self) -> &'static str {
        match self {
            Channel::Primary => "primary",
            Channel::Secondary => "secondary",
            Channel::Tertiary => "tertiary",
        }
    }

    /// Collection that receives this channel's visit records.
    pub fn collection_name(&self) -> &'static str {
        match self {
            Channel::Primary => "primary_visits",
            Channel::Secondary => "secondary_visits",
            Channel::Tertiary => "tertiary_visits",
        }
    }

    /// Map the payload's boolean flags to a channel. The flags arrived as an
    /// if/else-if chain on the calling pages, so secondary wins when both are
    /// set; no flags means the primary surface.
    pub fn from_flags(is_secondary: bool, is_tertiary: bool) -> Self {
        if is_secondary {
            Channel::Secondary
        } else if is_tertiary {
            Channel::Tertiary
        } else {
            Channel::Primary
        }
    }

    /// Parse a channel name from a query parameter. Unknown names resolve to
    /// None so callers can pick their own fallback.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "primary" => Some(Channel::Primary),
            "secondary" => Some(Channel::Secondary),
            "tertiary" => Some(Channel::Tertiary),
            _ => None,
        }
    }
}
