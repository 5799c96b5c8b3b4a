use std::fmt;

use serde::{Deserialize, Serialize};

/// A vehicle associated with an account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    /// The unique identifier used in every per-vehicle endpoint.
    pub id: u64,

    /// The identifier used by the streaming API.
    pub vehicle_id: u64,

    /// Vehicle identification number.
    pub vin: String,

    /// Name given to the vehicle by the owner.
    pub display_name: Option<String>,

    /// Comma separated factory option codes.
    pub option_codes: Option<String>,

    /// Paint color, usually `null`.
    pub color: Option<String>,

    /// Streaming API tokens.
    #[serde(default)]
    pub tokens: Vec<String>,

    /// Connectivity state, e.g. `"online"` or `"asleep"`.
    pub state: String,

    /// Whether the vehicle is currently in service.
    pub in_service: Option<bool>,

    /// String form of `id`.
    pub id_s: Option<String>,

    /// Whether calendar sync is enabled.
    pub calendar_enabled: Option<bool>,

    /// Vehicle API version.
    pub api_version: Option<u32>,

    pub backseat_token: Option<String>,

    pub backseat_token_updated_at: Option<i64>,
}

impl Vehicle {
    /// Returns true if the vehicle is awake and reachable.
    pub fn is_online(&self) -> bool {
        self.state == "online"
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.display_name {
            Some(name) => write!(f, "{} ({}, {})", name, self.vin, self.state),
            None => write!(f, "{} ({})", self.vin, self.state),
        }
    }
}
