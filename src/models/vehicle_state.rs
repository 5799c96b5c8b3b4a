use serde::{Deserialize, Serialize};

/// General vehicle status as returned by `data_request/vehicle_state`.
///
/// The door and trunk fields (`df`, `dr`, `pf`, `pr`, `ft`, `rt`) are `0` when
/// closed and non-zero when open.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleState {
    pub api_version: Option<u32>,
    pub autopark_state_v2: Option<String>,
    pub calendar_supported: Option<bool>,
    /// Firmware version.
    pub car_version: Option<String>,
    pub center_display_state: Option<i32>,
    /// Driver front door.
    pub df: i32,
    /// Driver rear door.
    pub dr: i32,
    /// Front trunk.
    pub ft: i32,
    pub locked: bool,
    pub notifications_supported: Option<bool>,
    /// Odometer in miles.
    pub odometer: f64,
    pub parsed_calendar_supported: Option<bool>,
    /// Passenger front door.
    pub pf: i32,
    /// Passenger rear door.
    pub pr: i32,
    pub remote_start: Option<bool>,
    pub remote_start_supported: Option<bool>,
    /// Rear trunk.
    pub rt: i32,
    pub sun_roof_percent_open: Option<i32>,
    pub sun_roof_state: Option<String>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: Option<i64>,
    pub valet_mode: Option<bool>,
    pub vehicle_name: Option<String>,
}
