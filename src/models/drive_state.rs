use serde::{Deserialize, Serialize};

/// Location and motion telemetry as returned by `data_request/drive_state`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveState {
    /// Unix timestamp of the last GPS fix.
    pub gps_as_of: Option<i64>,
    /// Compass heading in degrees.
    pub heading: Option<i32>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub native_latitude: Option<f64>,
    pub native_location_supported: Option<i32>,
    pub native_longitude: Option<f64>,
    pub native_type: Option<String>,
    /// Power draw in kW; negative while regenerating.
    pub power: Option<i32>,
    /// `"P"`, `"R"`, `"N"`, `"D"` or `null` when parked and asleep.
    pub shift_state: Option<String>,
    /// Speed in miles per hour, `null` when stationary.
    pub speed: Option<f64>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: Option<i64>,
}
