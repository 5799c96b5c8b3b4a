#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::{json, Value};
use tesla_client::{HttpRequest, HttpResponse, HttpTransport, TeslaClient, TeslaResult};

pub const TEST_TOKEN: &str = "test-token";
pub const VEHICLE_ID: u64 = 12345678901234567;

/// Set up a test client with a default access token against a mock server.
pub fn setup_test_client(server_url: &str) -> TeslaClient {
    TeslaClient::builder()
        .base_uri(server_url)
        .access_token(TEST_TOKEN)
        .build()
        .expect("Failed to build TeslaClient")
}

/// Set up a test client without a default access token.
pub fn setup_anonymous_client(server_url: &str) -> TeslaClient {
    TeslaClient::builder()
        .base_uri(server_url)
        .build()
        .expect("Failed to build TeslaClient")
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// In-process transport that records every request and answers with a fixed
/// status and body.
#[derive(Debug)]
pub struct RecordingTransport {
    status: u16,
    body: Value,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingTransport {
    pub fn new(status: u16, body: Value) -> Arc<Self> {
        Arc::new(Self {
            status,
            body,
            requests: Mutex::new(Vec::new()),
        })
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn client(self: &Arc<Self>, base_uri: &str) -> TeslaClient {
        TeslaClient::builder()
            .base_uri(base_uri)
            .access_token(TEST_TOKEN)
            .transport(self.clone())
            .build()
            .expect("Failed to build TeslaClient")
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn send(&self, request: HttpRequest) -> TeslaResult<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        Ok(HttpResponse {
            status: http::StatusCode::from_u16(self.status).unwrap(),
            headers: http::HeaderMap::new(),
            body: serde_json::to_vec(&self.body).unwrap(),
        })
    }
}

pub fn command_ok() -> Value {
    json!({ "response": { "reason": "", "result": true } })
}

pub fn vehicle_json() -> Value {
    json!({
        "id": VEHICLE_ID,
        "vehicle_id": 1234567890,
        "vin": "5YJSA11111111111",
        "display_name": "Nikola 2.0",
        "option_codes": "MDLS,RENA,AF02",
        "color": null,
        "tokens": ["abcdef1234567890", "1234567890abcdef"],
        "state": "online",
        "in_service": false,
        "id_s": "12345678901234567",
        "calendar_enabled": true,
        "api_version": 3,
        "backseat_token": null,
        "backseat_token_updated_at": null
    })
}

pub fn charge_state_json() -> Value {
    json!({
        "battery_heater_on": false,
        "battery_level": 64,
        "battery_range": 167.96,
        "charge_current_request": 48,
        "charge_current_request_max": 48,
        "charge_enable_request": true,
        "charge_energy_added": 12.41,
        "charge_limit_soc": 90,
        "charge_limit_soc_max": 100,
        "charge_limit_soc_min": 50,
        "charge_limit_soc_std": 90,
        "charge_miles_added_ideal": 50.0,
        "charge_miles_added_rated": 40.0,
        "charge_port_door_open": true,
        "charge_port_latch": "Engaged",
        "charge_rate": 0.0,
        "charge_to_max_range": false,
        "charger_actual_current": 0,
        "charger_phases": null,
        "charger_pilot_current": 48,
        "charger_power": 0,
        "charger_voltage": 2,
        "charging_state": "Stopped",
        "conn_charge_cable": "SAE",
        "est_battery_range": 118.38,
        "fast_charger_brand": "<invalid>",
        "fast_charger_present": false,
        "fast_charger_type": "<invalid>",
        "ideal_battery_range": 209.95,
        "managed_charging_active": false,
        "managed_charging_start_time": null,
        "managed_charging_user_canceled": false,
        "max_range_charge_counter": 0,
        "not_enough_power_to_heat": false,
        "scheduled_charging_pending": false,
        "scheduled_charging_start_time": null,
        "time_to_full_charge": 0.0,
        "timestamp": 1538165436427_i64,
        "trip_charging": false,
        "usable_battery_level": 64,
        "user_charge_enable_request": null
    })
}

pub fn drive_state_json() -> Value {
    json!({
        "gps_as_of": 1538363883,
        "heading": 5,
        "latitude": 33.111111,
        "longitude": -88.111111,
        "native_latitude": 33.111111,
        "native_location_supported": 1,
        "native_longitude": -88.111111,
        "native_type": "wgs",
        "power": 0,
        "shift_state": null,
        "speed": null,
        "timestamp": 1538363883209_i64
    })
}

pub fn vehicle_state_json() -> Value {
    json!({
        "api_version": 3,
        "autopark_state_v2": "standby",
        "calendar_supported": true,
        "car_version": "2018.36.2 0d1ceb9",
        "center_display_state": 0,
        "df": 0,
        "dr": 0,
        "ft": 0,
        "locked": true,
        "notifications_supported": true,
        "odometer": 33561.422505,
        "parsed_calendar_supported": true,
        "pf": 0,
        "pr": 0,
        "remote_start": false,
        "remote_start_supported": true,
        "rt": 0,
        "sun_roof_percent_open": 0,
        "sun_roof_state": "unknown",
        "timestamp": 1538364666096_i64,
        "valet_mode": false,
        "vehicle_name": "Nikola 2.0"
    })
}
