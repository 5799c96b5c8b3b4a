use serde::{Deserialize, Serialize};

/// Charging telemetry as returned by `data_request/charge_state`.
///
/// Fields map one-to-one onto the API's JSON keys. Most of them may be `null`
/// depending on the vehicle and whether it is plugged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeState {
    pub battery_heater_on: Option<bool>,
    /// State of charge in percent.
    pub battery_level: u8,
    /// Rated range in miles.
    pub battery_range: f64,
    pub charge_current_request: Option<u32>,
    pub charge_current_request_max: Option<u32>,
    pub charge_enable_request: Option<bool>,
    /// Energy added during the current session, in kWh.
    pub charge_energy_added: Option<f64>,
    /// Charge limit in percent.
    pub charge_limit_soc: u8,
    pub charge_limit_soc_max: Option<u8>,
    pub charge_limit_soc_min: Option<u8>,
    pub charge_limit_soc_std: Option<u8>,
    pub charge_miles_added_ideal: Option<f64>,
    pub charge_miles_added_rated: Option<f64>,
    pub charge_port_door_open: Option<bool>,
    pub charge_port_latch: Option<String>,
    pub charge_rate: Option<f64>,
    pub charge_to_max_range: Option<bool>,
    pub charger_actual_current: Option<u32>,
    pub charger_phases: Option<u32>,
    pub charger_pilot_current: Option<u32>,
    pub charger_power: Option<u32>,
    pub charger_voltage: Option<u32>,
    /// E.g. `"Charging"`, `"Complete"`, `"Disconnected"`.
    pub charging_state: String,
    pub conn_charge_cable: Option<String>,
    pub est_battery_range: Option<f64>,
    pub fast_charger_brand: Option<String>,
    pub fast_charger_present: Option<bool>,
    pub fast_charger_type: Option<String>,
    pub ideal_battery_range: Option<f64>,
    pub managed_charging_active: Option<bool>,
    pub managed_charging_start_time: Option<i64>,
    pub managed_charging_user_canceled: Option<bool>,
    pub max_range_charge_counter: Option<u32>,
    pub not_enough_power_to_heat: Option<bool>,
    pub scheduled_charging_pending: Option<bool>,
    pub scheduled_charging_start_time: Option<i64>,
    /// Hours until the charge limit is reached.
    pub time_to_full_charge: Option<f64>,
    /// Milliseconds since the Unix epoch.
    pub timestamp: Option<i64>,
    pub trip_charging: Option<bool>,
    pub usable_battery_level: Option<u8>,
    pub user_charge_enable_request: Option<bool>,
}
