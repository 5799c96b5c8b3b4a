use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};

use crate::{TeslaError, TeslaResult};

/// Outcome of a command sent to a vehicle.
///
/// `result == false` is not an HTTP failure: the API answered 200 but the
/// vehicle rejected or could not execute the command, e.g. because it is
/// asleep (`"could_not_wake_buses"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandResult {
    /// Human-readable failure cause; empty on success.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reason: String,
    /// Whether the command was executed.
    pub result: bool,
}

impl CommandResult {
    /// Returns true if the vehicle executed the command.
    pub fn is_success(&self) -> bool {
        self.result
    }

    /// The failure reason, if the command was rejected with one.
    pub fn failure_reason(&self) -> Option<&str> {
        if self.result || self.reason.is_empty() {
            None
        } else {
            Some(&self.reason)
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Which trunk to actuate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trunk {
    Rear,
    Front,
}

/// Target position of the sun roof.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SunRoofState {
    Vent,
    Close,
}

/// A state-changing remote operation on a vehicle.
///
/// Each variant maps onto `api/1/vehicles/{id}/command/{name}` and carries
/// the parameters sent in the JSON body.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    AutoConditioningStart,
    AutoConditioningStop,
    /// Target temperatures in Celsius.
    SetTemps { driver_temp: f64, passenger_temp: f64 },
    /// `heater`: 0=driver, 1=passenger, 2=rear left, 4=rear center,
    /// 5=rear right. `level`: 0 (off) to 3.
    RemoteSeatHeater { heater: u8, level: u8 },
    RemoteSteeringWheelHeater { on: bool },
    ChargePortDoorOpen,
    ChargePortDoorClose,
    ChargeStart,
    ChargeStop,
    SetChargeLimit { percent: u8 },
    DoorLock,
    DoorUnlock,
    ActuateTrunk { which_trunk: Trunk },
    HonkHorn,
    FlashLights,
    SunRoofControl { state: SunRoofState },
}

impl Command {
    pub const MAX_SEAT_HEATER: u8 = 5;
    pub const MAX_HEATER_LEVEL: u8 = 3;
    pub const MAX_CHARGE_LIMIT: u8 = 100;

    /// The final path segment of the command endpoint.
    pub fn name(&self) -> &'static str {
        match self {
            Command::AutoConditioningStart => "auto_conditioning_start",
            Command::AutoConditioningStop => "auto_conditioning_stop",
            Command::SetTemps { .. } => "set_temps",
            Command::RemoteSeatHeater { .. } => "remote_seat_heater_request",
            Command::RemoteSteeringWheelHeater { .. } => "remote_steering_wheel_heater_request",
            Command::ChargePortDoorOpen => "charge_port_door_open",
            Command::ChargePortDoorClose => "charge_port_door_close",
            Command::ChargeStart => "charge_start",
            Command::ChargeStop => "charge_stop",
            Command::SetChargeLimit { .. } => "set_charge_limit",
            Command::DoorLock => "door_lock",
            Command::DoorUnlock => "door_unlock",
            Command::ActuateTrunk { .. } => "actuate_trunk",
            Command::HonkHorn => "honk_horn",
            Command::FlashLights => "flash_lights",
            Command::SunRoofControl { .. } => "sun_roof_control",
        }
    }

    /// Checks parameter ranges.
    pub fn validate(&self) -> TeslaResult<()> {
        match *self {
            Command::SetTemps {
                driver_temp,
                passenger_temp,
            } => {
                if !driver_temp.is_finite() || !passenger_temp.is_finite() {
                    return Err(TeslaError::InvalidArgument(
                        "temperatures must be finite numbers".into(),
                    ));
                }
            }
            Command::RemoteSeatHeater { heater, level } => {
                if heater > Self::MAX_SEAT_HEATER {
                    return Err(TeslaError::InvalidArgument(format!(
                        "heater must be between 0 and {}, got {heater}",
                        Self::MAX_SEAT_HEATER
                    )));
                }
                if level > Self::MAX_HEATER_LEVEL {
                    return Err(TeslaError::InvalidArgument(format!(
                        "level must be between 0 and {}, got {level}",
                        Self::MAX_HEATER_LEVEL
                    )));
                }
            }
            Command::SetChargeLimit { percent } if percent > Self::MAX_CHARGE_LIMIT => {
                return Err(TeslaError::InvalidArgument(format!(
                    "percent must be between 0 and {}, got {percent}",
                    Self::MAX_CHARGE_LIMIT
                )));
            }
            _ => {}
        }
        Ok(())
    }

    /// The JSON body for commands that take parameters.
    pub fn body(&self) -> Option<Value> {
        match self {
            Command::SetTemps {
                driver_temp,
                passenger_temp,
            } => Some(json!({
                "driver_temp": driver_temp,
                "passenger_temp": passenger_temp,
            })),
            Command::RemoteSeatHeater { heater, level } => Some(json!({
                "heater": heater,
                "level": level,
            })),
            Command::RemoteSteeringWheelHeater { on } => Some(json!({ "on": on })),
            Command::SetChargeLimit { percent } => Some(json!({ "percent": percent })),
            Command::ActuateTrunk { which_trunk } => Some(json!({ "which_trunk": which_trunk })),
            Command::SunRoofControl { state } => Some(json!({ "state": state })),
            _ => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
