use crate::api::ApiRequest;
use crate::requests::Operation;
use crate::{
    ChargeState, Command, CommandResult, DriveState, SunRoofState, TeslaClient, Trunk, Vehicle,
    VehicleState,
};

/// Reads and commands for a single vehicle.
///
/// Obtained from [`TeslaClient::vehicle`]. Every method returns an
/// [`ApiRequest`]; nothing is sent until it is awaited with `send()`.
///
/// Commands return a [`CommandResult`] whose `result` must be checked: the API
/// answers 200 even when the vehicle refuses the command.
///
/// # Examples
///
/// ```no_run
/// # async fn example(client: &tesla_client::TeslaClient) -> Result<(), tesla_client::TeslaError> {
/// let outcome = client.vehicle(1234).door_lock().payload().await?;
/// if let Some(reason) = outcome.failure_reason() {
///     eprintln!("vehicle refused to lock: {reason}");
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct VehicleHandler {
    client: TeslaClient,
    vehicle_id: u64,
}

impl VehicleHandler {
    pub(crate) fn new(client: TeslaClient, vehicle_id: u64) -> Self {
        Self { client, vehicle_id }
    }

    /// The id this handler addresses.
    pub fn id(&self) -> u64 {
        self.vehicle_id
    }

    fn read<R>(&self, operation: Operation) -> ApiRequest<R>
    where
        R: serde::de::DeserializeOwned,
    {
        ApiRequest::new(self.client.clone(), operation)
    }

    /// Gets the charge state.
    pub fn charge_state(&self) -> ApiRequest<ChargeState> {
        self.read(Operation::ChargeState {
            vehicle_id: self.vehicle_id,
        })
    }

    /// Gets the drive state (location, heading, speed).
    pub fn drive_state(&self) -> ApiRequest<DriveState> {
        self.read(Operation::DriveState {
            vehicle_id: self.vehicle_id,
        })
    }

    /// Gets the vehicle state (locks, doors, odometer, firmware).
    pub fn vehicle_state(&self) -> ApiRequest<VehicleState> {
        self.read(Operation::VehicleState {
            vehicle_id: self.vehicle_id,
        })
    }

    /// Wakes the vehicle from sleep. Returns the vehicle with its current
    /// `state`.
    pub fn wake_up(&self) -> ApiRequest<Vehicle> {
        self.read(Operation::WakeUp {
            vehicle_id: self.vehicle_id,
        })
    }

    /// Sends an arbitrary [`Command`].
    pub fn command(&self, command: Command) -> ApiRequest<CommandResult> {
        ApiRequest::new(
            self.client.clone(),
            Operation::Command {
                vehicle_id: self.vehicle_id,
                command,
            },
        )
    }

    /// Starts the climate control system. Heats or cools depending on the set
    /// temperature.
    pub fn start_auto_conditioning(&self) -> ApiRequest<CommandResult> {
        self.command(Command::AutoConditioningStart)
    }

    /// Stops the climate control system.
    pub fn stop_auto_conditioning(&self) -> ApiRequest<CommandResult> {
        self.command(Command::AutoConditioningStop)
    }

    /// Sets the target cabin temperatures in Celsius.
    pub fn set_temps(&self, driver_temp: f64, passenger_temp: f64) -> ApiRequest<CommandResult> {
        self.command(Command::SetTemps {
            driver_temp,
            passenger_temp,
        })
    }

    /// Sets a seat heater level.
    ///
    /// # Arguments
    ///
    /// * `heater` - 0=driver, 1=passenger, 2=rear left, 4=rear center,
    ///   5=rear right
    /// * `level` - 0 (off) to 3
    pub fn seat_heater(&self, heater: u8, level: u8) -> ApiRequest<CommandResult> {
        self.command(Command::RemoteSeatHeater { heater, level })
    }

    /// Turns the steering wheel heater on or off.
    pub fn steering_wheel_heater(&self, on: bool) -> ApiRequest<CommandResult> {
        self.command(Command::RemoteSteeringWheelHeater { on })
    }

    pub fn charge_port_open(&self) -> ApiRequest<CommandResult> {
        self.command(Command::ChargePortDoorOpen)
    }

    /// Closes a motorized charge port.
    pub fn charge_port_close(&self) -> ApiRequest<CommandResult> {
        self.command(Command::ChargePortDoorClose)
    }

    /// Starts charging if the vehicle is plugged in.
    pub fn charge_start(&self) -> ApiRequest<CommandResult> {
        self.command(Command::ChargeStart)
    }

    pub fn charge_stop(&self) -> ApiRequest<CommandResult> {
        self.command(Command::ChargeStop)
    }

    /// Sets the charge limit in percent (0-100).
    pub fn set_charge_limit(&self, percent: u8) -> ApiRequest<CommandResult> {
        self.command(Command::SetChargeLimit { percent })
    }

    pub fn door_lock(&self) -> ApiRequest<CommandResult> {
        self.command(Command::DoorLock)
    }

    pub fn door_unlock(&self) -> ApiRequest<CommandResult> {
        self.command(Command::DoorUnlock)
    }

    /// Opens the front trunk, or opens/closes the rear trunk.
    pub fn actuate_trunk(&self, which_trunk: Trunk) -> ApiRequest<CommandResult> {
        self.command(Command::ActuateTrunk { which_trunk })
    }

    pub fn honk_horn(&self) -> ApiRequest<CommandResult> {
        self.command(Command::HonkHorn)
    }

    pub fn flash_lights(&self) -> ApiRequest<CommandResult> {
        self.command(Command::FlashLights)
    }

    /// Vents or closes the sun roof.
    pub fn sun_roof_control(&self, state: SunRoofState) -> ApiRequest<CommandResult> {
        self.command(Command::SunRoofControl { state })
    }
}
