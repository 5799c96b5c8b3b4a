use clap::{Parser, Subcommand};
use log::{error, info};
use tesla_client::{CommandResult, TeslaClient, TeslaError};

#[derive(Parser, Debug)]
#[command(author, version, about = "Query and command vehicles through the Tesla Owner API")]
struct Args {
    /// Owner API base URI.
    #[arg(long, env = "TESLA_BASE_URI", default_value = tesla_client::DEFAULT_BASE_URI)]
    base_uri: String,

    /// Access token; falls back to TESLA_ACCESS_TOKEN.
    #[arg(long)]
    token: Option<String>,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Exchange account credentials for an access token.
    Login {
        #[arg(long, env = "TESLA_CLIENT_ID")]
        client_id: String,
        #[arg(long, env = "TESLA_CLIENT_SECRET")]
        client_secret: String,
        #[arg(long)]
        email: String,
        #[arg(long, env = "TESLA_PASSWORD")]
        password: String,
    },
    /// List the vehicles on the account.
    Vehicles,
    /// Print charge, drive and vehicle state.
    Status { vehicle_id: u64 },
    WakeUp { vehicle_id: u64 },
    Lock { vehicle_id: u64 },
    Unlock { vehicle_id: u64 },
    Honk { vehicle_id: u64 },
    Flash { vehicle_id: u64 },
    ChargeStart { vehicle_id: u64 },
    ChargeStop { vehicle_id: u64 },
    ClimateOn { vehicle_id: u64 },
    ClimateOff { vehicle_id: u64 },
}

fn report(outcome: CommandResult) {
    match outcome.failure_reason() {
        None if outcome.result => info!("Command executed"),
        None => error!("Command rejected"),
        Some(reason) => error!("Command rejected: {reason}"),
    }
}

#[tokio::main]
async fn main() -> Result<(), TeslaError> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    let args = Args::parse();

    let mut builder = TeslaClient::builder()
        .base_uri(args.base_uri)
        .access_token_from_env("TESLA_ACCESS_TOKEN");
    if let Some(token) = args.token {
        builder = builder.access_token(token);
    }
    let client = builder.build()?;

    match args.command {
        Cmd::Login {
            client_id,
            client_secret,
            email,
            password,
        } => {
            let token = client
                .request_access_token(client_id, client_secret, email, password)
                .send()
                .await?
                .into_data();
            info!("Token expires in {} seconds", token.expires_in);
            println!("{}", token.access_token);
        }
        Cmd::Vehicles => {
            for vehicle in client.vehicles().payload().await? {
                println!("{:>20}  {}", vehicle.id, vehicle);
            }
        }
        Cmd::Status { vehicle_id } => {
            let vehicle = client.vehicle(vehicle_id);

            let charge = vehicle.charge_state().payload().await?;
            println!(
                "Battery: {}% ({:.1} mi), {} to {}%",
                charge.battery_level,
                charge.battery_range,
                charge.charging_state,
                charge.charge_limit_soc
            );

            let drive = vehicle.drive_state().payload().await?;
            if let (Some(lat), Some(lon)) = (drive.latitude, drive.longitude) {
                println!("Location: {lat:.5}, {lon:.5}");
            }
            println!("Shift: {}", drive.shift_state.as_deref().unwrap_or("unknown"));

            let state = vehicle.vehicle_state().payload().await?;
            println!(
                "Locked: {}, odometer: {:.0} mi, firmware: {}",
                state.locked,
                state.odometer,
                state.car_version.as_deref().unwrap_or("unknown")
            );
        }
        Cmd::WakeUp { vehicle_id } => {
            let vehicle = client.vehicle(vehicle_id).wake_up().payload().await?;
            println!("{vehicle}");
        }
        Cmd::Lock { vehicle_id } => report(client.vehicle(vehicle_id).door_lock().payload().await?),
        Cmd::Unlock { vehicle_id } => {
            report(client.vehicle(vehicle_id).door_unlock().payload().await?)
        }
        Cmd::Honk { vehicle_id } => report(client.vehicle(vehicle_id).honk_horn().payload().await?),
        Cmd::Flash { vehicle_id } => {
            report(client.vehicle(vehicle_id).flash_lights().payload().await?)
        }
        Cmd::ChargeStart { vehicle_id } => {
            report(client.vehicle(vehicle_id).charge_start().payload().await?)
        }
        Cmd::ChargeStop { vehicle_id } => {
            report(client.vehicle(vehicle_id).charge_stop().payload().await?)
        }
        Cmd::ClimateOn { vehicle_id } => report(
            client
                .vehicle(vehicle_id)
                .start_auto_conditioning()
                .payload()
                .await?,
        ),
        Cmd::ClimateOff { vehicle_id } => report(
            client
                .vehicle(vehicle_id)
                .stop_auto_conditioning()
                .payload()
                .await?,
        ),
    }

    Ok(())
}
