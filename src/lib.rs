//! # tesla-client
//!
//! A Rust client library for the Tesla Owner API.
//!
//! This crate provides a type-safe, async interface for authenticating
//! against the Owner API, listing the vehicles of an account, reading their
//! charge, drive and vehicle state, and sending remote commands.
//!
//! ## Features
//!
//! - 🔐 OAuth password grant and bearer-token authentication
//! - 🚗 Typed vehicle, charge, drive and vehicle state payloads
//! - 🎛️ Every remote command as a typed [`Command`]
//! - 🔌 Pluggable HTTP transport for middleware and testing
//! - 🛑 Cooperative cancellation on every call
//!
//! ## Results
//!
//! Every call returns a [`MessageResponse`] carrying the HTTP status and the
//! decoded `{ "response": ... }` envelope. HTTP failures, decode failures and
//! cancellation are errors ([`TeslaError`]). A command the vehicle refused is
//! *not* an error: check [`CommandResult::result`].
//!
//! ## Example
//!
//! ```rust,no_run
//! use tesla_client::TeslaClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = TeslaClient::builder().access_token("my-access-token").build()?;
//!
//!     let vehicles = client.vehicles().payload().await?;
//!     let Some(vehicle) = vehicles.first() else {
//!         return Ok(());
//!     };
//!
//!     let charge = client.vehicle(vehicle.id).charge_state().payload().await?;
//!     println!("{vehicle}: {}% ({})", charge.battery_level, charge.charging_state);
//!
//!     let outcome = client.vehicle(vehicle.id).flash_lights().payload().await?;
//!     if !outcome.result {
//!         println!("vehicle refused: {}", outcome.reason);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod api;
mod client;
mod error;
pub mod models;
pub mod requests;
pub mod transport;

pub use api::{AccessTokenBuilder, ApiRequest, VehicleHandler};
#[cfg(feature = "default-client")]
pub use client::{initialize, instance};
pub use client::{TeslaClient, TeslaClientBuilder, DEFAULT_BASE_URI};
pub use error::{TeslaError, TeslaResult};
pub use models::{
    AccessTokenRequest, AccessTokenResponse, ChargeState, Command, CommandResult, DriveState,
    MessageResponse, ResponseDataWrapper, SunRoofState, Trunk, Vehicle, VehicleState,
};
pub use requests::{ApiResponse, Operation};
pub use tokio_util::sync::CancellationToken;
pub use transport::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport};
