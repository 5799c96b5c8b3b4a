//! Data models for the Tesla Owner API.
//!
//! This module contains the envelope types shared by every endpoint and the
//! payloads nested inside them.

pub mod api_response;
pub mod auth;
pub mod charge_state;
pub mod command;
pub mod drive_state;
pub mod vehicle;
pub mod vehicle_state;

pub use api_response::{MessageResponse, ResponseDataWrapper};
pub use auth::{AccessTokenRequest, AccessTokenResponse};
pub use charge_state::ChargeState;
pub use command::{Command, CommandResult, SunRoofState, Trunk};
pub use drive_state::DriveState;
pub use vehicle::Vehicle;
pub use vehicle_state::VehicleState;
