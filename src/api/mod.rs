//! High-level request builders returned by [`crate::TeslaClient`].

pub mod auth;
pub mod request;
pub mod vehicle;

pub use auth::AccessTokenBuilder;
pub use request::ApiRequest;
pub use vehicle::VehicleHandler;
