//! Low-level request layer.
//!
//! Every function here takes the base URI, the access token and a
//! cancellation token explicitly, builds exactly one HTTP request, sends it
//! through an [`HttpTransport`] and decodes the response. Nothing is retried
//! and nothing is cached. [`crate::TeslaClient`] wraps these functions with
//! configuration and default-token resolution.

use http::header::{HeaderValue, ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use http::{HeaderMap, Method};
use log::debug;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use url::form_urlencoded;
use url::Url;

use crate::models::{
    AccessTokenRequest, AccessTokenResponse, ChargeState, Command, CommandResult, DriveState,
    MessageResponse, ResponseDataWrapper, Vehicle, VehicleState,
};
use crate::transport::{HttpRequest, HttpTransport};
use crate::{TeslaError, TeslaResult};

/// Envelope returned by every Owner API endpoint.
pub type ApiResponse<T> = MessageResponse<ResponseDataWrapper<T>>;

const API_PREFIX: [&str; 2] = ["api", "1"];
const VEHICLES: &str = "vehicles";
const OAUTH_TOKEN: [&str; 2] = ["oauth", "token"];

/// A single Owner API call, excluding authentication.
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    ListVehicles,
    ChargeState { vehicle_id: u64 },
    DriveState { vehicle_id: u64 },
    VehicleState { vehicle_id: u64 },
    WakeUp { vehicle_id: u64 },
    Command { vehicle_id: u64, command: Command },
}

impl Operation {
    /// `GET` for state reads, `POST` for everything that changes state.
    pub fn method(&self) -> Method {
        match self {
            Operation::ListVehicles
            | Operation::ChargeState { .. }
            | Operation::DriveState { .. }
            | Operation::VehicleState { .. } => Method::GET,
            Operation::WakeUp { .. } | Operation::Command { .. } => Method::POST,
        }
    }

    /// Path segments below `api/1`.
    pub fn path_segments(&self) -> Vec<String> {
        match self {
            Operation::ListVehicles => vec![VEHICLES.to_string()],
            Operation::ChargeState { vehicle_id } => {
                vehicle_path(*vehicle_id, &["data_request", "charge_state"])
            }
            Operation::DriveState { vehicle_id } => {
                vehicle_path(*vehicle_id, &["data_request", "drive_state"])
            }
            Operation::VehicleState { vehicle_id } => {
                vehicle_path(*vehicle_id, &["data_request", "vehicle_state"])
            }
            Operation::WakeUp { vehicle_id } => vehicle_path(*vehicle_id, &["wake_up"]),
            Operation::Command {
                vehicle_id,
                command,
            } => vehicle_path(*vehicle_id, &["command", command.name()]),
        }
    }

    fn validate(&self) -> TeslaResult<()> {
        match self {
            Operation::Command { command, .. } => command.validate(),
            _ => Ok(()),
        }
    }

    fn body(&self) -> Option<serde_json::Value> {
        match self {
            Operation::Command { command, .. } => command.body(),
            _ => None,
        }
    }
}

fn vehicle_path(vehicle_id: u64, rest: &[&str]) -> Vec<String> {
    let mut segments = vec![VEHICLES.to_string(), vehicle_id.to_string()];
    segments.extend(rest.iter().map(|s| s.to_string()));
    segments
}

/// Appends `segments` to the path of `base_uri`.
///
/// A trailing slash on the base is dropped first, so `https://host/` and
/// `https://host` produce the same URL and a path prefix such as
/// `https://host/proxy` is preserved.
pub fn endpoint_url<I>(base_uri: &Url, segments: I) -> TeslaResult<Url>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut url = base_uri.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| TeslaError::InvalidEndpoint(format!("{base_uri} cannot be a base URI")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

fn ensure_token(access_token: Option<&str>) -> TeslaResult<()> {
    match access_token {
        Some(token) if token.trim().is_empty() => Err(TeslaError::InvalidArgument(
            "access token must not be blank".into(),
        )),
        _ => Ok(()),
    }
}

fn bearer(access_token: &str) -> TeslaResult<HeaderValue> {
    let mut value = HeaderValue::from_str(&format!("Bearer {access_token}")).map_err(|_| {
        TeslaError::InvalidArgument("access token contains invalid header characters".into())
    })?;
    value.set_sensitive(true);
    Ok(value)
}

/// Builds the HTTP request for `operation` without sending it.
///
/// When `access_token` is `None` no `Authorization` header is added; the
/// transport is then expected to authenticate the request itself.
pub fn build_request(
    base_uri: &Url,
    operation: &Operation,
    access_token: Option<&str>,
) -> TeslaResult<HttpRequest> {
    ensure_token(access_token)?;
    operation.validate()?;

    let url = endpoint_url(
        base_uri,
        API_PREFIX
            .iter()
            .map(|s| s.to_string())
            .chain(operation.path_segments()),
    )?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(token) = access_token {
        headers.insert(AUTHORIZATION, bearer(token)?);
    }

    let body = match operation.body() {
        Some(json) => {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            Some(serde_json::to_vec(&json)?)
        }
        None => None,
    };

    Ok(HttpRequest {
        method: operation.method(),
        url,
        headers,
        body,
    })
}

/// Builds the form-encoded password grant request for `oauth/token`.
pub fn build_access_token_request(
    base_uri: &Url,
    credentials: &AccessTokenRequest,
) -> TeslaResult<HttpRequest> {
    let url = endpoint_url(base_uri, OAUTH_TOKEN)?;

    let body = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(credentials.form_fields())
        .finish();

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(
        CONTENT_TYPE,
        HeaderValue::from_static("application/x-www-form-urlencoded"),
    );

    Ok(HttpRequest {
        method: Method::POST,
        url,
        headers,
        body: Some(body.into_bytes()),
    })
}

/// Sends `request` and decodes a success body into `R`.
async fn execute<R>(
    transport: &dyn HttpTransport,
    request: HttpRequest,
    cancellation: &CancellationToken,
) -> TeslaResult<MessageResponse<R>>
where
    R: DeserializeOwned,
{
    let method = request.method.clone();
    let url = request.url.clone();
    debug!("{method} {url}");

    let response = tokio::select! {
        biased;
        _ = cancellation.cancelled() => {
            debug!("{method} {url} cancelled");
            return Err(TeslaError::Cancelled);
        }
        response = transport.send(request) => response?,
    };

    debug!("{method} {url} -> {}", response.status);

    if !response.status.is_success() {
        return Err(TeslaError::HttpStatus {
            status: response.status,
            body: response.text(),
        });
    }

    let data = serde_json::from_slice(&response.body)?;
    Ok(MessageResponse::new(response.status, data))
}

/// Sends any Owner API operation and decodes the `{ "response": R }` envelope.
pub async fn send<R>(
    transport: &dyn HttpTransport,
    base_uri: &Url,
    operation: &Operation,
    access_token: Option<&str>,
    cancellation: &CancellationToken,
) -> TeslaResult<ApiResponse<R>>
where
    R: DeserializeOwned,
{
    let request = build_request(base_uri, operation, access_token)?;
    execute(transport, request, cancellation).await
}

/// `GET api/1/vehicles`
pub async fn get_vehicles(
    transport: &dyn HttpTransport,
    base_uri: &Url,
    access_token: Option<&str>,
    cancellation: &CancellationToken,
) -> TeslaResult<ApiResponse<Vec<Vehicle>>> {
    send(
        transport,
        base_uri,
        &Operation::ListVehicles,
        access_token,
        cancellation,
    )
    .await
}

/// `GET api/1/vehicles/{id}/data_request/charge_state`
pub async fn get_charge_state(
    transport: &dyn HttpTransport,
    base_uri: &Url,
    vehicle_id: u64,
    access_token: Option<&str>,
    cancellation: &CancellationToken,
) -> TeslaResult<ApiResponse<ChargeState>> {
    let operation = Operation::ChargeState { vehicle_id };
    send(transport, base_uri, &operation, access_token, cancellation).await
}

/// `GET api/1/vehicles/{id}/data_request/drive_state`
pub async fn get_drive_state(
    transport: &dyn HttpTransport,
    base_uri: &Url,
    vehicle_id: u64,
    access_token: Option<&str>,
    cancellation: &CancellationToken,
) -> TeslaResult<ApiResponse<DriveState>> {
    let operation = Operation::DriveState { vehicle_id };
    send(transport, base_uri, &operation, access_token, cancellation).await
}

/// `GET api/1/vehicles/{id}/data_request/vehicle_state`
pub async fn get_vehicle_state(
    transport: &dyn HttpTransport,
    base_uri: &Url,
    vehicle_id: u64,
    access_token: Option<&str>,
    cancellation: &CancellationToken,
) -> TeslaResult<ApiResponse<VehicleState>> {
    let operation = Operation::VehicleState { vehicle_id };
    send(transport, base_uri, &operation, access_token, cancellation).await
}

/// `POST api/1/vehicles/{id}/wake_up`
pub async fn wake_up(
    transport: &dyn HttpTransport,
    base_uri: &Url,
    vehicle_id: u64,
    access_token: Option<&str>,
    cancellation: &CancellationToken,
) -> TeslaResult<ApiResponse<Vehicle>> {
    let operation = Operation::WakeUp { vehicle_id };
    send(transport, base_uri, &operation, access_token, cancellation).await
}

/// `POST api/1/vehicles/{id}/command/{name}`
///
/// A rejected command is still `Ok`; inspect [`CommandResult::result`].
pub async fn send_command(
    transport: &dyn HttpTransport,
    base_uri: &Url,
    vehicle_id: u64,
    command: Command,
    access_token: Option<&str>,
    cancellation: &CancellationToken,
) -> TeslaResult<ApiResponse<CommandResult>> {
    let operation = Operation::Command {
        vehicle_id,
        command,
    };
    send(transport, base_uri, &operation, access_token, cancellation).await
}

/// `POST oauth/token` with the password grant.
///
/// The token endpoint does not use the `response` envelope.
pub async fn request_access_token(
    transport: &dyn HttpTransport,
    base_uri: &Url,
    credentials: &AccessTokenRequest,
    cancellation: &CancellationToken,
) -> TeslaResult<MessageResponse<AccessTokenResponse>> {
    let request = build_access_token_request(base_uri, credentials)?;
    execute(transport, request, cancellation).await
}
