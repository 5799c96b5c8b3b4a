use std::fmt;
use std::marker::PhantomData;

use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;

use crate::requests::{self, ApiResponse, Operation};
use crate::{MessageResponse, TeslaClient, TeslaError, TeslaResult};

/// A single pending Owner API call.
///
/// Created by the methods on [`TeslaClient`] and [`crate::VehicleHandler`].
/// Optionally override the access token or attach a cancellation token, then
/// call [`send`](ApiRequest::send).
///
/// # Examples
///
/// ```no_run
/// # use tesla_client::{CancellationToken, TeslaClient};
/// #
/// # async fn example(client: &TeslaClient) -> Result<(), tesla_client::TeslaError> {
/// let cancel = CancellationToken::new();
///
/// let response = client
///     .vehicle(1234)
///     .charge_state()
///     .access_token("explicit-token")
///     .cancellation_token(cancel.clone())
///     .send()
///     .await?;
///
/// println!("{}: {}%", response.status(), response.payload().battery_level);
/// # Ok(())
/// # }
/// ```
#[must_use = "requests do nothing until `send` is awaited"]
pub struct ApiRequest<R> {
    client: TeslaClient,
    operation: Operation,
    access_token: Option<SecretString>,
    cancellation: Option<CancellationToken>,
    _payload: PhantomData<fn() -> R>,
}

impl<R> ApiRequest<R>
where
    R: DeserializeOwned,
{
    pub(crate) fn new(client: TeslaClient, operation: Operation) -> Self {
        Self {
            client,
            operation,
            access_token: None,
            cancellation: None,
            _payload: PhantomData,
        }
    }

    /// Authenticates this call with `token` instead of the client default.
    ///
    /// A blank token makes [`send`](ApiRequest::send) fail with
    /// [`TeslaError::InvalidArgument`] before anything is sent.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(SecretString::from(token.into()));
        self
    }

    /// Aborts the call with [`TeslaError::Cancelled`] once `token` fires.
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// The operation this request will perform.
    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    /// Sends the request and returns the full response envelope.
    ///
    /// # Errors
    ///
    /// - [`TeslaError::InvalidArgument`] for a blank explicit token or
    ///   out-of-range command parameters
    /// - [`TeslaError::HttpStatus`] for any non-2xx response
    /// - [`TeslaError::DecodeError`] if the body is not `{ "response": R }`
    /// - [`TeslaError::Cancelled`] if the cancellation token fired first
    pub async fn send(self) -> TeslaResult<ApiResponse<R>> {
        let Self {
            client,
            operation,
            access_token,
            cancellation,
            ..
        } = self;

        if let Some(token) = &access_token {
            if token.expose_secret().trim().is_empty() {
                return Err(TeslaError::InvalidArgument(
                    "access token must not be blank".into(),
                ));
            }
        }

        let token = access_token
            .as_ref()
            .map(|token| token.expose_secret())
            .or_else(|| client.default_access_token());
        let cancellation = cancellation.unwrap_or_default();

        requests::send(
            client.transport(),
            client.base_uri(),
            &operation,
            token,
            &cancellation,
        )
        .await
    }

    /// Sends the request and returns only the unwrapped payload.
    pub async fn payload(self) -> TeslaResult<R> {
        self.send().await.map(MessageResponse::into_payload)
    }
}

impl<R> fmt::Debug for ApiRequest<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiRequest")
            .field("operation", &self.operation)
            .field("explicit_token", &self.access_token.is_some())
            .field("cancellable", &self.cancellation.is_some())
            .finish()
    }
}
