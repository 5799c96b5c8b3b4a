use tokio_util::sync::CancellationToken;

use crate::requests;
use crate::{AccessTokenRequest, AccessTokenResponse, MessageResponse, TeslaClient, TeslaResult};

/// A pending OAuth password grant.
///
/// Obtained from [`TeslaClient::request_access_token`].
#[derive(Debug)]
#[must_use = "requests do nothing until `send` is awaited"]
pub struct AccessTokenBuilder {
    client: TeslaClient,
    credentials: AccessTokenRequest,
    cancellation: Option<CancellationToken>,
}

impl AccessTokenBuilder {
    pub(crate) fn new(client: TeslaClient, credentials: AccessTokenRequest) -> Self {
        Self {
            client,
            credentials,
            cancellation: None,
        }
    }

    /// Aborts the exchange with [`crate::TeslaError::Cancelled`] once `token`
    /// fires.
    pub fn cancellation_token(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    /// Sends the token request.
    ///
    /// # Errors
    ///
    /// Rejected credentials come back as [`crate::TeslaError::HttpStatus`]
    /// (usually 401), never as a decode error.
    pub async fn send(self) -> TeslaResult<MessageResponse<AccessTokenResponse>> {
        let cancellation = self.cancellation.unwrap_or_default();

        requests::request_access_token(
            self.client.transport(),
            self.client.base_uri(),
            &self.credentials,
            &cancellation,
        )
        .await
    }
}
