use std::fmt;
use std::sync::Arc;
use std::time::Duration;

#[cfg(feature = "default-client")]
use arc_swap::ArcSwap;
#[cfg(feature = "default-client")]
use once_cell::sync::Lazy;
use reqwest::Client as ReqwestClient;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use crate::api::{AccessTokenBuilder, ApiRequest, VehicleHandler};
use crate::requests::Operation;
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::{AccessTokenRequest, TeslaError, TeslaResult, Vehicle};

/// Public Owner API origin used when no base URI is configured.
pub const DEFAULT_BASE_URI: &str = "https://owner-api.teslamotors.com/";

#[cfg(feature = "default-client")]
static TESLA_CLIENT: Lazy<ArcSwap<TeslaClient>> =
    Lazy::new(|| ArcSwap::new(Arc::new(TeslaClient::default())));

/// Replaces the process-wide client returned by [`instance`].
///
/// Typically called at startup with a client carrying the account's access
/// token. Clients already handed out by [`instance`] keep their old
/// configuration.
#[cfg(feature = "default-client")]
pub fn initialize(client: TeslaClient) {
    TESLA_CLIENT.store(Arc::new(client));
}

/// Fetches the process-wide client.
///
/// Until [`initialize`] runs this is [`TeslaClient::default`]: the public
/// Owner API origin and no default access token.
#[cfg(feature = "default-client")]
pub fn instance() -> Arc<TeslaClient> {
    TESLA_CLIENT.load_full()
}

/// Builder for Tesla clients.
///
/// All input is validated in [`build`](TeslaClientBuilder::build); building
/// never touches the network.
#[derive(Default)]
pub struct TeslaClientBuilder {
    base_uri: Option<String>,
    access_token: Option<String>,
    timeout: Option<Duration>,
    user_agent: Option<String>,
    http_client: Option<ReqwestClient>,
    transport: Option<Arc<dyn HttpTransport>>,
}

impl TeslaClientBuilder {
    /// Sets the API origin. Defaults to [`DEFAULT_BASE_URI`].
    pub fn base_uri(mut self, uri: impl Into<String>) -> Self {
        self.base_uri = Some(uri.into());
        self
    }

    /// Sets the access token used when a call does not supply its own.
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.access_token = Some(token.into());
        self
    }

    /// Sets the access token from an environment variable, if it is set.
    pub fn access_token_from_env(mut self, var_name: &str) -> Self {
        if let Ok(token) = std::env::var(var_name) {
            self.access_token = Some(token);
        }
        self
    }

    /// Sets the HTTP request timeout of the default transport.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a custom user agent string for the default transport.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Sets a custom reqwest client (e.g., one with default auth headers).
    pub fn http_client(mut self, http_client: ReqwestClient) -> Self {
        self.http_client = Some(http_client);
        self
    }

    /// Sets a fully custom transport. Takes precedence over
    /// [`http_client`](TeslaClientBuilder::http_client).
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> TeslaResult<TeslaClient> {
        let base_uri = self.base_uri.as_deref().unwrap_or(DEFAULT_BASE_URI);
        let base_uri = Url::parse(base_uri)
            .map_err(|e| TeslaError::ConfigurationError(format!("Invalid base URI: {e}")))?;

        if base_uri.cannot_be_a_base() || !matches!(base_uri.scheme(), "http" | "https") {
            return Err(TeslaError::ConfigurationError(format!(
                "Base URI must be an http(s) URL: {base_uri}"
            )));
        }

        let access_token = match self.access_token {
            Some(token) if token.trim().is_empty() => {
                return Err(TeslaError::ConfigurationError(
                    "Access token must not be blank".into(),
                ))
            }
            Some(token) => Some(Arc::new(SecretString::from(token))),
            None => None,
        };

        let transport: Arc<dyn HttpTransport> = match (self.transport, self.http_client) {
            (Some(transport), _) => transport,
            (None, Some(http_client)) => Arc::new(ReqwestTransport::new(http_client)),
            (None, None) => {
                let user_agent = self
                    .user_agent
                    .as_deref()
                    .unwrap_or(concat!("tesla-client/", env!("CARGO_PKG_VERSION")));

                let mut builder = ReqwestClient::builder().user_agent(user_agent);
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }

                let http_client = builder.build().map_err(|e| {
                    TeslaError::ConfigurationError(format!("Failed to create HTTP client: {e}"))
                })?;
                Arc::new(ReqwestTransport::new(http_client))
            }
        };

        Ok(TeslaClient {
            base_uri,
            access_token,
            transport,
        })
    }
}

/// The main client for the Tesla Owner API.
///
/// Holds only immutable configuration, so clones are cheap and may be used
/// from many tasks at once.
#[derive(Clone)]
pub struct TeslaClient {
    base_uri: Url,
    access_token: Option<Arc<SecretString>>,
    transport: Arc<dyn HttpTransport>,
}

impl Default for TeslaClient {
    fn default() -> Self {
        TeslaClient::new().expect("Failed to create default TeslaClient")
    }
}

impl fmt::Debug for TeslaClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TeslaClient")
            .field("base_uri", &self.base_uri.as_str())
            .field("access_token", &self.access_token.is_some())
            .field("transport", &self.transport)
            .finish()
    }
}

impl TeslaClient {
    pub fn builder() -> TeslaClientBuilder {
        TeslaClientBuilder::default()
    }

    /// Creates a client for the public Owner API with no default access
    /// token and the default transport.
    pub fn new() -> TeslaResult<Self> {
        Self::builder().build()
    }

    /// Creates a client for the public Owner API using `access_token` by
    /// default.
    pub fn with_access_token(access_token: impl Into<String>) -> TeslaResult<Self> {
        Self::builder().access_token(access_token).build()
    }

    /// Returns a copy of this client that uses `access_token` by default.
    ///
    /// Handy after a token exchange.
    pub fn authenticated(&self, access_token: impl Into<String>) -> TeslaResult<Self> {
        let token = access_token.into();
        if token.trim().is_empty() {
            return Err(TeslaError::InvalidArgument(
                "access token must not be blank".into(),
            ));
        }

        let mut client = self.clone();
        client.access_token = Some(Arc::new(SecretString::from(token)));
        Ok(client)
    }

    /// The base URI every request is built from.
    pub fn base_uri(&self) -> &Url {
        &self.base_uri
    }

    /// Returns true if the client was built with a default access token.
    pub fn has_default_access_token(&self) -> bool {
        self.access_token.is_some()
    }

    pub(crate) fn default_access_token(&self) -> Option<&str> {
        self.access_token.as_deref().map(|token| token.expose_secret())
    }

    pub(crate) fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }

    /// Exchanges account credentials for an access token.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &tesla_client::TeslaClient) -> Result<(), tesla_client::TeslaError> {
    /// let token = client
    ///     .request_access_token("client-id", "client-secret", "me@example.com", "hunter2")
    ///     .send()
    ///     .await?
    ///     .into_data();
    ///
    /// let client = client.authenticated(token.access_token)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn request_access_token(
        &self,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> AccessTokenBuilder {
        AccessTokenBuilder::new(
            self.clone(),
            AccessTokenRequest::new(client_id, client_secret, email, password),
        )
    }

    /// Lists the vehicles associated with the account.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example(client: &tesla_client::TeslaClient) -> Result<(), tesla_client::TeslaError> {
    /// for vehicle in client.vehicles().payload().await? {
    ///     println!("{vehicle}");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn vehicles(&self) -> ApiRequest<Vec<Vehicle>> {
        ApiRequest::new(self.clone(), Operation::ListVehicles)
    }

    /// Gets the reads and commands for the vehicle with the given
    /// [`Vehicle::id`].
    pub fn vehicle(&self, vehicle_id: u64) -> VehicleHandler {
        VehicleHandler::new(self.clone(), vehicle_id)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    #[tokio::test]
    async fn default_client_uses_builder_transport() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/1/vehicles"))
            .and(header(
                "user-agent",
                concat!("tesla-client/", env!("CARGO_PKG_VERSION")),
            ))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "response": [] })))
            .expect(2)
            .mount(&mock_server)
            .await;

        let base_uri = Url::parse(&mock_server.uri()).unwrap();
        for client in [TeslaClient::default(), TeslaClient::new().unwrap()] {
            assert_eq!(client.base_uri.as_str(), DEFAULT_BASE_URI);
            assert!(client.access_token.is_none());

            let client = TeslaClient {
                base_uri: base_uri.clone(),
                ..client
            };
            assert!(client.vehicles().payload().await.unwrap().is_empty());
        }
    }
}
