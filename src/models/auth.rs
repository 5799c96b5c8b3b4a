use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Credentials for the OAuth password grant.
pub struct AccessTokenRequest {
    /// The OAuth client id.
    pub client_id: String,
    /// The OAuth client secret.
    pub client_secret: SecretString,
    /// The account email address.
    pub email: String,
    /// The account password.
    pub password: SecretString,
}

impl AccessTokenRequest {
    pub const GRANT_TYPE: &'static str = "password";

    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            email: email.into(),
            password: SecretString::from(password.into()),
        }
    }

    /// The five form fields sent to the token endpoint, in order.
    pub(crate) fn form_fields(&self) -> [(&'static str, &str); 5] {
        [
            ("grant_type", Self::GRANT_TYPE),
            ("client_id", self.client_id.as_str()),
            ("client_secret", self.client_secret.expose_secret()),
            ("email", self.email.as_str()),
            ("password", self.password.expose_secret()),
        ]
    }
}

impl fmt::Debug for AccessTokenRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessTokenRequest")
            .field("client_id", &self.client_id)
            .field("email", &self.email)
            .finish_non_exhaustive()
    }
}

/// Token payload returned by the `oauth/token` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessTokenResponse {
    /// Bearer token for subsequent requests.
    pub access_token: String,
    /// Token type, normally `"bearer"`.
    pub token_type: String,
    /// Lifetime of the token in seconds.
    pub expires_in: i64,
    /// Token used to obtain a new access token.
    pub refresh_token: String,
    /// Unix timestamp at which the token was issued.
    pub created_at: i64,
}
