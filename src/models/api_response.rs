use http::StatusCode;
use serde::{Deserialize, Serialize};

/// An HTTP response whose body was successfully decoded into `T`.
///
/// A `MessageResponse` only exists when decoding succeeded; a body that does
/// not match `T` surfaces as [`crate::TeslaError::DecodeError`] instead.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageResponse<T> {
    status: StatusCode,
    data: T,
}

impl<T> MessageResponse<T> {
    pub(crate) fn new(status: StatusCode, data: T) -> Self {
        Self { status, data }
    }

    /// The status code of the HTTP response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// The decoded body.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Consumes the response, returning the decoded body.
    pub fn into_data(self) -> T {
        self.data
    }
}

impl<T> MessageResponse<ResponseDataWrapper<T>> {
    /// The domain payload nested under the `response` field.
    pub fn payload(&self) -> &T {
        &self.data.response
    }

    /// Consumes the response, returning the domain payload.
    pub fn into_payload(self) -> T {
        self.data.response
    }
}

/// Standard `{ "response": ... }` envelope used by every Owner API endpoint.
///
/// The `response` field is required: a body without it fails to decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseDataWrapper<T> {
    /// The actual payload.
    pub response: T,
}
