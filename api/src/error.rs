//! Error taxonomy for backend calls and session persistence.
//!
//! DESIGN
//! ======
//! UI code only ever shows message text, so every variant carries enough to
//! render one. `ApiError::user_message` is the single place that decides what
//! a person sees for each failure class.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Text shown when the backend rejects a request without explaining why.
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Text shown when a request never reached the backend.
pub const NETWORK_FAILURE_MESSAGE: &str = "Network error. Please check your connection and try again.";

/// Text shown when the backend answered with a body we could not understand.
pub const DECODE_FAILURE_MESSAGE: &str = "Unexpected response from server.";

/// Failure of the underlying HTTP transport (DNS, CORS, connection reset...).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct TransportError(pub String);

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Failure writing to session storage.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// The storage backend is missing (no `window`, storage disabled...).
    #[error("session storage is unavailable")]
    Unavailable,
    /// The backend refused the write (quota, permissions, I/O).
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    /// A value could not be serialized for storage.
    #[error("failed to serialize `{key}`: {reason}")]
    Serialize { key: String, reason: String },
}

/// Error returned by every [`crate::ApiClient`] operation.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never completed.
    #[error("network error: {0}")]
    Network(#[from] TransportError),
    /// The backend answered with a non-2xx status.
    #[error("{}", .message.as_deref().unwrap_or(GENERIC_FAILURE_MESSAGE))]
    Http {
        status: u16,
        /// Backend-provided `error` or `message` text, if the body carried one.
        message: Option<String>,
    },
    /// A 2xx body did not match the endpoint's expected shape.
    #[error("failed to decode {endpoint} response: {reason}")]
    Decode { endpoint: &'static str, reason: String },
    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(String),
    /// Persisting session data failed.
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    /// True when the request never reached the backend.
    #[must_use]
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network(_))
    }

    /// HTTP status for backend rejections.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Message suitable for display, using `fallback` when the backend gave no text.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Network(_) => NETWORK_FAILURE_MESSAGE.to_owned(),
            Self::Http { message, .. } => message.clone().unwrap_or_else(|| fallback.to_owned()),
            Self::Decode { .. } => DECODE_FAILURE_MESSAGE.to_owned(),
            Self::Encode(_) | Self::Storage(_) => self.to_string(),
        }
    }

    /// Message suitable for display with the generic fallback.
    #[must_use]
    pub fn user_message(&self) -> String {
        self.message_or(GENERIC_FAILURE_MESSAGE)
    }
}

/// Extract the backend's explanation from a non-2xx body.
///
/// Prefers `error`, then `message`; anything else (including non-JSON bodies)
/// yields `None`.
#[must_use]
pub fn backend_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["error", "message"]
        .iter()
        .find_map(|field| {
            value
                .get(field)
                .and_then(serde_json::Value::as_str)
                .filter(|text| !text.is_empty())
        })
        .map(str::to_owned)
}
