//! Error types for the Kuna client library.

use thiserror::Error;

use crate::normalize::NormalizeError;

/// The main error type for all Kuna client operations.
#[derive(Error, Debug)]
pub enum KunaError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Kuna API answered with a non-success status
    #[error("Kuna API error: {0}")]
    Api(ApiError),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Credentials are missing or malformed; raised before any request is sent
    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    /// A KunaCode failed its embedded checksum
    #[error("Invalid KunaCode checksum: {0}")]
    InvalidChecksum(String),

    /// The response payload did not match the expected layout
    #[error("Malformed payload: {0}")]
    Normalize(#[from] NormalizeError),
}

impl KunaError {
    /// Whether the error came from the HTTP exchange itself (network, status or body decoding).
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            KunaError::Http(_)
                | KunaError::HttpMiddleware(_)
                | KunaError::Api(_)
                | KunaError::InvalidResponse(_)
                | KunaError::Json(_)
        )
    }
}

/// Error returned by the Kuna API in a non-2xx response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status code.
    pub status: u16,
    /// Messages reported by the exchange, e.g. `["signature_is_incorrect"]`.
    pub messages: Vec<String>,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.messages.is_empty() {
            write!(f, "HTTP {}", self.status)
        } else {
            write!(f, "HTTP {}: {}", self.status, self.messages.join(", "))
        }
    }
}

impl ApiError {
    /// Create a new API error from a status code and messages.
    pub fn new(status: u16, messages: Vec<String>) -> Self {
        Self { status, messages }
    }

    /// Parse an API error from a response body.
    ///
    /// Kuna reports failures either as `{"messages": [...]}` or as
    /// `{"message": "..."}`; anything else is kept verbatim as a single message.
    pub fn from_body(status: u16, body: &str) -> Self {
        #[derive(serde::Deserialize)]
        struct Envelope {
            #[serde(default)]
            messages: Vec<String>,
            #[serde(default)]
            message: Option<String>,
        }

        let messages = match serde_json::from_str::<Envelope>(body) {
            Ok(envelope) => {
                let mut messages = envelope.messages;
                messages.extend(envelope.message);
                messages
            }
            Err(_) if body.trim().is_empty() => Vec::new(),
            Err(_) => vec![body.trim().to_string()],
        };

        Self::new(status, messages)
    }

    /// Check whether the exchange rejected the request signature.
    pub fn is_invalid_signature(&self) -> bool {
        self.has_message(error_codes::SIGNATURE_IS_INCORRECT)
    }

    /// Check whether the exchange rejected the nonce.
    pub fn is_invalid_nonce(&self) -> bool {
        self.has_message(error_codes::NONCE_IS_INCORRECT)
    }

    /// Check whether the API key is unknown to the exchange.
    pub fn is_invalid_key(&self) -> bool {
        self.has_message(error_codes::API_KEY_NOT_FOUND)
    }

    /// Check whether the balance was too low for the operation.
    pub fn is_insufficient_funds(&self) -> bool {
        self.has_message(error_codes::INSUFFICIENT_FUNDS)
    }

    /// Check whether the referenced order does not exist.
    pub fn is_order_not_found(&self) -> bool {
        self.has_message(error_codes::ORDER_NOT_FOUND)
    }

    /// Check whether the KunaCode is unknown to the exchange.
    pub fn is_kuna_code_not_found(&self) -> bool {
        self.has_message(error_codes::KUNA_CODE_NOT_FOUND)
    }

    fn has_message(&self, code: &str) -> bool {
        self.messages.iter().any(|m| m == code)
    }
}

/// Known Kuna error messages for pattern matching.
pub mod error_codes {
    pub const SIGNATURE_IS_INCORRECT: &str = "signature_is_incorrect";
    pub const NONCE_IS_INCORRECT: &str = "nonce_is_incorrect";
    pub const API_KEY_NOT_FOUND: &str = "api_key_not_found";
    pub const INSUFFICIENT_FUNDS: &str = "insufficient_funds";
    pub const ORDER_NOT_FOUND: &str = "order_not_found";
    pub const KUNA_CODE_NOT_FOUND: &str = "kuna_code_not_found";
}
