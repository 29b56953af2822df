//! Authentication module for Kuna API.
//!
//! This module provides:
//! - Credential management with secure secret storage and 40-character validation
//! - Millisecond nonce generation
//! - HMAC-SHA384 signature generation and the signed header set

mod credentials;
mod headers;
mod nonce;
mod signature;

pub use credentials::{Credentials, CredentialsProvider, EnvCredentials, KEY_LENGTH, StaticCredentials};
pub use headers::{API_KEY_HEADER, NONCE_HEADER, SIGNATURE_HEADER, public_headers, signed_headers};
pub use nonce::{IncreasingNonce, NonceProvider, TimestampNonce};
pub use signature::{EMPTY_BODY, canonical_body, has_content, sign_request};
