//! HMAC-SHA384 signature generation for Kuna API authentication.
//!
//! Kuna private endpoints require a signature computed as:
//! ```text
//! hex(HMAC-SHA384(path + nonce + body, secret_key))
//! ```
//!
//! `path` carries the `/v3` prefix and `body` is the exact JSON text sent
//! with the request (`{}` when there are no parameters).

use hmac::{Hmac, Mac};
use serde::Serialize;
use sha2::Sha384;

use crate::auth::Credentials;
use crate::error::KunaError;

type HmacSha384 = Hmac<Sha384>;

/// Body text used when a request carries no parameters.
pub const EMPTY_BODY: &str = "{}";

/// Serialize a request body into the exact text that is both signed and sent.
///
/// Unit-like bodies (`null`) collapse to `{}`.
pub fn canonical_body<B>(body: &B) -> Result<String, KunaError>
where
    B: Serialize + ?Sized,
{
    let text = serde_json::to_string(body)?;
    if text == "null" {
        Ok(EMPTY_BODY.to_string())
    } else {
        Ok(text)
    }
}

/// Whether a canonical body carries any parameters.
pub fn has_content(body: &str) -> bool {
    !body.is_empty() && body != EMPTY_BODY
}

/// Sign a request for Kuna's private API.
///
/// The credentials are validated first; invalid credentials fail with
/// [`KunaError::InvalidCredential`] before anything is hashed.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `path` - The API path including version prefix (e.g., "/v3/auth/r/wallets")
/// * `nonce` - The nonce value for this request
/// * `body` - The canonical JSON body
///
/// # Returns
///
/// Hex-encoded HMAC-SHA384 signature.
///
/// # Example
///
/// ```rust
/// use kuna_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("a".repeat(40), "b".repeat(40));
/// let signature = sign_request(&credentials, "/v3/auth/r/wallets", 1616492376594, "{}")?;
/// assert_eq!(signature.len(), 96);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    path: &str,
    nonce: u64,
    body: &str,
) -> Result<String, KunaError> {
    credentials.validate()?;

    let mut hmac = HmacSha384::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| KunaError::InvalidCredential(format!("Invalid HMAC key: {e}")))?;
    hmac.update(path.as_bytes());
    hmac.update(nonce.to_string().as_bytes());
    hmac.update(body.as_bytes());

    Ok(hex::encode(hmac.finalize().into_bytes()))
}
