//! Header sets for public and signed requests.

use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};

use crate::auth::signature::{has_content, sign_request};
use crate::auth::Credentials;
use crate::error::KunaError;

/// Header carrying the request nonce.
pub const NONCE_HEADER: &str = "kun-nonce";
/// Header carrying the public key.
pub const API_KEY_HEADER: &str = "kun-apikey";
/// Header carrying the hex signature.
pub const SIGNATURE_HEADER: &str = "kun-signature";

const APPLICATION_JSON: HeaderValue = HeaderValue::from_static("application/json");

/// Headers for an unauthenticated request.
///
/// `Content-Type` is only set when `body` carries parameters.
pub fn public_headers(body: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, APPLICATION_JSON);
    if has_content(body) {
        headers.insert(CONTENT_TYPE, APPLICATION_JSON);
    }
    headers
}

/// Headers for a signed request: the public set plus nonce, key and signature.
pub fn signed_headers(
    credentials: &Credentials,
    path: &str,
    nonce: u64,
    body: &str,
) -> Result<HeaderMap, KunaError> {
    let signature = sign_request(credentials, path, nonce, body)?;

    let api_key = HeaderValue::from_str(&credentials.public_key).map_err(|_| {
        KunaError::InvalidCredential("public key is not a valid header value".to_string())
    })?;

    let mut headers = public_headers(body);
    headers.insert(HeaderName::from_static(NONCE_HEADER), HeaderValue::from(nonce));
    headers.insert(HeaderName::from_static(API_KEY_HEADER), api_key);
    headers.insert(
        HeaderName::from_static(SIGNATURE_HEADER),
        HeaderValue::from_str(&signature)
            .map_err(|e| KunaError::InvalidResponse(format!("unencodable signature: {e}")))?,
    );
    Ok(headers)
}
