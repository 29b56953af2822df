//! Credential management for Kuna API authentication.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;

use crate::error::KunaError;

/// Required length of both the public and the secret key.
pub const KEY_LENGTH: usize = 40;

/// API credentials containing the public and secret keys.
#[derive(Clone)]
pub struct Credentials {
    /// The public key, sent as `Kun-ApiKey`
    pub public_key: String,
    /// The secret key, only used for signing
    secret_key: SecretString,
}

impl Credentials {
    /// Create new credentials from a public and a secret key.
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            public_key: public_key.into(),
            secret_key: SecretString::from(secret_key.into()),
        }
    }

    /// Get the secret key for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.secret_key.expose_secret()
    }

    /// Check that both keys are present and exactly [`KEY_LENGTH`] characters long.
    pub fn validate(&self) -> Result<(), KunaError> {
        check_key("public key", &self.public_key)?;
        check_key("secret key", self.expose_secret())
    }
}

fn check_key(name: &str, key: &str) -> Result<(), KunaError> {
    if key.is_empty() {
        return Err(KunaError::InvalidCredential(format!("{name} is empty")));
    }
    let len = key.chars().count();
    if len != KEY_LENGTH {
        return Err(KunaError::InvalidCredential(format!(
            "{name} must be {KEY_LENGTH} characters, got {len}"
        )));
    }
    Ok(())
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("public_key", &self.public_key)
            .field("secret_key", &"[REDACTED]")
            .finish()
    }
}

/// Trait for providing API credentials.
///
/// Implement this trait to customize how credentials are retrieved,
/// for example from a secrets manager.
pub trait CredentialsProvider: Send + Sync {
    /// Get the credentials.
    fn get_credentials(&self) -> &Credentials;
}

/// Static credentials provider that holds credentials directly.
#[derive(Clone)]
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    /// Create a new static credentials provider.
    pub fn new(public_key: impl Into<String>, secret_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(public_key, secret_key),
        }
    }
}

impl CredentialsProvider for StaticCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

impl CredentialsProvider for Arc<StaticCredentials> {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}

/// Credentials provider that reads from environment variables.
///
/// By default, reads from `KUNA_PUBLIC_KEY` and `KUNA_SECRET_KEY`.
pub struct EnvCredentials {
    credentials: Credentials,
}

impl EnvCredentials {
    /// Try to create credentials from default environment variables.
    ///
    /// Returns `None` if the environment variables are not set.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars("KUNA_PUBLIC_KEY", "KUNA_SECRET_KEY")
    }

    /// Try to create credentials from custom environment variable names.
    ///
    /// Returns `None` if the environment variables are not set.
    pub fn try_from_env_vars(public_var: &str, secret_var: &str) -> Option<Self> {
        let public_key = std::env::var(public_var).ok()?;
        let secret_key = std::env::var(secret_var).ok()?;

        Some(Self {
            credentials: Credentials::new(public_key, secret_key),
        })
    }
}

impl CredentialsProvider for EnvCredentials {
    fn get_credentials(&self) -> &Credentials {
        &self.credentials
    }
}
