use std::env;

/// Admin sessions last 24 hours; there is no refresh flow.
pub const ACCESS_TOKEN_EXPIRY_SECONDS: i64 = 86_400;

const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub access_token_expiry: i64, // seconds
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum JwtConfigError {
    #[error("JWT_SECRET must be set")]
    MissingSecret,
    #[error("JWT_SECRET must be at least 32 characters long for HS256")]
    SecretTooShort,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables
    pub fn from_env() -> Result<Self, JwtConfigError> {
        let secret_key = env::var("JWT_SECRET").map_err(|_| JwtConfigError::MissingSecret)?;
        let issuer = env::var("JWT_ISSUER").unwrap_or_else(|_| "portfolio".to_string());
        Self::new(secret_key, issuer)
    }

    pub fn new(secret_key: String, issuer: String) -> Result<Self, JwtConfigError> {
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(JwtConfigError::SecretTooShort);
        }

        Ok(Self {
            secret_key,
            issuer,
            access_token_expiry: ACCESS_TOKEN_EXPIRY_SECONDS,
        })
    }
}
