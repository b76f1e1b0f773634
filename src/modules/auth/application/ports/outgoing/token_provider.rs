use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminIdentity;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token has expired")]
    TokenExpired,
    #[error("Token is not yet valid")]
    TokenNotYetValid,
    #[error("Invalid token signature")]
    InvalidSignature,
    #[error("Malformed token")]
    MalformedToken,
    #[error("Token encoding error: {0}")]
    EncodingError(String),
}

/// JWT claims for an admin session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: Uuid,
    pub username: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    pub iss: String,
}

impl TokenClaims {
    pub fn identity(&self) -> AdminIdentity {
        AdminIdentity {
            id: self.sub,
            username: self.username.clone(),
            role: self.role.clone(),
        }
    }
}

pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, identity: &AdminIdentity) -> Result<String, TokenError>;
    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
