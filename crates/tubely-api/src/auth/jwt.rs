//! HS256 access tokens
//!
//! Tokens carry the user id in `sub` and are issued by `tubely-access`.

use crate::auth::models::JwtClaims;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tubely_core::AppError;
use uuid::Uuid;

pub const TOKEN_ISSUER: &str = "tubely-access";

#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    expiry: Duration,
}

impl JwtService {
    pub fn new(secret: &str, expiry_hours: i64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[TOKEN_ISSUER]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
            expiry: Duration::hours(expiry_hours),
        }
    }

    /// Issue an access token for `user_id`
    pub fn make_token(&self, user_id: Uuid) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = JwtClaims {
            iss: TOKEN_ISSUER.to_string(),
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.expiry).timestamp(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign JWT: {}", e)))
    }

    /// Validate a token and return the user id it was issued for
    pub fn validate(&self, token: &str) -> Result<Uuid, AppError> {
        let data = decode::<JwtClaims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "JWT rejected");
            AppError::Unauthorized("Couldn't validate JWT".to_string())
        })?;

        Uuid::parse_str(&data.claims.sub)
            .map_err(|_| AppError::Unauthorized("Couldn't validate JWT".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "an-hs256-secret-that-is-32-chars!!";

    #[test]
    fn issued_tokens_validate() {
        let jwt = JwtService::new(SECRET, 1);
        let user_id = Uuid::new_v4();

        let token = jwt.make_token(user_id).unwrap();
        assert_eq!(jwt.validate(&token).unwrap(), user_id);
    }

    #[test]
    fn rejects_foreign_secret_and_garbage() {
        let token = JwtService::new(SECRET, 1).make_token(Uuid::new_v4()).unwrap();
        let other = JwtService::new("a-completely-different-secret-value", 1);

        assert!(matches!(other.validate(&token), Err(AppError::Unauthorized(_))));
        assert!(matches!(other.validate("not.a.jwt"), Err(AppError::Unauthorized(_))));
    }

    #[test]
    fn rejects_expired_tokens() {
        let jwt = JwtService::new(SECRET, -2);
        let token = jwt.make_token(Uuid::new_v4()).unwrap();

        assert!(matches!(jwt.validate(&token), Err(AppError::Unauthorized(_))));
    }
}
