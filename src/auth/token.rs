// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Session token issuance and verification.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::AuthError;
use crate::config::ConfigError;

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// Subject: the user id.
    sub: String,
    /// Issued-at, Unix seconds.
    iat: i64,
    /// Expiry, Unix seconds.
    exp: i64,
}

/// Issues and verifies bearer tokens.
///
/// The secret is loaded once at startup and never rotated at runtime.
/// Verification accepts HS256 only; a token whose header claims any other
/// algorithm fails regardless of its signature.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    ttl: Duration,
}

impl TokenService {
    /// An empty secret is a configuration fault and is rejected here, at
    /// construction, not at first use.
    pub fn new(secret: &str, ttl_hours: i64) -> Result<Self, ConfigError> {
        if secret.is_empty() {
            return Err(ConfigError::MissingJwtSecret);
        }

        Ok(Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
            ttl: Duration::hours(ttl_hours),
        })
    }

    /// Produce a signed token asserting `sub = user_id`, valid for the
    /// configured window from now.
    pub fn issue(&self, user_id: Uuid) -> Result<String, AuthError> {
        self.issue_with_ttl(user_id, self.ttl)
    }

    fn issue_with_ttl(&self, user_id: Uuid, ttl: Duration) -> Result<String, AuthError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AuthError::TokenCreation(e.to_string()))
    }

    /// Check signature, algorithm and expiry, then extract the subject id.
    pub fn verify(&self, token: &str) -> Result<Uuid, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| AuthError::InvalidToken)?;

        Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::MalformedSubject)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("test-secret", 24).unwrap()
    }

    #[test]
    fn empty_secret_rejected_at_construction() {
        assert!(matches!(
            TokenService::new("", 24),
            Err(ConfigError::MissingJwtSecret)
        ));
    }

    #[test]
    fn issue_then_verify_round_trips_the_user_id() {
        let svc = service();
        let user_id = Uuid::new_v4();

        let token = svc.issue(user_id).unwrap();
        assert_eq!(token.split('.').count(), 3);
        assert_eq!(svc.verify(&token).unwrap(), user_id);
    }

    #[test]
    fn token_signed_with_other_secret_fails() {
        let token = TokenService::new("other-secret", 24)
            .unwrap()
            .issue(Uuid::new_v4())
            .unwrap();

        assert!(matches!(
            service().verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn expired_token_fails() {
        let svc = service();
        // Expired well past the verifier's clock-skew leeway.
        let token = svc.issue_with_ttl(Uuid::new_v4(), Duration::hours(-2)).unwrap();

        assert!(matches!(svc.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn token_claiming_another_hmac_algorithm_fails() {
        let svc = service();
        let claims = Claims {
            sub: Uuid::new_v4().to_string(),
            iat: Utc::now().timestamp(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS384),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        assert!(matches!(svc.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn token_claiming_an_asymmetric_algorithm_fails() {
        use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

        // Hand-built token whose header claims RS256.
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"RS256","typ":"JWT"}"#);
        let claims = format!(
            r#"{{"sub":"{}","iat":0,"exp":9999999999}}"#,
            Uuid::new_v4()
        );
        let claims = URL_SAFE_NO_PAD.encode(claims.as_bytes());
        let token = format!("{header}.{claims}.bm90LWEtc2lnbmF0dXJl");

        assert!(matches!(
            service().verify(&token),
            Err(AuthError::InvalidToken)
        ));
    }

    #[test]
    fn non_uuid_subject_fails_as_malformed() {
        let svc = service();
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            iat: Utc::now().timestamp(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret("test-secret".as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            svc.verify(&token),
            Err(AuthError::MalformedSubject)
        ));
    }
}
