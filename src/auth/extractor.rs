// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Axum extractor for authenticated users.
//!
//! Use the `Auth` extractor in handlers to require authentication:
//!
//! ```rust,ignore
//! async fn my_handler(Auth(user): Auth) -> impl IntoResponse {
//!     // user is the live User record for the token's subject
//! }
//! ```
//!
//! The extracted value is the full store record, re-resolved on every
//! request, so a token whose account has disappeared is rejected even if
//! the signature is still valid.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};

use super::AuthError;
use crate::models::User;
use crate::state::AppState;

pub struct Auth(pub User);

impl FromRequestParts<AppState> for Auth {
    type Rejection = AuthError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .ok_or(AuthError::MissingAuthHeader)?
            .to_str()
            .map_err(|_| AuthError::InvalidAuthHeader)?;

        let token = parse_bearer(header)?;
        let user_id = state.tokens.verify(token)?;

        let user = state
            .store
            .get_user_by_id(user_id)
            .await
            .map_err(|_| AuthError::UnknownUser)?;

        Ok(Auth(user))
    }
}

/// Require the exact two-token `Bearer <token>` shape; the scheme is
/// case-insensitive.
fn parse_bearer(header: &str) -> Result<&str, AuthError> {
    let mut parts = header.split(' ');
    let scheme = parts.next().unwrap_or_default();
    let token = parts.next().unwrap_or_default();

    if !scheme.eq_ignore_ascii_case("bearer") || token.is_empty() || parts.next().is_some() {
        return Err(AuthError::InvalidAuthHeader);
    }

    Ok(token)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::http::Request;
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;
    use crate::auth::TokenService;
    use crate::state::AppState;
    use crate::store::{MemoryStore, Store, UserStore};

    fn test_state() -> AppState {
        let store: Arc<dyn Store> = Arc::new(MemoryStore::new());
        let tokens = TokenService::new("extractor-test-secret", 24).unwrap();
        AppState::new(store, tokens)
    }

    async fn seed_user(state: &AppState, username: &str) -> User {
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            public_key: "pk".to_string(),
            public_key_sign: String::new(),
            created_at: Utc::now(),
        };
        state.store.create_user(&user).await.unwrap();
        user
    }

    fn parts_with_header(value: Option<&str>) -> Parts {
        let mut builder = Request::builder().uri("/test");
        if let Some(value) = value {
            builder = builder.header("Authorization", value);
        }
        builder.body(()).unwrap().into_parts().0
    }

    #[test]
    fn bearer_shape_is_strict_but_scheme_is_case_insensitive() {
        assert_eq!(parse_bearer("Bearer abc").unwrap(), "abc");
        assert_eq!(parse_bearer("bearer abc").unwrap(), "abc");
        assert_eq!(parse_bearer("BEARER abc").unwrap(), "abc");

        assert!(parse_bearer("abc").is_err());
        assert!(parse_bearer("Bearer").is_err());
        assert!(parse_bearer("Bearer ").is_err());
        assert!(parse_bearer("Bearer abc extra").is_err());
        assert!(parse_bearer("Basic abc").is_err());
    }

    #[tokio::test]
    async fn missing_header_is_rejected() {
        let state = test_state();
        let mut parts = parts_with_header(None);

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::MissingAuthHeader)));
    }

    #[tokio::test]
    async fn valid_token_resolves_the_live_user() {
        let state = test_state();
        let user = seed_user(&state, "alice").await;
        let token = state.tokens.issue(user.id).unwrap();
        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

        let Auth(resolved) = Auth::from_request_parts(&mut parts, &state).await.unwrap();
        assert_eq!(resolved.id, user.id);
        assert_eq!(resolved.username, "alice");
    }

    #[tokio::test]
    async fn token_for_deleted_account_is_rejected() {
        let state = test_state();
        // Valid signature, but the subject was never persisted.
        let token = state.tokens.issue(Uuid::new_v4()).unwrap();
        let mut parts = parts_with_header(Some(&format!("Bearer {token}")));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::UnknownUser)));
    }

    #[tokio::test]
    async fn garbage_token_is_rejected() {
        let state = test_state();
        let mut parts = parts_with_header(Some("Bearer not.a.token"));

        let result = Auth::from_request_parts(&mut parts, &state).await;
        assert!(matches!(result, Err(AuthError::InvalidToken)));
    }
}
