// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Registration, login and public-key lookup.

use std::sync::Arc;

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use uuid::Uuid;

use super::ServiceError;
use crate::auth::TokenService;
use crate::models::{PublicKeyResponse, RegisterRequest, User};
use crate::store::{Store, StoreError};

#[derive(Clone)]
pub struct UserService {
    store: Arc<dyn Store>,
    tokens: TokenService,
}

impl UserService {
    pub fn new(store: Arc<dyn Store>, tokens: TokenService) -> Self {
        Self { store, tokens }
    }

    /// Create a new identity.
    ///
    /// The duplicate pre-check here shortcuts the common sequential case;
    /// under concurrent registration of the same username the store's
    /// uniqueness constraint is the final arbiter, and both paths surface
    /// the same [`ServiceError::Duplicate`]. The plaintext password is
    /// hashed immediately and never stored or logged.
    pub async fn register(&self, req: RegisterRequest) -> Result<User, ServiceError> {
        if req.username.is_empty() || req.password.is_empty() || req.public_key.is_empty() {
            return Err(ServiceError::InvalidInput(
                "username, password and publicKey are required".to_string(),
            ));
        }
        if req.password.len() < 8 {
            return Err(ServiceError::InvalidInput(
                "password must be at least 8 characters".to_string(),
            ));
        }

        if self.store.get_user_by_username(&req.username).await.is_ok() {
            return Err(ServiceError::Duplicate(req.username));
        }

        let password_hash = hash_password(&req.password)?;
        let user = User {
            id: Uuid::new_v4(),
            username: req.username,
            password_hash,
            public_key: req.public_key,
            public_key_sign: req.public_key_sign,
            created_at: Utc::now(),
        };

        match self.store.create_user(&user).await {
            Ok(()) => Ok(user),
            Err(StoreError::Duplicate(username)) => Err(ServiceError::Duplicate(username)),
            Err(other) => Err(ServiceError::Storage(other)),
        }
    }

    /// Authenticate and mint a session token.
    ///
    /// Unknown usernames and wrong passwords are indistinguishable to the
    /// caller: any lookup failure and any hash mismatch produce the same
    /// [`ServiceError::InvalidCredentials`].
    pub async fn login(&self, username: &str, password: &str) -> Result<String, ServiceError> {
        let user = self
            .store
            .get_user_by_username(username)
            .await
            .map_err(|_| ServiceError::InvalidCredentials)?;

        if !verify_password(password, &user.password_hash) {
            return Err(ServiceError::InvalidCredentials);
        }

        self.tokens
            .issue(user.id)
            .map_err(|e| ServiceError::Internal(e.to_string()))
    }

    pub async fn get_public_key(&self, username: &str) -> Result<PublicKeyResponse, ServiceError> {
        match self.store.get_user_by_username(username).await {
            Ok(user) => Ok(PublicKeyResponse::from(&user)),
            Err(StoreError::NotFound) => {
                Err(ServiceError::NotFound("user not found".to_string()))
            }
            Err(other) => Err(ServiceError::Storage(other)),
        }
    }

    /// Public-safe projection of every user, ordered by username.
    pub async fn list_users(&self) -> Result<Vec<PublicKeyResponse>, ServiceError> {
        let users = self.store.list_users().await?;
        Ok(users.iter().map(PublicKeyResponse::from).collect())
    }
}

/// Argon2id PHC-format hash with a fresh random salt; the cost parameters
/// are the library defaults and never attacker-tunable.
fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ServiceError::Internal(format!("password hashing failed: {e}")))
}

fn verify_password(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash)
        .map(|parsed| {
            Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok()
        })
        .unwrap_or(false)
}
