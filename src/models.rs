// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Domain records and API wire types.
//!
//! `User` and `Transfer` are the persisted aggregates. Neither derives
//! `Serialize`: everything leaving the service goes through a response
//! type below, which is how the password hash stays off the wire.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A registered identity.
///
/// `id` and `username` are immutable once created. `public_key` and
/// `public_key_sign` are opaque strings stored as given; the server never
/// interprets key material.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    pub public_key: String,
    pub public_key_sign: String,
    pub created_at: DateTime<Utc>,
}

/// Metadata for one directed file transfer.
///
/// Append-only: there is no update or delete. `link_to_enc_file`, `skb`
/// (wrapped symmetric key) and `sig` are opaque to the server.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Transfer {
    pub id: Uuid,
    pub source_user_id: Uuid,
    pub dest_user_id: Uuid,
    pub link_to_enc_file: String,
    pub skb: String,
    pub sig: String,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Request types
// =============================================================================

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub public_key: String,
    /// Secondary signing key; optional at registration.
    #[serde(default)]
    pub public_key_sign: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTransferRequest {
    /// Username of the recipient.
    #[serde(rename = "destUser")]
    pub dest_user: String,
    pub link_to_enc_file: String,
    pub skb: String,
    pub sig: String,
}

// =============================================================================
// Response types
// =============================================================================

/// Response for POST /v1/users/login.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

/// Public projection of a created user (registration response).
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: Uuid,
    pub username: String,
    pub public_key: String,
    pub public_key_sign: String,
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            public_key: user.public_key.clone(),
            public_key_sign: user.public_key_sign.clone(),
            created_at: user.created_at,
        }
    }
}

/// Public key material for one user; also the element type of GET /v1/users.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PublicKeyResponse {
    pub username: String,
    pub public_key: String,
    pub public_key_sign: String,
}

impl From<&User> for PublicKeyResponse {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            public_key: user.public_key.clone(),
            public_key_sign: user.public_key_sign.clone(),
        }
    }
}

/// Caller-facing transfer record: usernames instead of internal ids.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransferMetadata {
    pub transfer_id: Uuid,
    pub source_user: String,
    pub dest_user: String,
    pub link_to_enc_file: String,
    pub skb: String,
    pub sig: String,
    pub created_at: DateTime<Utc>,
}

impl TransferMetadata {
    pub fn from_transfer(transfer: &Transfer, source_user: &str, dest_user: &str) -> Self {
        Self {
            transfer_id: transfer.id,
            source_user: source_user.to_string(),
            dest_user: dest_user.to_string(),
            link_to_enc_file: transfer.link_to_enc_file.clone(),
            skb: transfer.skb.clone(),
            sig: transfer.sig.clone(),
            created_at: transfer.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn sample_user(username: &str) -> User {
        User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: "$argon2id$fake".to_string(),
            public_key: format!("pk-{username}"),
            public_key_sign: format!("pks-{username}"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn public_projection_excludes_password_hash() {
        let user = sample_user("alice");
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(json["username"], "alice");
        assert_eq!(json["publicKey"], "pk-alice");
        assert!(json.get("passwordHash").is_none());
        assert!(json.get("password_hash").is_none());
    }

    #[test]
    fn transfer_metadata_uses_wire_field_names() {
        let transfer = Transfer {
            id: Uuid::new_v4(),
            source_user_id: Uuid::new_v4(),
            dest_user_id: Uuid::new_v4(),
            link_to_enc_file: "uploads/a/b".to_string(),
            skb: "skb".to_string(),
            sig: "sig".to_string(),
            created_at: Utc::now(),
        };
        let json =
            serde_json::to_value(TransferMetadata::from_transfer(&transfer, "alice", "bob"))
                .unwrap();

        assert_eq!(json["transferId"], transfer.id.to_string());
        assert_eq!(json["sourceUser"], "alice");
        assert_eq!(json["destUser"], "bob");
        assert_eq!(json["linkToEncFile"], "uploads/a/b");
    }

    #[test]
    fn register_request_defaults_missing_sign_key() {
        let req: RegisterRequest = serde_json::from_str(
            r#"{"username":"alice","password":"password123","publicKey":"pubkeyA"}"#,
        )
        .unwrap();
        assert_eq!(req.public_key_sign, "");
    }
}
