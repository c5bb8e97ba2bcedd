// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Relational store backed by SQLite via sqlx.
//!
//! The `users.username` UNIQUE constraint is the final arbiter of identity
//! uniqueness: a unique-violation on insert maps to
//! [`StoreError::Duplicate`], the same kind the service-level pre-check
//! produces. Every write is a single statement, so statement-level
//! atomicity covers the no-partial-write requirement.
//!
//! WAL journal mode and foreign-key enforcement are configured at
//! connection time, not inside a migration: SQLite rejects changing
//! `journal_mode` inside a transaction and sqlx wraps every migration in
//! one.

use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool};
use uuid::Uuid;

use super::{StoreError, TransferStore, UserStore};
use crate::models::{Transfer, User};

#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    /// Open (or create) the database at `url` and run pending migrations.
    pub async fn connect(url: &str) -> Result<Self, StoreError> {
        let opts = SqliteConnectOptions::from_str(url)
            .map_err(|e| StoreError::Unavailable(e.to_string()))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(true);

        let pool = SqlitePool::connect_with(opts).await?;

        sqlx::migrate!("./migrations")
            .run(&pool)
            .await
            .map_err(|e| StoreError::Unavailable(e.to_string()))?;

        Ok(Self { pool })
    }
}

#[async_trait]
impl UserStore for SqliteStore {
    async fn create_user(&self, user: &User) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO users (id, username, password_hash, public_key, public_key_sign, created_at)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(&user.public_key)
        .bind(&user.public_key_sign)
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if e.as_database_error()
                .is_some_and(|db| db.is_unique_violation())
            {
                StoreError::Duplicate(user.username.clone())
            } else {
                e.into()
            }
        })?;

        Ok(())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, public_key, public_key_sign, created_at
             FROM users
             WHERE username = ?",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<User, StoreError> {
        sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, public_key, public_key_sign, created_at
             FROM users
             WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, public_key, public_key_sign, created_at
             FROM users
             ORDER BY username",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users)
    }
}

#[async_trait]
impl TransferStore for SqliteStore {
    async fn create_transfer(&self, transfer: &Transfer) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO transfers (id, source_user_id, dest_user_id, link_to_enc_file, skb, sig, created_at)
             VALUES (?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(transfer.id)
        .bind(transfer.source_user_id)
        .bind(transfer.dest_user_id)
        .bind(&transfer.link_to_enc_file)
        .bind(&transfer.skb)
        .bind(&transfer.sig)
        .bind(transfer.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get_transfers_by_dest_user(
        &self,
        dest_user_id: Uuid,
    ) -> Result<Vec<Transfer>, StoreError> {
        let transfers = sqlx::query_as::<_, Transfer>(
            "SELECT id, source_user_id, dest_user_id, link_to_enc_file, skb, sig, created_at
             FROM transfers
             WHERE dest_user_id = ?
             ORDER BY created_at DESC",
        )
        .bind(dest_user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(transfers)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tempfile::TempDir;

    use super::*;
    use crate::store::{conformance, Store};

    async fn open_test_store() -> (SqliteStore, TempDir) {
        let dir = TempDir::new().expect("create temp dir");
        let url = format!("sqlite://{}", dir.path().join("test.db").display());
        let store = SqliteStore::connect(&url).await.expect("open store");
        (store, dir)
    }

    #[tokio::test]
    async fn user_store_contract() {
        let (store, _dir) = open_test_store().await;
        conformance::user_store_contract(&store).await;
    }

    #[tokio::test]
    async fn transfer_store_contract() {
        let (store, _dir) = open_test_store().await;
        conformance::transfer_store_contract(&store).await;
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn concurrent_registration_creates_exactly_one_user() {
        let (store, _dir) = open_test_store().await;
        let store: Arc<dyn Store> = Arc::new(store);
        conformance::concurrent_registration_contract(store).await;
    }
}
