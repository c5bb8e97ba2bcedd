// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Persistence capabilities.
//!
//! The service layer only sees the traits in this module; the two
//! backends ([`MemoryStore`] and [`SqliteStore`]) are interchangeable and
//! run the same conformance suite. Stores own their rows exclusively and
//! are injected at construction, never built inside a service.

pub mod error;
pub mod memory;
pub mod sqlite;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Transfer, User};

/// Credential persistence.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user. Fails with [`StoreError::Duplicate`] when the
    /// username is already taken; afterwards either the full record exists
    /// or none of it does.
    async fn create_user(&self, user: &User) -> Result<(), StoreError>;

    async fn get_user_by_username(&self, username: &str) -> Result<User, StoreError>;

    async fn get_user_by_id(&self, id: Uuid) -> Result<User, StoreError>;

    /// All users ordered by username ascending; empty vec when none.
    async fn list_users(&self) -> Result<Vec<User>, StoreError>;
}

/// Transfer-metadata persistence. Transfers are append-only.
#[async_trait]
pub trait TransferStore: Send + Sync {
    async fn create_transfer(&self, transfer: &Transfer) -> Result<(), StoreError>;

    /// Transfers addressed to `dest_user_id`, newest first; empty vec when
    /// none. Never returns another user's rows.
    async fn get_transfers_by_dest_user(
        &self,
        dest_user_id: Uuid,
    ) -> Result<Vec<Transfer>, StoreError>;
}

/// Aggregate capability injected into services and application state.
pub trait Store: UserStore + TransferStore {}

impl<T: UserStore + TransferStore> Store for T {}
