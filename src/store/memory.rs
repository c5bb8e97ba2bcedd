// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! In-process store.
//!
//! A single reader/writer lock guards all state: lookups share a read
//! lock, while `create_user`/`create_transfer` take the write lock, so a
//! writer is exclusive with every other access. Users are indexed twice
//! (by id and by username) to keep both lookups O(1), mirroring the
//! relational backend's primary key + unique index.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{StoreError, TransferStore, UserStore};
use crate::models::{Transfer, User};

#[derive(Default)]
struct Inner {
    users_by_id: HashMap<Uuid, User>,
    users_by_username: HashMap<String, User>,
    transfers_by_dest: HashMap<Uuid, Vec<Transfer>>,
}

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, user: &User) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;

        if inner.users_by_username.contains_key(&user.username) {
            return Err(StoreError::Duplicate(user.username.clone()));
        }

        inner.users_by_id.insert(user.id, user.clone());
        inner
            .users_by_username
            .insert(user.username.clone(), user.clone());
        Ok(())
    }

    async fn get_user_by_username(&self, username: &str) -> Result<User, StoreError> {
        let inner = self.inner.read().await;
        inner
            .users_by_username
            .get(username)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn get_user_by_id(&self, id: Uuid) -> Result<User, StoreError> {
        let inner = self.inner.read().await;
        inner.users_by_id.get(&id).cloned().ok_or(StoreError::NotFound)
    }

    async fn list_users(&self) -> Result<Vec<User>, StoreError> {
        let inner = self.inner.read().await;
        let mut users: Vec<User> = inner.users_by_id.values().cloned().collect();
        users.sort_by(|a, b| a.username.cmp(&b.username));
        Ok(users)
    }
}

#[async_trait]
impl TransferStore for MemoryStore {
    async fn create_transfer(&self, transfer: &Transfer) -> Result<(), StoreError> {
        let mut inner = self.inner.write().await;
        inner
            .transfers_by_dest
            .entry(transfer.dest_user_id)
            .or_default()
            .push(transfer.clone());
        Ok(())
    }

    async fn get_transfers_by_dest_user(
        &self,
        dest_user_id: Uuid,
    ) -> Result<Vec<Transfer>, StoreError> {
        let inner = self.inner.read().await;
        let mut transfers = inner
            .transfers_by_dest
            .get(&dest_user_id)
            .cloned()
            .unwrap_or_default();
        transfers.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(transfers)
    }
}
