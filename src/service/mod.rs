// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Business logic: registration, login, key lookup, transfer orchestration.
//!
//! Services translate domain failures (duplicate identity, missing user)
//! into [`ServiceError`] variants and pass infrastructure failures through
//! unchanged. They hold their stores as injected trait objects and never
//! construct a backend themselves.

pub mod transfer;
pub mod user;

pub use transfer::TransferService;
pub use user::UserService;

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Malformed or missing request fields; never retried.
    #[error("{0}")]
    InvalidInput(String),

    /// Username collision; carries the offending username.
    #[error("user '{0}' already exists")]
    Duplicate(String),

    #[error("{0}")]
    NotFound(String),

    /// Deliberately identical for unknown-user and wrong-password logins.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// Infrastructure failure passed through from a store.
    #[error(transparent)]
    Storage(#[from] StoreError),

    #[error("{0}")]
    Internal(String),
}
