// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Typed store failures.

use thiserror::Error;

/// Failure taxonomy shared by every backend.
///
/// `Duplicate` and `NotFound` are domain outcomes the service layer
/// translates; `Unavailable` is an infrastructure failure passed through
/// unchanged and eligible for caller-side retry.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("user '{0}' already exists")]
    Duplicate(String),

    #[error("record not found")]
    NotFound,

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => StoreError::NotFound,
            other => StoreError::Unavailable(other.to_string()),
        }
    }
}
