// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! SecureShare - E2E Encrypted File Sharing Backend
//!
//! Identity and authorization service for a file-sharing system where
//! payloads are encrypted end-to-end by clients. The server stores opaque
//! ciphertext locators, wrapped symmetric keys and signatures; it never
//! sees plaintext.
//!
//! ## Modules
//!
//! - `api` - HTTP API handlers (Axum)
//! - `auth` - Session tokens and the bearer-auth extractor
//! - `service` - Registration, login and transfer orchestration
//! - `store` - Persistence traits with in-memory and SQLite backends

pub mod api;
pub mod auth;
pub mod config;
pub mod error;
pub mod models;
pub mod service;
pub mod state;
pub mod store;
