// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! # Authentication
//!
//! Session authenticity rests on a single trust anchor: HS256 tokens
//! signed with a server-held symmetric secret.
//!
//! ## Auth Flow
//!
//! 1. Client logs in and receives a signed token (`sub`, `iat`, `exp`)
//! 2. Client sends `Authorization: Bearer <token>` on protected routes
//! 3. The [`Auth`] extractor verifies the signature and expiry, then
//!    re-resolves the live user record by the token's subject id, so a
//!    session never outlives its account
//!
//! ## Security
//!
//! - Only the HMAC family is accepted; tokens claiming any other signing
//!   algorithm are rejected outright (algorithm-confusion defense)
//! - Every verification failure maps to the same 401 response, so a
//!   caller cannot learn which check tripped
//! - There is no revocation list; validity is solely signature + expiry

pub mod error;
pub mod extractor;
pub mod token;

pub use error::AuthError;
pub use extractor::Auth;
pub use token::TokenService;
