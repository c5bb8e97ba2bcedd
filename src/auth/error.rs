// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Authentication errors.
//!
//! The variants stay distinct for logging; the HTTP response is the same
//! generic 401 for all of them so a caller cannot probe which check
//! failed.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::error::ApiError;

#[derive(Debug)]
pub enum AuthError {
    /// No authorization header present.
    MissingAuthHeader,
    /// Header is not the exact two-token `Bearer <token>` shape.
    InvalidAuthHeader,
    /// Malformed, unsigned, expired, or wrong-algorithm token.
    InvalidToken,
    /// Token verified but its subject is not a well-formed user id.
    MalformedSubject,
    /// Token subject no longer resolves to a live user record.
    UnknownUser,
    /// Token could not be created.
    TokenCreation(String),
}

impl AuthError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingAuthHeader
            | AuthError::InvalidAuthHeader
            | AuthError::InvalidToken
            | AuthError::MalformedSubject
            | AuthError::UnknownUser => StatusCode::UNAUTHORIZED,
            AuthError::TokenCreation(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::MissingAuthHeader => write!(f, "authorization header is required"),
            AuthError::InvalidAuthHeader => {
                write!(f, "invalid authorization header (expected 'Bearer <token>')")
            }
            AuthError::InvalidToken => write!(f, "token is invalid or expired"),
            AuthError::MalformedSubject => write!(f, "token subject is not a valid user id"),
            AuthError::UnknownUser => write!(f, "token subject does not resolve to a user"),
            AuthError::TokenCreation(reason) => write!(f, "failed to create token: {reason}"),
        }
    }
}

impl std::error::Error for AuthError {}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!(error = %self, "authentication rejected");

        match self.status_code() {
            StatusCode::UNAUTHORIZED => ApiError::unauthorized("unauthorized").into_response(),
            status => ApiError::new(status, "internal server error").into_response(),
        }
    }
}
