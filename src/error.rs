// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! HTTP boundary errors.
//!
//! Every failure leaving the service is mapped to a status code and a
//! `{"error":{"code":..,"message":..}}` body. Infrastructure failures are
//! logged and surfaced with a generic message; credential and token
//! failures never reveal which check tripped.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::service::ServiceError;
use crate::store::StoreError;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Serialize)]
struct ErrorDetail {
    code: u16,
    message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNAUTHORIZED, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CONFLICT, message)
    }

    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }

    pub fn unavailable() -> Self {
        Self::new(StatusCode::SERVICE_UNAVAILABLE, "storage unavailable")
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::InvalidInput(message) => ApiError::bad_request(message),
            ServiceError::Duplicate(username) => {
                ApiError::conflict(format!("user '{username}' already exists"))
            }
            ServiceError::NotFound(message) => ApiError::not_found(message),
            ServiceError::InvalidCredentials => ApiError::unauthorized("invalid credentials"),
            ServiceError::Storage(StoreError::Unavailable(reason)) => {
                tracing::error!(%reason, "storage unavailable");
                ApiError::unavailable()
            }
            ServiceError::Storage(store_err) => {
                tracing::error!(error = %store_err, "unexpected storage failure");
                ApiError::internal()
            }
            ServiceError::Internal(reason) => {
                tracing::error!(%reason, "internal service failure");
                ApiError::internal()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorBody {
            error: ErrorDetail {
                code: self.status.as_u16(),
                message: self.message,
            },
        });
        (self.status, body).into_response()
    }
}
