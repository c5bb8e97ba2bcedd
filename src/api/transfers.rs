// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Transfer endpoints.
//!
//! The ciphertext itself moves out of band; these endpoints only record
//! and list the opaque metadata that lets a recipient find and unwrap it.

use axum::{extract::State, http::StatusCode, Json};

use crate::{
    auth::Auth,
    error::ApiError,
    models::{CreateTransferRequest, TransferMetadata},
    state::AppState,
};

/// Record a transfer addressed to another user.
#[utoipa::path(
    post,
    path = "/v1/transfers",
    tag = "Transfers",
    security(("bearer" = [])),
    request_body = CreateTransferRequest,
    responses(
        (status = 201, description = "Transfer recorded", body = TransferMetadata),
        (status = 400, description = "Missing or invalid fields"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Destination user not found"),
    )
)]
pub async fn create_transfer(
    Auth(source): Auth,
    State(state): State<AppState>,
    Json(request): Json<CreateTransferRequest>,
) -> Result<(StatusCode, Json<TransferMetadata>), ApiError> {
    let metadata = state.transfers.create_transfer(&source, request).await?;
    Ok((StatusCode::CREATED, Json(metadata)))
}

/// List transfers addressed to the caller, newest first.
#[utoipa::path(
    get,
    path = "/v1/transfers",
    tag = "Transfers",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Pending transfers", body = [TransferMetadata]),
        (status = 401, description = "Unauthorized"),
    )
)]
pub async fn list_transfers(
    Auth(dest): Auth,
    State(state): State<AppState>,
) -> Result<Json<Vec<TransferMetadata>>, ApiError> {
    let transfers = state.transfers.list_pending(&dest).await?;
    Ok(Json(transfers))
}
