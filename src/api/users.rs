// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! User endpoints: registration, login, key lookup, directory listing.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    auth::Auth,
    error::ApiError,
    models::{LoginRequest, PublicKeyResponse, RegisterRequest, TokenResponse, UserResponse},
    state::AppState,
};

/// Register a new identity.
#[utoipa::path(
    post,
    path = "/v1/users/register",
    tag = "Users",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 400, description = "Missing or invalid fields"),
        (status = 409, description = "Username already taken"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<UserResponse>), ApiError> {
    let user = state.users.register(request).await?;
    Ok((StatusCode::CREATED, Json(UserResponse::from(&user))))
}

/// Exchange credentials for a session token.
#[utoipa::path(
    post,
    path = "/v1/users/login",
    tag = "Users",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Session token", body = TokenResponse),
        (status = 401, description = "Invalid credentials"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let token = state.users.login(&request.username, &request.password).await?;
    Ok(Json(TokenResponse { token }))
}

/// Fetch one user's public key material.
#[utoipa::path(
    get,
    path = "/v1/users/{username}/key",
    tag = "Users",
    security(("bearer" = [])),
    params(("username" = String, Path, description = "Handle of the user to look up")),
    responses(
        (status = 200, description = "Public key material", body = PublicKeyResponse),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "No such user"),
    )
)]
pub async fn get_user_key(
    Auth(_user): Auth,
    Path(username): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PublicKeyResponse>, ApiError> {
    let key = state.users.get_public_key(&username).await?;
    Ok(Json(key))
}

/// List every user's public projection, ordered by username.
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = "Users",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "All users", body = [PublicKeyResponse]),
        (status = 401, description = "Unauthorized"),
    )
)]
pub async fn list_users(
    Auth(_user): Auth,
    State(state): State<AppState>,
) -> Result<Json<Vec<PublicKeyResponse>>, ApiError> {
    let users = state.users.list_users().await?;
    Ok(Json(users))
}
