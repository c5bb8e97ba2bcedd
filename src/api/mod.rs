// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

use std::time::Duration;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    models::{
        CreateTransferRequest, LoginRequest, PublicKeyResponse, RegisterRequest, TokenResponse,
        TransferMetadata, UserResponse,
    },
    state::AppState,
};

pub mod transfers;
pub mod users;

/// Per-request deadline; an operation cancelled mid-flight leaves no
/// partial state (statement-level atomicity in the relational backend,
/// lock-scoped mutation in the in-memory one).
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Registration and login are the only public routes; every other
/// handler takes the `Auth` extractor and is unreachable without a valid
/// bearer token.
pub fn router(state: AppState) -> Router {
    let v1_routes = Router::new()
        .route("/users/register", post(users::register))
        .route("/users/login", post(users::login))
        .route("/users", get(users::list_users))
        .route("/users/{username}/key", get(users::get_user_key))
        .route(
            "/transfers",
            get(transfers::list_transfers).post(transfers::create_transfer),
        )
        .with_state(state);

    Router::new()
        .nest("/v1", v1_routes)
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TimeoutLayer::new(REQUEST_TIMEOUT))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        users::register,
        users::login,
        users::get_user_key,
        users::list_users,
        transfers::create_transfer,
        transfers::list_transfers
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            CreateTransferRequest,
            UserResponse,
            PublicKeyResponse,
            TokenResponse,
            TransferMetadata
        )
    ),
    tags(
        (name = "Users", description = "Identity, credentials and public keys"),
        (name = "Transfers", description = "Encrypted-transfer metadata")
    )
)]
struct ApiDoc;
