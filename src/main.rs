// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

use std::{env, net::SocketAddr, sync::Arc};

use tracing_subscriber::EnvFilter;

use secureshare_server::api::router;
use secureshare_server::auth::TokenService;
use secureshare_server::config::Config;
use secureshare_server::state::AppState;
use secureshare_server::store::{MemoryStore, SqliteStore, Store};

#[tokio::main]
async fn main() {
    init_tracing();

    let config = Config::from_env().expect("Invalid configuration");

    let store: Arc<dyn Store> = match &config.database_url {
        Some(url) => {
            let store = SqliteStore::connect(url)
                .await
                .expect("Failed to open database");
            tracing::info!(%url, "using SQLite store");
            Arc::new(store)
        }
        None => {
            tracing::warn!("DATABASE_URL not set; using volatile in-memory store");
            Arc::new(MemoryStore::new())
        }
    };

    let tokens = TokenService::new(&config.jwt_secret, config.token_ttl_hours)
        .expect("Invalid token configuration");

    let state = AppState::new(store, tokens);
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("Failed to parse bind address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind server address");

    tracing::info!("secureshare server listening on http://{addr} (docs at /docs)");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server failed");
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));

    let json = env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));
    if json {
        tracing_subscriber::fmt().with_env_filter(filter).json().init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }

    tracing::info!("shutdown signal received, draining connections");
}
