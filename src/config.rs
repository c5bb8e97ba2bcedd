// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! # Runtime Configuration
//!
//! Configuration is loaded from the environment once at startup and passed
//! into components explicitly; there are no process-wide singletons.
//!
//! ## Environment Variables
//!
//! | Variable | Description | Default |
//! |----------|-------------|---------|
//! | `JWT_SECRET` | Symmetric secret for session tokens | Required, non-empty |
//! | `HOST` | Server bind address | `0.0.0.0` |
//! | `PORT` | Server bind port | `8080` |
//! | `DATABASE_URL` | SQLite URL; in-memory store when unset | Unset |
//! | `TOKEN_TTL_HOURS` | Session token validity window | `24` |
//! | `LOG_FORMAT` | Logging format (`json` or `pretty`) | `pretty` |
//! | `RUST_LOG` | Log level filter | `info,tower_http=debug` |

use std::env;

use thiserror::Error;

/// Fatal at startup; never recoverable at request time.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_SECRET must be set and non-empty")]
    MissingJwtSecret,

    #[error("invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub jwt_secret: String,
    /// When set, the relational backend is used; otherwise in-memory.
    pub database_url: Option<String>,
    pub token_ttl_hours: i64,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let jwt_secret = env::var("JWT_SECRET").unwrap_or_default();
        if jwt_secret.is_empty() {
            return Err(ConfigError::MissingJwtSecret);
        }

        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port_raw = env::var("PORT").unwrap_or_else(|_| "8080".to_string());
        let port: u16 = port_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "PORT",
            value: port_raw,
        })?;

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let ttl_raw = env::var("TOKEN_TTL_HOURS").unwrap_or_else(|_| "24".to_string());
        let token_ttl_hours: i64 = ttl_raw.parse().map_err(|_| ConfigError::Invalid {
            name: "TOKEN_TTL_HOURS",
            value: ttl_raw.clone(),
        })?;
        if token_ttl_hours <= 0 {
            return Err(ConfigError::Invalid {
                name: "TOKEN_TTL_HOURS",
                value: ttl_raw,
            });
        }

        Ok(Self {
            host,
            port,
            jwt_secret,
            database_url,
            token_ttl_hours,
        })
    }
}
