// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 SecureShare Contributors

//! Shared application state.
//!
//! Everything is constructed once at startup from an explicit [`Config`]
//! and cloned cheaply per request; there are no process-wide singletons.
//!
//! [`Config`]: crate::config::Config

use std::sync::Arc;

use crate::auth::TokenService;
use crate::service::{TransferService, UserService};
use crate::store::Store;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub tokens: TokenService,
    pub users: UserService,
    pub transfers: TransferService,
}

impl AppState {
    pub fn new(store: Arc<dyn Store>, tokens: TokenService) -> Self {
        let users = UserService::new(Arc::clone(&store), tokens.clone());
        let transfers = TransferService::new(Arc::clone(&store));
        Self {
            store,
            tokens,
            users,
            transfers,
        }
    }
}
