// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::auth::TokenKeys;
use crate::config::DEFAULT_SESSION_SECRET;
use crate::store::{Catalog, OrderBook, UserDirectory};

/// Shared application state, cloned into every handler.
///
/// Each mutable collection gets its own lock so order traffic never
/// contends with registrations. The catalog is read-only and unlocked.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<RwLock<UserDirectory>>,
    pub catalog: Arc<Catalog>,
    pub orders: Arc<RwLock<OrderBook>>,
    pub token_keys: Arc<TokenKeys>,
}

impl AppState {
    pub fn new(secret: &str) -> Self {
        Self {
            users: Arc::new(RwLock::new(UserDirectory::new())),
            catalog: Arc::new(Catalog::seeded()),
            orders: Arc::new(RwLock::new(OrderBook::new())),
            token_keys: Arc::new(TokenKeys::from_secret(secret)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_SECRET)
    }
}
