// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! In-memory stores for users, products, and orders.
//!
//! Each collection lives in its own store object, injected into handlers
//! through [`crate::state::AppState`]. Mutable stores are wrapped in
//! `RwLock` there; the methods on this module assume the caller holds the
//! appropriate guard, so check-then-insert sequences stay atomic under a
//! single write-lock acquisition.

use std::collections::HashMap;

use crate::error::ApiError;
use crate::models::{OrderRecord, Product, User};

/// Bcrypt work factor for password hashing.
const BCRYPT_COST: u32 = 10;

// =============================================================================
// Credential Store
// =============================================================================

/// Registered identities, keyed by email.
///
/// Identities are created on registration and never updated or deleted.
/// Ids are assigned sequentially (`count + 1`).
#[derive(Default)]
pub struct UserDirectory {
    users: HashMap<String, User>,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a new identity, rejecting duplicate emails.
    ///
    /// The existence check and the insert happen inside one call so the
    /// caller only needs a single write guard to make the sequence atomic.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Result<User, ApiError> {
        let email = email.into();
        if self.users.contains_key(&email) {
            return Err(ApiError::bad_request("User already exists"));
        }

        let user = User {
            id: self.users.len() as u64 + 1,
            name: name.into(),
            email: email.clone(),
            password_hash: password_hash.into(),
        };
        self.users.insert(email, user.clone());
        Ok(user)
    }

    pub fn find_by_email(&self, email: &str) -> Option<&User> {
        self.users.get(email)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.users.contains_key(email)
    }
}

/// Hash a plaintext password with bcrypt.
///
/// CPU-bound (~100ms at this cost); call sites run it on the blocking
/// thread pool rather than inside a handler holding a lock.
pub fn hash_password(plain: &str) -> Result<String, bcrypt::BcryptError> {
    bcrypt::hash(plain, BCRYPT_COST)
}

/// Verify a plaintext password against a stored bcrypt hash.
///
/// The comparison inside bcrypt is constant-time with respect to the
/// digest, so timing reveals nothing beyond the hashing cost itself.
pub fn verify_password(user: &User, plain: &str) -> Result<bool, bcrypt::BcryptError> {
    bcrypt::verify(plain, &user.password_hash)
}

// =============================================================================
// Catalog
// =============================================================================

/// The static product catalog. Read-only at runtime, so it is shared via
/// `Arc` without a lock.
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Build the seeded catalog.
    pub fn seeded() -> Self {
        Self {
            products: vec![
                Product {
                    id: 1,
                    name: "Pizza".into(),
                    price: 9.99,
                },
                Product {
                    id: 2,
                    name: "Burger".into(),
                    price: 6.49,
                },
                Product {
                    id: 3,
                    name: "Pasta".into(),
                    price: 8.75,
                },
            ],
        }
    }

    /// All products, in seed order.
    pub fn all(&self) -> Vec<Product> {
        self.products.clone()
    }

    /// Products whose name contains `filter`, case-insensitively.
    /// An empty filter matches everything.
    pub fn search(&self, filter: &str) -> Vec<Product> {
        let needle = filter.to_lowercase();
        self.products
            .iter()
            .filter(|product| product.name.to_lowercase().contains(&needle))
            .cloned()
            .collect()
    }
}

// =============================================================================
// Order Book
// =============================================================================

/// Per-email order records. Repeated orders for the same email append to
/// the existing record instead of creating a second one.
#[derive(Default)]
pub struct OrderBook {
    orders: HashMap<String, OrderRecord>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append line-items to the record for `email`, creating it on first
    /// use. Lookup and append happen inside one call; the caller's single
    /// write guard keeps the sequence atomic.
    pub fn place(&mut self, email: impl Into<String>, items: Vec<String>) {
        let email = email.into();
        self.orders
            .entry(email.clone())
            .or_insert_with(|| OrderRecord {
                email,
                order_data: Vec::new(),
            })
            .order_data
            .extend(items);
    }

    pub fn record(&self, email: &str) -> Option<&OrderRecord> {
        self.orders.get(email)
    }

    /// Number of distinct order records.
    pub fn record_count(&self) -> usize {
        self.orders.len()
    }
}
