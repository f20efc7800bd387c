// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! # API Data Models
//!
//! This module defines the request and response data structures used by
//! the REST API. All types derive `Serialize`/`Deserialize` and `ToSchema`
//! for automatic JSON handling and OpenAPI documentation.
//!
//! ## Model Categories
//!
//! - **Accounts**: registration and login requests, the auth response
//! - **Catalog**: products and the catalog filter
//! - **Orders**: order placement and the per-email order record

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// =============================================================================
// Account Models
// =============================================================================

/// A registered user identity.
///
/// Owned by the credential store. The password hash never leaves the store
/// module; this type is not serialized in API responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Sequential identifier, assigned on registration.
    pub id: u64,
    /// Display name.
    pub name: String,
    /// Unique key for lookups and login.
    pub email: String,
    /// Bcrypt hash of the password. Never the plaintext.
    pub password_hash: String,
}

/// Request body for `POST /register`.
///
/// Fields default to empty strings so that missing fields surface as
/// validation messages rather than deserialization rejections.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Display name. Must be non-empty.
    #[serde(default)]
    pub name: String,
    /// Email address. Must look like an email and be unused.
    #[serde(default)]
    pub email: String,
    /// Plaintext password. Must be at least 6 characters.
    #[serde(default)]
    pub password: String,
}

/// Request body for `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginRequest {
    /// Email of the registered account.
    #[serde(default)]
    pub email: String,
    /// Plaintext password to verify.
    #[serde(default)]
    pub password: String,
}

/// Public view of a user, embedded in the auth response.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct UserSummary {
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
}

impl From<&User> for UserSummary {
    fn from(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
        }
    }
}

/// Successful response for `POST /register` and `POST /login`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    /// The identity the session belongs to.
    pub user: UserSummary,
    /// Signed session token, valid for two hours.
    pub auth: String,
}

// =============================================================================
// Catalog Models
// =============================================================================

/// A catalog item. Seeded at startup, read-only at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Product {
    /// Catalog identifier.
    pub id: u64,
    /// Product name, matched by the catalog filter.
    pub name: String,
    /// Unit price.
    pub price: f64,
}

/// Request body for `POST /getAllData`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CatalogFilter {
    /// Case-insensitive substring to match against product names.
    /// Absent or empty returns the full catalog.
    #[serde(default)]
    pub name: Option<String>,
}

// =============================================================================
// Order Models
// =============================================================================

/// Request body for `POST /placeOrder`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PlaceOrderRequest {
    /// Email the order is recorded under.
    #[serde(default)]
    pub email: String,
    /// Line-items to append to the order record.
    pub order_data: Option<Vec<String>>,
}

/// The accumulated order record for one email.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct OrderRecord {
    /// Email the record belongs to.
    pub email: String,
    /// Line-items in placement order.
    pub order_data: Vec<String>,
}

/// Successful response for `POST /placeOrder`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OrderPlacedResponse {
    /// Confirmation message.
    pub message: String,
}
