// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! Session token claims.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Session lifetime: two hours from issuance. Fixed and non-renewable.
pub const TOKEN_TTL_SECS: i64 = 2 * 60 * 60;

/// The payload embedded in a signed session token.
///
/// Deliberately minimal — no user id, no password material — so a leaked
/// token only identifies the session owner. Claims exist solely inside an
/// issued token and are reconstructed on verification, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    /// Email of the session owner.
    pub email: String,
    /// Display name of the session owner.
    pub name: String,
    /// Issued-at timestamp (Unix seconds).
    pub iat: i64,
    /// Expiration timestamp (Unix seconds). The token is invalid once the
    /// current time reaches this value.
    pub exp: i64,
}

impl SessionClaims {
    /// Build claims for a fresh session expiring [`TOKEN_TTL_SECS`] from now.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        let now = Utc::now().timestamp();
        Self {
            email: email.into(),
            name: name.into(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        }
    }
}
