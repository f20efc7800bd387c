// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! # Authentication Module
//!
//! Session-token authentication for the QuickBite API.
//!
//! ## Auth Flow
//!
//! 1. Client registers or logs in and receives a signed session token
//! 2. Client sends `Authorization: <scheme> <token>` on protected routes
//! 3. The gate middleware:
//!    - Takes the second space-delimited word of the header as the token
//!      (the scheme prefix is not checked — see `middleware`)
//!    - Verifies the HS256 signature against the process-wide secret
//!    - Rejects with 403 before the handler runs on any failure
//!
//! ## Security
//!
//! - Tokens carry only `{email, name}` plus timestamps; a leaked token
//!   identifies the session owner and nothing more
//! - Expiry is fixed at two hours from issuance, with no refresh flow
//! - Tokens are not revocable before expiry (no server-side blacklist)

pub mod claims;
pub mod error;
pub mod middleware;
pub mod token;

pub use claims::SessionClaims;
pub use error::AuthError;
pub use middleware::require_session;
pub use token::TokenKeys;
