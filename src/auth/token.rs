// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs signed with a process-wide secret. A token is
//! valid if and only if its signature matches the secret and the current
//! time is before its expiry; leeway is zero because issuer and verifier
//! share one clock.

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use super::claims::SessionClaims;
use super::error::AuthError;

/// Encoding and decoding keys derived from the session secret.
///
/// Built once at startup and shared through application state, so the
/// secret bytes are processed a single time.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
        }
    }
}

/// Sign `claims` into a session token.
pub fn issue(claims: &SessionClaims, keys: &TokenKeys) -> Result<String, AuthError> {
    encode(&Header::default(), claims, &keys.encoding)
        .map_err(|e| AuthError::SigningFailure(e.to_string()))
}

/// Verify a session token and reconstruct its claims.
pub fn verify(token: &str, keys: &TokenKeys) -> Result<SessionClaims, AuthError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;
    validation.validate_aud = false;

    let data = decode::<SessionClaims>(token, &keys.decoding, &validation).map_err(|e| {
        match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::Expired,
            jsonwebtoken::errors::ErrorKind::InvalidSignature => AuthError::InvalidSignature,
            _ => AuthError::MalformedToken,
        }
    })?;

    Ok(data.claims)
}
