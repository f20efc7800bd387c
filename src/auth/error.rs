// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! Authentication errors.
//!
//! The variants are distinct internally, but every verification failure is
//! reported to clients as the same forbidden shape: a missing header says
//! "Token missing", everything else says "Invalid token". Only signing
//! faults surface as a server error.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::error::ApiError;

/// Authentication error type.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No authorization header present.
    #[error("Authorization header is required")]
    MissingToken,
    /// Header or token cannot be parsed into the expected structure.
    #[error("Token is malformed")]
    MalformedToken,
    /// Token signature does not match the process secret.
    #[error("Token signature is invalid")]
    InvalidSignature,
    /// Token is past its expiry.
    #[error("Token has expired")]
    Expired,
    /// Underlying cryptographic or encoding fault while issuing a token.
    /// A server fault, never a client error.
    #[error("Token signing failed: {0}")]
    SigningFailure(String),
}

impl AuthError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken
            | AuthError::MalformedToken
            | AuthError::InvalidSignature
            | AuthError::Expired => StatusCode::FORBIDDEN,
            AuthError::SigningFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed at the HTTP boundary. Verification variants collapse
    /// so responses never reveal why a token was rejected.
    pub fn public_message(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "Token missing",
            AuthError::MalformedToken | AuthError::InvalidSignature | AuthError::Expired => {
                "Invalid token"
            }
            AuthError::SigningFailure(_) => "Token generation failed",
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        ApiError::new(self.status_code(), self.public_message()).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn missing_token_returns_403_with_its_own_message() {
        let response = AuthError::MissingToken.into_response();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["errors"][0]["msg"], "Token missing");
    }

    #[tokio::test]
    async fn verification_failures_collapse_to_invalid_token() {
        for error in [
            AuthError::MalformedToken,
            AuthError::InvalidSignature,
            AuthError::Expired,
        ] {
            let response = error.into_response();
            assert_eq!(response.status(), StatusCode::FORBIDDEN);

            let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
            let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
            assert_eq!(body["errors"][0]["msg"], "Invalid token");
        }
    }

    #[tokio::test]
    async fn signing_failure_is_a_server_fault() {
        let response = AuthError::SigningFailure("encode fault".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body_bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(body["errors"][0]["msg"], "Token generation failed");
    }

    #[test]
    fn internal_display_stays_distinct() {
        assert_eq!(AuthError::Expired.to_string(), "Token has expired");
        assert_eq!(
            AuthError::InvalidSignature.to_string(),
            "Token signature is invalid"
        );
    }
}
