// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! The auth gate: middleware protecting routes behind session tokens.
//!
//! Applied as a `route_layer` via `middleware::from_fn_with_state` on the
//! protected subtree. Each request moves through
//! `Received → TokenExtracted → {Verified → Forwarded} | {Rejected}`;
//! terminal states are `Forwarded` and `Rejected`, with no retries.
//!
//! Two deliberate properties, both preserved from the existing surface:
//!
//! - The scheme prefix of the `Authorization` header is *not* validated.
//!   The second space-delimited word is taken as the token whatever the
//!   scheme says. Tests document this leniency.
//! - Verified claims are not forwarded to the handler. Downstream handlers
//!   read what they need from the request body, not from the token.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, HeaderMap},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::error::AuthError;
use super::token;
use crate::state::AppState;

/// Reject the request with 403 unless it carries a valid session token.
pub async fn require_session(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let token = match extract_token(request.headers()) {
        Ok(token) => token,
        Err(e) => {
            tracing::warn!(path = %request.uri().path(), error = %e, "request rejected at auth gate");
            return e.into_response();
        }
    };

    match token::verify(token, &state.token_keys) {
        Ok(_claims) => next.run(request).await,
        Err(e) => {
            tracing::warn!(path = %request.uri().path(), error = %e, "request rejected at auth gate");
            e.into_response()
        }
    }
}

/// Pull the bearer credential out of the `Authorization` header.
///
/// Splits on spaces and takes the second word, discarding the scheme
/// prefix unchecked. A header with no second word is malformed.
fn extract_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::MissingToken)?
        .to_str()
        .map_err(|_| AuthError::MalformedToken)?;

    value.split(' ').nth(1).ok_or(AuthError::MalformedToken)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::claims::SessionClaims;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        middleware,
        routing::post,
        Router,
    };
    use chrono::Utc;
    use tower::ServiceExt;

    fn protected_router(state: AppState) -> Router {
        Router::new()
            .route("/protected", post(|| async { "ok" }))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                require_session,
            ))
            .with_state(state)
    }

    fn request_with_auth(header: Option<&str>) -> HttpRequest<Body> {
        let mut builder = HttpRequest::builder().method("POST").uri("/protected");
        if let Some(value) = header {
            builder = builder.header("Authorization", value);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn missing_header_is_rejected_with_token_missing() {
        let app = protected_router(AppState::default());
        let response = app.oneshot(request_with_auth(None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errors"][0]["msg"], "Token missing");
    }

    #[tokio::test]
    async fn garbage_token_is_rejected_with_invalid_token() {
        let app = protected_router(AppState::default());
        let response = app
            .oneshot(request_with_auth(Some("Bearer garbage")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errors"][0]["msg"], "Invalid token");
    }

    #[tokio::test]
    async fn header_without_token_word_is_rejected() {
        let app = protected_router(AppState::default());
        let response = app
            .oneshot(request_with_auth(Some("Bearer")))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn valid_token_is_forwarded() {
        let state = AppState::default();
        let claims = SessionClaims::new("ann@x.com", "Ann");
        let token = token::issue(&claims, &state.token_keys).unwrap();

        let app = protected_router(state);
        let response = app
            .oneshot(request_with_auth(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn scheme_prefix_is_not_validated() {
        // Current behavior: any scheme word is discarded unchecked, so a
        // valid token passes even under a non-Bearer scheme.
        let state = AppState::default();
        let claims = SessionClaims::new("ann@x.com", "Ann");
        let token = token::issue(&claims, &state.token_keys).unwrap();

        let app = protected_router(state);
        let response = app
            .oneshot(request_with_auth(Some(&format!("Basic {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn expired_token_is_rejected() {
        let state = AppState::default();
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            email: "ann@x.com".into(),
            name: "Ann".into(),
            iat: now - 7_300,
            exp: now - 100,
        };
        let token = token::issue(&claims, &state.token_keys).unwrap();

        let app = protected_router(state);
        let response = app
            .oneshot(request_with_auth(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["errors"][0]["msg"], "Invalid token");
    }

    #[tokio::test]
    async fn token_signed_with_different_secret_is_rejected() {
        let state = AppState::default();
        let foreign = crate::auth::TokenKeys::from_secret("someone-elses-secret");
        let claims = SessionClaims::new("ann@x.com", "Ann");
        let token = token::issue(&claims, &foreign).unwrap();

        let app = protected_router(state);
        let response = app
            .oneshot(request_with_auth(Some(&format!("Bearer {token}"))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::FORBIDDEN);
    }
}
