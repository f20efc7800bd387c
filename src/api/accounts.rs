// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! Registration and login endpoints.
//!
//! Both endpoints end by issuing a session token, so a successful call is
//! immediately usable against the protected routes. Password hashing and
//! verification run on the blocking thread pool; no lock is held across
//! either, and the duplicate-email check is repeated under the write guard
//! inside the store so a racing registration cannot slip through.

use axum::{extract::State, Json};

use crate::auth::{token, SessionClaims};
use crate::error::ApiError;
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User, UserSummary};
use crate::state::AppState;
use crate::store;

/// Minimum password length accepted at registration.
const MIN_PASSWORD_CHARS: usize = 6;

#[utoipa::path(
    post,
    path = "/register",
    request_body = RegisterRequest,
    tag = "Accounts",
    responses(
        (status = 200, description = "Account created and session issued", body = AuthResponse),
        (status = 400, description = "Validation failure or duplicate email"),
        (status = 500, description = "Token signing failure"),
    )
)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    validate_registration(&request)?;

    // Cheap pre-check so an obvious duplicate skips the hashing cost.
    if state.users.read().await.contains_email(&request.email) {
        return Err(ApiError::bad_request("User already exists"));
    }

    let password = request.password.clone();
    let password_hash = tokio::task::spawn_blocking(move || store::hash_password(&password))
        .await
        .map_err(|e| ApiError::internal(format!("Hashing task failed: {e}")))?
        .map_err(|e| ApiError::internal(format!("Password hashing failed: {e}")))?;

    // The store re-checks for duplicates under its write guard.
    let user = state
        .users
        .write()
        .await
        .insert(request.name, request.email, password_hash)?;

    tracing::info!(email = %user.email, id = user.id, "user registered");
    issue_session(&user, &state)
}

#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    tag = "Accounts",
    responses(
        (status = 200, description = "Credentials accepted, session issued", body = AuthResponse),
        (status = 400, description = "Unknown email or wrong password"),
        (status = 500, description = "Token signing failure"),
    )
)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<AuthResponse>, ApiError> {
    let user = state
        .users
        .read()
        .await
        .find_by_email(&request.email)
        .cloned()
        .ok_or_else(|| ApiError::bad_request("User not found"))?;

    let candidate = user.clone();
    let matches = tokio::task::spawn_blocking(move || {
        store::verify_password(&candidate, &request.password)
    })
    .await
    .map_err(|e| ApiError::internal(format!("Verification task failed: {e}")))?
    .map_err(|e| ApiError::internal(format!("Password verification failed: {e}")))?;

    if !matches {
        tracing::warn!(email = %user.email, "login failed: wrong password");
        return Err(ApiError::bad_request("Invalid credentials"));
    }

    issue_session(&user, &state)
}

/// Issue a session token for `user` and build the auth response.
fn issue_session(user: &User, state: &AppState) -> Result<Json<AuthResponse>, ApiError> {
    let claims = SessionClaims::new(&user.email, &user.name);
    let auth = token::issue(&claims, &state.token_keys).map_err(|e| {
        tracing::error!(error = %e, "session token signing failed");
        ApiError::internal("Token generation failed")
    })?;

    Ok(Json(AuthResponse {
        user: UserSummary::from(user),
        auth,
    }))
}

/// Check the registration fields, collecting one message per failure.
fn validate_registration(request: &RegisterRequest) -> Result<(), ApiError> {
    let mut messages = Vec::new();

    if request.name.trim().is_empty() {
        messages.push("Name is required".to_string());
    }
    if !is_valid_email(&request.email) {
        messages.push("Please include a valid email".to_string());
    }
    if request.password.chars().count() < MIN_PASSWORD_CHARS {
        messages.push("Password must be at least 6 characters".to_string());
    }

    if messages.is_empty() {
        Ok(())
    } else {
        Err(ApiError::validation(messages))
    }
}

/// Basic shape check: one `@` with a non-empty local part, and a domain
/// with at least one dot and no empty labels.
fn is_valid_email(email: &str) -> bool {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 {
        return false;
    }

    let (local, domain) = (parts[0], parts[1]);
    if local.is_empty() {
        return false;
    }

    let domain_parts: Vec<&str> = domain.split('.').collect();
    if domain_parts.len() < 2 {
        return false;
    }

    domain_parts.iter().all(|p| !p.is_empty())
}
