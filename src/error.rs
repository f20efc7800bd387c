// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! Unified API error type.
//!
//! Every failing endpoint responds with the same JSON envelope:
//!
//! ```json
//! {"errors": [{"msg": "..."}]}
//! ```
//!
//! Validation failures may carry several messages, one per failing field;
//! all other errors carry exactly one.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub messages: Vec<String>,
}

/// A single error message inside the envelope.
#[derive(Serialize)]
pub struct ErrorMessage {
    pub msg: String,
}

/// The response envelope shared by every error path.
#[derive(Serialize)]
pub struct ErrorEnvelope {
    pub errors: Vec<ErrorMessage>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            messages: vec![message.into()],
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Build a 400 carrying one message per failing field.
    pub fn validation(messages: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            messages,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(ErrorEnvelope {
            errors: self
                .messages
                .into_iter()
                .map(|msg| ErrorMessage { msg })
                .collect(),
        });
        (self.status, body).into_response()
    }
}
