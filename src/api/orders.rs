// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! Order placement endpoint. Protected by the auth gate.

use axum::{extract::State, Json};

use crate::error::ApiError;
use crate::models::{OrderPlacedResponse, PlaceOrderRequest};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/placeOrder",
    request_body = PlaceOrderRequest,
    tag = "Orders",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Order recorded", body = OrderPlacedResponse),
        (status = 400, description = "Missing email or order data"),
        (status = 403, description = "Missing or invalid session token"),
    )
)]
pub async fn place_order(
    State(state): State<AppState>,
    Json(request): Json<PlaceOrderRequest>,
) -> Result<Json<OrderPlacedResponse>, ApiError> {
    if request.email.is_empty() {
        return Err(ApiError::bad_request("Invalid order data"));
    }
    let Some(order_data) = request.order_data else {
        return Err(ApiError::bad_request("Invalid order data"));
    };

    let mut orders = state.orders.write().await;
    orders.place(&request.email, order_data);

    let line_items = orders.record(&request.email).map_or(0, |r| r.order_data.len());
    tracing::info!(email = %request.email, line_items, records = orders.record_count(), "order recorded");

    Ok(Json(OrderPlacedResponse {
        message: "Your order has been placed successfully".into(),
    }))
}
