// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

//! Catalog lookup endpoint. Protected by the auth gate.

use axum::{extract::State, Json};

use crate::models::{CatalogFilter, Product};
use crate::state::AppState;

#[utoipa::path(
    post,
    path = "/getAllData",
    request_body = CatalogFilter,
    tag = "Catalog",
    security(("bearer" = [])),
    responses(
        (status = 200, description = "Matching catalog items", body = [Product]),
        (status = 403, description = "Missing or invalid session token"),
    )
)]
pub async fn get_all_data(
    State(state): State<AppState>,
    Json(filter): Json<CatalogFilter>,
) -> Json<Vec<Product>> {
    let products = match filter.name.as_deref() {
        None | Some("") => state.catalog.all(),
        Some(needle) => state.catalog.search(needle),
    };
    Json(products)
}
