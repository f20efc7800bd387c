// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 QuickBite

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::{
    auth::require_session,
    models::{
        AuthResponse, CatalogFilter, LoginRequest, OrderPlacedResponse, OrderRecord,
        PlaceOrderRequest, Product, RegisterRequest, UserSummary,
    },
    state::AppState,
};

pub mod accounts;
pub mod catalog;
pub mod health;
pub mod orders;

pub fn router(state: AppState) -> Router {
    // Catalog and order routes sit behind the auth gate; account routes and
    // the liveness probe stay open.
    let protected = Router::new()
        .route("/getAllData", post(catalog::get_all_data))
        .route("/placeOrder", post(orders::place_order))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    let routes = Router::new()
        .route("/register", post(accounts::register))
        .route("/login", post(accounts::login))
        .route("/health", get(health::health))
        .merge(protected)
        .with_state(state);

    routes
        .merge(SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        accounts::register,
        accounts::login,
        catalog::get_all_data,
        orders::place_order,
        health::health
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            AuthResponse,
            UserSummary,
            Product,
            CatalogFilter,
            PlaceOrderRequest,
            OrderRecord,
            OrderPlacedResponse,
            health::HealthResponse
        )
    ),
    tags(
        (name = "Accounts", description = "Registration and login"),
        (name = "Catalog", description = "Product catalog lookup"),
        (name = "Orders", description = "Order placement"),
        (name = "Health", description = "Liveness probe")
    )
)]
struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn json_request(uri: &str, body: Value, token: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder()
            .method("POST")
            .uri(uri)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }
        builder
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn router_builds_with_all_routes() {
        let app = router(AppState::default());
        // Ensure the router can be converted into a service without panicking.
        let _ = app.into_make_service();
    }

    #[tokio::test]
    async fn protected_routes_reject_unauthenticated_requests() {
        let app = router(AppState::default());

        for uri in ["/getAllData", "/placeOrder"] {
            let response = app
                .clone()
                .oneshot(json_request(uri, json!({}), None))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::FORBIDDEN, "{uri}");

            let body = body_json(response).await;
            assert_eq!(body["errors"][0]["msg"], "Token missing");
        }
    }

    #[tokio::test]
    async fn register_browse_and_order_flow() {
        let app = router(AppState::default());

        // Register Ann and capture the issued token.
        let response = app
            .clone()
            .oneshot(json_request(
                "/register",
                json!({"name": "Ann", "email": "ann@x.com", "password": "secret1"}),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["user"], json!({"name": "Ann", "email": "ann@x.com"}));
        let token = body["auth"].as_str().unwrap().to_string();

        // Browse the full catalog with the fresh token.
        let response = app
            .clone()
            .oneshot(json_request("/getAllData", json!({"name": ""}), Some(&token)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let products = body_json(response).await;
        assert_eq!(products.as_array().unwrap().len(), 3);

        // Place the same order twice; line-items accumulate in one record.
        for _ in 0..2 {
            let response = app
                .clone()
                .oneshot(json_request(
                    "/placeOrder",
                    json!({"email": "ann@x.com", "order_data": ["Pizza"]}),
                    Some(&token),
                ))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);

            let body = body_json(response).await;
            assert_eq!(body["message"], "Your order has been placed successfully");
        }
    }

    #[tokio::test]
    async fn login_token_opens_the_catalog() {
        let app = router(AppState::default());

        app.clone()
            .oneshot(json_request(
                "/register",
                json!({"name": "Ben", "email": "ben@x.com", "password": "hunter22"}),
                None,
            ))
            .await
            .unwrap();

        let response = app
            .clone()
            .oneshot(json_request(
                "/login",
                json!({"email": "ben@x.com", "password": "hunter22"}),
                None,
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let token = body_json(response).await["auth"]
            .as_str()
            .unwrap()
            .to_string();

        let response = app
            .clone()
            .oneshot(json_request(
                "/getAllData",
                json!({"name": "za"}),
                Some(&token),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let products = body_json(response).await;
        assert_eq!(products.as_array().unwrap().len(), 1);
        assert_eq!(products[0]["name"], "Pizza");
    }

    #[tokio::test]
    async fn health_route_is_open() {
        let app = router(AppState::default());
        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await["status"], "ok");
    }
}
