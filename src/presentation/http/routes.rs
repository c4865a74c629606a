// src/presentation/http/routes.rs
use crate::presentation::http::controllers::{audit, catalog, inventory};
use crate::presentation::http::state::HttpState;
use axum::{
    Extension, Json, Router,
    http::Method,
    routing::{get, post},
};
use serde::Serialize;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub fn build_router(state: HttpState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(tower_http::cors::Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .route("/health", get(health))
        .route("/api/v1/inventory", get(inventory::list_inventory))
        .route("/api/v1/inventory/adjust", post(inventory::adjust_stock))
        .route("/api/v1/inventory/move", post(inventory::move_stock))
        .route(
            "/api/v1/inventory/{id}/logs",
            get(inventory::list_stock_logs),
        )
        .route(
            "/api/v1/products",
            get(catalog::list_products).post(catalog::create_product),
        )
        .route(
            "/api/v1/warehouses",
            get(catalog::list_warehouses).post(catalog::create_warehouse),
        )
        .route(
            "/api/v1/warehouses/{id}/zones",
            get(catalog::list_zones).post(catalog::create_zone),
        )
        .route(
            "/api/v1/categories",
            get(catalog::list_categories).post(catalog::create_category),
        )
        .route(
            "/api/v1/units",
            get(catalog::list_units).post(catalog::create_unit),
        )
        .route("/api/v1/audit-logs", get(audit::list_audit_logs))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(Extension(state))
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: String,
}

pub async fn health() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "ok".into(),
    })
}
