use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState,
    models::{NewProduct, ProductUpdate},
    services::products_service,
};

fn valid_price(x: f64) -> bool {
    x.is_finite() && x >= 0.0
}

fn unprocessable(message: &str) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({ "error": message })),
    )
        .into_response()
}

fn product_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "product not found" })),
    )
        .into_response()
}

// GET /products
pub async fn get_products(State(state): State<AppState>) -> Response {
    Json(products_service::get_all(&state)).into_response()
}

// POST /products
pub async fn post_create_product(
    State(state): State<AppState>,
    Json(input): Json<NewProduct>,
) -> Response {
    if input.name.trim().is_empty() {
        return unprocessable("name is required");
    }
    if !valid_price(input.your_price) || !valid_price(input.competitor_price) {
        return unprocessable("prices must be finite and non-negative");
    }
    if let Some(threshold) = input.alert_threshold {
        if !valid_price(threshold) {
            return unprocessable("alertThreshold must be finite and non-negative");
        }
    }

    let product = products_service::add(&state, input);
    (StatusCode::CREATED, Json(product)).into_response()
}

// GET /products/:id
pub async fn get_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match products_service::get_by_id(&state, &id) {
        Some(product) => Json(product).into_response(),
        None => product_not_found(),
    }
}

// PUT /products/:id
pub async fn put_update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(updates): Json<ProductUpdate>,
) -> Response {
    if let Some(name) = &updates.name {
        if name.trim().is_empty() {
            return unprocessable("name cannot be blank");
        }
    }
    if let Some(price) = updates.your_price {
        if !valid_price(price) {
            return unprocessable("yourPrice must be finite and non-negative");
        }
    }
    if let Some(price) = updates.competitor_price {
        if !valid_price(price) {
            return unprocessable("competitorPrice must be finite and non-negative");
        }
    }
    if let Some(threshold) = updates.alert_threshold {
        if !valid_price(threshold) {
            return unprocessable("alertThreshold must be finite and non-negative");
        }
    }

    match products_service::update(&state, &id, updates) {
        Some(product) => Json(product).into_response(),
        None => product_not_found(),
    }
}

// DELETE /products/:id
pub async fn delete_product(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    products_service::delete(&state, &id);
    StatusCode::NO_CONTENT.into_response()
}
