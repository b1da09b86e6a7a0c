use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState,
    models::{CompetitorUpdate, NewCompetitor},
    services::competitors_service,
};

fn competitor_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "competitor not found" })),
    )
        .into_response()
}

// GET /competitors
pub async fn get_competitors(State(state): State<AppState>) -> Response {
    Json(competitors_service::get_all(&state)).into_response()
}

// POST /competitors
pub async fn post_create_competitor(
    State(state): State<AppState>,
    Json(input): Json<NewCompetitor>,
) -> Response {
    if input.name.trim().is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "name is required" })),
        )
            .into_response();
    }

    let competitor = competitors_service::add(&state, input);
    (StatusCode::CREATED, Json(competitor)).into_response()
}

// GET /competitors/:id
pub async fn get_competitor(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match competitors_service::get_by_id(&state, &id) {
        Some(competitor) => Json(competitor).into_response(),
        None => competitor_not_found(),
    }
}

// PUT /competitors/:id
pub async fn put_update_competitor(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(updates): Json<CompetitorUpdate>,
) -> Response {
    if let Some(name) = &updates.name {
        if name.trim().is_empty() {
            return (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(json!({ "error": "name cannot be blank" })),
            )
                .into_response();
        }
    }

    match competitors_service::update(&state, &id, updates) {
        Some(competitor) => Json(competitor).into_response(),
        None => competitor_not_found(),
    }
}

// DELETE /competitors/:id
pub async fn delete_competitor(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    competitors_service::delete(&state, &id);
    StatusCode::NO_CONTENT.into_response()
}
