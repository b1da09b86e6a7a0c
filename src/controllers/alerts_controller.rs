use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::{
    AppState,
    services::{alert_engine, alerts_service},
};

fn alert_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "alert not found" })),
    )
        .into_response()
}

// GET /alerts
pub async fn get_alerts(State(state): State<AppState>) -> Response {
    Json(alerts_service::get_all(&state)).into_response()
}

// GET /alerts/:id
pub async fn get_alert(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match alerts_service::get_by_id(&state, &id) {
        Some(alert) => Json(alert).into_response(),
        None => alert_not_found(),
    }
}

// POST /alerts/check
pub async fn post_check_alerts(State(state): State<AppState>) -> Response {
    Json(alert_engine::check(&state)).into_response()
}

// POST /alerts/:id/read
pub async fn post_mark_read(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match alerts_service::mark_read(&state, &id) {
        Some(alert) => Json(alert).into_response(),
        None => alert_not_found(),
    }
}

// POST /alerts/:id/resolve
pub async fn post_resolve(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match alerts_service::resolve(&state, &id) {
        Some(alert) => Json(alert).into_response(),
        None => alert_not_found(),
    }
}

// DELETE /alerts/:id
pub async fn delete_alert(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    alerts_service::delete(&state, &id);
    StatusCode::NO_CONTENT.into_response()
}
