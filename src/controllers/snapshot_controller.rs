use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{AppState, models::SnapshotImport, services::snapshot_service};

// GET /export
pub async fn get_export(State(state): State<AppState>) -> Response {
    Json(snapshot_service::export_data(&state)).into_response()
}

// POST /import
pub async fn post_import(
    State(state): State<AppState>,
    Json(snapshot): Json<SnapshotImport>,
) -> Response {
    snapshot_service::import_data(&state, snapshot);
    StatusCode::NO_CONTENT.into_response()
}
