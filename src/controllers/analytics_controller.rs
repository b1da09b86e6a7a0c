use axum::{Json, extract::State, response::IntoResponse};

use crate::{AppState, services::analytics_service};

// GET /analytics
pub async fn get_analytics(State(state): State<AppState>) -> impl IntoResponse {
    Json(analytics_service::get_analytics(&state))
}
