use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use serde_json::json;

use crate::AppState;

#[derive(Deserialize)]
pub struct ScrapeRequest {
    pub url: String,
}

// POST /scrape
pub async fn post_scrape(
    State(state): State<AppState>,
    Json(req): Json<ScrapeRequest>,
) -> Response {
    let url = req.url.trim();
    if url.is_empty() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({ "error": "url is required" })),
        )
            .into_response();
    }

    let result = state.scraper.scrape_price(url).await;
    Json(result).into_response()
}
