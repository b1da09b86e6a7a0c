use axum::{
    Router,
    routing::{get, post},
};

use crate::{AppState, controllers::snapshot_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/export", get(snapshot_controller::get_export))
        .route("/import", post(snapshot_controller::post_import))
}
