use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::{AppState, controllers::alerts_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/alerts", get(alerts_controller::get_alerts))
        .route("/alerts/check", post(alerts_controller::post_check_alerts))
        .route("/alerts/:id", get(alerts_controller::get_alert))
        .route("/alerts/:id/read", post(alerts_controller::post_mark_read))
        .route("/alerts/:id/resolve", post(alerts_controller::post_resolve))
        .route("/alerts/:id", delete(alerts_controller::delete_alert))
}
