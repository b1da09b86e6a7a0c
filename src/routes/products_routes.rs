use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::{AppState, controllers::products_controller};

pub fn add_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/products", get(products_controller::get_products))
        .route("/products", post(products_controller::post_create_product))
        .route("/products/:id", get(products_controller::get_product))
        .route("/products/:id", put(products_controller::put_update_product))
        .route("/products/:id", delete(products_controller::delete_product))
}
