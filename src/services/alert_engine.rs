//! Price-gap detection over the product collection.
//!
//! A product participates when it carries a positive alert threshold. The
//! engine keeps at most one outstanding unresolved alert per product; a
//! second sweep with no state change in between creates nothing.

use crate::{
    AppState,
    models::{Alert, NewAlert},
    services::{alerts_service, products_service},
};

pub fn check(state: &AppState) -> Vec<Alert> {
    let products = products_service::get_all(state);
    let alerts = alerts_service::get_all(state);

    let mut staged: Vec<NewAlert> = Vec::new();

    for product in &products {
        let Some(threshold) = product.alert_threshold else {
            continue;
        };
        if threshold <= 0.0 {
            continue;
        }

        let diff = (product.your_price - product.competitor_price).abs();
        if diff < threshold {
            continue;
        }

        let outstanding = alerts
            .iter()
            .any(|a| a.product_id == product.id && !a.resolved);
        if outstanding {
            continue;
        }

        staged.push(NewAlert {
            kind: "price_alert".to_string(),
            product_id: product.id.clone(),
            product_name: product.name.clone(),
            message: format!("Price difference of ${:.2} exceeds threshold", diff),
            your_price: product.your_price,
            competitor_price: product.competitor_price,
        });
    }

    staged
        .into_iter()
        .map(|candidate| alerts_service::add(state, candidate))
        .collect()
}
