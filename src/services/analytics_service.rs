use serde::Serialize;

use crate::{
    AppState,
    services::{alerts_service, competitors_service, products_service},
};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsSummary {
    pub total_products: usize,
    pub total_competitors: usize,

    // unread alerts, resolved or not
    pub active_alerts: usize,

    pub avg_difference: f64,
    pub higher_than_competitor: usize,
    pub lower_than_competitor: usize,
    pub price_match: usize,
}

/// Single pass over the products; read-only.
pub fn get_analytics(state: &AppState) -> AnalyticsSummary {
    let products = products_service::get_all(state);
    let competitors = competitors_service::get_all(state);
    let alerts = alerts_service::get_all(state);

    let mut total_your_value = 0.0;
    let mut total_competitor_value = 0.0;
    let mut higher_count = 0;
    let mut lower_count = 0;

    for p in &products {
        total_your_value += p.your_price;
        total_competitor_value += p.competitor_price;

        if p.your_price > p.competitor_price {
            higher_count += 1;
        } else if p.your_price < p.competitor_price {
            lower_count += 1;
        }
    }

    let avg_difference = if products.is_empty() {
        0.0
    } else {
        (total_your_value - total_competitor_value) / products.len() as f64
    };

    AnalyticsSummary {
        total_products: products.len(),
        total_competitors: competitors.len(),
        active_alerts: alerts.iter().filter(|a| !a.read).count(),
        avg_difference,
        higher_than_competitor: higher_count,
        lower_than_competitor: lower_count,
        price_match: products.len() - higher_count - lower_count,
    }
}
