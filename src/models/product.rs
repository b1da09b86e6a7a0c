use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: String,

    pub name: String,
    pub your_price: f64,
    pub competitor_price: f64,

    // absent or zero disables alerting for this product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alert_threshold: Option<f64>,

    // append-only; seeded with one entry at creation
    #[serde(default)]
    pub price_history: Vec<PricePoint>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PricePoint {
    pub date: DateTime<Utc>,
    pub your_price: f64,
    pub competitor_price: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    pub name: String,
    pub your_price: f64,
    pub competitor_price: f64,

    #[serde(default)]
    pub alert_threshold: Option<f64>,
}

/// Partial update; fields left out stay as stored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub your_price: Option<f64>,
    pub competitor_price: Option<f64>,
    pub alert_threshold: Option<f64>,
}
