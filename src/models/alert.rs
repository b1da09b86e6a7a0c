use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: String,

    // "price_alert"
    #[serde(rename = "type")]
    pub kind: String,

    // non-owning reference; the product may be deleted later
    pub product_id: String,
    pub product_name: String,

    pub message: String,

    // prices at detection time
    pub your_price: f64,
    pub competitor_price: f64,

    #[serde(default)]
    pub read: bool,

    // reserved for later
    #[serde(default)]
    pub triggered: bool,

    #[serde(default)]
    pub resolved: bool,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewAlert {
    pub kind: String,
    pub product_id: String,
    pub product_name: String,
    pub message: String,
    pub your_price: f64,
    pub competitor_price: f64,
}

/// The only mutable alert fields after creation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AlertUpdate {
    pub read: Option<bool>,
    pub resolved: Option<bool>,
}
