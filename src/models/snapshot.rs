use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Alert, Competitor, Product};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    pub products: Vec<Product>,
    pub competitors: Vec<Competitor>,
    pub alerts: Vec<Alert>,
    pub exported_at: DateTime<Utc>,
}

/// Import side of the snapshot: collections left out are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SnapshotImport {
    pub products: Option<Vec<Product>>,
    pub competitors: Option<Vec<Competitor>>,
    pub alerts: Option<Vec<Alert>>,
}
