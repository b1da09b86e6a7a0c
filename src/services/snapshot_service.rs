use chrono::Utc;

use crate::{
    AppState,
    models::{Snapshot, SnapshotImport},
    services::{alerts_service, competitors_service, products_service},
};

pub fn export_data(state: &AppState) -> Snapshot {
    Snapshot {
        products: products_service::get_all(state),
        competitors: competitors_service::get_all(state),
        alerts: alerts_service::get_all(state),
        exported_at: Utc::now(),
    }
}

/// Collections present in the snapshot replace the stored ones wholesale;
/// absent collections are left untouched.
pub fn import_data(state: &AppState, snapshot: SnapshotImport) {
    if let Some(products) = snapshot.products {
        products_service::save(state, &products);
    }
    if let Some(competitors) = snapshot.competitors {
        competitors_service::save(state, &competitors);
    }
    if let Some(alerts) = snapshot.alerts {
        alerts_service::save(state, &alerts);
    }
}
