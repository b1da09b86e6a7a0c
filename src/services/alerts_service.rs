use chrono::Utc;
use uuid::Uuid;

use crate::{
    AppState,
    models::{Alert, AlertUpdate, NewAlert},
};

const STORE_KEY: &str = "alerts";

pub fn get_all(state: &AppState) -> Vec<Alert> {
    state.store.collection(STORE_KEY)
}

pub fn save(state: &AppState, alerts: &[Alert]) {
    state.store.put_collection(STORE_KEY, alerts);
    let _ = state.events_tx.send("alertsUpdated".to_string());
}

pub fn add(state: &AppState, input: NewAlert) -> Alert {
    let mut alerts = get_all(state);

    let alert = Alert {
        id: Uuid::new_v4().to_string(),
        kind: input.kind,
        product_id: input.product_id,
        product_name: input.product_name,
        message: input.message,
        your_price: input.your_price,
        competitor_price: input.competitor_price,
        read: false,
        triggered: false,
        resolved: false,
        created_at: Utc::now(),
    };

    // most-recent-first
    alerts.insert(0, alert.clone());
    save(state, &alerts);

    alert
}

/// Alerts only ever change their `read` / `resolved` flags after creation.
pub fn update(state: &AppState, id: &str, updates: AlertUpdate) -> Option<Alert> {
    let mut alerts = get_all(state);
    let alert = alerts.iter_mut().find(|a| a.id == id)?;

    if let Some(read) = updates.read {
        alert.read = read;
    }
    if let Some(resolved) = updates.resolved {
        alert.resolved = resolved;
    }

    let updated = alert.clone();
    save(state, &alerts);

    Some(updated)
}

pub fn mark_read(state: &AppState, id: &str) -> Option<Alert> {
    update(
        state,
        id,
        AlertUpdate {
            read: Some(true),
            resolved: None,
        },
    )
}

pub fn resolve(state: &AppState, id: &str) -> Option<Alert> {
    update(
        state,
        id,
        AlertUpdate {
            read: None,
            resolved: Some(true),
        },
    )
}

pub fn delete(state: &AppState, id: &str) {
    let mut alerts = get_all(state);
    alerts.retain(|a| a.id != id);
    save(state, &alerts);
}

pub fn get_by_id(state: &AppState, id: &str) -> Option<Alert> {
    get_all(state).into_iter().find(|a| a.id == id)
}
