use chrono::Utc;
use uuid::Uuid;

use crate::{
    AppState,
    models::{Competitor, CompetitorUpdate, NewCompetitor},
};

const STORE_KEY: &str = "competitors";

pub fn get_all(state: &AppState) -> Vec<Competitor> {
    state.store.collection(STORE_KEY)
}

pub fn save(state: &AppState, competitors: &[Competitor]) {
    state.store.put_collection(STORE_KEY, competitors);
    let _ = state.events_tx.send("competitorsUpdated".to_string());
}

pub fn add(state: &AppState, input: NewCompetitor) -> Competitor {
    let mut competitors = get_all(state);

    let competitor = Competitor {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        url: input.url,
        notes: input.notes,
        created_at: Utc::now(),
    };

    // insertion order
    competitors.push(competitor.clone());
    save(state, &competitors);

    competitor
}

pub fn update(state: &AppState, id: &str, updates: CompetitorUpdate) -> Option<Competitor> {
    let mut competitors = get_all(state);
    let competitor = competitors.iter_mut().find(|c| c.id == id)?;

    if let Some(name) = updates.name {
        competitor.name = name;
    }
    if let Some(url) = updates.url {
        competitor.url = Some(url);
    }
    if let Some(notes) = updates.notes {
        competitor.notes = Some(notes);
    }

    let updated = competitor.clone();
    save(state, &competitors);

    Some(updated)
}

pub fn delete(state: &AppState, id: &str) {
    let mut competitors = get_all(state);
    competitors.retain(|c| c.id != id);
    save(state, &competitors);
}

pub fn get_by_id(state: &AppState, id: &str) -> Option<Competitor> {
    get_all(state).into_iter().find(|c| c.id == id)
}
