use chrono::Utc;
use uuid::Uuid;

use crate::{
    AppState,
    models::{NewProduct, PricePoint, Product, ProductUpdate},
};

const STORE_KEY: &str = "products";

pub fn get_all(state: &AppState) -> Vec<Product> {
    state.store.collection(STORE_KEY)
}

/// Replaces the whole collection in one store write and notifies listeners.
pub fn save(state: &AppState, products: &[Product]) {
    state.store.put_collection(STORE_KEY, products);
    let _ = state.events_tx.send("productsUpdated".to_string());
}

pub fn add(state: &AppState, input: NewProduct) -> Product {
    let mut products = get_all(state);
    let now = Utc::now();

    let product = Product {
        id: Uuid::new_v4().to_string(),
        name: input.name,
        your_price: input.your_price,
        competitor_price: input.competitor_price,
        alert_threshold: input.alert_threshold,
        price_history: vec![PricePoint {
            date: now,
            your_price: input.your_price,
            competitor_price: input.competitor_price,
        }],
        created_at: now,
    };

    // most-recent-first
    products.insert(0, product.clone());
    save(state, &products);

    product
}

pub fn update(state: &AppState, id: &str, updates: ProductUpdate) -> Option<Product> {
    let mut products = get_all(state);
    let idx = products.iter().position(|p| p.id == id)?;

    {
        let product = &mut products[idx];

        let next_your = updates.your_price.unwrap_or(product.your_price);
        let next_competitor = updates.competitor_price.unwrap_or(product.competitor_price);

        // Add to price history if prices changed
        if next_your != product.your_price || next_competitor != product.competitor_price {
            product.price_history.push(PricePoint {
                date: Utc::now(),
                your_price: next_your,
                competitor_price: next_competitor,
            });
        }

        if let Some(name) = updates.name {
            product.name = name;
        }
        product.your_price = next_your;
        product.competitor_price = next_competitor;
        if let Some(threshold) = updates.alert_threshold {
            product.alert_threshold = Some(threshold);
        }
    }

    let updated = products[idx].clone();
    save(state, &products);

    Some(updated)
}

pub fn delete(state: &AppState, id: &str) {
    let mut products = get_all(state);
    products.retain(|p| p.id != id);
    save(state, &products);
}

pub fn get_by_id(state: &AppState, id: &str) -> Option<Product> {
    get_all(state).into_iter().find(|p| p.id == id)
}
