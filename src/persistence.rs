//! List Persistence
//!
//! One LocalStorage slot holds the whole list as a JSON array.
//! Missing or malformed data loads as an empty list; write failures
//! (quota etc.) are not surfaced.

use crate::models::Product;

/// LocalStorage key
pub const STORAGE_KEY: &str = "einkaufsliste";

/// Decode a raw persisted value, defaulting to an empty list
pub fn decode(raw: Option<&str>) -> Vec<Product> {
    raw.and_then(|json| serde_json::from_str(json).ok())
        .unwrap_or_default()
}

/// Encode the list for storage
pub fn encode(products: &[Product]) -> Option<String> {
    serde_json::to_string(products).ok()
}

/// Load the list from LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn load() -> Vec<Product> {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    let raw = storage.and_then(|s| s.get_item(STORAGE_KEY).ok()).flatten();
    let products = decode(raw.as_deref());
    log::info!("Loaded {} products from LocalStorage", products.len());
    products
}

/// Save the full list to LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn save(products: &[Product]) {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    if let (Some(storage), Some(json)) = (storage, encode(products)) {
        let _ = storage.set_item(STORAGE_KEY, &json);
        log::debug!("List saved ({} products)", products.len());
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load() -> Vec<Product> {
    Vec::new()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save(_products: &[Product]) {
    // No-op for native
}
