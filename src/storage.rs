//! Key-value persistence adapter.
//!
//! The browser's localStorage is the single source of truth on wasm targets.
//! Native builds (desktop shell, tests) keep values in a process-local map so
//! the rest of the crate reads and writes through one boundary regardless of
//! platform.

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::{collections::HashMap, sync::Mutex};

pub const THEME_KEY: &str = "theme";

#[cfg(not(target_arch = "wasm32"))]
static LOCAL_STORE: Lazy<Mutex<HashMap<String, String>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

#[cfg(not(target_arch = "wasm32"))]
pub fn get(key: &str) -> Option<String> {
    let store = LOCAL_STORE.lock().ok()?;
    store.get(key).cloned()
}

#[cfg(target_arch = "wasm32")]
pub fn get(key: &str) -> Option<String> {
    let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten())?;
    storage.get_item(key).ok().flatten()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn set(key: &str, value: &str) {
    if let Ok(mut store) = LOCAL_STORE.lock() {
        store.insert(key.to_string(), value.to_string());
    }
}

#[cfg(target_arch = "wasm32")]
pub fn set(key: &str, value: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(key, value);
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn remove(key: &str) {
    if let Ok(mut store) = LOCAL_STORE.lock() {
        store.remove(key);
    }
}

#[cfg(target_arch = "wasm32")]
pub fn remove(key: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.remove_item(key);
    }
}
