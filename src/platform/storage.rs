//! JSON values in LocalStorage
//!
//! Missing storage and bad JSON read as `None`; failed writes are logged.
//! Native builds have no storage: loads return `None` and saves do nothing.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Load a JSON value from LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let json = storage.get_item(key).ok()??;
    match serde_json::from_str(&json) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("Ignoring unreadable {}: {}", key, e);
            None
        }
    }
}

/// Save a JSON value to LocalStorage (WASM only)
#[cfg(target_arch = "wasm32")]
pub fn save_json<T: Serialize>(key: &str, value: &T) -> bool {
    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok())
        .flatten();

    let Some(storage) = storage else {
        log::warn!("LocalStorage unavailable, {} not saved", key);
        return false;
    };
    match serde_json::to_string(value) {
        Ok(json) => match storage.set_item(key, &json) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Could not save {}: {:?}", key, e);
                false
            }
        },
        Err(e) => {
            log::warn!("Could not encode {}: {}", key, e);
            false
        }
    }
}

/// Native stubs
#[cfg(not(target_arch = "wasm32"))]
pub fn load_json<T: DeserializeOwned>(_key: &str) -> Option<T> {
    None
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_json<T: Serialize>(_key: &str, _value: &T) -> bool {
    false
}
