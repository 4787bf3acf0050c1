use serde::{de::DeserializeOwned, Serialize};
use web_sys::{window, Storage};

use crate::utils::constants::STORAGE_KEY_TOKEN;

pub fn get_local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

pub fn save_to_storage<T: Serialize>(key: &str, value: &T) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    let json = serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))?;
    storage
        .set_item(key, &json)
        .map_err(|_| "Failed to write to localStorage".to_string())?;
    Ok(())
}

pub fn load_from_storage<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = get_local_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

pub fn remove_from_storage(key: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .remove_item(key)
        .map_err(|_| "Failed to remove from localStorage".to_string())?;
    Ok(())
}

/// Raw string helpers for the token: it is stored as an opaque string, not
/// JSON, so it survives being read by other tooling unchanged.
pub fn save_string(key: &str, value: &str) -> Result<(), String> {
    let storage = get_local_storage().ok_or("localStorage is not available")?;
    storage
        .set_item(key, value)
        .map_err(|_| "Failed to write to localStorage".to_string())?;
    Ok(())
}

pub fn load_string(key: &str) -> Option<String> {
    let storage = get_local_storage()?;
    storage.get_item(key).ok()?
}

/// The persisted bearer token, if any. Read at send time by the API layer.
pub fn load_token() -> Option<String> {
    load_string(STORAGE_KEY_TOKEN).filter(|t| !t.is_empty())
}

pub fn save_token(token: &str) -> Result<(), String> {
    save_string(STORAGE_KEY_TOKEN, token)
}

pub fn clear_token() {
    let _ = remove_from_storage(STORAGE_KEY_TOKEN);
}

// Runs under `wasm-pack test --headless`; localStorage only exists there.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn token_round_trip() {
        save_token("abc.def.ghi").unwrap();
        assert_eq!(load_token().as_deref(), Some("abc.def.ghi"));

        clear_token();
        assert!(load_token().is_none());
    }

    #[wasm_bindgen_test]
    fn empty_token_counts_as_absent() {
        save_token("").unwrap();
        assert!(load_token().is_none());
        clear_token();
    }
}
