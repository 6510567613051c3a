use shared::{ClientStore, StoreError};
use web_sys::Storage;

/// `ClientStore` backed by the browser's `localStorage`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocalStore;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl ClientStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        local_storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        local_storage()
            .ok_or(StoreError::Unavailable)?
            .set_item(key, value)
            .map_err(|e| StoreError::Write {
                key: key.to_string(),
                reason: format!("{:?}", e),
            })
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::{User, UserSession, USER_DATA_KEY};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_local_store_round_trip() {
        let store = LocalStore;
        store.set("feesTestKey", "value").unwrap();
        assert_eq!(store.get("feesTestKey").as_deref(), Some("value"));
        store.remove("feesTestKey");
        assert_eq!(store.get("feesTestKey"), None);
    }

    #[wasm_bindgen_test]
    fn test_corrupt_user_data_means_logged_out() {
        let store = LocalStore;
        store.set(USER_DATA_KEY, "not json").unwrap();
        let session = UserSession::new(store);
        assert_eq!(session.current_user(), None);

        session.store_user(&User::fallback_admin()).unwrap();
        assert!(session.is_logged_in());
        session.logout();
        assert_eq!(store.get(USER_DATA_KEY), None);
    }
}
