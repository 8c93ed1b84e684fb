//! Session Token Store
//!
//! Holds the bearer token issued at login. The token lives in browser
//! localStorage so a reload resumes the session; tests swap in an
//! in-memory backend.

use std::rc::Rc;

/// localStorage key holding the session token.
const TOKEN_KEY: &str = "finboard_jwt";

/// Where tokens are persisted. One implementation wraps localStorage,
/// the test one wraps a cell.
pub trait TokenBackend {
    fn read(&self) -> Option<String>;
    fn write(&self, token: &str);
    fn remove(&self);
}

/// localStorage-backed persistence. All failures (storage disabled,
/// quota, missing window) degrade to "no token".
pub struct BrowserTokens;

impl TokenBackend for BrowserTokens {
    fn read(&self) -> Option<String> {
        local_storage()?.get_item(TOKEN_KEY).ok().flatten()
    }

    fn write(&self, token: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, token);
        }
    }

    fn remove(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
        }
    }
}

pub(crate) fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

#[cfg(test)]
pub struct MemoryTokens(std::cell::RefCell<Option<String>>);

#[cfg(test)]
impl MemoryTokens {
    pub fn new() -> Self {
        Self(std::cell::RefCell::new(None))
    }
}

#[cfg(test)]
impl TokenBackend for MemoryTokens {
    fn read(&self) -> Option<String> {
        self.0.borrow().clone()
    }

    fn write(&self, token: &str) {
        *self.0.borrow_mut() = Some(token.to_string());
    }

    fn remove(&self) {
        *self.0.borrow_mut() = None;
    }
}

/// Handle to the persisted session token. Cloning shares the backend.
#[derive(Clone)]
pub struct TokenStore {
    backend: Rc<dyn TokenBackend>,
}

impl TokenStore {
    /// Store backed by browser localStorage.
    pub fn browser() -> Self {
        Self {
            backend: Rc::new(BrowserTokens),
        }
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            backend: Rc::new(MemoryTokens::new()),
        }
    }

    /// Persist `token`, overwriting any previous value.
    pub fn set(&self, token: &str) {
        self.backend.write(token);
    }

    /// The stored token, if any.
    pub fn get(&self) -> Option<String> {
        self.backend.read()
    }

    /// Remove the stored token. A no-op when none is stored.
    pub fn clear(&self) {
        self.backend.remove();
    }

    /// Whether a token is currently stored.
    pub fn is_present(&self) -> bool {
        self.get().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let store = TokenStore::in_memory();
        assert!(store.get().is_none());
        assert!(!store.is_present());
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = TokenStore::in_memory();
        store.set("tok-abc");
        assert_eq!(store.get().as_deref(), Some("tok-abc"));
        assert!(store.is_present());
    }

    #[test]
    fn set_overwrites_previous_token() {
        let store = TokenStore::in_memory();
        store.set("first");
        store.set("second");
        assert_eq!(store.get().as_deref(), Some("second"));
    }

    #[test]
    fn clear_removes_token() {
        let store = TokenStore::in_memory();
        store.set("tok-abc");
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn clear_on_empty_store_is_a_noop() {
        let store = TokenStore::in_memory();
        store.clear();
        assert!(store.get().is_none());
    }

    #[test]
    fn clones_share_the_backend() {
        let store = TokenStore::in_memory();
        let alias = store.clone();
        store.set("shared");
        assert_eq!(alias.get().as_deref(), Some("shared"));
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn browser_store_round_trips() {
        let store = TokenStore::browser();
        store.clear();
        assert!(store.get().is_none());

        store.set("tok-browser");
        assert_eq!(store.get().as_deref(), Some("tok-browser"));

        store.clear();
        assert!(store.get().is_none());
    }
}
