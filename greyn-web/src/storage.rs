//! Browser `localStorage` behind the core [`KvStore`] trait.
//!
//! Host builds (server-side rendering and tests) get a thread-local map so
//! pages can be rendered against pre-populated state.

use greyn_core::{KvStore, StoreError};
#[cfg(not(target_arch = "wasm32"))]
use std::cell::RefCell;
#[cfg(not(target_arch = "wasm32"))]
use std::collections::HashMap;

#[cfg(not(target_arch = "wasm32"))]
thread_local! {
    static HOST_STORAGE: RefCell<HashMap<String, String>> = RefCell::new(HashMap::new());
}

/// Handle on the origin's persistent storage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrowserStore;

#[cfg(target_arch = "wasm32")]
fn backend() -> Result<web_sys::Storage, StoreError> {
    crate::dom::local_storage().map_err(|err| {
        log::warn!("localStorage unavailable: {}", crate::dom::js_error_message(&err));
        StoreError::Unavailable
    })
}

#[cfg(target_arch = "wasm32")]
fn classify(err: &wasm_bindgen::JsValue) -> StoreError {
    let message = crate::dom::js_error_message(err);
    if message.contains("Quota") || message.contains("quota") {
        StoreError::QuotaExceeded
    } else {
        StoreError::Backend(message)
    }
}

#[cfg(target_arch = "wasm32")]
impl KvStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        backend()?.get_item(key).map_err(|err| classify(&err))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        backend()?.set_item(key, value).map_err(|err| classify(&err))
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        backend()?.remove_item(key).map_err(|err| classify(&err))
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl KvStore for BrowserStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(HOST_STORAGE.with(|map| map.borrow().get(key).cloned()))
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        HOST_STORAGE.with(|map| map.borrow_mut().insert(key.to_string(), value.to_string()));
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        HOST_STORAGE.with(|map| map.borrow_mut().remove(key));
        Ok(())
    }
}

impl BrowserStore {
    /// Drop every host-side entry. Browser storage is left untouched.
    pub fn reset_host() {
        #[cfg(not(target_arch = "wasm32"))]
        HOST_STORAGE.with(|map| map.borrow_mut().clear());
    }
}
