// Accessibility helpers
use crate::storage::BrowserStore;
use greyn_core::KvStore;

/// Storage key for the high-contrast preference.
pub const HIGH_CONTRAST_KEY: &str = "greyn.hc";

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #16a34a;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Writes into the `#status-live` element rendered by the app shell.
pub fn set_status(msg: &str) {
    log::debug!("status: {msg}");
    if let Some(node) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.get_element_by_id("status-live"))
    {
        node.set_text_content(Some(msg));
    }
}

/// Toggle high-contrast mode for accessibility
///
/// Adds or removes the 'hc' class from the HTML element and persists the choice.
pub fn set_high_contrast(enabled: bool) {
    if let Some(html) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    {
        let _ = if enabled {
            html.class_list().add_1("hc")
        } else {
            html.class_list().remove_1("hc")
        };
    }

    if let Err(err) = BrowserStore.set_item(HIGH_CONTRAST_KEY, if enabled { "1" } else { "0" }) {
        log::warn!("could not persist contrast preference: {err}");
    }
}

/// Check if high-contrast mode is currently enabled
#[must_use]
pub fn high_contrast_enabled() -> bool {
    BrowserStore
        .get_item(HIGH_CONTRAST_KEY)
        .ok()
        .flatten()
        .is_some_and(|v| v == "1")
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn high_contrast_preference_persists() {
        BrowserStore::reset_host();
        assert!(!high_contrast_enabled());
        set_high_contrast(true);
        assert!(high_contrast_enabled());
        set_high_contrast(false);
        assert!(!high_contrast_enabled());
    }

    #[test]
    fn status_updates_are_safe_without_a_document() {
        set_status("Peatland Restoration added to cart");
    }
}
