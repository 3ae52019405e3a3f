//! Theme preference: read, apply and persist.
//!
//! The preference lives in `localStorage` under [`STORAGE_KEY`]; with no
//! stored value the system `prefers-color-scheme` decides. Applying toggles
//! the `dark` class on `<html>`. Outside the browser every call is inert.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub(crate) const STORAGE_KEY: &str = "learnsync_dark";

/// Interpret a stored preference value.
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn parse_stored(value: &str) -> Option<bool> {
    match value {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}

#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub(crate) fn stored_value(enabled: bool) -> &'static str {
    if enabled { "true" } else { "false" }
}

/// Read the dark mode preference.
///
/// Returns the stored choice if there is one, otherwise the system
/// preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };

        if let Ok(Some(storage)) = window.local_storage() {
            if let Some(enabled) = storage.get_item(STORAGE_KEY).ok().flatten().as_deref().and_then(parse_stored) {
                return enabled;
            }
        }

        window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .map_or(false, |mq| mq.matches())
    }
    #[cfg(not(feature = "csr"))]
    {
        false
    }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            let _ = if enabled { class_list.add_1("dark") } else { class_list.remove_1("dark") };
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = enabled;
    }
}

/// Flip the theme, apply it, and persist the new preference.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "csr")]
    {
        if let Some(Ok(Some(storage))) = web_sys::window().map(|w| w.local_storage()) {
            let _ = storage.set_item(STORAGE_KEY, stored_value(next));
        }
    }
    next
}
