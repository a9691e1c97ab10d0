//! DOM and Web API utility functions.
//!
//! Provides safe, consistent access to browser APIs with proper error handling.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, ScrollIntoViewOptions, ScrollLogicalPosition, Storage, Window};

use crate::config::dom::THEME_ATTRIBUTE;
use crate::core::ThemeSurface;
use crate::models::ThemePreference;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Get the page document.
#[inline]
pub fn document() -> Option<Document> {
    window()?.document()
}

/// Get localStorage.
#[inline]
pub fn local_storage() -> Option<Storage> {
    window()?.local_storage().ok()?
}

/// Check whether a text-entry element currently has keyboard focus.
///
/// Global shortcuts stay quiet while the user types.
pub fn is_editing() -> bool {
    let Some(active) = document().and_then(|d| d.active_element()) else {
        return false;
    };
    if matches!(
        active.tag_name().to_ascii_uppercase().as_str(),
        "INPUT" | "TEXTAREA" | "SELECT"
    ) {
        return true;
    }
    active
        .dyn_into::<web_sys::HtmlElement>()
        .is_ok_and(|el| el.is_content_editable())
}

/// Scroll an element into view only as far as needed to make it visible.
pub fn reveal(element: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_block(ScrollLogicalPosition::Nearest);
    options.set_inline(ScrollLogicalPosition::Nearest);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}

// =============================================================================
// Browser Navigation
// =============================================================================

/// Path of the current location (e.g. `/media/tv/`).
pub fn location_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Full navigation to `href`, resolved against the current page.
pub fn navigate_to(href: &str) {
    if let Some(window) = window() {
        let _ = window.location().assign(href);
    }
}

// =============================================================================
// Theme
// =============================================================================

/// Applies the theme as an attribute on the document element.
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentTheme;

impl ThemeSurface for DocumentTheme {
    fn apply(&self, theme: ThemePreference) {
        if let Some(root) = document().and_then(|d| d.document_element()) {
            let _ = root.set_attribute(THEME_ATTRIBUTE, theme.as_str());
        }
    }
}
