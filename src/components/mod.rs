//! UI components built with Leptos.
//!
//! - [`icons`] - Centralized icon definitions (change theme here)
//! - [`keyboard`] - Global key bindings
//! - [`listing`] - Row scanning, focus markers and row event handlers
//! - [`preview`] - Video preview overlay and session
//! - [`ThemeToggle`] - Light/dark switch

pub mod icons;
mod keyboard;
pub mod listing;
pub mod preview;
mod theme_toggle;

pub use keyboard::use_global_keys;
pub use theme_toggle::ThemeToggle;
