//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

// =============================================================================
// Application Metadata
// =============================================================================

/// Application name, used in log lines.
pub const APP_NAME: &str = "dirview";

// =============================================================================
// Persistence
// =============================================================================

/// localStorage key holding the theme preference (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "theme";

// =============================================================================
// Page Structure
// =============================================================================

/// Selectors, attributes and class names shared with the server-rendered page.
pub mod dom {
    /// Id of the element the Leptos app mounts into (created when missing).
    pub const HOST_ID: &str = "dirview";

    /// Candidate rows of the listing table. Header rows are filtered out later.
    pub const ROW_SELECTOR: &str = "table tr";

    /// Link carrying a row's name and target.
    pub const ROW_LINK_SELECTOR: &str = "a[href]";

    /// Class the server may put on the parent-directory row.
    pub const PARENT_ROW_CLASS: &str = "parent";

    /// Class marking the focused row.
    pub const FOCUSED_CLASS: &str = "focused";

    /// Attribute on `<html>` carrying the applied theme.
    pub const THEME_ATTRIBUTE: &str = "data-theme";
}

// =============================================================================
// Media Preview
// =============================================================================

/// Subtitle discovery settings.
pub mod subtitles {
    /// Sibling caption extensions, probed in this order.
    pub const EXTENSIONS: &[&str] = &["srt", "vtt"];

    /// Language tag given to discovered caption tracks.
    pub const DEFAULT_LANGUAGE: &str = "en";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;
