//! Data models and types for the application.
//!
//! Contains domain types for:
//! - [`Entry`] - One navigable row of the server-rendered listing
//! - [`Caption`] - Discovered subtitle tracks
//! - [`MediaType`] - Video containers previewed in place
//! - [`ThemePreference`] - Persisted light/dark choice

mod caption;
mod entry;
mod media;
mod theme;

pub use caption::Caption;
pub use entry::Entry;
pub use media::MediaType;
pub use theme::ThemePreference;
