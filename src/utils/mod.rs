//! Utility modules for browser APIs and URL paths.
//!
//! Provides:
//! - [`dom`] - Window/document accessors, focus and scroll helpers, [`DocumentTheme`]
//! - [`HttpProbe`] - Existence checks for sibling caption files
//! - [`LocalStorageBackend`] - Persistence for the theme preference
//! - [`path`] - Extension and parent-path helpers

pub mod dom;
mod fetch;
pub mod path;
mod storage;

pub use dom::DocumentTheme;
pub use fetch::HttpProbe;
pub use storage::LocalStorageBackend;
