//! Core interaction logic, independent of the DOM.
//!
//! This module provides:
//! - [`ThemeController`] and [`PreferenceStore`] for the persisted theme
//! - [`RowIndex`] and [`FocusController`] for keyboard navigation
//! - [`route_key`] mapping key presses to [`Command`]s
//! - [`Probe`] for sibling caption discovery
//! - [`PreviewSession`] and [`open_preview`] for the media overlay

pub mod error;
mod focus;
mod keymap;
mod listing;
mod preview;
mod subtitles;
mod theme;

pub use focus::{Activation, FocusController, FocusMove, FocusView, project};
pub use keymap::{Command, Key, KeyContext, route_key};
pub use listing::{RawRow, RowIndex};
pub use preview::{PreviewSession, PreviewSurface, SessionSlot, open_preview};
pub use subtitles::{Probe, ProbeFuture};
pub use theme::{PreferenceBackend, PreferenceStore, ThemeController, ThemeSurface};
