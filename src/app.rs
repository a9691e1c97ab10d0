//! Root application module.
//!
//! Contains the App component, the AppContext definition and the state
//! handles it bundles, following Leptos conventions.

use leptos::logging::log;
use leptos::prelude::*;

use crate::components::listing::{self, DomRows};
use crate::components::preview::{PreviewOverlay, PreviewState};
use crate::components::{ThemeToggle, use_global_keys};
use crate::config::APP_NAME;
use crate::core::{
    Activation, Command, FocusController, FocusMove, PreferenceStore, RowIndex, ThemeController,
    project,
};
use crate::models::ThemePreference;
use crate::utils::{DocumentTheme, LocalStorageBackend, dom};

// ============================================================================
// ThemeState
// ============================================================================

type PageTheme = ThemeController<LocalStorageBackend, DocumentTheme>;

/// Applied theme plus a signal mirroring it for the toggle button.
///
/// # Note
///
/// This struct is `Copy` because both fields are arena handles.
#[derive(Clone, Copy)]
pub struct ThemeState {
    controller: StoredValue<PageTheme>,
    /// Currently applied theme.
    pub current: RwSignal<ThemePreference>,
}

impl ThemeState {
    /// Loads the saved preference and applies it to the document.
    pub fn new() -> Self {
        let controller =
            ThemeController::init(PreferenceStore::new(LocalStorageBackend), DocumentTheme);
        let current = RwSignal::new(controller.applied());
        Self {
            controller: StoredValue::new(controller),
            current,
        }
    }

    /// Flip, apply and persist the theme.
    pub fn toggle(&self) {
        if let Some(next) = self.controller.try_update_value(|c| c.toggle()) {
            self.current.set(next);
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// ListingState
// ============================================================================

/// Row index and focus state of the listing table.
#[derive(Clone, Copy)]
pub struct ListingState {
    rows: StoredValue<RowIndex>,
    focus: StoredValue<FocusController>,
}

impl ListingState {
    /// Index the rows currently in the document.
    pub fn scan() -> Self {
        let rows = listing::scan_rows();
        let focus = FocusController::new(rows.len());
        Self {
            rows: StoredValue::new(rows),
            focus: StoredValue::new(focus),
        }
    }

    /// Apply a focus move and project it onto the table.
    ///
    /// Returns whether the focused row changed.
    pub fn apply(&self, mv: FocusMove) -> bool {
        let Some(change) = self.focus.try_update_value(|f| f.apply(mv)).flatten() else {
            return false;
        };
        project(&DomRows::current(), change);
        true
    }

    /// Apply a key-driven focus move. Returns whether the key was consumed,
    /// which holds for clamped moves too as long as there are rows.
    pub fn move_focus(&self, mv: FocusMove) -> bool {
        self.apply(mv);
        self.focus.with_value(|f| f.handles_moves())
    }

    pub fn is_video(&self, index: usize) -> bool {
        self.rows
            .with_value(|rows| rows.get(index).is_some_and(|e| e.is_video()))
    }

    /// What activating row `index` does.
    pub fn activation(&self, index: usize) -> Option<Activation> {
        self.rows
            .with_value(|rows| rows.get(index).map(Activation::for_entry))
    }

    pub fn focused(&self) -> Option<usize> {
        self.focus.with_value(|f| f.current())
    }

    /// Navigate to the parent directory. Returns `false` at the root.
    pub fn navigate_parent(&self) -> bool {
        let target = self
            .rows
            .with_value(|rows| rows.parent_target(&dom::location_path()));
        match target {
            Some(href) => {
                dom::navigate_to(&href);
                true
            }
            None => false,
        }
    }
}

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide context.
///
/// Provided at the root of the component tree and accessed with
/// `use_context::<AppContext>()`.
///
/// # Architecture
///
/// - **Theme**: saved preference and the applied theme
/// - **Listing**: row index and keyboard/pointer focus
/// - **Preview**: the single media preview session
#[derive(Clone, Copy)]
pub struct AppContext {
    pub theme: ThemeState,
    pub listing: ListingState,
    pub preview: PreviewState,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            theme: ThemeState::new(),
            listing: ListingState::scan(),
            preview: PreviewState::new(),
        }
    }

    /// Activate row `index`: preview a video, follow anything else.
    pub fn activate(&self, index: usize) -> bool {
        match self.listing.activation(index) {
            Some(Activation::Preview(url)) => self.preview.open(url),
            Some(Activation::Follow(href)) => dom::navigate_to(&href),
            None => return false,
        }
        true
    }

    /// Run a routed command. Returns whether it did anything.
    pub fn execute(&self, command: Command) -> bool {
        match command {
            Command::Focus(mv) => self.listing.move_focus(mv),
            Command::Activate => self.listing.focused().is_some_and(|i| self.activate(i)),
            Command::NavigateParent => self.listing.navigate_parent(),
            Command::ClosePreview => self.preview.close(),
            Command::TogglePlayback => self.preview.toggle_playback(),
            Command::ToggleFullscreen => self.preview.toggle_fullscreen(),
            Command::ToggleMute => self.preview.toggle_mute(),
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// This component:
/// - Creates and provides the global AppContext (applying the saved theme)
/// - Wires hover, click and keyboard handling onto the listing
/// - Focuses the first row
/// - Renders the theme toggle and the preview overlay
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    listing::attach_row_handlers(ctx);
    ctx.listing.apply(FocusMove::First);
    use_global_keys(ctx);
    log!("{APP_NAME} ready");

    view! {
        <ThemeToggle />
        <PreviewOverlay />
    }
}
