//! Page-lifetime preview session handle.

use leptos::prelude::*;

use super::player::VideoSurface;
use crate::core::{PreviewSession, SessionSlot, open_preview};
use crate::utils::HttpProbe;

/// Copyable handle to the one preview session of the page.
#[derive(Clone, Copy)]
pub struct PreviewState {
    session: StoredValue<PreviewSession<VideoSurface>>,
}

impl PreviewState {
    pub fn new() -> Self {
        Self {
            session: StoredValue::new(PreviewSession::new(VideoSurface::new())),
        }
    }

    /// The surface the overlay view binds to.
    pub fn surface(&self) -> VideoSurface {
        self.session.with_value(|s| *s.surface())
    }

    pub fn is_open(&self) -> bool {
        self.session.with_value(|s| s.is_open())
    }

    /// Open `media_url`, discovering captions in the background.
    pub fn open(&self, media_url: String) {
        let state = *self;
        wasm_bindgen_futures::spawn_local(async move {
            open_preview(&state, &HttpProbe, &media_url).await;
        });
    }

    pub fn close(&self) -> bool {
        self.with_session(|s| s.close()).unwrap_or(false)
    }

    pub fn toggle_playback(&self) -> bool {
        self.with_session(|s| s.toggle_playback()).unwrap_or(false)
    }

    pub fn toggle_fullscreen(&self) -> bool {
        self.with_session(|s| s.toggle_fullscreen()).unwrap_or(false)
    }

    pub fn toggle_mute(&self) -> bool {
        self.with_session(|s| s.toggle_mute()).unwrap_or(false)
    }
}

impl Default for PreviewState {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionSlot for PreviewState {
    type Surface = VideoSurface;

    fn with_session<R>(&self, f: impl FnOnce(&mut PreviewSession<VideoSurface>) -> R) -> Option<R> {
        self.session.try_update_value(f)
    }
}
