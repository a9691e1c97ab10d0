//! `<video>`-backed preview surface.

use leptos::html::Video;
use leptos::logging::warn;
use leptos::prelude::*;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlSourceElement, HtmlTrackElement, HtmlVideoElement};

use crate::core::PreviewSurface;
use crate::core::error::PlayerError;
use crate::models::Caption;
use crate::utils::dom;

/// Renders JS exceptions for log lines and error payloads.
fn describe(value: JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{value:?}"))
}

/// Overlay visibility, heading and the player element.
///
/// All fields are reactive handles, so the surface is `Copy` and can be
/// shared between the session and the overlay view.
#[derive(Clone, Copy)]
pub struct VideoSurface {
    pub video: NodeRef<Video>,
    pub visible: RwSignal<bool>,
    pub title: RwSignal<String>,
}

impl VideoSurface {
    pub fn new() -> Self {
        Self {
            video: NodeRef::new(),
            visible: RwSignal::new(false),
            title: RwSignal::new(String::new()),
        }
    }

    fn element(&self) -> Result<HtmlVideoElement, PlayerError> {
        self.video.get_untracked().ok_or(PlayerError::ElementMissing)
    }

    fn create<T: JsCast>(tag: &str) -> Result<T, JsValue> {
        let document = dom::document().ok_or_else(|| JsValue::from_str("no document"))?;
        document
            .create_element(tag)?
            .dyn_into::<T>()
            .map_err(|_| JsValue::from_str(tag))
    }

    fn remove_children(video: &HtmlVideoElement, selector: &str) {
        let Ok(nodes) = video.query_selector_all(selector) else {
            return;
        };
        for i in 0..nodes.length() {
            if let Some(el) = nodes.item(i).and_then(|n| n.dyn_into::<Element>().ok()) {
                el.remove();
            }
        }
    }
}

impl Default for VideoSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl PreviewSurface for VideoSurface {
    fn show(&self, title: &str) {
        let title = js_sys::decode_uri_component(title)
            .map(String::from)
            .unwrap_or_else(|_| title.to_string());
        self.title.set(title);
        self.visible.set(true);
    }

    fn hide(&self) {
        self.visible.set(false);
    }

    fn set_source(&self, url: &str, mime: Option<&str>) -> Result<(), PlayerError> {
        let video = self.element()?;
        Self::remove_children(&video, "source");

        let source: HtmlSourceElement =
            Self::create("source").map_err(|e| PlayerError::SourceFailed(describe(e)))?;
        source.set_src(url);
        if let Some(mime) = mime {
            source.set_type(mime);
        }
        video
            .append_child(&source)
            .map_err(|e| PlayerError::SourceFailed(describe(e)))?;
        video.load();
        Ok(())
    }

    fn clear_tracks(&self) {
        if let Ok(video) = self.element() {
            Self::remove_children(&video, "track");
        }
    }

    fn add_track(&self, caption: &Caption) -> Result<(), PlayerError> {
        let video = self.element()?;
        let track: HtmlTrackElement =
            Self::create("track").map_err(|e| PlayerError::TrackFailed(describe(e)))?;
        track.set_kind(caption.kind.as_str());
        track.set_label(&caption.label);
        track.set_srclang(&caption.language_tag);
        track.set_src(&caption.src_url);
        track.set_default(false);
        video
            .append_child(&track)
            .map(|_| ())
            .map_err(|e| PlayerError::TrackFailed(describe(e)))
    }

    fn play(&self) -> Result<(), PlayerError> {
        let promise = self
            .element()?
            .play()
            .map_err(|e| PlayerError::PlaybackFailed(describe(e)))?;
        // Autoplay policies reject the promise; the user can still press play.
        wasm_bindgen_futures::spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                warn!("playback did not start: {}", describe(e));
            }
        });
        Ok(())
    }

    fn pause(&self) -> Result<(), PlayerError> {
        self.element()?
            .pause()
            .map_err(|e| PlayerError::PlaybackFailed(describe(e)))
    }

    fn rewind(&self) {
        if let Ok(video) = self.element() {
            video.set_current_time(0.0);
        }
    }

    fn is_paused(&self) -> bool {
        self.element().map(|v| v.paused()).unwrap_or(true)
    }

    fn is_muted(&self) -> bool {
        self.element().map(|v| v.muted()).unwrap_or(false)
    }

    fn set_muted(&self, muted: bool) {
        if let Ok(video) = self.element() {
            video.set_muted(muted);
        }
    }

    fn is_fullscreen(&self) -> bool {
        dom::document()
            .and_then(|d| d.fullscreen_element())
            .is_some()
    }

    fn enter_fullscreen(&self) -> Result<(), PlayerError> {
        self.element()?
            .request_fullscreen()
            .map_err(|e| PlayerError::FullscreenFailed(describe(e)))
    }

    fn exit_fullscreen(&self) -> Result<(), PlayerError> {
        let document = dom::document()
            .ok_or_else(|| PlayerError::FullscreenFailed("no document".to_string()))?;
        document.exit_fullscreen();
        Ok(())
    }
}
