//! In-page video preview lifecycle.
//!
//! A [`PreviewSession`] owns the single overlay/player instance and moves
//! through `Closed -> Opening -> Open -> Closed`. Opening is split around the
//! one suspension point, subtitle discovery:
//!
//! 1. [`PreviewSession::begin_open`] shows the overlay, sets the source and
//!    hands out an [`OpenTicket`] stamped with the session generation.
//! 2. Discovery runs with no borrow of the session held.
//! 3. [`PreviewSession::finish_open`] attaches captions and starts playback,
//!    but only if the ticket still names the live session. Closing or
//!    re-opening bumps the generation, which turns late completions into
//!    no-ops.
//!
//! Player failures are logged and never escape the session.

use leptos::logging::{debug_log, error};

use crate::core::error::PlayerError;
use crate::core::subtitles::{Probe, discover};
use crate::models::{Caption, MediaType};
use crate::utils::path;

/// The overlay and media player, as provided by the environment.
pub trait PreviewSurface {
    /// Make the overlay visible with `title` as its heading.
    fn show(&self, title: &str);
    fn hide(&self);

    /// Point the player at `url`, optionally typed with a MIME type.
    fn set_source(&self, url: &str, mime: Option<&str>) -> Result<(), PlayerError>;
    /// Remove every attached caption track.
    fn clear_tracks(&self);
    /// Attach a non-default caption track after the existing ones.
    fn add_track(&self, caption: &Caption) -> Result<(), PlayerError>;

    fn play(&self) -> Result<(), PlayerError>;
    fn pause(&self) -> Result<(), PlayerError>;
    /// Seek back to the start.
    fn rewind(&self);
    fn is_paused(&self) -> bool;

    fn is_muted(&self) -> bool;
    fn set_muted(&self, muted: bool);

    fn is_fullscreen(&self) -> bool;
    fn enter_fullscreen(&self) -> Result<(), PlayerError>;
    fn exit_fullscreen(&self) -> Result<(), PlayerError>;
}

/// Lifecycle state of the preview.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Closed,
    /// Overlay shown, waiting for subtitle discovery.
    Opening,
    Open,
}

/// Proof that an open was started, redeemed by [`PreviewSession::finish_open`].
#[derive(Debug, PartialEq, Eq)]
#[must_use]
pub struct OpenTicket {
    generation: u64,
    media_url: String,
}

impl OpenTicket {
    pub fn media_url(&self) -> &str {
        &self.media_url
    }
}

/// The single preview session of the page.
#[derive(Debug)]
pub struct PreviewSession<P> {
    surface: P,
    state: SessionState,
    media_url: Option<String>,
    captions: Vec<Caption>,
    generation: u64,
}

impl<P: PreviewSurface> PreviewSession<P> {
    pub fn new(surface: P) -> Self {
        Self {
            surface,
            state: SessionState::Closed,
            media_url: None,
            captions: Vec::new(),
            generation: 0,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the overlay is up (opening or open).
    pub fn is_open(&self) -> bool {
        self.state != SessionState::Closed
    }

    #[cfg(test)]
    pub fn media_url(&self) -> Option<&str> {
        self.media_url.as_deref()
    }

    /// Captions attached to the live session.
    #[cfg(test)]
    pub fn captions(&self) -> &[Caption] {
        &self.captions
    }

    pub fn surface(&self) -> &P {
        &self.surface
    }

    /// Start opening `media_url`, superseding any live session.
    pub fn begin_open(&mut self, media_url: &str) -> OpenTicket {
        self.generation += 1;
        self.state = SessionState::Opening;
        self.media_url = Some(media_url.to_string());
        self.captions.clear();

        self.surface.show(path::file_name(media_url));
        let mime = MediaType::from_path(media_url).and_then(MediaType::mime);
        if let Err(e) = self.surface.set_source(media_url, mime) {
            error!("preview of {media_url}: {e}");
        }
        self.surface.clear_tracks();

        OpenTicket {
            generation: self.generation,
            media_url: media_url.to_string(),
        }
    }

    /// Whether `ticket` still names the session waiting for discovery.
    pub fn is_current(&self, ticket: &OpenTicket) -> bool {
        self.state == SessionState::Opening && self.generation == ticket.generation
    }

    /// Attach discovered captions in order, then start playback.
    ///
    /// Returns `false` and leaves the player untouched when the ticket is stale.
    pub fn finish_open(&mut self, ticket: OpenTicket, captions: Vec<Caption>) -> bool {
        if !self.is_current(&ticket) {
            debug_log!("discarding stale captions for {}", ticket.media_url);
            return false;
        }

        for caption in &captions {
            if let Err(e) = self.surface.add_track(caption) {
                error!("caption {}: {e}", caption.src_url);
            }
        }
        self.captions = captions;
        self.state = SessionState::Open;

        if let Err(e) = self.surface.play() {
            error!("preview of {}: {e}", ticket.media_url);
        }
        true
    }

    /// Hide the overlay, stop and rewind the media, drop the captions.
    ///
    /// Returns `false` when no session was open.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }

        self.generation += 1;
        self.state = SessionState::Closed;
        if let Some(url) = self.media_url.take() {
            debug_log!("closing preview of {url}");
        }
        self.captions.clear();

        if self.surface.is_fullscreen()
            && let Err(e) = self.surface.exit_fullscreen()
        {
            error!("{e}");
        }
        self.surface.hide();
        if let Err(e) = self.surface.pause() {
            error!("{e}");
        }
        self.surface.rewind();
        self.surface.clear_tracks();
        true
    }

    /// Space / `p`. Returns `false` when no session is open.
    ///
    /// While captions are still being discovered the press is consumed but
    /// ignored; playback starts once they are attached.
    pub fn toggle_playback(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        if self.state == SessionState::Opening {
            return true;
        }
        let result = if self.surface.is_paused() {
            self.surface.play()
        } else {
            self.surface.pause()
        };
        if let Err(e) = result {
            error!("{e}");
        }
        true
    }

    /// `f`. Returns `false` when no session is open.
    pub fn toggle_fullscreen(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        let result = if self.surface.is_fullscreen() {
            self.surface.exit_fullscreen()
        } else {
            self.surface.enter_fullscreen()
        };
        if let Err(e) = result {
            error!("{e}");
        }
        true
    }

    /// `m`. Returns `false` when no session is open.
    pub fn toggle_mute(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.surface.set_muted(!self.surface.is_muted());
        true
    }
}

/// Somewhere a [`PreviewSession`] lives and can be borrowed briefly.
///
/// Borrows never span an await; the slot may be gone by the time discovery
/// completes, in which case `with_session` returns `None`.
pub trait SessionSlot {
    type Surface: PreviewSurface;

    fn with_session<R>(&self, f: impl FnOnce(&mut PreviewSession<Self::Surface>) -> R)
    -> Option<R>;
}

impl<P: PreviewSurface> SessionSlot for std::cell::RefCell<PreviewSession<P>> {
    type Surface = P;

    fn with_session<R>(&self, f: impl FnOnce(&mut PreviewSession<P>) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}

/// Open a preview for `media_url`: show, discover captions, attach, play.
///
/// Returns whether this open became the live session.
pub async fn open_preview<S, Q>(slot: &S, probe: &Q, media_url: &str) -> bool
where
    S: SessionSlot + ?Sized,
    Q: Probe + ?Sized,
{
    let Some(ticket) = slot.with_session(|session| session.begin_open(media_url)) else {
        return false;
    };
    let captions = discover(probe, ticket.media_url()).await;
    slot.with_session(|session| session.finish_open(ticket, captions))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::core::subtitles::testing::{GatedProbe, OfflineProbe, StaticProbe};

    #[derive(Default)]
    struct FakeSurface {
        visible: Cell<bool>,
        title: RefCell<String>,
        source: RefCell<Option<(String, Option<String>)>>,
        tracks: RefCell<Vec<Caption>>,
        playing: Cell<bool>,
        position_reset: Cell<u32>,
        muted: Cell<bool>,
        fullscreen: Cell<bool>,
        fail_playback: bool,
        events: RefCell<Vec<&'static str>>,
    }

    impl FakeSurface {
        fn failing_playback() -> Self {
            Self {
                fail_playback: true,
                ..Self::default()
            }
        }
    }

    impl PreviewSurface for FakeSurface {
        fn show(&self, title: &str) {
            self.visible.set(true);
            *self.title.borrow_mut() = title.to_string();
        }

        fn hide(&self) {
            self.visible.set(false);
        }

        fn set_source(&self, url: &str, mime: Option<&str>) -> Result<(), PlayerError> {
            *self.source.borrow_mut() = Some((url.to_string(), mime.map(String::from)));
            Ok(())
        }

        fn clear_tracks(&self) {
            self.tracks.borrow_mut().clear();
        }

        fn add_track(&self, caption: &Caption) -> Result<(), PlayerError> {
            self.events.borrow_mut().push("track");
            self.tracks.borrow_mut().push(caption.clone());
            Ok(())
        }

        fn play(&self) -> Result<(), PlayerError> {
            self.events.borrow_mut().push("play");
            if self.fail_playback {
                return Err(PlayerError::PlaybackFailed("NotAllowedError".to_string()));
            }
            self.playing.set(true);
            Ok(())
        }

        fn pause(&self) -> Result<(), PlayerError> {
            self.playing.set(false);
            Ok(())
        }

        fn rewind(&self) {
            self.position_reset.set(self.position_reset.get() + 1);
        }

        fn is_paused(&self) -> bool {
            !self.playing.get()
        }

        fn is_muted(&self) -> bool {
            self.muted.get()
        }

        fn set_muted(&self, muted: bool) {
            self.muted.set(muted);
        }

        fn is_fullscreen(&self) -> bool {
            self.fullscreen.get()
        }

        fn enter_fullscreen(&self) -> Result<(), PlayerError> {
            self.fullscreen.set(true);
            Ok(())
        }

        fn exit_fullscreen(&self) -> Result<(), PlayerError> {
            self.fullscreen.set(false);
            Ok(())
        }
    }

    fn session() -> RefCell<PreviewSession<FakeSurface>> {
        RefCell::new(PreviewSession::new(FakeSurface::default()))
    }

    #[tokio::test]
    async fn test_open_with_srt_only() {
        let slot = session();
        let probe = StaticProbe::with(&["/v/movie.srt"]);

        assert!(open_preview(&slot, &probe, "/v/movie.mp4").await);

        let s = slot.borrow();
        assert_eq!(s.state(), SessionState::Open);
        assert_eq!(s.media_url(), Some("/v/movie.mp4"));
        assert_eq!(s.captions().len(), 1);
        assert_eq!(s.captions()[0].label, "SRT");

        let surface = s.surface();
        assert!(surface.visible.get());
        assert_eq!(*surface.title.borrow(), "movie.mp4");
        assert_eq!(
            *surface.source.borrow(),
            Some(("/v/movie.mp4".to_string(), Some("video/mp4".to_string())))
        );
        assert_eq!(surface.tracks.borrow().len(), 1);
        assert!(surface.playing.get());
    }

    #[tokio::test]
    async fn test_captions_attach_before_play() {
        let slot = session();
        let probe = StaticProbe::with(&["/v/movie.srt", "/v/movie.vtt"]);

        open_preview(&slot, &probe, "/v/movie.mp4").await;

        let s = slot.borrow();
        assert_eq!(*s.surface().events.borrow(), vec!["track", "track", "play"]);
        let labels: Vec<_> = s.surface().tracks.borrow().iter().map(|c| c.label.clone()).collect();
        assert_eq!(labels, vec!["SRT", "VTT"]);
    }

    #[tokio::test]
    async fn test_open_without_captions_still_plays() {
        let slot = session();

        assert!(open_preview(&slot, &OfflineProbe, "/v/movie.webm").await);

        let s = slot.borrow();
        assert!(s.captions().is_empty());
        assert!(s.surface().playing.get());
    }

    #[test]
    fn test_overlay_is_open_while_discovery_is_pending() {
        let slot = session();
        let ticket = slot.borrow_mut().begin_open("/v/movie.mp4");

        let s = slot.borrow();
        assert_eq!(s.state(), SessionState::Opening);
        assert!(s.is_open());
        assert!(s.surface().visible.get());
        assert!(!s.surface().playing.get());
        assert!(s.is_current(&ticket));
    }

    #[tokio::test]
    async fn test_close_before_discovery_discards_captions() {
        let slot = session();
        let probe = GatedProbe::with(&["/v/movie.srt", "/v/movie.vtt"]);

        let close_then_release = async {
            assert!(slot.borrow_mut().close());
            probe.release_all();
        };
        let (opened, ()) =
            futures::join!(open_preview(&slot, &probe, "/v/movie.mp4"), close_then_release);

        assert!(!opened);
        let s = slot.borrow();
        assert_eq!(s.state(), SessionState::Closed);
        assert!(s.captions().is_empty());
        assert!(s.surface().tracks.borrow().is_empty());
        assert!(!s.surface().playing.get());
        assert!(!s.surface().visible.get());
    }

    #[tokio::test]
    async fn test_reopen_supersedes_pending_session() {
        let slot = session();
        let probe = GatedProbe::with(&["/v/a.srt", "/v/b.vtt"]);
        let later = StaticProbe::with(&["/v/b.vtt"]);

        let reopen = async {
            assert!(open_preview(&slot, &later, "/v/b.mp4").await);
            probe.release_all();
        };
        let (first, ()) = futures::join!(open_preview(&slot, &probe, "/v/a.mp4"), reopen);

        assert!(!first);
        let s = slot.borrow();
        assert_eq!(s.media_url(), Some("/v/b.mp4"));
        let tracks: Vec<_> = s.surface().tracks.borrow().iter().map(|c| c.src_url.clone()).collect();
        assert_eq!(tracks, vec!["/v/b.vtt"]);
    }

    #[tokio::test]
    async fn test_playback_toggle_waits_for_captions() {
        let slot = session();
        let probe = GatedProbe::with(&["/v/movie.srt"]);

        let toggle_then_release = async {
            assert!(slot.borrow_mut().toggle_playback());
            assert!(!slot.borrow().surface().playing.get());
            probe.release_all();
        };
        let (opened, ()) =
            futures::join!(open_preview(&slot, &probe, "/v/movie.mp4"), toggle_then_release);

        assert!(opened);
        let s = slot.borrow();
        assert_eq!(*s.surface().events.borrow(), vec!["track", "play"]);
        assert!(s.surface().playing.get());
    }

    #[tokio::test]
    async fn test_matroska_source_has_no_type_hint() {
        let slot = session();
        open_preview(&slot, &StaticProbe::default(), "/v/show.mkv").await;

        assert_eq!(
            *slot.borrow().surface().source.borrow(),
            Some(("/v/show.mkv".to_string(), None))
        );
    }

    #[test]
    fn test_stale_ticket_after_close() {
        let slot = session();
        let ticket = slot.borrow_mut().begin_open("/v/movie.mp4");
        slot.borrow_mut().close();

        let captions = vec![Caption::for_subtitle("srt", "/v/movie.srt".to_string(), "en")];
        assert!(!slot.borrow_mut().finish_open(ticket, captions));
        assert!(slot.borrow().surface().tracks.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_close_resets_player() {
        let slot = session();
        let probe = StaticProbe::with(&["/v/movie.vtt"]);
        open_preview(&slot, &probe, "/v/movie.mp4").await;
        slot.borrow_mut().toggle_fullscreen();

        assert!(slot.borrow_mut().close());

        let s = slot.borrow();
        assert_eq!(s.state(), SessionState::Closed);
        assert_eq!(s.media_url(), None);
        assert!(s.captions().is_empty());
        let surface = s.surface();
        assert!(!surface.visible.get());
        assert!(!surface.playing.get());
        assert!(!surface.fullscreen.get());
        assert_eq!(surface.position_reset.get(), 1);
        assert!(surface.tracks.borrow().is_empty());
    }

    #[test]
    fn test_close_when_closed_is_a_no_op() {
        let slot = session();
        assert!(!slot.borrow_mut().close());
        assert_eq!(slot.borrow().surface().position_reset.get(), 0);
    }

    #[test]
    fn test_shortcuts_need_an_open_session() {
        let slot = session();
        let mut s = slot.borrow_mut();
        assert!(!s.toggle_playback());
        assert!(!s.toggle_fullscreen());
        assert!(!s.toggle_mute());
        assert!(!s.surface().muted.get());
        assert!(!s.surface().fullscreen.get());
    }

    #[tokio::test]
    async fn test_shortcuts_while_open() {
        let slot = session();
        open_preview(&slot, &StaticProbe::default(), "/v/movie.mp4").await;
        let mut s = slot.borrow_mut();

        assert!(s.toggle_playback());
        assert!(!s.surface().playing.get());
        assert!(s.toggle_playback());
        assert!(s.surface().playing.get());

        assert!(s.toggle_mute());
        assert!(s.surface().muted.get());
        assert!(s.toggle_mute());
        assert!(!s.surface().muted.get());

        assert!(s.toggle_fullscreen());
        assert!(s.surface().fullscreen.get());
        assert!(s.toggle_fullscreen());
        assert!(!s.surface().fullscreen.get());
    }

    #[tokio::test]
    async fn test_playback_failure_is_not_fatal() {
        let slot = RefCell::new(PreviewSession::new(FakeSurface::failing_playback()));
        let probe = StaticProbe::with(&["/v/movie.srt"]);

        assert!(open_preview(&slot, &probe, "/v/movie.mp4").await);

        let s = slot.borrow();
        assert_eq!(s.state(), SessionState::Open);
        assert!(s.surface().visible.get());
        assert_eq!(s.surface().tracks.borrow().len(), 1);
    }
}
