//! Best-effort discovery of caption files next to a media file.
//!
//! For `/v/movie.mp4` the sibling `/v/movie.srt` and `/v/movie.vtt` are probed
//! concurrently. Results are reported in probe order, never completion order,
//! so caption tracks always attach in the same sequence.

use futures::future::{LocalBoxFuture, join_all};
use leptos::logging::debug_log;

use crate::config::subtitles::{DEFAULT_LANGUAGE, EXTENSIONS};
use crate::core::error::ProbeError;
use crate::models::Caption;
use crate::utils::path;

/// Boxed future returned by [`Probe::exists`].
pub type ProbeFuture<'a> = LocalBoxFuture<'a, Result<(), ProbeError>>;

/// Existence check for a URL on the serving host.
pub trait Probe {
    /// Resolves to `Ok(())` when `url` answers with a success status.
    fn exists<'a>(&'a self, url: &'a str) -> ProbeFuture<'a>;
}

/// Candidate caption URLs for `media_url`, in probe order.
pub fn candidates(media_url: &str) -> Vec<(&'static str, String)> {
    let base = path::strip_extension(media_url);
    EXTENSIONS
        .iter()
        .map(|ext| (*ext, format!("{base}.{ext}")))
        .collect()
}

/// Probe every caption candidate and keep those that exist.
///
/// Failed probes are dropped silently. With no captions found the result is
/// empty and playback proceeds without tracks.
pub async fn discover<Q: Probe + ?Sized>(probe: &Q, media_url: &str) -> Vec<Caption> {
    let candidates = candidates(media_url);
    let results = join_all(candidates.iter().map(|(_, url)| probe.exists(url))).await;

    candidates
        .into_iter()
        .zip(results)
        .filter_map(|((ext, url), result)| match result {
            Ok(()) => Some(Caption::for_subtitle(ext, url, DEFAULT_LANGUAGE)),
            Err(e) => {
                debug_log!("no {ext} captions at {url}: {e}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod testing {
    //! Probe doubles shared with the preview session tests.

    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    use futures::channel::oneshot;

    use super::*;

    /// Answers immediately from a fixed set of existing URLs.
    #[derive(Default)]
    pub struct StaticProbe {
        existing: HashSet<String>,
        pub calls: RefCell<Vec<String>>,
    }

    impl StaticProbe {
        pub fn with(urls: &[&str]) -> Self {
            Self {
                existing: urls.iter().map(|u| u.to_string()).collect(),
                calls: RefCell::default(),
            }
        }
    }

    impl Probe for StaticProbe {
        fn exists<'a>(&'a self, url: &'a str) -> ProbeFuture<'a> {
            self.calls.borrow_mut().push(url.to_string());
            let found = self.existing.contains(url);
            Box::pin(async move {
                if found {
                    Ok(())
                } else {
                    Err(ProbeError::Status(404))
                }
            })
        }
    }

    /// Holds every probe pending until the test releases it.
    #[derive(Default)]
    pub struct GatedProbe {
        existing: HashSet<String>,
        gates: RefCell<HashMap<String, oneshot::Sender<()>>>,
    }

    impl GatedProbe {
        pub fn with(urls: &[&str]) -> Self {
            Self {
                existing: urls.iter().map(|u| u.to_string()).collect(),
                gates: RefCell::default(),
            }
        }

        /// Let the probe for `url` complete.
        pub fn release(&self, url: &str) {
            if let Some(gate) = self.gates.borrow_mut().remove(url) {
                let _ = gate.send(());
            }
        }

        pub fn release_all(&self) {
            for (_, gate) in self.gates.borrow_mut().drain() {
                let _ = gate.send(());
            }
        }

        pub fn pending(&self) -> usize {
            self.gates.borrow().len()
        }
    }

    impl Probe for GatedProbe {
        fn exists<'a>(&'a self, url: &'a str) -> ProbeFuture<'a> {
            let (tx, rx) = oneshot::channel();
            self.gates.borrow_mut().insert(url.to_string(), tx);
            let found = self.existing.contains(url);
            Box::pin(async move {
                rx.await
                    .map_err(|_| ProbeError::RequestFailed("cancelled".to_string()))?;
                if found {
                    Ok(())
                } else {
                    Err(ProbeError::Status(404))
                }
            })
        }
    }

    /// Fails every request at the network level.
    pub struct OfflineProbe;

    impl Probe for OfflineProbe {
        fn exists<'a>(&'a self, _url: &'a str) -> ProbeFuture<'a> {
            Box::pin(async { Err(ProbeError::RequestFailed("offline".to_string())) })
        }
    }
}
