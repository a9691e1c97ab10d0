//! Network probing for sibling files.
//!
//! No timeout is raced against the request: a hung probe only means its
//! captions never attach.

use gloo_net::http::Request;

use crate::core::error::ProbeError;
use crate::core::{Probe, ProbeFuture};

/// Probes by issuing a `GET` against the serving host.
///
/// The file server only routes `GET`, so `HEAD` would report every file as
/// missing.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpProbe;

impl Probe for HttpProbe {
    fn exists<'a>(&'a self, url: &'a str) -> ProbeFuture<'a> {
        Box::pin(async move {
            let response = Request::get(url)
                .send()
                .await
                .map_err(|e| ProbeError::RequestFailed(e.to_string()))?;

            if response.ok() {
                Ok(())
            } else {
                Err(ProbeError::Status(response.status()))
            }
        })
    }
}
