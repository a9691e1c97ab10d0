//! In-page video preview.
//!
//! - [`PreviewOverlay`] - The modal overlay and `<video>` element
//! - [`PreviewState`] - Session handle shared through `AppContext`
//! - `VideoSurface` - DOM side of the session

mod overlay;
mod player;
mod session;

pub use overlay::PreviewOverlay;
pub use session::PreviewState;
