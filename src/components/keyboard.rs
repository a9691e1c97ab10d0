//! Document-wide keyboard bindings.

use leptos::ev;
use leptos::prelude::*;

use crate::app::AppContext;
use crate::core::{Key, KeyContext, route_key};
use crate::utils::dom;

/// Install the global `keydown` listener.
///
/// The default action is suppressed only when a command actually ran, so
/// unbound keys and no-op commands keep their browser behaviour.
pub fn use_global_keys(ctx: AppContext) {
    let handle = window_event_listener(ev::keydown, move |ev| {
        let context = KeyContext {
            editing: dom::is_editing(),
            modified: ev.ctrl_key() || ev.alt_key() || ev.meta_key(),
            preview_open: ctx.preview.is_open(),
        };

        let Some(command) = route_key(Key::parse(&ev.key()), context) else {
            return;
        };
        if ctx.execute(command) {
            ev.prevent_default();
        }
    });
    on_cleanup(move || handle.remove());
}
