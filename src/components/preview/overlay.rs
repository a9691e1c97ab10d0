//! Modal overlay hosting the video player.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/preview/preview.module.css");

/// Full-viewport overlay with a single `<video>` element.
///
/// Clicking the backdrop or the close button ends the session; clicks inside
/// the content area do not propagate to the backdrop.
#[component]
pub fn PreviewOverlay() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let preview = ctx.preview;
    let surface = preview.surface();

    let overlay_class = move || {
        if surface.visible.get() {
            format!("{} {}", css::overlay, css::visible)
        } else {
            css::overlay.to_string()
        }
    };

    view! {
        <div
            class=overlay_class
            role="dialog"
            aria-modal="true"
            aria-hidden=move || (!surface.visible.get()).to_string()
            on:click=move |_| {
                preview.close();
            }
        >
            <div class=css::content on:click=|ev| ev.stop_propagation()>
                <header class=css::header>
                    <span class=css::title>{move || surface.title.get()}</span>
                    <button
                        class=css::closeButton
                        on:click=move |_| {
                            preview.close();
                        }
                        title="Close preview"
                        aria-label="Close preview"
                    >
                        <Icon icon=ic::CLOSE />
                    </button>
                </header>
                <video
                    node_ref=surface.video
                    class=css::player
                    controls=true
                    preload="metadata"
                />
                <p class=css::hint>"Esc close · Space play/pause · F fullscreen · M mute"</p>
            </div>
        </div>
    }
}
