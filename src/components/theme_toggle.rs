//! Light/dark theme switch.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::models::ThemePreference;

stylance::import_crate_style!(css, "src/components/theme_toggle.module.css");

/// Floating button flipping between light and dark.
///
/// Shows the icon of the theme it switches to.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let theme = ctx.theme;

    let label = move || match theme.current.get() {
        ThemePreference::Dark => "Switch to light theme",
        ThemePreference::Light => "Switch to dark theme",
    };

    view! {
        <button
            class=css::toggle
            title=label
            aria-label=label
            on:click=move |_| {
                theme.toggle();
            }
        >
            {move || match theme.current.get() {
                ThemePreference::Dark => view! { <Icon icon=ic::SUN /> },
                ThemePreference::Light => view! { <Icon icon=ic::MOON /> },
            }}
        </button>
    }
}
