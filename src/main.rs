mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::config::dom::HOST_ID;

fn main() {
    console_error_panic_hook::set_once();

    // The listing page is server-rendered; the app only adds a host for its
    // own overlay and controls.
    let document = document();
    let host = match document.get_element_by_id(HOST_ID) {
        Some(host) => host,
        None => {
            let host = document
                .create_element("div")
                .expect("Failed to create host element");
            host.set_id(HOST_ID);
            document
                .body()
                .expect("Failed to find <body>")
                .append_child(&host)
                .expect("Failed to append host element");
            host
        }
    };

    mount_to(host.unchecked_into::<web_sys::HtmlElement>(), App).forget();
}
