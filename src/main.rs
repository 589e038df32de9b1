mod app;
mod components;
mod config;
mod core;
mod models;
mod utils;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

fn main() {
    // Panics surface in the browser console instead of an opaque trap.
    console_error_panic_hook::set_once();

    // index.html carries a single #app mount node.
    let root = document()
        .get_element_by_id("app")
        .expect("missing #app mount node")
        .unchecked_into::<web_sys::HtmlElement>();

    mount_to(root, App).forget();
}
