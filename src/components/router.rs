//! Section router component.
//!
//! Mounts exactly one of the four top-level sections. The router decides
//! *which* section is mounted; each section's stylesheet owns how it
//! animates in. Gesture edges are wired inside the sections themselves
//! and arrive here as `AppContext::goto` calls.

use leptos::prelude::*;

use crate::app::AppContext;
use crate::components::about::About;
use crate::components::home::Home;
use crate::components::menu::Menu;
use crate::components::portfolio::Portfolio;
use crate::models::Section;
use crate::utils::dom;

/// Mounts the active section.
///
/// An unmounting section drops its own listeners, rAF loops and timers
/// via `on_cleanup`; nothing survives a switch.
#[component]
pub fn SectionRouter() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    // Scroll reset also covers transitions that bypass goto().
    Effect::new(move |prev: Option<Section>| {
        let section = ctx.section.get();
        if prev.is_some_and(|p| p != section) {
            dom::scroll_to_top();
        }
        section
    });

    view! {
        {move || match ctx.section.get() {
            Section::Home => view! { <Home /> }.into_any(),
            Section::Menu => view! { <Menu /> }.into_any(),
            Section::Portfolio => view! { <Portfolio /> }.into_any(),
            Section::About => view! { <About /> }.into_any(),
        }}
    }
}
