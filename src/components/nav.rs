//! Hamburger navigation.
//!
//! A fixed round toggle opening a dropdown with the main sections.
//! Placement flips to the bottom-left on small screens (away from the
//! nameplate and the audio toggle); chrome colors invert while a dark
//! section is active.

use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::MOBILE_MEDIA_QUERY;
use crate::models::Section;

stylance::import_crate_style!(css, "src/components/nav.module.css");

const NAV_SECTIONS: &[Section] = &[Section::Home, Section::Menu, Section::About];

/// Fixed hamburger toggle plus dropdown.
#[component]
pub fn HamburgerNav() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let open = RwSignal::new(false);
    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY);

    let container_class = move || {
        if is_mobile.get() {
            format!("{} {}", css::nav, css::navMobile)
        } else {
            css::nav.to_string()
        }
    };
    let dropdown_class = move || {
        let mut class = css::dropdown.to_string();
        if ctx.section.get().is_dark() {
            class = format!("{} {}", class, css::dropdownDark);
        }
        if is_mobile.get() {
            class = format!("{} {}", class, css::dropdownMobile);
        }
        class
    };

    view! {
        <div class=container_class>
            <button
                class=move || {
                    if ctx.section.get().is_dark() {
                        format!("{} {}", css::toggle, css::toggleDark)
                    } else {
                        css::toggle.to_string()
                    }
                }
                aria-label="Open navigation"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                {move || {
                    if open.get() {
                        view! { <Icon icon=ic::CLOSE /> }
                    } else {
                        view! { <Icon icon=ic::MENU /> }
                    }
                }}
            </button>

            <Show when=move || open.get()>
                <div class=dropdown_class>
                    {NAV_SECTIONS
                        .iter()
                        .map(|&section| {
                            view! {
                                <button
                                    class=move || {
                                        if ctx.section.get() == section {
                                            format!("{} {}", css::item, css::itemActive)
                                        } else {
                                            css::item.to_string()
                                        }
                                    }
                                    on:click=move |_| {
                                        ctx.goto(section);
                                        open.set(false);
                                    }
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </div>
    }
}
