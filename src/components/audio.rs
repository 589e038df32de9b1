//! Ambient audio toggle.
//!
//! Top-right control that starts/stops the looping background track.
//! Playback failures (autoplay policy, missing asset) are swallowed -
//! nothing in the presentation blocks on audio.

use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::{JsFuture, spawn_local};

use crate::components::icons as ic;
use crate::config::AMBIENT_AUDIO_SRC;

stylance::import_crate_style!(css, "src/components/audio.module.css");

/// Ambient audio play/pause button.
#[component]
pub fn AmbientAudio() -> impl IntoView {
    let playing = RwSignal::new(false);
    let audio_ref = NodeRef::<leptos::html::Audio>::new();

    let toggle = move |_| {
        let Some(audio) = audio_ref.get() else {
            return;
        };
        if playing.get_untracked() {
            let _ = audio.pause();
            playing.set(false);
        } else {
            audio.set_loop(true);
            if let Ok(promise) = audio.play() {
                spawn_local(async move {
                    // A rejected play() promise is expected under autoplay
                    // policies; ignore it.
                    let _ = JsFuture::from(promise).await;
                });
            }
            playing.set(true);
        }
    };

    view! {
        <div class=css::control>
            <audio node_ref=audio_ref src=AMBIENT_AUDIO_SRC preload="none"></audio>
            <button class=css::toggle aria-label="Toggle ambient audio" on:click=toggle>
                {move || {
                    if playing.get() {
                        view! { <Icon icon=ic::AUDIO_ON /> }
                    } else {
                        view! { <Icon icon=ic::AUDIO_OFF /> }
                    }
                }}
            </button>
        </div>
    }
}
