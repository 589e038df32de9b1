//! Glyph-reveal text components.
//!
//! Two pacing variants with visibly different reveal speeds, both
//! backed by `core::scramble`:
//!
//! - [`ScrambleText`] runs continuously while mounted, frame-rate-capped
//!   by elapsed-time gating inside the rAF loop.
//! - [`ScrambleOnce`] runs exactly once, starting after a fixed delay
//!   from mount and advancing a fixed character count per callback.
//!
//! A finished sequence is not restartable; parents replay by re-creating
//! the component (rendering it inside a reactive closure keyed on the
//! input text).

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::config::scramble as cfg;
use crate::core::scramble::{SteppedReveal, TimedReveal};
use crate::utils::{RafLoop, dom};

stylance::import_crate_style!(css, "src/components/scramble.module.css");

/// Time-driven scramble: reveal progress tracks elapsed time over
/// `duration_ms`, emitting at most `fps` frames per second.
#[component]
pub fn ScrambleText(
    #[prop(into)] text: String,
    #[prop(default = cfg::DEFAULT_DURATION_MS)] duration_ms: f64,
    #[prop(default = cfg::FPS_CAP)] fps: f64,
) -> impl IntoView {
    let display = RwSignal::new(text.clone());
    let reveal = TimedReveal::new(&text, duration_ms);
    let frame_interval = 1000.0 / fps;

    let mut start: Option<f64> = None;
    let mut last_frame = f64::MIN;
    let raf = StoredValue::new_local(Some(RafLoop::start(move |now| {
        let begin = *start.get_or_insert(now);
        if now - last_frame < frame_interval {
            return true;
        }
        last_frame = now;

        let (frame, done) = reveal.frame_at(now - begin, &mut dom::random_pick);
        display.set(frame);
        !done
    })));
    on_cleanup(move || raf.set_value(None));

    view! { <span class=css::scramble>{move || display.get()}</span> }
}

/// One-shot scramble: waits `delay_ms` after mount, then reveals
/// `chars_per_frame` characters per animation callback.
#[component]
pub fn ScrambleOnce(
    #[prop(into)] text: String,
    #[prop(default = cfg::ONE_SHOT_CHARS_PER_FRAME)] chars_per_frame: usize,
    #[prop(default = cfg::ONE_SHOT_DELAY_MS)] delay_ms: u32,
) -> impl IntoView {
    let display = RwSignal::new(text.clone());
    let mut reveal = SteppedReveal::new(&text, chars_per_frame);

    let raf = StoredValue::new_local(None::<RafLoop>);
    let timeout = StoredValue::new_local(Some(Timeout::new(delay_ms, move || {
        raf.set_value(Some(RafLoop::start(move |_| {
            let (frame, done) = reveal.advance(&mut dom::random_pick);
            display.set(frame);
            !done
        })));
    })));

    on_cleanup(move || {
        // Dropping the pending timeout cancels it; the rAF handle stops
        // a reveal already in flight.
        timeout.set_value(None);
        raf.set_value(None);
    });

    view! { <span class=css::scramble>{move || display.get()}</span> }
}
