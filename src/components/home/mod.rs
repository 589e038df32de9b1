//! Home view: the hero scene.
//!
//! A wireframe model rotates continuously; every quarter turn swaps in
//! the next model and advances the caption label, whose text re-scrambles
//! on each swap. A downward gesture past the accumulator threshold exits
//! to the menu section.

use leptos::ev::{TouchEvent, WheelEvent};
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::{ScrambleText, WireModel};
use crate::config::{self, gesture, rotation, scramble};
use crate::core::{GestureAccumulator, RotationCycler};
use crate::models::Section;
use crate::utils::RafLoop;

stylance::import_crate_style!(css, "src/components/home/home.module.css");

// ============================================================================
// Frame Loop Setup
// ============================================================================

/// Drives the shared rotation angle and emits model/label swaps.
fn setup_rotation(
    angle: RwSignal<f64>,
    model_index: RwSignal<usize>,
    label_index: RwSignal<usize>,
) {
    let mut cycler = RotationCycler::new(rotation::RATE_RAD_PER_SEC, config::HERO_MODELS.len());
    let mut last: Option<f64> = None;

    let raf = StoredValue::new_local(Some(RafLoop::start(move |now| {
        let prev = last.replace(now).unwrap_or(now);
        let dt = (now - prev) / 1000.0;

        for next in cycler.tick(dt) {
            model_index.set(next);
            label_index.update(|i| *i = (*i + 1) % config::HERO_LABELS.len());
        }
        angle.set(cycler.angle());
        true
    })));
    on_cleanup(move || raf.set_value(None));
}

// ============================================================================
// Home Component
// ============================================================================

/// Hero view with the rotating model cycle and scrambled caption.
#[component]
pub fn Home() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");

    let angle = RwSignal::new(0.0_f64);
    let model_index = RwSignal::new(0_usize);
    let label_index = RwSignal::new(0_usize);
    setup_rotation(angle, model_index, label_index);

    let accumulator = StoredValue::new(GestureAccumulator::new(gesture::WHEEL_THRESHOLD));
    let last_touch_y = StoredValue::new(0.0_f64);

    let feed = move |delta: f64| {
        let advanced = accumulator.try_update_value(|acc| acc.accumulate(delta)).flatten();
        let Some(direction) = advanced else {
            return;
        };
        match Section::Home.gesture_exit(direction) {
            // No cooldown on exit: the section unmounts and takes the
            // accumulator with it.
            Some(next) => ctx.goto(next),
            // An upward flick emits but leads nowhere. Release the lock
            // right away or the dead-end emission would eat every later
            // gesture and strand the user on this view.
            None => accumulator.update_value(|acc| acc.unlock()),
        }
    };

    let on_wheel = move |ev: WheelEvent| feed(ev.delta_y());
    let on_touch_start = move |ev: TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            last_touch_y.set_value(touch.client_y() as f64);
        }
    };
    let on_touch_move = move |ev: TouchEvent| {
        if let Some(touch) = ev.touches().get(0) {
            let y = touch.client_y() as f64;
            let delta = last_touch_y.get_value() - y;
            last_touch_y.set_value(y);
            feed(delta);
        }
    };

    view! {
        <div
            class=css::hero
            on:wheel=on_wheel
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
        >
            <div class=css::scene>
                {move || {
                    let model = config::HERO_MODELS[model_index.get() % config::HERO_MODELS.len()];
                    view! {
                        <WireModel
                            src=model.src
                            scale=model.scale
                            y=model.y
                            angle=Signal::from(angle)
                        />
                    }
                }}
            </div>

            <h1 class=css::nameplate>{config::OWNER_NAME}</h1>

            <h1 class=css::caption>
                "i "
                {move || {
                    let label = config::HERO_LABELS[label_index.get() % config::HERO_LABELS.len()];
                    view! {
                        <ScrambleText
                            text=label
                            duration_ms=scramble::CAPTION_DURATION_MS
                        />
                    }
                }}
            </h1>

            <div class=css::scrollHint>
                "scroll"
                <Icon icon=ic::SCROLL_HINT />
            </div>
        </div>
    }
}
