//! About view: prose with a one-shot scramble on the lead paragraph.
//!
//! Any upward wheel/touch motion exits back to the portfolio.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::app::AppContext;
use crate::components::ScrambleOnce;
use crate::core::Direction;
use crate::models::Section;
use crate::utils::EventListener;

stylance::import_crate_style!(css, "src/components/about/about.module.css");

const LEAD: &str = "Hi, I'm Martin! I am a PhD student in Computer Science at the \
University of Central Florida, where I also completed both my Bachelor's and Master's \
degrees in Computer Science. Growing up in Florida with an early passion for graphic \
design helped me fall in love with our local theme parks, where immersive experiences \
are designed with deep care and detail.";

const PARAGRAPHS: &[&str] = &[
    "I've carried that passion into my current PhD research, where I utilize Virtual \
     Reality to design collaborative work environments that enhance the development \
     cycle of themed entertainment attractions. My research goal is to contribute to \
     the design of themed experiences in ways that merge storytelling, technology, \
     and creativity.",
    "I design and develop immersive experiences that bring ideas to life. My expertise \
     spans virtual reality, augmented reality, artificial intelligence, and digital \
     twin systems. I combine technical knowledge with creative direction to deliver \
     solutions that are interactive, engaging, and built to inspire.",
    "Whether it's building a real time simulation, creating a branded experience, or \
     developing a game, my focus is always on producing work that connects with people.",
];

/// Sets up the upward-exit listeners for the about page.
fn setup_exit_listeners(ctx: AppContext) {
    let exit_up = move |direction: Direction| {
        if direction == Direction::Back
            && let Some(next) = Section::About.gesture_exit(direction)
        {
            ctx.goto(next);
        }
    };

    let wheel = EventListener::window("wheel", move |ev| {
        let ev: web_sys::WheelEvent = ev.unchecked_into();
        exit_up(Direction::from_delta(ev.delta_y()));
    });

    let last_touch_y = Rc::new(RefCell::new(0.0_f64));
    let start_y = Rc::clone(&last_touch_y);
    let touch_start = EventListener::window("touchstart", move |ev| {
        let ev: web_sys::TouchEvent = ev.unchecked_into();
        if let Some(touch) = ev.touches().get(0) {
            *start_y.borrow_mut() = touch.client_y() as f64;
        }
    });
    let touch_move = EventListener::window("touchmove", move |ev| {
        let ev: web_sys::TouchEvent = ev.unchecked_into();
        if let Some(touch) = ev.touches().get(0) {
            let y = touch.client_y() as f64;
            let delta = last_touch_y.replace(y) - y;
            exit_up(Direction::from_delta(delta));
        }
    });

    let listeners = StoredValue::new_local((wheel, touch_start, touch_move));
    on_cleanup(move || listeners.set_value((None, None, None)));
}

/// About page.
#[component]
pub fn About() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    setup_exit_listeners(ctx);

    view! {
        <div class=css::about>
            <div class=css::content>
                <h1>"about me"</h1>
                <p>
                    <ScrambleOnce text=LEAD />
                </p>
                {PARAGRAPHS
                    .iter()
                    .map(|text| view! { <p>{*text}</p> })
                    .collect_view()}
            </div>
        </div>
    }
}
