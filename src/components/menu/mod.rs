//! Menu view: gesture-paged project slides.
//!
//! A wheel/touch accumulator pages a bounded cursor over the project
//! catalog. After every advance the accumulator locks for a cooldown
//! window so one physical flick moves exactly one slide. At the first
//! slide a backward gesture exits to home; at the last, a forward
//! gesture exits to the portfolio.

mod item;

use gloo_timers::callback::Timeout;
use leptos::ev::{TouchEvent, WheelEvent};
use leptos::prelude::*;

use crate::app::AppContext;
use crate::config::gesture;
use crate::core::{CursorStep, GestureAccumulator, SlideCursor};
use crate::models::Section;
use item::ProjectCard;

stylance::import_crate_style!(css, "src/components/menu/menu.module.css");

/// Project slide deck with gesture paging.
#[component]
pub fn Menu() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    let project_count = ctx.projects.with_value(|p| p.len());

    let index = RwSignal::new(0_usize);
    // Sign of the last move, for the slide-in direction class.
    let slide_direction = RwSignal::new(1_i32);

    let accumulator = StoredValue::new(GestureAccumulator::new(gesture::WHEEL_THRESHOLD));
    let cursor = StoredValue::new(SlideCursor::new(project_count));
    let last_touch_y = StoredValue::new(0.0_f64);

    // Pending cooldown release; replacing the handle cancels the old one.
    let cooldown = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || cooldown.set_value(None));

    let feed = move |delta: f64| {
        let advanced = accumulator
            .try_update_value(|acc| acc.accumulate(delta))
            .flatten();
        let Some(direction) = advanced else {
            return;
        };

        match cursor.try_update_value(|c| c.advance(direction)) {
            Some(CursorStep::Moved(i)) => {
                slide_direction.set(direction.signum());
                index.set(i);
            }
            Some(CursorStep::Boundary(edge)) => {
                if let Some(next) = Section::Menu.gesture_exit(edge) {
                    ctx.goto(next);
                }
            }
            None => {}
        }

        cooldown.set_value(Some(Timeout::new(gesture::COOLDOWN_MS, move || {
            accumulator.update_value(|acc| acc.unlock());
        })));
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
            class=css::menu
            on:wheel=on_wheel
            on:touchstart=on_touch_start
            on:touchmove=on_touch_move
        >
            <div class=css::menubox>
                {move || {
                    let i = index.get();
                    let entry = ctx.projects.with_value(|p| p.get(i).cloned());
                    entry.map(|entry| {
                        let slide_class = if slide_direction.get() > 0 {
                            format!("{} {}", css::slide, css::slideFromRight)
                        } else {
                            format!("{} {}", css::slide, css::slideFromLeft)
                        };
                        view! {
                            <div class=slide_class>
                                <ProjectCard entry=entry />
                            </div>
                        }
                    })
                }}
            </div>
        </div>
    }
}
