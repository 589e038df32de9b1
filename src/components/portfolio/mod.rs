//! Portfolio view: gallery grid with a floating hover preview.
//!
//! Unlike the menu this view has no internal cursor: *any* wheel or
//! touch motion exits immediately, upward to the menu and downward to
//! the about page. Hovering a tile floats a preview panel that follows
//! the pointer, sized from the image's natural dimensions and clamped
//! inside the viewport.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::ev::MouseEvent;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;
use web_sys::HtmlImageElement;

use crate::app::AppContext;
use crate::config;
use crate::core::Direction;
use crate::core::preview::{PanelSize, clamp_panel_center, fit_panel};
use crate::models::{GalleryWork, Section};
use crate::utils::{EventListener, dom};

stylance::import_crate_style!(css, "src/components/portfolio/portfolio.module.css");

// ============================================================================
// Exit Gestures
// ============================================================================

/// Window-level wheel/touch listeners; any motion is an immediate exit.
fn setup_exit_listeners(ctx: AppContext) {
    let exit = move |direction: Direction| {
        if let Some(next) = Section::Portfolio.gesture_exit(direction) {
            ctx.goto(next);
        }
    };

    let wheel = EventListener::window("wheel", move |ev| {
        let ev: web_sys::WheelEvent = ev.unchecked_into();
        exit(Direction::from_delta(ev.delta_y()));
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
            exit(Direction::from_delta(delta));
        }
    });

    let listeners = StoredValue::new_local((wheel, touch_start, touch_move));
    on_cleanup(move || listeners.set_value((None, None, None)));
}

// ============================================================================
// Preview Measurement
// ============================================================================

type ImageLoad = (HtmlImageElement, Closure<dyn FnMut()>);
type LoaderSlot = StoredValue<Option<ImageLoad>, LocalStorage>;

/// Detaches the previous pending load, if any.
fn clear_loader(slot: LoaderSlot) {
    if let Some(Some((image, _closure))) = slot.try_update_value(|s| s.take()) {
        image.set_onload(None);
    }
}

/// Loads `src` off-screen to learn its natural dimensions, then fits the
/// panel to the current viewport. Every hover re-triggers a fresh load;
/// nothing is cached across items. A failed load leaves the panel at its
/// previous size - missing assets degrade silently.
fn measure_image(src: &str, panel: RwSignal<PanelSize>, slot: LoaderSlot) {
    clear_loader(slot);
    let Ok(image) = HtmlImageElement::new() else {
        return;
    };

    let measured = image.clone();
    let onload = Closure::wrap(Box::new(move || {
        if let Some(viewport) = dom::viewport() {
            panel.set(fit_panel(
                measured.natural_width() as f64,
                measured.natural_height() as f64,
                viewport,
            ));
        }
    }) as Box<dyn FnMut()>);

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_src(src);
    slot.set_value(Some((image, onload)));
}

// ============================================================================
// Portfolio Component
// ============================================================================

/// Gallery grid with the floating hover preview.
#[component]
pub fn Portfolio() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided");
    setup_exit_listeners(ctx);

    let preview = RwSignal::new(None::<GalleryWork>);
    let pointer = RwSignal::new((0.0_f64, 0.0_f64));
    let panel = RwSignal::new(PanelSize::default());

    let loader: LoaderSlot = StoredValue::new_local(None);

    // Measure on every hover change; clear when the pointer leaves.
    Effect::new(move || match preview.get() {
        Some(work) => measure_image(work.src, panel, loader),
        None => {
            clear_loader(loader);
            panel.set(PanelSize::default());
        }
    });

    // Refit the active preview when the viewport changes.
    let resize = StoredValue::new_local(EventListener::window("resize", move |_| {
        if let Some(work) = preview.get_untracked() {
            measure_image(work.src, panel, loader);
        }
    }));

    on_cleanup(move || {
        resize.set_value(None);
        clear_loader(loader);
    });

    let on_move = move |ev: MouseEvent| {
        pointer.set((ev.client_x() as f64, ev.client_y() as f64));
    };

    // Panel center: pointer position clamped inside the viewport margin.
    let panel_center = move || {
        let (x, y) = pointer.get();
        let size = panel.get();
        match dom::viewport() {
            Some(viewport) => clamp_panel_center(x, y, size, viewport),
            None => (x, y),
        }
    };

    view! {
        <div class=css::gallery on:mousemove=on_move>
            <div class=css::inner>
                <h1 class=css::heading>"art portfolio"</h1>
                <p class=css::subheading>"selected works"</p>

                <div class=css::grid>
                    {config::GALLERY_WORKS
                        .iter()
                        .map(|work| {
                            let work = *work;
                            view! {
                                <div
                                    class=css::tile
                                    on:mouseenter=move |_| preview.set(Some(work))
                                    on:mouseleave=move |_| preview.set(None)
                                >
                                    <img class=css::tileImage src=work.src alt=work.title />
                                    <div class=css::tileCaption>{work.title}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show when=move || preview.get().is_some()>
                <div class=css::previewLayer>
                    <div
                        class=css::previewPanel
                        style=("left", move || format!("{}px", panel_center().0))
                        style=("top", move || format!("{}px", panel_center().1))
                        style=("width", move || format!("{}px", panel.get().width))
                        style=("height", move || format!("{}px", panel.get().height))
                    >
                        {move || {
                            preview
                                .get()
                                .map(|work| view! { <img class=css::previewImage src=work.src alt="" /> })
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
