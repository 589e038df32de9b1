//! Mount point for the external 3D rendering host.
//!
//! This crate never implements a renderer: `WireModel` emits a canvas
//! tagged with the model path and scale, plus a `--model-rotation`
//! custom property, and the WebGL host hydrates every `[data-model]`
//! canvas it finds. A missing model asset degrades to an empty pane;
//! nothing here can fail visibly.

use leptos::prelude::*;

use crate::config::rotation;
use crate::utils::RafLoop;

stylance::import_crate_style!(css, "src/components/model.module.css");

/// Wireframe model pane.
///
/// When `angle` is supplied the pane follows it (the home view shares
/// one continuously integrated rotation across the model cycle);
/// otherwise the pane self-rotates at the standard rate.
#[component]
pub fn WireModel(
    #[prop(into)] src: String,
    #[prop(default = 1.0)] scale: f64,
    #[prop(default = 0.0)] y: f64,
    #[prop(optional, into)] angle: Option<Signal<f64>>,
) -> impl IntoView {
    let angle = match angle {
        Some(shared) => shared,
        None => {
            let own = RwSignal::new(0.0_f64);
            let mut last: Option<f64> = None;
            let raf = StoredValue::new_local(Some(RafLoop::start(move |now| {
                let prev = last.replace(now).unwrap_or(now);
                let dt = (now - prev) / 1000.0;
                own.update(|a| *a += rotation::RATE_RAD_PER_SEC * dt);
                true
            })));
            on_cleanup(move || raf.set_value(None));
            own.into()
        }
    };

    view! {
        <canvas
            class=css::stage
            data-model=src
            data-scale=scale.to_string()
            data-y=y.to_string()
            style=("--model-rotation", move || format!("{:.4}rad", angle.get()))
        ></canvas>
    }
}
