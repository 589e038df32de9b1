//! A requestAnimationFrame loop with an explicit cancel handle.
//!
//! Per-frame animation state (rotation, timed scramble) must stop
//! mutating the moment its owning view unmounts. The loop therefore
//! hands out an owned handle: dropping it cancels the pending frame, so
//! no stale callback can run after disposal. Components tie the handle
//! to their lifetime with `on_cleanup`.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

type FrameClosure = Closure<dyn FnMut(f64)>;

/// Handle to a running animation-frame loop. Dropping it stops the loop.
pub struct RafLoop {
    handle: Rc<Cell<Option<i32>>>,
    // Keeps the closure alive while the loop runs.
    _closure: Rc<RefCell<Option<FrameClosure>>>,
}

impl RafLoop {
    /// Starts a loop invoking `frame` with the rAF timestamp (ms).
    ///
    /// The callback returns whether to keep running; returning `false`
    /// ends the loop from the inside (a finished one-shot animation).
    pub fn start(mut frame: impl FnMut(f64) -> bool + 'static) -> Self {
        let handle = Rc::new(Cell::new(None));
        let closure: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

        let handle_inner = Rc::clone(&handle);
        let closure_inner = Rc::clone(&closure);
        *closure.borrow_mut() = Some(Closure::wrap(Box::new(move |now: f64| {
            // A None handle means the loop was cancelled; bail without
            // rescheduling.
            if handle_inner.get().is_none() {
                return;
            }
            if !frame(now) {
                handle_inner.set(None);
                return;
            }
            if let Some(id) = request_frame(&closure_inner) {
                handle_inner.set(Some(id));
            }
        }) as Box<dyn FnMut(f64)>));

        if let Some(id) = request_frame(&closure) {
            handle.set(Some(id));
        }

        Self {
            handle,
            _closure: closure,
        }
    }

    /// Cancels the pending frame, if any.
    pub fn cancel(&self) {
        if let Some(id) = self.handle.take()
            && let Some(window) = web_sys::window()
        {
            let _ = window.cancel_animation_frame(id);
        }
    }
}

impl Drop for RafLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(closure: &Rc<RefCell<Option<FrameClosure>>>) -> Option<i32> {
    let window = web_sys::window()?;
    let borrowed = closure.borrow();
    let callback = borrowed.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}
