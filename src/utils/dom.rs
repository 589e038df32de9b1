//! DOM and Web API utility functions.

use web_sys::Window;

use crate::core::preview::Viewport;

/// Get the browser window object.
#[inline]
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current viewport dimensions, if a window is available.
pub fn viewport() -> Option<Viewport> {
    let window = window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Viewport { width, height })
}

/// Smooth-scroll the window back to the origin.
///
/// Every section transition resets the scroll position so a new section
/// always mounts at the top.
pub fn scroll_to_top() {
    if let Some(window) = window() {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_left(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Uniform glyph picker backed by `Math.random`, for the scramble
/// components.
pub fn random_pick(n: usize) -> usize {
    (js_sys::Math::random() * n as f64) as usize
}
