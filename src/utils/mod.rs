//! Browser plumbing shared across components.
//!
//! - [`dom`] - window/viewport helpers
//! - [`RafLoop`] - requestAnimationFrame loop with a cancel-on-drop handle
//! - [`EventListener`] - RAII window event subscription

pub mod dom;
mod listener;
mod raf;

pub use listener::EventListener;
pub use raf::RafLoop;
