//! Pure interaction state machines.
//!
//! Everything in this module is free of browser APIs so it can be
//! exercised with plain `cargo test`:
//!
//! - [`GestureAccumulator`] - wheel/touch delta accumulation with a lock
//! - [`RotationCycler`] - quarter-turn boundary detection for the hero models
//! - [`SlideCursor`] - bounded cursor over the project cards
//! - [`scramble`] - glyph-reveal frame generation (timed and stepped)
//! - [`preview`] - hover preview fit and clamp math

pub mod error;
mod gesture;
pub mod preview;
mod rotation;
pub mod scramble;

mod cursor;

pub use cursor::{CursorStep, SlideCursor};
pub use gesture::{Direction, GestureAccumulator};
pub use rotation::RotationCycler;
