//! UI components built with Leptos.
//!
//! - [`router`] - mounts exactly one section at a time
//! - [`home`] - hero scene with rotating models and the scrambled caption
//! - [`menu`] - gesture-paged project cards
//! - [`portfolio`] - gallery grid with the floating hover preview
//! - [`about`] - prose page with a one-shot scramble
//! - [`nav`] - hamburger navigation
//! - [`audio`] - ambient audio toggle
//! - [`model`] - opaque mount point for the external 3D host
//! - [`scramble`] - glyph-reveal text components
//! - [`icons`] - centralized icon definitions (change theme here)

pub mod about;
mod audio;
pub mod home;
pub mod icons;
pub mod menu;
mod model;
mod nav;
pub mod portfolio;
pub mod router;
mod scramble;

pub use audio::AmbientAudio;
pub use model::WireModel;
pub use nav::HamburgerNav;
pub use router::SectionRouter;
pub use scramble::{ScrambleOnce, ScrambleText};
