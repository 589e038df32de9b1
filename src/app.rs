//! Root application module.
//!
//! Contains the main App component and the AppContext definition
//! following Leptos conventions.

use leptos::prelude::*;

use crate::components::{AmbientAudio, HamburgerNav, SectionRouter};
use crate::config;
use crate::models::{ProjectEntry, Section};
use crate::utils::dom;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and accessed from any
/// child component via `use_context::<AppContext>()`.
///
/// # Note
///
/// This struct is `Copy` because its fields are Leptos signals/stores,
/// which are cheap to copy (pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// The active top-level section. Exactly one at any time.
    pub section: RwSignal<Section>,

    /// Build-time project catalog for the menu section.
    pub projects: StoredValue<Vec<ProjectEntry>>,
}

impl AppContext {
    /// Creates the context, loading the embedded project catalog.
    ///
    /// A catalog parse failure degrades silently: it is logged and the
    /// menu renders with an empty list.
    pub fn new() -> Self {
        let projects = config::load_projects().unwrap_or_else(|e| {
            leptos::logging::error!("{}", e);
            Vec::new()
        });

        Self {
            section: RwSignal::new(Section::default()),
            projects: StoredValue::new(projects),
        }
    }

    /// Explicit navigation command; always legal from any section.
    ///
    /// Every transition resets the window scroll position so the new
    /// section mounts at the origin.
    pub fn goto(&self, section: Section) {
        if self.section.get_untracked() != section {
            self.section.set(section);
            dom::scroll_to_top();
        }
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Creates and provides the global AppContext, then renders the section
/// router plus the fixed chrome (hamburger nav, ambient audio toggle)
/// that stays mounted across section changes.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    view! {
        <SectionRouter />
        <HamburgerNav />
        <AmbientAudio />
    }
}
