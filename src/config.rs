//! Application configuration.
//!
//! Centralizes all tuning constants and the build-time content catalog.
//! The gesture/animation numbers are tuned by feel; nothing depends on
//! their absolute values beyond relative ordering.

use crate::core::error::DataError;
use crate::models::{GalleryWork, HeroModel, ProjectCatalog, ProjectEntry};

// =============================================================================
// Site Metadata
// =============================================================================

/// Name shown on the home view nameplate.
pub const OWNER_NAME: &str = "martin mccarthy";

/// Caption labels cycled on the home view, one swap per hero model swap.
/// Displayed as "i ‹label›".
pub const HERO_LABELS: &[&str] = &[
    "design experiences",
    "create solutions",
    "personalize your brand",
    "develop games",
];

// =============================================================================
// Static Asset Catalogs
// =============================================================================

/// Wireframe models cycled behind the home view.
pub const HERO_MODELS: &[HeroModel] = &[
    HeroModel::new("/models/quest2/scene.gltf", 0.5),
    HeroModel::new("/models/cave/cave.gltf", 0.25),
    HeroModel::new("/models/vrtable/vrtable.gltf", 0.3),
    HeroModel::new("/models/computer/scene.gltf", 0.4),
];

/// Works shown in the portfolio gallery grid.
pub const GALLERY_WORKS: &[GalleryWork] = &[
    GalleryWork::new("/img/adapt.png", "01"),
    GalleryWork::new("/img/arms.png", "02"),
    GalleryWork::new("/img/sorokin.jpg", "03"),
    GalleryWork::new("/img/jason.png", "04"),
    GalleryWork::new("/img/haunts.jpg", "05"),
    GalleryWork::new("/img/frank.png", "06"),
    GalleryWork::new("/img/7f.jpg", "07"),
    GalleryWork::new("/img/kh1.png", "08"),
    GalleryWork::new("/img/kh2.png", "10"),
];

/// Ambient audio asset toggled from the top-right control.
pub const AMBIENT_AUDIO_SRC: &str = "/audio/ambient.mp3";

// =============================================================================
// Gesture Configuration
// =============================================================================

pub mod gesture {
    /// Accumulated delta magnitude required to emit an advance event.
    /// Unitless, matched to wheel delta magnitudes.
    pub const WHEEL_THRESHOLD: f64 = 80.0;

    /// Lock window after each advance; deltas arriving inside it are
    /// dropped to keep one physical flick from triggering twice.
    pub const COOLDOWN_MS: u32 = 650;
}

// =============================================================================
// Rotation Configuration
// =============================================================================

pub mod rotation {
    /// Hero rotation rate in radians per second.
    pub const RATE_RAD_PER_SEC: f64 = 0.5;
}

// =============================================================================
// Scramble Configuration
// =============================================================================

pub mod scramble {
    /// Reveal duration for the cycling hero caption.
    pub const CAPTION_DURATION_MS: f64 = 650.0;

    /// Default reveal duration for timed scrambles.
    pub const DEFAULT_DURATION_MS: f64 = 700.0;

    /// Frame cap for the timed variant, enforced by elapsed-time gating.
    pub const FPS_CAP: f64 = 60.0;

    /// Mount-to-start delay for the one-shot variant.
    pub const ONE_SHOT_DELAY_MS: u32 = 400;

    /// Characters revealed per animation callback in the one-shot variant.
    pub const ONE_SHOT_CHARS_PER_FRAME: usize = 4;
}

// =============================================================================
// Preview Configuration
// =============================================================================

pub mod preview {
    /// Margin the preview panel keeps from every viewport edge.
    pub const MARGIN: f64 = 16.0;

    /// Fraction of the viewport the panel may occupy.
    pub const MAX_VIEWPORT_FRACTION: f64 = 0.8;

    /// Absolute panel size caps.
    pub const MAX_WIDTH: f64 = 1200.0;
    pub const MAX_HEIGHT: f64 = 900.0;

    /// Minimum panel size before the aspect-ratio correction.
    pub const MIN_WIDTH: f64 = 320.0;
    pub const MIN_HEIGHT: f64 = 240.0;
}

// =============================================================================
// Navigation Configuration
// =============================================================================

/// Media query that switches the hamburger nav to its mobile placement.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 800px)";

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

// =============================================================================
// Project Catalog (loaded at compile time)
// =============================================================================

/// Embedded project catalog; parsed once at startup.
const PROJECTS_TOML: &str = include_str!("../assets/data/projects.toml");

/// Parses the embedded project catalog.
///
/// Failure is not user-visible: the caller logs and falls back to an
/// empty list.
pub fn load_projects() -> Result<Vec<ProjectEntry>, DataError> {
    let catalog: ProjectCatalog =
        toml::from_str(PROJECTS_TOML).map_err(|e| DataError::CatalogParse(e.to_string()))?;
    Ok(catalog.project)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_catalog_parses() {
        let projects = load_projects().expect("embedded catalog must parse");
        assert!(!projects.is_empty());
        // Every entry needs a model for the card's render pane.
        for project in &projects {
            assert!(!project.model.src.is_empty());
        }
    }

    #[test]
    fn test_hero_labels_and_models_nonempty() {
        assert!(!HERO_LABELS.is_empty());
        assert!(!HERO_MODELS.is_empty());
        assert!(!GALLERY_WORKS.is_empty());
    }
}
