//! Value types for the portfolio's static content and navigation.

mod project;
mod section;
mod showcase;

pub use project::{MediaItem, ProjectCatalog, ProjectEntry};
pub use section::Section;
pub use showcase::{GalleryWork, HeroModel};
