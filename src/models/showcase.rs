//! Static descriptors for the hero model cycle and the gallery grid.

/// A wireframe model cycled on the home view's hero scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HeroModel {
    pub src: &'static str,
    pub scale: f64,
    pub y: f64,
}

impl HeroModel {
    pub const fn new(src: &'static str, scale: f64) -> Self {
        Self { src, scale, y: 0.0 }
    }
}

/// One tile in the portfolio gallery.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GalleryWork {
    pub src: &'static str,
    pub title: &'static str,
}

impl GalleryWork {
    pub const fn new(src: &'static str, title: &'static str) -> Self {
        Self { src, title }
    }
}
