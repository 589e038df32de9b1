//! Hover preview fit and clamp math.
//!
//! The floating preview panel is sized from the image's natural
//! dimensions so it fits within a bounded viewport fraction while
//! preserving aspect ratio, and its center follows the pointer clamped
//! so the panel never crosses the viewport edges.

use crate::config::preview::{
    MARGIN, MAX_HEIGHT, MAX_VIEWPORT_FRACTION, MAX_WIDTH, MIN_HEIGHT, MIN_WIDTH,
};

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

/// Computed panel dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelSize {
    pub width: f64,
    pub height: f64,
}

/// Fits an image of natural size `nat_w` x `nat_h` into the preview
/// bounds for the given viewport.
///
/// The panel never exceeds the viewport fraction (nor the absolute caps),
/// never scales an image up, is clamped to a minimum size, and the final
/// dimensions always preserve the image's aspect ratio.
pub fn fit_panel(nat_w: f64, nat_h: f64, viewport: Viewport) -> PanelSize {
    let max_w = (viewport.width * MAX_VIEWPORT_FRACTION).min(MAX_WIDTH);
    let max_h = (viewport.height * MAX_VIEWPORT_FRACTION).min(MAX_HEIGHT);

    let k = (max_w / nat_w).min(max_h / nat_h).min(1.0);
    let mut w = (nat_w * k).max(MIN_WIDTH.min(max_w));
    let mut h = (nat_h * k).max(MIN_HEIGHT.min(max_h));

    // The minimum clamp can break the ratio; shrink the long side back.
    let ratio = nat_w / nat_h;
    if w / h > ratio {
        w = h * ratio;
    } else {
        h = w / ratio;
    }

    PanelSize {
        width: w.round(),
        height: h.round(),
    }
}

/// Clamps the panel center to the pointer position such that the panel's
/// bounding box stays fully inside the viewport minus the margin.
pub fn clamp_panel_center(x: f64, y: f64, size: PanelSize, viewport: Viewport) -> (f64, f64) {
    let half_w = size.width / 2.0;
    let half_h = size.height / 2.0;
    // max-then-min rather than `clamp`: a panel larger than the usable
    // area pins to the far edge instead of panicking.
    let cx = x.max(MARGIN + half_w).min(viewport.width - MARGIN - half_w);
    let cy = y.max(MARGIN + half_h).min(viewport.height - MARGIN - half_h);
    (cx, cy)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VP: Viewport = Viewport {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn test_reference_fit() {
        // 80% of 1280x800 is 1024x640; scale = min(1024/1600, 640/1000) = 0.64.
        let size = fit_panel(1600.0, 1000.0, VP);
        assert_eq!(size.width, 1024.0);
        assert_eq!(size.height, 640.0);
    }

    #[test]
    fn test_never_upscales() {
        let size = fit_panel(400.0, 300.0, VP);
        assert_eq!(size.width, 400.0);
        assert_eq!(size.height, 300.0);
    }

    #[test]
    fn test_absolute_caps_apply_on_large_viewport() {
        let vp = Viewport {
            width: 3840.0,
            height: 2160.0,
        };
        let size = fit_panel(4000.0, 3000.0, vp);
        // max bounds are min(0.8*vp, 1200x900) = 1200x900; k = 0.3.
        assert_eq!(size.width, 1200.0);
        assert_eq!(size.height, 900.0);
    }

    #[test]
    fn test_minimum_size_preserves_ratio() {
        let size = fit_panel(100.0, 50.0, VP);
        // Width clamps to 320, then height follows the 2:1 ratio.
        assert_eq!(size.width, 320.0);
        assert_eq!(size.height, 160.0);
        let ratio = size.width / size.height;
        assert!((ratio - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_clamp_keeps_panel_inside_viewport() {
        let size = PanelSize {
            width: 400.0,
            height: 300.0,
        };
        for (px, py) in [
            (0.0, 0.0),
            (VP.width, VP.height),
            (0.0, VP.height),
            (VP.width, 0.0),
            (640.0, 400.0),
        ] {
            let (cx, cy) = clamp_panel_center(px, py, size, VP);
            assert!(cx - size.width / 2.0 >= MARGIN);
            assert!(cx + size.width / 2.0 <= VP.width - MARGIN);
            assert!(cy - size.height / 2.0 >= MARGIN);
            assert!(cy + size.height / 2.0 <= VP.height - MARGIN);
        }
    }

    #[test]
    fn test_clamp_is_identity_away_from_edges() {
        let size = PanelSize {
            width: 200.0,
            height: 100.0,
        };
        let (cx, cy) = clamp_panel_center(640.0, 400.0, size, VP);
        assert_eq!((cx, cy), (640.0, 400.0));
    }
}
