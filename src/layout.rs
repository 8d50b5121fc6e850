// src/layout.rs
//! Responsive sizing for the embedded surface: it is laid out at a fixed
//! reference width and shrunk (never grown) to fit the space available.

use crate::config::consts::{REFERENCE_WIDTH, SURFACE_HEIGHT_FRACTION};

/// `available / reference` when the surface doesn't fit, else 1.
pub fn scale_factor(available_width: f32, reference_width: f32) -> f32 {
    if available_width <= 0.0 || reference_width <= 0.0 || !available_width.is_finite() {
        return 1.0;
    }
    if available_width < reference_width {
        available_width / reference_width
    } else {
        1.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceLayout {
    pub scale: f32,
    /// Logical width: always the reference width.
    pub width: f32,
    /// Logical height: a fixed fraction of the viewport.
    pub height: f32,
}

impl SurfaceLayout {
    /// On-screen size once the scale is applied.
    pub fn scaled_size(&self) -> (f32, f32) {
        (self.width * self.scale, self.height * self.scale)
    }
}

pub fn fit_surface(available_width: f32, viewport_height: f32) -> SurfaceLayout {
    SurfaceLayout {
        scale: scale_factor(available_width, REFERENCE_WIDTH),
        width: REFERENCE_WIDTH,
        height: viewport_height.max(0.0) * SURFACE_HEIGHT_FRACTION,
    }
}
