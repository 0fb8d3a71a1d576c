//! Render and input seams between the animation core and a front end.
//!
//! These types intentionally avoid referencing platform-specific APIs. The
//! web frontend implements the traits on top of canvas/SVG; tests implement
//! them with plain recorders.

use glam::DVec2;
use std::fmt;

/// An 8-bit RGB color with a floating-point alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub rgb: [u8; 3],
    pub alpha: f64,
}

impl Rgba {
    pub fn new(rgb: [u8; 3], alpha: f64) -> Self {
        Self {
            rgb,
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// CSS `rgba(...)` string.
    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.rgb;
        write!(f, "rgba({r}, {g}, {b}, {})", self.alpha)
    }
}

/// A filled circle to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub center: DVec2,
    pub radius: f64,
    pub color: Rgba,
}

/// Target for the curve and its particles, redrawn every frame.
pub trait SceneSurface {
    /// Replace the drawn curve with the polyline through `vertices`.
    fn draw_curve(&mut self, vertices: &[DVec2]);
    /// Replace the drawn particles with `circles`.
    fn draw_particles(&mut self, circles: &[Circle]);
}

/// Target for the starfield, redrawn only when the stars are regenerated.
pub trait StarSurface {
    /// Set the backing pixel size of the surface.
    fn resize(&mut self, width: u32, height: u32);
    /// Clear everything and draw `circles`.
    fn clear_and_draw(&mut self, circles: &[Circle]);
}

/// Source of the latest pointer position and viewport size, in CSS pixels.
pub trait InputSource {
    fn pointer(&self) -> DVec2;
    fn viewport(&self) -> DVec2;
}

/// Fixed input, handy for headless drivers.
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticInput {
    pub pointer: DVec2,
    pub viewport: DVec2,
}

impl InputSource for StaticInput {
    fn pointer(&self) -> DVec2 {
        self.pointer
    }
    fn viewport(&self) -> DVec2 {
        self.viewport
    }
}
