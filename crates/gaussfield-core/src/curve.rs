//! Pointer-driven Gaussian curve state.
//!
//! The pointer's horizontal position steers the peak (mean) and its vertical
//! position steers the width (spread). Both follow their targets with simple
//! per-frame exponential smoothing; the amplitude is always derived from the
//! current spread.

use crate::amplitude::{clamp_spread, compute_amplitude};
use crate::constants::{
    BASELINE, CURVE_STEP, CURVE_WIDTH, INITIAL_MEAN, INITIAL_STDDEV, MEAN_MARGIN, SMOOTHING,
    SPREAD_TARGET_BASE, SPREAD_TARGET_SPAN,
};
use glam::DVec2;
use std::fmt::Write as _;

/// Logical plot geometry and the per-frame smoothing factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveGeometry {
    /// Width of the plot in logical units; x runs from 0 to `width`.
    pub width: f64,
    /// y of the flat tails (SVG coordinates, y grows downward).
    pub baseline: f64,
    /// x distance between polyline vertices.
    pub step: f64,
    /// Fraction of the remaining distance covered per tick, in (0, 1].
    pub smoothing: f64,
}

impl Default for CurveGeometry {
    fn default() -> Self {
        Self {
            width: CURVE_WIDTH,
            baseline: BASELINE,
            step: CURVE_STEP,
            smoothing: SMOOTHING,
        }
    }
}

impl CurveGeometry {
    /// Horizontal midline; particles left of it enter from the left.
    #[inline]
    pub fn midline(&self) -> f64 {
        self.width / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveState {
    pub mean: f64,
    pub spread: f64,
    pub amplitude: f64,
    geometry: CurveGeometry,
}

impl Default for CurveState {
    fn default() -> Self {
        Self::new(INITIAL_MEAN, INITIAL_STDDEV)
    }
}

impl CurveState {
    pub fn new(mean: f64, spread: f64) -> Self {
        Self::with_geometry(CurveGeometry::default(), mean, spread)
    }

    pub fn with_geometry(geometry: CurveGeometry, mean: f64, spread: f64) -> Self {
        let spread = clamp_spread(spread);
        Self {
            mean,
            spread,
            amplitude: compute_amplitude(spread),
            geometry,
        }
    }

    /// Centred curve at the initial spread.
    pub fn centered(geometry: CurveGeometry) -> Self {
        Self::with_geometry(geometry, geometry.midline(), INITIAL_STDDEV)
    }

    #[inline]
    pub fn geometry(&self) -> &CurveGeometry {
        &self.geometry
    }

    /// Mean the curve moves toward for a pointer at `pointer_x` in a viewport `viewport_w` wide.
    #[inline]
    pub fn target_mean(&self, pointer_x: f64, viewport_w: f64) -> f64 {
        (pointer_x / viewport_w) * (self.geometry.width - 2.0 * MEAN_MARGIN) + MEAN_MARGIN
    }

    /// Spread the curve moves toward for a pointer at `pointer_y` in a viewport `viewport_h` tall.
    #[inline]
    pub fn target_spread(&self, pointer_y: f64, viewport_h: f64) -> f64 {
        SPREAD_TARGET_BASE + (pointer_y / viewport_h) * SPREAD_TARGET_SPAN
    }

    /// Move one smoothing step toward the pointer-derived targets.
    ///
    /// A degenerate viewport axis (zero, negative or NaN extent) leaves the
    /// matching parameter where it is.
    pub fn tick(&mut self, pointer_x: f64, pointer_y: f64, viewport_w: f64, viewport_h: f64) {
        let k = self.geometry.smoothing;
        if viewport_w > 0.0 {
            let target = self.target_mean(pointer_x, viewport_w);
            if target.is_finite() {
                self.mean += (target - self.mean) * k;
            }
        }
        if viewport_h > 0.0 {
            let target = self.target_spread(pointer_y, viewport_h);
            if target.is_finite() {
                self.spread += (target - self.spread) * k;
            }
        }
        self.spread = clamp_spread(self.spread);
        self.amplitude = compute_amplitude(self.spread);
    }

    /// Height of the curve at `x`, in SVG coordinates (y grows downward).
    #[inline]
    pub fn y_at(&self, x: f64) -> f64 {
        let dx = x - self.mean;
        let exponent = -(dx * dx) / (2.0 * self.spread * self.spread);
        self.geometry.baseline - self.amplitude * exponent.exp()
    }

    /// Sampled vertices of the curve from x = 0 to the logical width.
    ///
    /// The first vertex sits at x = 0; the rest start at x = 1 and advance by
    /// the geometry's step without overshooting the width.
    pub fn polyline(&self) -> Vec<DVec2> {
        let g = &self.geometry;
        let mut out = Vec::with_capacity((g.width / g.step) as usize + 2);
        self.polyline_into(&mut out);
        out
    }

    /// Same as [`CurveState::polyline`] but reuses `out`.
    pub fn polyline_into(&self, out: &mut Vec<DVec2>) {
        out.clear();
        out.push(DVec2::new(0.0, self.y_at(0.0)));
        let (width, step) = (self.geometry.width, self.geometry.step);
        if step <= 0.0 {
            return;
        }
        let mut x = 1.0;
        while x <= width {
            out.push(DVec2::new(x, self.y_at(x)));
            x += step;
        }
    }

    /// SVG path data (`M x y L x y ...`) for the current curve.
    pub fn path_data(&self) -> String {
        path_data(&self.polyline())
    }
}

/// Format vertices as an SVG path: a move to the first vertex, then line segments.
pub fn path_data(vertices: &[DVec2]) -> String {
    let mut d = String::with_capacity(vertices.len() * 16);
    for (i, v) in vertices.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        if i > 0 {
            d.push(' ');
        }
        let _ = write!(d, "{cmd} {} {}", v.x, v.y);
    }
    d
}
