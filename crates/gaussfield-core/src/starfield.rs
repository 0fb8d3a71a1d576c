//! Static background starfield.
//!
//! Stars are regenerated in bulk whenever the canvas dimensions change and
//! are otherwise immutable. The canvas only ever grows on scroll; shrinking
//! content keeps the larger canvas.

use crate::config::DeviceClass;
use crate::constants::{STAR_ALPHA_SPAN, STAR_COLOR_RGB, STAR_MAX_RADIUS, STAR_MIN_ALPHA};
use crate::surface::{Circle, Rgba, StarSurface};
use glam::DVec2;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Star {
    pub position: DVec2,
    pub radius: f64,
    pub alpha: f64,
}

#[derive(Clone, Debug)]
pub struct Starfield {
    width: u32,
    height: u32,
    star_count: usize,
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new(star_count: usize) -> Self {
        Self {
            width: 1,
            height: 1,
            star_count,
            stars: Vec::new(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn star_count(&self) -> usize {
        self.star_count
    }

    pub fn set_star_count(&mut self, star_count: usize) {
        self.star_count = star_count;
    }

    /// Adopt the star budget of `device`. Returns true when the count
    /// changed; the caller still has to regenerate.
    pub fn on_viewport(&mut self, device: DeviceClass) -> bool {
        let count = device.star_count();
        if count == self.star_count {
            return false;
        }
        self.star_count = count;
        true
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    /// Set the canvas size in pixels (at least 1x1).
    pub fn resize(&mut self, width: u32, height: u32) {
        self.width = width.max(1);
        self.height = height.max(1);
    }

    /// True when content of height `document_height` no longer fits the canvas.
    #[inline]
    pub fn needs_growth(&self, document_height: u32) -> bool {
        document_height > self.height
    }

    /// Scatter a fresh set of stars uniformly over the canvas.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let (w, h) = (self.width as f64, self.height as f64);
        self.stars.clear();
        self.stars.reserve(self.star_count);
        for _ in 0..self.star_count {
            self.stars.push(Star {
                position: DVec2::new(rng.gen::<f64>() * w, rng.gen::<f64>() * h),
                radius: rng.gen::<f64>() * STAR_MAX_RADIUS,
                alpha: rng.gen::<f64>() * STAR_ALPHA_SPAN + STAR_MIN_ALPHA,
            });
        }
        log::debug!(
            "[starfield] regenerated {} stars over {}x{}",
            self.stars.len(),
            self.width,
            self.height
        );
    }

    pub fn circles(&self) -> Vec<Circle> {
        self.stars
            .iter()
            .map(|s| Circle {
                center: s.position,
                radius: s.radius,
                color: Rgba::new(STAR_COLOR_RGB, s.alpha),
            })
            .collect()
    }

    /// Resize the surface to match and redraw every star.
    pub fn render<S: StarSurface + ?Sized>(&self, surface: &mut S) {
        surface.resize(self.width, self.height);
        surface.clear_and_draw(&self.circles());
    }

    /// Resize, regenerate and redraw in one go.
    pub fn rebuild<R: Rng + ?Sized, S: StarSurface + ?Sized>(
        &mut self,
        width: u32,
        height: u32,
        rng: &mut R,
        surface: &mut S,
    ) {
        self.resize(width, height);
        self.regenerate(rng);
        self.render(surface);
    }
}
