//! Per-frame driver for the curve and its particles.
//!
//! The loop owns all mutable animation state. A front end calls
//! [`AnimationLoop::frame`] once per display frame, [`AnimationLoop::render`]
//! once a surface is available, and [`AnimationLoop::spawn_particle`] from its
//! spawn timer. Every time-based quantity runs on one [`PausableClock`], so
//! pausing freezes curve motion, spawning and particle aging together.

use crate::clock::PausableClock;
use crate::config::SceneConfig;
use crate::constants::{POINT_COLOR_RGB, POINT_MAX_ALPHA, POINT_RADIUS};
use crate::curve::CurveState;
use crate::particles::ParticleSystem;
use crate::sampler::StandardNormal;
use crate::surface::{InputSource, SceneSurface};
use glam::DVec2;
use rand::rngs::StdRng;
use rand::Rng;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Paused,
}

/// Everything the loop mutates between frames.
pub struct AnimationState {
    pub curve: CurveState,
    pub particles: ParticleSystem,
    pub clock: PausableClock,
}

impl AnimationState {
    pub fn new(config: &SceneConfig) -> Self {
        Self {
            curve: CurveState::centered(config.curve),
            particles: ParticleSystem::new(config.max_points, config.lifecycle),
            clock: PausableClock::new(),
        }
    }
}

pub struct AnimationLoop<R = StdRng> {
    state: AnimationState,
    sampler: StandardNormal<R>,
    mode: LoopState,
    vertices: Vec<DVec2>,
    curve_dirty: bool,
}

impl<R: Rng> AnimationLoop<R> {
    /// Build the logical scene. Nothing is drawn until [`AnimationLoop::render`].
    pub fn new(config: &SceneConfig, rng: R) -> Self {
        let state = AnimationState::new(config);
        let vertices = state.curve.polyline();
        Self {
            state,
            sampler: StandardNormal::new(rng),
            mode: LoopState::Running,
            vertices,
            curve_dirty: true,
        }
    }

    #[inline]
    pub fn state(&self) -> &AnimationState {
        &self.state
    }

    #[inline]
    pub fn mode(&self) -> LoopState {
        self.mode
    }

    #[inline]
    pub fn is_paused(&self) -> bool {
        self.mode == LoopState::Paused
    }

    /// Vertices of the most recently computed curve.
    pub fn curve_vertices(&self) -> &[DVec2] {
        &self.vertices
    }

    /// Advance one display frame at wall-clock time `real_now_ms`.
    pub fn frame<I: InputSource + ?Sized>(&mut self, real_now_ms: f64, input: &I) {
        let now = self.state.clock.sync(real_now_ms);
        if self.mode == LoopState::Running {
            let pointer = input.pointer();
            let viewport = input.viewport();
            self.state
                .curve
                .tick(pointer.x, pointer.y, viewport.x, viewport.y);
            self.state.curve.polyline_into(&mut self.vertices);
            self.curve_dirty = true;
        }
        self.state.particles.advance(now);
    }

    /// Push the current frame to `surface`. The curve is only resent when it
    /// changed since the last render.
    pub fn render<S: SceneSurface + ?Sized>(&mut self, surface: &mut S) {
        if self.curve_dirty {
            surface.draw_curve(&self.vertices);
            self.curve_dirty = false;
        }
        let circles = self
            .state
            .particles
            .circles(POINT_COLOR_RGB, POINT_MAX_ALPHA, POINT_RADIUS);
        surface.draw_particles(&circles);
    }

    /// Spawn one particle from the current curve; a no-op while paused.
    pub fn spawn_particle(&mut self, real_now_ms: f64) -> Option<DVec2> {
        if self.is_paused() {
            return None;
        }
        let now = self.state.clock.sync(real_now_ms);
        self.state
            .particles
            .spawn(&self.state.curve, &mut self.sampler, now)
    }

    pub fn pause(&mut self, real_now_ms: f64) {
        if self.mode == LoopState::Paused {
            return;
        }
        self.state.clock.pause(real_now_ms);
        self.mode = LoopState::Paused;
        log::debug!("[loop] paused at {:.0} ms", self.state.clock.now());
    }

    pub fn resume(&mut self, real_now_ms: f64) {
        if self.mode == LoopState::Running {
            return;
        }
        self.state.clock.resume(real_now_ms);
        self.mode = LoopState::Running;
        log::debug!("[loop] resumed at {:.0} ms", self.state.clock.now());
    }

    /// Flip between running and paused, returning the new state.
    pub fn toggle_pause(&mut self, real_now_ms: f64) -> LoopState {
        match self.mode {
            LoopState::Running => self.pause(real_now_ms),
            LoopState::Paused => self.resume(real_now_ms),
        }
        self.mode
    }
}
