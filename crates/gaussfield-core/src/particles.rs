//! Shooting-star markers sampled from the current curve.
//!
//! Each particle flies in diagonally from above, rests on the curve, then
//! flies back out the way it came. Timestamps are virtual-clock milliseconds,
//! so a paused clock freezes every particle in place.

use crate::constants::{
    ENTRY_DURATION_MS, ENTRY_OFFSET, EXIT_DURATION_MS, POINT_LIFETIME_MS, SPAWN_MARGIN,
};
use crate::curve::CurveState;
use crate::easing::{ease_in_cubic, ease_out_cubic};
use crate::sampler::StandardNormal;
use crate::surface::{Circle, Rgba};
use glam::DVec2;
use rand::Rng;
use smallvec::SmallVec;
use std::collections::VecDeque;

/// Phase timings for a particle, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Lifecycle {
    pub lifetime: f64,
    pub entry: f64,
    pub exit: f64,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self {
            lifetime: POINT_LIFETIME_MS,
            entry: ENTRY_DURATION_MS,
            exit: EXIT_DURATION_MS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub origin: DVec2,
    pub target: DVec2,
    pub exit: DVec2,
    pub current: DVec2,
    pub opacity: f64,
    pub created_at: f64,
    spent: bool,
}

impl Particle {
    /// Build a particle resting on `target`, entering and leaving from above
    /// on the side of `midline` it lands on.
    pub fn toward(target: DVec2, midline: f64, created_at: f64) -> Self {
        let dx = if target.x < midline {
            -ENTRY_OFFSET
        } else {
            ENTRY_OFFSET
        };
        let origin = DVec2::new(target.x + dx, target.y - ENTRY_OFFSET);
        Self {
            origin,
            target,
            exit: origin,
            current: origin,
            opacity: 0.0,
            created_at,
            spent: false,
        }
    }

    #[inline]
    pub fn age(&self, now: f64) -> f64 {
        (now - self.created_at).max(0.0)
    }

    /// Place the particle for the given age. Ages past the lifetime are not
    /// handled here; the system retires those.
    pub fn animate(&mut self, age: f64, life: &Lifecycle) {
        if age < life.entry {
            let progress = age / life.entry;
            let eased = ease_out_cubic(progress);
            self.current = self.origin.lerp(self.target, eased);
            self.opacity = progress;
        } else if age > life.lifetime - life.exit {
            let progress = ((age - (life.lifetime - life.exit)) / life.exit).min(1.0);
            let eased = ease_in_cubic(progress);
            self.current = self.target.lerp(self.exit, eased);
            self.opacity = 1.0 - progress;
        } else {
            self.current = self.target;
            self.opacity = 1.0;
        }
    }
}

/// Bounded FIFO of live particles.
pub struct ParticleSystem {
    particles: VecDeque<Particle>,
    capacity: usize,
    life: Lifecycle,
}

impl ParticleSystem {
    pub fn new(capacity: usize, life: Lifecycle) -> Self {
        Self {
            particles: VecDeque::with_capacity(capacity + 1),
            capacity,
            life,
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn lifecycle(&self) -> &Lifecycle {
        &self.life
    }

    /// Live particles, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    /// Sample a spot on `curve` and add a particle flying toward it.
    ///
    /// Returns the resting point, or `None` when the sample landed too far
    /// outside the plot and was discarded.
    pub fn spawn<R: Rng>(
        &mut self,
        curve: &CurveState,
        sampler: &mut StandardNormal<R>,
        now: f64,
    ) -> Option<DVec2> {
        let z = sampler.sample();
        let target_x = curve.mean + z * curve.spread;
        self.spawn_at(curve, target_x, now)
    }

    /// Add a particle resting on `curve` at `target_x`.
    pub fn spawn_at(&mut self, curve: &CurveState, target_x: f64, now: f64) -> Option<DVec2> {
        let geometry = curve.geometry();
        if !(-SPAWN_MARGIN..=geometry.width + SPAWN_MARGIN).contains(&target_x) {
            return None;
        }
        let target = DVec2::new(target_x, curve.y_at(target_x));
        self.particles
            .push_back(Particle::toward(target, geometry.midline(), now));
        while self.particles.len() > self.capacity {
            self.particles.pop_front();
        }
        Some(target)
    }

    /// Age every particle to `now`, retiring the expired ones.
    ///
    /// A particle that lands exactly on its lifetime is drawn fully faded and
    /// removed on the following call, whether or not time moved in between.
    pub fn advance(&mut self, now: f64) {
        let life = self.life;
        self.particles.retain_mut(|p| {
            if p.spent {
                return false;
            }
            let age = p.age(now);
            if age > life.lifetime {
                return false;
            }
            p.animate(age, &life);
            if age >= life.lifetime {
                p.spent = true;
            }
            true
        });
    }

    /// Render descriptors for the live particles.
    pub fn circles(&self, color: [u8; 3], max_alpha: f64, radius: f64) -> SmallVec<[Circle; 64]> {
        self.particles
            .iter()
            .map(|p| Circle {
                center: p.current,
                radius,
                color: Rgba::new(color, p.opacity * max_alpha),
            })
            .collect()
    }
}
