// Host-side tests for the particle lifecycle and the Box-Muller sampler.

use gaussfield_core::*;
use rand::rngs::StdRng;
use rand::{Error, RngCore, SeedableRng};

fn system(capacity: usize) -> ParticleSystem {
    ParticleSystem::new(capacity, Lifecycle::default())
}

fn single_particle_at(target_x: f64) -> (ParticleSystem, CurveState) {
    let curve = CurveState::new(700.0, 120.0);
    let mut ps = system(60);
    assert!(ps.spawn_at(&curve, target_x, 0.0).is_some());
    (ps, curve)
}

fn only(ps: &ParticleSystem) -> &Particle {
    assert_eq!(ps.len(), 1);
    ps.iter().next().expect("one particle")
}

#[test]
fn spawn_never_exceeds_capacity_and_evicts_oldest() {
    let curve = CurveState::default();
    let mut ps = system(40);
    for i in 0..40 {
        assert!(ps.spawn_at(&curve, 700.0, i as f64).is_some());
    }
    assert_eq!(ps.len(), 40);
    let oldest_before: Vec<f64> = ps.iter().map(|p| p.created_at).collect();

    ps.spawn_at(&curve, 700.0, 40.0);
    assert_eq!(ps.len(), 40);
    let after: Vec<f64> = ps.iter().map(|p| p.created_at).collect();
    assert_eq!(&after[..39], &oldest_before[1..]);
    assert_eq!(after[39], 40.0);

    for i in 41..200 {
        ps.spawn_at(&curve, 700.0, i as f64);
        assert!(ps.len() <= ps.capacity());
    }
}

#[test]
fn out_of_range_targets_are_rejected() {
    let curve = CurveState::default();
    let mut ps = system(60);
    assert!(ps.spawn_at(&curve, -200.1, 0.0).is_none());
    assert!(ps.spawn_at(&curve, CURVE_WIDTH + 200.1, 0.0).is_none());
    assert!(ps.spawn_at(&curve, f64::NAN, 0.0).is_none());
    assert!(ps.is_empty());
    // bounds are inclusive
    assert!(ps.spawn_at(&curve, -200.0, 0.0).is_some());
    assert!(ps.spawn_at(&curve, CURVE_WIDTH + 200.0, 0.0).is_some());
    assert_eq!(ps.len(), 2);
}

#[test]
fn particles_enter_from_the_near_side_and_above() {
    let curve = CurveState::new(700.0, 120.0);
    let mut ps = system(60);
    ps.spawn_at(&curve, 500.0, 0.0);
    ps.spawn_at(&curve, 900.0, 0.0);
    let v: Vec<&Particle> = ps.iter().collect();

    let left = v[0];
    assert!((left.target.y - curve.y_at(500.0)).abs() < 1e-9);
    assert_eq!(left.origin.x, 500.0 - ENTRY_OFFSET);
    assert_eq!(left.origin.y, left.target.y - ENTRY_OFFSET);
    assert_eq!(left.exit, left.origin);
    assert_eq!(left.current, left.origin);
    assert_eq!(left.opacity, 0.0);

    let right = v[1];
    assert_eq!(right.origin.x, 900.0 + ENTRY_OFFSET);
    assert_eq!(right.exit, right.origin);
}

#[test]
fn opacity_hits_phase_boundaries_exactly() {
    let (mut ps, _) = single_particle_at(650.0);
    let life = *ps.lifecycle();

    ps.advance(0.0);
    assert_eq!(only(&ps).opacity, 0.0);
    assert_eq!(only(&ps).current, only(&ps).origin);

    ps.advance(life.entry);
    assert_eq!(only(&ps).opacity, 1.0);
    assert_eq!(only(&ps).current, only(&ps).target);

    ps.advance(life.lifetime - life.exit);
    assert_eq!(only(&ps).opacity, 1.0);
    assert_eq!(only(&ps).current, only(&ps).target);

    ps.advance(life.lifetime);
    assert_eq!(only(&ps).opacity, 0.0);
    assert!((only(&ps).current - only(&ps).exit).length() < 1e-9);
}

#[test]
fn opacity_is_continuous_across_phase_transitions() {
    let (mut ps, _) = single_particle_at(650.0);
    let life = *ps.lifecycle();
    let eps = 1e-6;
    for boundary in [life.entry, life.lifetime - life.exit] {
        ps.advance(boundary - eps);
        let before = only(&ps).opacity;
        let pos_before = only(&ps).current;
        ps.advance(boundary + eps);
        let after = only(&ps).opacity;
        let pos_after = only(&ps).current;
        assert!((before - after).abs() < 1e-4, "jump at {boundary}: {before} -> {after}");
        assert!((pos_before - pos_after).length() < 1e-3);
    }
}

#[test]
fn entry_eases_position_but_fades_linearly() {
    let (mut ps, _) = single_particle_at(650.0);
    let life = *ps.lifecycle();
    ps.advance(life.entry / 2.0);
    let p = only(&ps);
    assert!((p.opacity - 0.5).abs() < 1e-12);
    let expected = p.origin.lerp(p.target, ease_out_cubic(0.5));
    assert!((p.current - expected).length() < 1e-9);
    // ease-out covers most of the distance by the halfway point
    assert!(ease_out_cubic(0.5) > 0.5);
}

#[test]
fn exit_accelerates_away_from_the_curve() {
    let (mut ps, _) = single_particle_at(650.0);
    let life = *ps.lifecycle();
    ps.advance(life.lifetime - life.exit / 2.0);
    let p = only(&ps);
    assert!((p.opacity - 0.5).abs() < 1e-12);
    let expected = p.target.lerp(p.exit, ease_in_cubic(0.5));
    assert!((p.current - expected).length() < 1e-9);
}

#[test]
fn particle_at_end_of_life_is_gone_after_next_advance() {
    let (mut ps, _) = single_particle_at(650.0);
    let life = *ps.lifecycle();
    ps.advance(life.lifetime);
    assert_eq!(ps.len(), 1);
    // same timestamp, as happens while paused
    ps.advance(life.lifetime);
    assert!(ps.is_empty());
}

#[test]
fn particle_past_lifetime_is_removed_immediately() {
    let (mut ps, _) = single_particle_at(650.0);
    ps.advance(POINT_LIFETIME_MS + 1.0);
    assert!(ps.is_empty());
}

#[test]
fn clock_skew_before_creation_counts_as_age_zero() {
    let curve = CurveState::default();
    let mut ps = system(60);
    ps.spawn_at(&curve, 700.0, 1_000.0);
    ps.advance(900.0);
    let p = only(&ps);
    assert_eq!(p.age(900.0), 0.0);
    assert_eq!(p.opacity, 0.0);
}

#[test]
fn circles_scale_alpha_and_use_particle_positions() {
    let (mut ps, _) = single_particle_at(650.0);
    ps.advance(ENTRY_DURATION_MS);
    let circles = ps.circles(POINT_COLOR_RGB, POINT_MAX_ALPHA, POINT_RADIUS);
    assert_eq!(circles.len(), 1);
    let c = circles[0];
    assert_eq!(c.center, only(&ps).target);
    assert_eq!(c.radius, POINT_RADIUS);
    assert!((c.color.alpha - 0.8).abs() < 1e-12);
    assert_eq!(c.color.to_css(), "rgba(139, 92, 246, 0.8)");
}

#[test]
fn sampled_spawns_cluster_around_the_mean() {
    let curve = CurveState::new(700.0, 100.0);
    let mut sampler = StandardNormal::new(StdRng::seed_from_u64(7));
    let mut ps = system(10_000);
    let mut xs = Vec::new();
    for i in 0..5_000 {
        if let Some(t) = ps.spawn(&curve, &mut sampler, i as f64) {
            xs.push(t.x);
        }
    }
    let n = xs.len() as f64;
    let mean = xs.iter().sum::<f64>() / n;
    let var = xs.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    assert!((mean - 700.0).abs() < 10.0, "sample mean {mean}");
    assert!((var.sqrt() - 100.0).abs() < 10.0, "sample std {}", var.sqrt());
}

#[test]
fn standard_normal_has_unit_moments() {
    let mut rng = StdRng::seed_from_u64(42);
    let n = 20_000;
    let samples: Vec<f64> = (0..n).map(|_| sample_standard_normal(&mut rng)).collect();
    let mean = samples.iter().sum::<f64>() / n as f64;
    let var = samples.iter().map(|z| (z - mean).powi(2)).sum::<f64>() / n as f64;
    assert!(mean.abs() < 0.05, "mean {mean}");
    assert!((var - 1.0).abs() < 0.05, "variance {var}");
    assert!(samples.iter().all(|z| z.is_finite()));
}

/// Yields zeros for the first few draws, then defers to a seeded rng.
struct ZeroesFirst {
    zeroes_left: usize,
    inner: StdRng,
}

impl RngCore for ZeroesFirst {
    fn next_u32(&mut self) -> u32 {
        self.next_u64() as u32
    }
    fn next_u64(&mut self) -> u64 {
        if self.zeroes_left > 0 {
            self.zeroes_left -= 1;
            0
        } else {
            self.inner.next_u64()
        }
    }
    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }
    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.inner.try_fill_bytes(dest)
    }
}

#[test]
fn box_muller_resamples_instead_of_returning_infinity() {
    let mut rng = ZeroesFirst {
        zeroes_left: 5,
        inner: StdRng::seed_from_u64(3),
    };
    let z = sample_standard_normal(&mut rng);
    assert!(z.is_finite());
    assert_eq!(rng.zeroes_left, 0);
}
