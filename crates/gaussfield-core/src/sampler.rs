use rand::Rng;
use std::f64::consts::TAU;

/// Draw one sample from N(0, 1) with the Box-Muller transform.
///
/// `u1` is redrawn while it is exactly zero (the log would diverge) and the
/// whole draw is repeated if the result is not finite, so callers never see
/// NaN or infinity.
pub fn sample_standard_normal<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    loop {
        let u1: f64 = rng.gen();
        if u1 <= 0.0 {
            continue;
        }
        let u2: f64 = rng.gen();
        let z = (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos();
        if z.is_finite() {
            return z;
        }
    }
}

/// Owns an rng and hands out standard-normal samples.
#[derive(Clone, Debug)]
pub struct StandardNormal<R> {
    rng: R,
}

impl<R: Rng> StandardNormal<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    #[inline]
    pub fn sample(&mut self) -> f64 {
        sample_standard_normal(&mut self.rng)
    }
}
