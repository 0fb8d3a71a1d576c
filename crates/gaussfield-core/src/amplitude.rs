use crate::constants::{AMPLITUDE_BIAS, MAX_AMPLITUDE, MAX_STDDEV, MIN_AMPLITUDE, MIN_STDDEV};
use std::f64::consts::TAU;

/// Clamp `spread` into `[MIN_STDDEV, MAX_STDDEV]`. NaN maps to the minimum.
#[inline]
pub fn clamp_spread(spread: f64) -> f64 {
    if spread.is_nan() {
        return MIN_STDDEV;
    }
    spread.clamp(MIN_STDDEV, MAX_STDDEV)
}

/// Peak value of the normal probability density for the given standard deviation.
#[inline]
pub fn pdf_peak(spread: f64) -> f64 {
    1.0 / (spread * TAU.sqrt())
}

/// Map a spread to the rendered peak height of the curve.
///
/// The density peak is normalized against the peak at `MIN_STDDEV` so the
/// narrowest curve reaches `MAX_AMPLITUDE`, then blended with a constant bias
/// so wide curves still show a visible hump. The result always lies in
/// `[MIN_AMPLITUDE, MAX_AMPLITUDE]`.
pub fn compute_amplitude(spread: f64) -> f64 {
    let s = clamp_spread(spread);
    let normalized = pdf_peak(s) / pdf_peak(MIN_STDDEV);
    let amp = (normalized * (1.0 - AMPLITUDE_BIAS) + AMPLITUDE_BIAS) * MAX_AMPLITUDE;
    amp.clamp(MIN_AMPLITUDE, MAX_AMPLITUDE)
}
