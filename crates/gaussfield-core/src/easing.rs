// Cubic easing curves over progress in [0, 1].

#[inline]
pub fn ease_out_cubic(p: f64) -> f64 {
    1.0 - (1.0 - p).powi(3)
}

#[inline]
pub fn ease_in_cubic(p: f64) -> f64 {
    p.powi(3)
}
