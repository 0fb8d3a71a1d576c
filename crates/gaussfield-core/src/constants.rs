// Shared animation tuning constants used by the core and the web front end.

// Curve geometry (logical SVG units)
pub const CURVE_WIDTH: f64 = 1400.0; // logical width the curve is sampled over
pub const CURVE_HEIGHT: f64 = 600.0; // logical height of the plot viewBox
pub const BASELINE: f64 = 500.0; // y of the curve's flat tails
pub const CURVE_STEP: f64 = 5.0; // x distance between polyline vertices
pub const MEAN_MARGIN: f64 = 200.0; // keeps the pointer-driven peak away from the edges

// Spread / amplitude bounds
pub const MIN_STDDEV: f64 = 40.0;
pub const MAX_STDDEV: f64 = 300.0;
pub const MIN_AMPLITUDE: f64 = 80.0;
pub const MAX_AMPLITUDE: f64 = 700.0;
pub const AMPLITUDE_BIAS: f64 = 0.32; // lifts the peak at wide spreads

// Pointer -> spread mapping
pub const SPREAD_TARGET_BASE: f64 = 100.0;
pub const SPREAD_TARGET_SPAN: f64 = 200.0;

// Fraction of the remaining distance covered per frame
pub const SMOOTHING: f64 = 0.1;

// Initial curve
pub const INITIAL_STDDEV: f64 = MIN_STDDEV;
pub const INITIAL_MEAN: f64 = CURVE_WIDTH / 2.0;

// Particle lifecycle (milliseconds)
pub const POINT_LIFETIME_MS: f64 = 1500.0;
pub const ENTRY_DURATION_MS: f64 = 400.0;
pub const EXIT_DURATION_MS: f64 = 400.0;

// Particle geometry
pub const SPAWN_MARGIN: f64 = 200.0; // accepted overshoot beyond the curve width
pub const ENTRY_OFFSET: f64 = 150.0; // diagonal distance particles fly in from
pub const POINT_RADIUS: f64 = 3.0;
pub const POINT_COLOR_RGB: [u8; 3] = [139, 92, 246]; // violet
pub const POINT_MAX_ALPHA: f64 = 0.8;

// Per-device particle and spawn budget
pub const MAX_POINTS_FULL: usize = 60;
pub const MAX_POINTS_CONSTRAINED: usize = 40;
pub const SPAWN_INTERVAL_FULL_MS: u32 = 120;
pub const SPAWN_INTERVAL_CONSTRAINED_MS: u32 = 180;

// Starfield
pub const STAR_COUNT_FULL: usize = 600;
pub const STAR_COUNT_CONSTRAINED: usize = 300;
pub const STAR_MAX_RADIUS: f64 = 1.2;
pub const STAR_MIN_ALPHA: f64 = 0.2;
pub const STAR_ALPHA_SPAN: f64 = 0.5;
pub const STAR_COLOR_RGB: [u8; 3] = [255, 255, 255];

// Viewports narrower than this are treated as constrained devices
pub const CONSTRAINED_VIEWPORT_WIDTH: f64 = 768.0;
