// Host-side tests for the starfield model and device configuration.

use gaussfield_core::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Default)]
struct Canvas {
    size: (u32, u32),
    clears: usize,
    drawn: Vec<Circle>,
}

impl StarSurface for Canvas {
    fn resize(&mut self, width: u32, height: u32) {
        self.size = (width, height);
    }
    fn clear_and_draw(&mut self, circles: &[Circle]) {
        self.clears += 1;
        self.drawn = circles.to_vec();
    }
}

#[test]
fn star_count_follows_viewport_width() {
    assert_eq!(DeviceClass::from_viewport_width(767.9).star_count(), 300);
    assert_eq!(DeviceClass::from_viewport_width(768.0).star_count(), 600);
    assert_eq!(DeviceClass::from_viewport_width(1920.0).star_count(), 600);
}

#[test]
fn mobile_user_agent_wins_over_wide_viewport() {
    assert_eq!(DeviceClass::detect(true, 2560.0), DeviceClass::Constrained);
    assert_eq!(DeviceClass::detect(false, 2560.0), DeviceClass::Full);
    assert_eq!(DeviceClass::detect(false, 320.0), DeviceClass::Constrained);
}

#[test]
fn regenerate_fills_the_canvas_with_faint_small_stars() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut field = Starfield::new(DeviceClass::Full.star_count());
    field.resize(1440, 3200);
    field.regenerate(&mut rng);
    assert_eq!(field.stars().len(), 600);
    for s in field.stars() {
        assert!((0.0..1440.0).contains(&s.position.x));
        assert!((0.0..3200.0).contains(&s.position.y));
        assert!((0.0..STAR_MAX_RADIUS).contains(&s.radius));
        assert!((STAR_MIN_ALPHA..STAR_MIN_ALPHA + STAR_ALPHA_SPAN).contains(&s.alpha));
    }
}

#[test]
fn regenerate_replaces_rather_than_appends() {
    let mut rng = StdRng::seed_from_u64(2);
    let mut field = Starfield::new(300);
    field.resize(800, 600);
    field.regenerate(&mut rng);
    let first = field.stars().to_vec();
    field.set_star_count(600);
    field.regenerate(&mut rng);
    assert_eq!(field.stars().len(), 600);
    assert_ne!(&field.stars()[..300], first.as_slice());
}

#[test]
fn rebuild_resizes_and_redraws_the_surface() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = Starfield::new(300);
    let mut canvas = Canvas::default();
    field.rebuild(1024, 2048, &mut rng, &mut canvas);
    assert_eq!(canvas.size, (1024, 2048));
    assert_eq!(canvas.clears, 1);
    assert_eq!(canvas.drawn.len(), 300);
    assert!(canvas
        .drawn
        .iter()
        .all(|c| c.color.rgb == STAR_COLOR_RGB && c.radius < STAR_MAX_RADIUS));
}

#[test]
fn growth_is_only_requested_when_content_gets_taller() {
    let mut field = Starfield::new(300);
    field.resize(1000, 2000);
    assert!(!field.needs_growth(1500));
    assert!(!field.needs_growth(2000));
    assert!(field.needs_growth(2001));
}

#[test]
fn zero_sized_canvas_is_clamped() {
    let mut field = Starfield::new(10);
    field.resize(0, 0);
    assert_eq!((field.width(), field.height()), (1, 1));
}

#[test]
fn scene_config_matches_device_budget() {
    let full = SceneConfig::for_device(DeviceClass::Full);
    assert_eq!(full.max_points, 60);
    assert_eq!(full.spawn_interval_ms, 120);
    assert_eq!(full.star_count, 600);
    assert_eq!(SceneConfig::default(), full);

    let small = SceneConfig::for_device(DeviceClass::Constrained);
    assert_eq!(small.max_points, 40);
    assert_eq!(small.spawn_interval_ms, 180);
    assert_eq!(small.star_count, 300);
    assert!(full.validate().is_ok() && small.validate().is_ok());
}

#[test]
fn invalid_scene_configs_are_reported() {
    let mut c = SceneConfig::default();
    c.max_points = 0;
    assert_eq!(
        c.validate(),
        Err(ConfigError::NotPositive { field: "max_points" })
    );

    let mut c = SceneConfig::default();
    c.lifecycle.entry = 1_200.0;
    assert!(matches!(
        c.validate(),
        Err(ConfigError::PhasesExceedLifetime { .. })
    ));

    let mut c = SceneConfig::default();
    c.lifecycle.exit = f64::NAN;
    assert!(c.validate().is_err());
}

#[test]
fn device_class_parses_page_overrides() {
    assert_eq!("constrained".parse::<DeviceClass>(), Ok(DeviceClass::Constrained));
    assert_eq!(" Mobile ".parse::<DeviceClass>(), Ok(DeviceClass::Constrained));
    assert_eq!("FULL".parse::<DeviceClass>(), Ok(DeviceClass::Full));
    let err = "tablet".parse::<DeviceClass>().unwrap_err();
    assert_eq!(err, ConfigError::UnknownDeviceClass("tablet".into()));
    assert!(err.to_string().contains("tablet"));
    assert_eq!(DeviceClass::Constrained.to_string(), "constrained");
}

#[test]
fn page_override_pins_the_device_class_across_widths() {
    let pinned = DeviceHints {
        mobile_user_agent: true,
        device_override: Some(DeviceClass::Full),
    };
    for width in [320.0, 767.0, 768.0, 2560.0] {
        assert_eq!(pinned.resolve(width), DeviceClass::Full);
    }

    let mut field = Starfield::new(pinned.resolve(1280.0).star_count());
    assert!(!field.on_viewport(pinned.resolve(400.0)));
    assert_eq!(field.star_count(), 600);
}

#[test]
fn narrowing_the_viewport_drops_to_the_constrained_star_count() {
    let hints = DeviceHints::default();
    let mut rng = StdRng::seed_from_u64(4);
    let mut canvas = Canvas::default();
    let mut field = Starfield::new(hints.resolve(1280.0).star_count());
    field.rebuild(1280, 2000, &mut rng, &mut canvas);
    assert_eq!(canvas.drawn.len(), 600);

    assert!(field.on_viewport(hints.resolve(767.0)));
    assert_eq!(field.star_count(), 300);
    field.rebuild(767, 2400, &mut rng, &mut canvas);
    assert_eq!(canvas.drawn.len(), 300);

    // widening back restores the full budget
    assert!(field.on_viewport(hints.resolve(1024.0)));
    assert_eq!(field.star_count(), 600);
}

#[test]
fn resize_within_the_same_class_keeps_the_star_count() {
    let hints = DeviceHints::default();
    let mut field = Starfield::new(hints.resolve(1920.0).star_count());
    assert!(!field.on_viewport(hints.resolve(1024.0)));
    assert!(!field.on_viewport(hints.resolve(768.0)));
    assert_eq!(field.star_count(), 600);

    // a mobile user agent stays constrained however wide the viewport gets
    let phone = DeviceHints {
        mobile_user_agent: true,
        device_override: None,
    };
    let mut field = Starfield::new(phone.resolve(390.0).star_count());
    assert!(!field.on_viewport(phone.resolve(1180.0)));
    assert_eq!(field.star_count(), 300);
}

#[test]
fn invalid_curve_geometry_is_reported() {
    let mut c = SceneConfig::default();
    c.curve.step = 0.0;
    assert_eq!(
        c.validate(),
        Err(ConfigError::NotPositive { field: "curve.step" })
    );

    let mut c = SceneConfig::default();
    c.curve.width = -1.0;
    assert_eq!(
        c.validate(),
        Err(ConfigError::NotPositive { field: "curve.width" })
    );

    for smoothing in [0.0, 1.5, f64::NAN] {
        let mut c = SceneConfig::default();
        c.curve.smoothing = smoothing;
        assert!(matches!(
            c.validate(),
            Err(ConfigError::SmoothingOutOfRange(_))
        ));
    }

    let mut c = SceneConfig::default();
    c.curve.smoothing = 1.0;
    assert!(c.validate().is_ok());

    let mut c = SceneConfig::default();
    c.curve.baseline = f64::INFINITY;
    assert_eq!(
        c.validate(),
        Err(ConfigError::BaselineNotFinite(f64::INFINITY))
    );
}
