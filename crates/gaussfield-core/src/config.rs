use crate::constants::{
    CONSTRAINED_VIEWPORT_WIDTH, MAX_POINTS_CONSTRAINED, MAX_POINTS_FULL,
    SPAWN_INTERVAL_CONSTRAINED_MS, SPAWN_INTERVAL_FULL_MS, STAR_COUNT_CONSTRAINED,
    STAR_COUNT_FULL,
};
use crate::curve::CurveGeometry;
use crate::particles::Lifecycle;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("unknown device class {0:?} (expected \"constrained\" or \"full\")")]
    UnknownDeviceClass(String),
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("entry ({entry} ms) plus exit ({exit} ms) exceed the lifetime ({lifetime} ms)")]
    PhasesExceedLifetime { entry: f64, exit: f64, lifetime: f64 },
    #[error("smoothing factor {0} outside (0, 1]")]
    SmoothingOutOfRange(f64),
    #[error("curve baseline {0} is not finite")]
    BaselineNotFinite(f64),
}

/// Rough performance class of the host device.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeviceClass {
    /// Phones, tablets and narrow viewports.
    Constrained,
    #[default]
    Full,
}

impl DeviceClass {
    /// Classify from the viewport width alone.
    pub fn from_viewport_width(width: f64) -> Self {
        if width < CONSTRAINED_VIEWPORT_WIDTH {
            DeviceClass::Constrained
        } else {
            DeviceClass::Full
        }
    }

    /// Classify from a mobile user-agent hint and the viewport width.
    pub fn detect(mobile_user_agent: bool, viewport_width: f64) -> Self {
        if mobile_user_agent {
            DeviceClass::Constrained
        } else {
            Self::from_viewport_width(viewport_width)
        }
    }

    pub fn is_constrained(self) -> bool {
        self == DeviceClass::Constrained
    }

    pub fn star_count(self) -> usize {
        match self {
            DeviceClass::Constrained => STAR_COUNT_CONSTRAINED,
            DeviceClass::Full => STAR_COUNT_FULL,
        }
    }

    pub fn max_points(self) -> usize {
        match self {
            DeviceClass::Constrained => MAX_POINTS_CONSTRAINED,
            DeviceClass::Full => MAX_POINTS_FULL,
        }
    }

    pub fn spawn_interval_ms(self) -> u32 {
        match self {
            DeviceClass::Constrained => SPAWN_INTERVAL_CONSTRAINED_MS,
            DeviceClass::Full => SPAWN_INTERVAL_FULL_MS,
        }
    }
}

/// What is known about the host besides its viewport width.
///
/// The user agent never changes after load and an explicit page override
/// pins the class for the page's lifetime; only the width is re-read on
/// every resize.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DeviceHints {
    pub mobile_user_agent: bool,
    pub device_override: Option<DeviceClass>,
}

impl DeviceHints {
    pub fn resolve(&self, viewport_width: f64) -> DeviceClass {
        self.device_override
            .unwrap_or_else(|| DeviceClass::detect(self.mobile_user_agent, viewport_width))
    }
}

impl FromStr for DeviceClass {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "constrained" | "mobile" => Ok(DeviceClass::Constrained),
            "full" | "desktop" => Ok(DeviceClass::Full),
            other => Err(ConfigError::UnknownDeviceClass(other.to_string())),
        }
    }
}

impl fmt::Display for DeviceClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DeviceClass::Constrained => "constrained",
            DeviceClass::Full => "full",
        })
    }
}

/// Tunables for one animated scene.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub device: DeviceClass,
    pub max_points: usize,
    pub spawn_interval_ms: u32,
    pub star_count: usize,
    pub lifecycle: Lifecycle,
    pub curve: CurveGeometry,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::for_device(DeviceClass::default())
    }
}

impl SceneConfig {
    pub fn for_device(device: DeviceClass) -> Self {
        Self {
            device,
            max_points: device.max_points(),
            spawn_interval_ms: device.spawn_interval_ms(),
            star_count: device.star_count(),
            lifecycle: Lifecycle::default(),
            curve: CurveGeometry::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_points == 0 {
            return Err(ConfigError::NotPositive { field: "max_points" });
        }
        if self.spawn_interval_ms == 0 {
            return Err(ConfigError::NotPositive {
                field: "spawn_interval_ms",
            });
        }
        let life = &self.lifecycle;
        if [life.entry, life.exit, life.lifetime]
            .iter()
            .any(|v| v.is_nan() || *v <= 0.0)
        {
            return Err(ConfigError::NotPositive { field: "lifecycle" });
        }
        if life.entry + life.exit > life.lifetime {
            return Err(ConfigError::PhasesExceedLifetime {
                entry: life.entry,
                exit: life.exit,
                lifetime: life.lifetime,
            });
        }
        let curve = &self.curve;
        if curve.width.is_nan() || curve.width <= 0.0 {
            return Err(ConfigError::NotPositive { field: "curve.width" });
        }
        if curve.step.is_nan() || curve.step <= 0.0 {
            return Err(ConfigError::NotPositive { field: "curve.step" });
        }
        if !(curve.smoothing > 0.0 && curve.smoothing <= 1.0) {
            return Err(ConfigError::SmoothingOutOfRange(curve.smoothing));
        }
        if !curve.baseline.is_finite() {
            return Err(ConfigError::BaselineNotFinite(curve.baseline));
        }
        Ok(())
    }
}
