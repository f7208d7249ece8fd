//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SwipeError};
use crate::gesture::DEFAULT_TRACE_CAPACITY;
use crate::input::InputMode;

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width
    pub width: f64,
    /// Window height
    pub height: f64,
    /// Whether the window should be fullscreen
    pub fullscreen: bool,
    /// Whether the window should be resizable
    pub resizable: bool,
    /// Whether the window should be decorated (has title bar, borders, etc.)
    pub decorated: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Swipe".to_string(),
            width: 800.0,
            height: 600.0,
            fullscreen: false,
            resizable: true,
            decorated: true,
        }
    }
}

/// Gesture recognition settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureSettings {
    /// Which input strategy to use
    pub input_mode: InputMode,
    /// Samples kept in the trace window
    pub trace_capacity: usize,
    /// Samples at the end of the trace compared against the whole trace
    pub flick_window: usize,
    /// Minimum dot product between the normalized vectors for a flick
    pub flick_threshold: f32,
}

impl Default for GestureSettings {
    fn default() -> Self {
        Self {
            input_mode: InputMode::Auto,
            trace_capacity: DEFAULT_TRACE_CAPACITY,
            flick_window: 5,
            flick_threshold: 0.9,
        }
    }
}

/// Post-flick inertial motion settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct InertiaSettings {
    /// Multiplier on the per-tick displacement
    pub scale: f32,
    /// Per-tick decay factor of the stored flick vector
    pub decay: f32,
    /// Magnitude at or below which motion stops
    pub epsilon: f32,
}

impl Default for InertiaSettings {
    fn default() -> Self {
        Self {
            scale: 1.0,
            decay: 0.99,
            epsilon: 0.001,
        }
    }
}

/// Camera projection settings
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraSettings {
    /// Distance from the camera to the ground plane
    pub focus_distance: f32,
    /// Vertical field of view in degrees
    pub fov_y_degrees: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            focus_distance: 10.0,
            fov_y_degrees: 60.0,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Window configuration
    pub window: WindowConfig,
    pub gesture: GestureSettings,
    pub inertia: InertiaSettings,
    pub camera: CameraSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            profile: "release".to_string(),
            window: WindowConfig::default(),
            gesture: GestureSettings::default(),
            inertia: InertiaSettings::default(),
            camera: CameraSettings::default(),
        }
    }
}

impl AppConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded from config files in the following order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix APP_ (e.g., APP_GESTURE__FLICK_WINDOW=8)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    ///
    /// Missing files and keys fall back to defaults.
    pub fn load(profile: &str) -> Result<Self> {
        let config_dir = Self::find_config_dir();

        let mut builder = Config::builder();

        if let Some(ref dir) = config_dir {
            let profile_path = dir.join(profile);
            builder = builder.add_source(File::from(profile_path.as_path()).required(false));
        } else {
            builder =
                builder.add_source(File::with_name(&format!("config/{}", profile)).required(false));
        }

        // Use __ as separator for nested fields (e.g., APP_WINDOW__WIDTH)
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        let config: Self = builder
            .set_override("profile", profile)?
            .build()?
            .try_deserialize()?;

        config.validate()?;
        Ok(config)
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<std::path::PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = std::path::PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Rejects settings the gesture system cannot run with
    pub fn validate(&self) -> Result<()> {
        let gesture = &self.gesture;
        if gesture.trace_capacity == 0 {
            return Err(SwipeError::invalid("gesture.trace_capacity", "must be at least 1"));
        }
        if gesture.flick_window == 0 {
            return Err(SwipeError::invalid("gesture.flick_window", "must be at least 1"));
        }
        if !(-1.0..=1.0).contains(&gesture.flick_threshold) {
            return Err(SwipeError::invalid(
                "gesture.flick_threshold",
                format!("{} is outside [-1, 1]", gesture.flick_threshold),
            ));
        }

        let inertia = &self.inertia;
        if !(inertia.decay > 0.0 && inertia.decay < 1.0) {
            return Err(SwipeError::invalid(
                "inertia.decay",
                format!("{} is outside (0, 1)", inertia.decay),
            ));
        }
        if inertia.epsilon < 0.0 {
            return Err(SwipeError::invalid("inertia.epsilon", "must not be negative"));
        }

        let camera = &self.camera;
        if camera.focus_distance <= 0.0 {
            return Err(SwipeError::invalid("camera.focus_distance", "must be positive"));
        }
        if !(camera.fov_y_degrees > 0.0 && camera.fov_y_degrees < 180.0) {
            return Err(SwipeError::invalid(
                "camera.fov_y_degrees",
                format!("{} is outside (0, 180)", camera.fov_y_degrees),
            ));
        }

        Ok(())
    }
}
