//! Render configuration: torus geometry, screen size, sampling density,
//! animation pacing and the luminance ramp.

use crate::sampler::step_count;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Glyphs from dimmest to brightest.
pub const DEFAULT_RAMP: &str = ".,-~:;=!*#$@";

/// Upper bound on angle steps along either sampling axis.
pub const MAX_STEPS_PER_AXIS: usize = 1_000_000;

/// Upper bound on samples swept per frame.
pub const MAX_SAMPLES_PER_FRAME: usize = 10_000_000;

/// Upper bound on `width * height` of the frame store.
pub const MAX_SCREEN_CELLS: usize = 1 << 22;

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub torus: TorusConfig,
    #[serde(default)]
    pub screen: ScreenConfig,
    #[serde(default)]
    pub sampling: SamplingConfig,
    #[serde(default)]
    pub animation: AnimationConfig,
    #[serde(default = "default_ramp")]
    pub ramp: String,
}

/// Torus geometry and viewer placement
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct TorusConfig {
    /// Radius of the ring's cross-section (R1)
    pub minor_radius: f64,
    /// Radius of the circle the ring revolves around (R2)
    pub major_radius: f64,
    /// Distance from the viewer to the torus center (K2)
    pub viewer_distance: f64,
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            minor_radius: 1.0,
            major_radius: 2.0,
            viewer_distance: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScreenConfig {
    pub width: usize,
    pub height: usize,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 22,
        }
    }
}

/// Angular step sizes of the parametric grid
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SamplingConfig {
    pub theta_step: f64,
    pub phi_step: f64,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            theta_step: 0.07,
            phi_step: 0.02,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// Per-frame increment of rotation angle A
    pub a_step: f64,
    /// Per-frame increment of rotation angle B
    pub b_step: f64,
    pub frame_interval_ms: u64,
    pub start_a: f64,
    pub start_b: f64,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            a_step: 0.04,
            b_step: 0.02,
            frame_interval_ms: 30,
            start_a: 0.0,
            start_b: 0.0,
        }
    }
}

fn default_ramp() -> String {
    DEFAULT_RAMP.to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            torus: TorusConfig::default(),
            screen: ScreenConfig::default(),
            sampling: SamplingConfig::default(),
            animation: AnimationConfig::default(),
            ramp: default_ramp(),
        }
    }
}

impl AppConfig {
    /// Screen-scale factor (K1) chosen so the torus fills roughly 3/8 of the
    /// screen width.
    pub fn screen_scale(&self) -> f64 {
        let t = &self.torus;
        self.screen.width as f64 * t.viewer_distance * 3.0
            / (8.0 * (t.minor_radius + t.major_radius))
    }

    /// Check the configuration for values the renderer cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let t = &self.torus;
        positive("torus.minor_radius", t.minor_radius)?;
        positive("torus.major_radius", t.major_radius)?;
        positive("torus.viewer_distance", t.viewer_distance)?;

        // Every rotated point lies within R1 + R2 of the torus center, so this
        // keeps z = K2 + rotated_z strictly positive.
        let reach = t.minor_radius + t.major_radius;
        if t.viewer_distance <= reach {
            return Err(ConfigError::Validation(format!(
                "torus.viewer_distance ({}) must exceed minor_radius + major_radius ({})",
                t.viewer_distance, reach
            )));
        }

        if self.screen.width == 0 || self.screen.height == 0 {
            return Err(ConfigError::Validation(format!(
                "screen must be at least 1x1, got {}x{}",
                self.screen.width, self.screen.height
            )));
        }
        if self.screen.width > u16::MAX as usize || self.screen.height > u16::MAX as usize {
            return Err(ConfigError::Validation(format!(
                "screen {}x{} exceeds terminal limits",
                self.screen.width, self.screen.height
            )));
        }
        if self.screen.width.saturating_mul(self.screen.height) > MAX_SCREEN_CELLS {
            return Err(ConfigError::Validation(format!(
                "screen {}x{} exceeds {} cells",
                self.screen.width, self.screen.height, MAX_SCREEN_CELLS
            )));
        }

        positive("sampling.theta_step", self.sampling.theta_step)?;
        positive("sampling.phi_step", self.sampling.phi_step)?;
        let theta_steps = axis_steps("sampling.theta_step", self.sampling.theta_step)?;
        let phi_steps = axis_steps("sampling.phi_step", self.sampling.phi_step)?;
        if theta_steps.saturating_mul(phi_steps) > MAX_SAMPLES_PER_FRAME {
            return Err(ConfigError::Validation(format!(
                "sampling grid of {}x{} exceeds {} samples per frame",
                theta_steps, phi_steps, MAX_SAMPLES_PER_FRAME
            )));
        }

        let a = &self.animation;
        finite("animation.a_step", a.a_step)?;
        finite("animation.b_step", a.b_step)?;
        finite("animation.start_a", a.start_a)?;
        finite("animation.start_b", a.start_b)?;

        if self.ramp.is_empty() {
            return Err(ConfigError::Validation("ramp must not be empty".to_string()));
        }
        if let Some(bad) = self
            .ramp
            .chars()
            .find(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ConfigError::Validation(format!(
                "ramp glyph {:?} is not printable",
                bad
            )));
        }

        Ok(())
    }
}

fn positive(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{} must be a positive finite number, got {}",
            field, value
        )))
    }
}

fn axis_steps(field: &str, step: f64) -> Result<usize, ConfigError> {
    let steps = step_count(step);
    if steps > MAX_STEPS_PER_AXIS {
        return Err(ConfigError::Validation(format!(
            "{} of {} needs {} steps per sweep, limit is {}",
            field, step, steps, MAX_STEPS_PER_AXIS
        )));
    }
    Ok(steps)
}

fn finite(field: &str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{} must be finite, got {}",
            field, value
        )))
    }
}

/// Load configuration from a YAML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig, ConfigError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::NotFound(path.display().to_string()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;

    Ok(config)
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to read configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse configuration: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Configuration validation error: {0}")]
    Validation(String),
}
