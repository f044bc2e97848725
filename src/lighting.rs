//! Surface brightness and its mapping onto a glyph ramp.

use crate::sampler::SurfaceSample;
use crate::transform::RotationTrig;
use std::f64::consts::SQRT_2;

/// Largest value [`brightness`] can return.
pub const MAX_BRIGHTNESS: f64 = SQRT_2;

/// Dot product of the rotated surface normal with the light direction
/// `(0, 1, -1)`: up and toward the viewer.
///
/// Ranges over `[-√2, √2]`. Positive values face the light; anything `<= 0`
/// points away from it and is not drawn.
pub fn brightness(s: &SurfaceSample, r: &RotationTrig) -> f64 {
    s.cos_phi * s.cos_theta * r.sin_b - r.cos_a * s.cos_theta * s.sin_phi - r.sin_a * s.sin_theta
        + r.cos_b * (r.cos_a * s.sin_theta - s.cos_theta * r.sin_a * s.sin_phi)
}

/// Ordered glyphs from dimmest to brightest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LuminanceRamp {
    glyphs: Vec<char>,
    scale: usize,
}

impl LuminanceRamp {
    /// Returns `None` for an empty ramp.
    pub fn new(glyphs: &str) -> Option<Self> {
        let glyphs: Vec<char> = glyphs.chars().collect();
        if glyphs.is_empty() {
            return None;
        }
        // 8 for the default 12-glyph ramp
        let scale = ((glyphs.len() as f64 / MAX_BRIGHTNESS).floor() as usize).max(1);
        Some(Self { glyphs, scale })
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Bucket index for a lit sample, clamped to the ramp.
    ///
    /// `None` when the sample does not face the light.
    pub fn bucket(&self, brightness: f64) -> Option<usize> {
        if brightness.is_nan() || brightness <= 0.0 {
            return None;
        }
        let index = (brightness * self.scale as f64) as usize;
        Some(index.min(self.glyphs.len() - 1))
    }

    pub fn glyph(&self, brightness: f64) -> Option<char> {
        self.bucket(brightness).map(|i| self.glyphs[i])
    }
}

impl Default for LuminanceRamp {
    fn default() -> Self {
        Self {
            glyphs: crate::config::DEFAULT_RAMP.chars().collect(),
            scale: 8,
        }
    }
}
