//! Rigid rotation and perspective projection of torus samples.

use crate::config::AppConfig;
use crate::sampler::SurfaceSample;

/// Current rotation angles. A spins around the x axis, B around the z axis.
///
/// The angles grow without bound; only their sines and cosines are used.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rotation {
    pub a: f64,
    pub b: f64,
}

impl Rotation {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn advance(&mut self, da: f64, db: f64) {
        self.a += da;
        self.b += db;
    }

    /// Precompute sines and cosines of A and B for one frame.
    pub fn trig(&self) -> RotationTrig {
        RotationTrig {
            cos_a: self.a.cos(),
            sin_a: self.a.sin(),
            cos_b: self.b.cos(),
            sin_b: self.b.sin(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationTrig {
    pub cos_a: f64,
    pub sin_a: f64,
    pub cos_b: f64,
    pub sin_b: f64,
}

/// A sample after rotation and projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Screen column; may lie outside the frame.
    pub x: i64,
    /// Screen row; may lie outside the frame.
    pub y: i64,
    /// "one over z", the perspective scale and the depth key.
    pub ooz: f64,
    /// Rotated point in view space, before the viewer offset is applied to z.
    pub point: [f64; 3],
}

/// Fixed surface and viewer parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Projector {
    /// R1
    minor_radius: f64,
    /// R2
    major_radius: f64,
    /// K2
    viewer_distance: f64,
    /// K1
    screen_scale: f64,
    center_x: f64,
    center_y: f64,
}

impl Projector {
    pub fn new(
        minor_radius: f64,
        major_radius: f64,
        viewer_distance: f64,
        screen_scale: f64,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            minor_radius,
            major_radius,
            viewer_distance,
            screen_scale,
            center_x: (width / 2) as f64,
            center_y: (height / 2) as f64,
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.torus.minor_radius,
            config.torus.major_radius,
            config.torus.viewer_distance,
            config.screen_scale(),
            config.screen.width,
            config.screen.height,
        )
    }

    /// Rotate and project one sample.
    ///
    /// Returns `None` when the rotated point does not lie strictly in front of
    /// the viewer, which only happens for configurations that place the viewer
    /// inside the torus.
    pub fn project(&self, s: &SurfaceSample, r: &RotationTrig) -> Option<Projection> {
        // the x,y coordinate of the circle, before revolving
        let cx = self.major_radius + self.minor_radius * s.cos_theta;
        let cy = self.minor_radius * s.sin_theta;

        let x = cx * (r.cos_b * s.cos_phi + r.sin_a * r.sin_b * s.sin_phi) - cy * r.cos_a * r.sin_b;
        let y = cx * (r.sin_b * s.cos_phi - r.sin_a * r.cos_b * s.sin_phi) + cy * r.cos_a * r.cos_b;
        let z = r.cos_a * cx * s.sin_phi + cy * r.sin_a;

        let depth = self.viewer_distance + z;
        if !(depth.is_finite() && depth > 0.0) {
            return None;
        }
        let ooz = 1.0 / depth;

        // y is negated: it goes up in 3D space but down on the screen
        let xp = (self.center_x + self.screen_scale * ooz * x).floor();
        let yp = (self.center_y - self.screen_scale * ooz * y).floor();

        Some(Projection {
            x: xp as i64,
            y: yp as i64,
            ooz,
            point: [x, y, z],
        })
    }
}
