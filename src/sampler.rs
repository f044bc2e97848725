//! Parametric sampling of the torus surface.
//!
//! theta goes around the cross-sectional circle of the torus, phi goes
//! around its center of revolution. Both sweep `[0, 2π)`.

use std::f64::consts::TAU;

/// One point on the torus surface, identified by its two angles.
///
/// The sines and cosines are computed once here and reused by both the
/// projector and the lighting evaluator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub theta: f64,
    pub phi: f64,
    pub cos_theta: f64,
    pub sin_theta: f64,
    pub cos_phi: f64,
    pub sin_phi: f64,
}

impl SurfaceSample {
    pub fn new(theta: f64, phi: f64) -> Self {
        Self {
            theta,
            phi,
            cos_theta: theta.cos(),
            sin_theta: theta.sin(),
            cos_phi: phi.cos(),
            sin_phi: phi.sin(),
        }
    }
}

/// Sampling density over the `2π × 2π` parameter domain.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingGrid {
    theta_step: f64,
    phi_step: f64,
    theta_trig: Vec<(f64, f64)>,
    phi_trig: Vec<(f64, f64)>,
}

impl SamplingGrid {
    /// Both steps must be positive and finite; `AppConfig::validate` checks this.
    pub fn new(theta_step: f64, phi_step: f64) -> Self {
        debug_assert!(theta_step > 0.0 && phi_step > 0.0);
        Self {
            theta_step,
            phi_step,
            theta_trig: angle_table(theta_step),
            phi_trig: angle_table(phi_step),
        }
    }

    pub fn theta_count(&self) -> usize {
        self.theta_trig.len()
    }

    pub fn phi_count(&self) -> usize {
        self.phi_trig.len()
    }

    /// Total number of samples one sweep yields.
    pub fn len(&self) -> usize {
        self.theta_count() * self.phi_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Lazily enumerate every sample, theta-major. Calling this again restarts
    /// the sweep.
    pub fn samples(&self) -> impl Iterator<Item = SurfaceSample> + '_ {
        self.theta_trig
            .iter()
            .enumerate()
            .flat_map(move |(i, &(cos_theta, sin_theta))| {
                let theta = i as f64 * self.theta_step;
                self.phi_trig
                    .iter()
                    .enumerate()
                    .map(move |(j, &(cos_phi, sin_phi))| SurfaceSample {
                        theta,
                        phi: j as f64 * self.phi_step,
                        cos_theta,
                        sin_theta,
                        cos_phi,
                        sin_phi,
                    })
            })
    }
}

/// Number of steps that fit in `[0, 2π)`.
pub fn step_count(step: f64) -> usize {
    (TAU / step).ceil() as usize
}

fn angle_table(step: f64) -> Vec<(f64, f64)> {
    (0..step_count(step))
        .map(|i| {
            let angle = i as f64 * step;
            (angle.cos(), angle.sin())
        })
        .collect()
}
