//! Per-frame rendering pipeline.
//!
//! A [`RenderContext`] owns everything a frame needs: the fixed projection
//! parameters, the sampling grid, the luminance ramp, the rotation state and
//! the frame store. Rendering a frame resets the store, sweeps the grid and
//! composites every lit sample.

use crate::compositor::{composite, Composite};
use crate::config::{AppConfig, ConfigError};
use crate::frame::FrameStore;
use crate::lighting::{brightness, LuminanceRamp};
use crate::sampler::SamplingGrid;
use crate::transform::{Projector, Rotation};

/// Counters for one rendered frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub samples: usize,
    /// Samples dropped because they sat at or behind the viewer.
    pub behind_viewer: usize,
    /// Samples facing away from the light.
    pub unlit: usize,
    pub out_of_bounds: usize,
    pub occluded: usize,
    pub drawn: usize,
}

pub struct RenderContext {
    projector: Projector,
    grid: SamplingGrid,
    ramp: LuminanceRamp,
    rotation: Rotation,
    frame: FrameStore,
}

impl RenderContext {
    pub fn new(
        projector: Projector,
        grid: SamplingGrid,
        ramp: LuminanceRamp,
        rotation: Rotation,
        width: usize,
        height: usize,
    ) -> Self {
        Self {
            projector,
            grid,
            ramp,
            rotation,
            frame: FrameStore::new(width, height),
        }
    }

    /// Build a context from a validated configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let ramp = LuminanceRamp::new(&config.ramp)
            .ok_or_else(|| ConfigError::Validation("ramp must not be empty".to_string()))?;
        let grid = SamplingGrid::new(config.sampling.theta_step, config.sampling.phi_step);

        tracing::debug!(
            width = config.screen.width,
            height = config.screen.height,
            samples_per_frame = grid.len(),
            screen_scale = config.screen_scale(),
            ramp_len = ramp.len(),
            "Render context created"
        );

        Ok(Self::new(
            Projector::from_config(config),
            grid,
            ramp,
            Rotation::new(config.animation.start_a, config.animation.start_b),
            config.screen.width,
            config.screen.height,
        ))
    }

    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    pub fn set_rotation(&mut self, rotation: Rotation) {
        self.rotation = rotation;
    }

    pub fn advance(&mut self, da: f64, db: f64) {
        self.rotation.advance(da, db);
    }

    pub fn frame(&self) -> &FrameStore {
        &self.frame
    }

    pub fn grid(&self) -> &SamplingGrid {
        &self.grid
    }

    pub fn ramp(&self) -> &LuminanceRamp {
        &self.ramp
    }

    /// Render the current rotation into the frame store.
    pub fn render_frame(&mut self) -> FrameStats {
        self.frame.reset();

        // precompute sines and cosines of A and B
        let trig = self.rotation.trig();
        let mut stats = FrameStats::default();

        for sample in self.grid.samples() {
            stats.samples += 1;

            let Some(projected) = self.projector.project(&sample, &trig) else {
                stats.behind_viewer += 1;
                continue;
            };

            let Some(glyph) = self.ramp.glyph(brightness(&sample, &trig)) else {
                stats.unlit += 1;
                continue;
            };

            match composite(&mut self.frame, projected.x, projected.y, projected.ooz, glyph) {
                Composite::Drawn => stats.drawn += 1,
                Composite::Occluded => stats.occluded += 1,
                Composite::OutOfBounds => stats.out_of_bounds += 1,
            }
        }

        tracing::trace!(
            a = self.rotation.a,
            b = self.rotation.b,
            samples = stats.samples,
            drawn = stats.drawn,
            occluded = stats.occluded,
            unlit = stats.unlit,
            out_of_bounds = stats.out_of_bounds,
            behind_viewer = stats.behind_viewer,
            "Frame rendered"
        );

        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_account_for_every_sample() {
        let mut ctx = RenderContext::from_config(&AppConfig::default()).unwrap();
        let stats = ctx.render_frame();
        assert_eq!(stats.samples, ctx.grid().len());
        assert_eq!(
            stats.samples,
            stats.behind_viewer + stats.unlit + stats.out_of_bounds + stats.occluded + stats.drawn
        );
        assert_eq!(stats.behind_viewer, 0);
        assert!(stats.drawn >= ctx.frame().drawn());
    }

    #[test]
    fn test_from_config_rejects_invalid() {
        let mut config = AppConfig::default();
        config.torus.viewer_distance = 2.5;
        assert!(RenderContext::from_config(&config).is_err());
    }

    #[test]
    fn test_render_resets_previous_frame() {
        let mut config = AppConfig::default();
        config.sampling.theta_step = 0.3;
        config.sampling.phi_step = 0.1;
        let mut ctx = RenderContext::from_config(&config).unwrap();

        ctx.render_frame();
        let first = ctx.frame().clone();

        ctx.advance(1.0, 0.5);
        ctx.render_frame();
        ctx.set_rotation(Rotation::default());
        ctx.render_frame();

        assert_eq!(ctx.frame(), &first);
    }

    #[test]
    fn test_start_angles_from_config() {
        let mut config = AppConfig::default();
        config.animation.start_a = 1.0;
        config.animation.start_b = 2.0;
        let ctx = RenderContext::from_config(&config).unwrap();
        assert_eq!(ctx.rotation(), Rotation::new(1.0, 2.0));
    }
}
