//! Frame loop: render, present, advance, pace.

use crate::config::{AnimationConfig, AppConfig, ConfigError};
use crate::presenter::Presenter;
use crate::renderer::RenderContext;
use std::io;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub frames: u64,
    /// True when the presenter asked to stop before the frame limit.
    pub quit: bool,
}

pub struct Driver {
    context: RenderContext,
    a_step: f64,
    b_step: f64,
    frame_interval: Duration,
    frame_limit: Option<u64>,
}

impl Driver {
    pub fn new(context: RenderContext, animation: &AnimationConfig) -> Self {
        Self {
            context,
            a_step: animation.a_step,
            b_step: animation.b_step,
            frame_interval: Duration::from_millis(animation.frame_interval_ms),
            frame_limit: None,
        }
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, ConfigError> {
        let context = RenderContext::from_config(config)?;
        Ok(Self::new(context, &config.animation))
    }

    /// Stop after `frames` frames instead of running until the presenter quits.
    pub fn with_frame_limit(mut self, frames: Option<u64>) -> Self {
        self.frame_limit = frames;
        self
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn run<P: Presenter>(&mut self, presenter: &mut P) -> io::Result<RunSummary> {
        tracing::info!(
            frame_limit = ?self.frame_limit,
            interval_ms = self.frame_interval.as_millis() as u64,
            "Animation started"
        );

        presenter.clear()?;

        let mut frames = 0u64;
        let mut quit = false;
        while self.frame_limit.map_or(true, |limit| frames < limit) {
            let started = Instant::now();

            self.context.render_frame();
            presenter.present(self.context.frame())?;
            frames += 1;

            self.context.advance(self.a_step, self.b_step);

            let remaining = self.frame_interval.saturating_sub(started.elapsed());
            if presenter.poll_quit(remaining)? {
                quit = true;
                break;
            }
        }

        tracing::info!(frames, quit, "Animation stopped");

        Ok(RunSummary { frames, quit })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameStore;
    use crate::transform::Rotation;

    #[derive(Default)]
    struct Recorder {
        clears: usize,
        frames: Vec<String>,
        quit_after: Option<usize>,
    }

    impl Presenter for Recorder {
        fn clear(&mut self) -> io::Result<()> {
            self.clears += 1;
            Ok(())
        }

        fn present(&mut self, frame: &FrameStore) -> io::Result<()> {
            self.frames.push(frame.to_string());
            Ok(())
        }

        fn poll_quit(&mut self, _timeout: Duration) -> io::Result<bool> {
            Ok(self.quit_after.map_or(false, |n| self.frames.len() >= n))
        }
    }

    fn quick_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.sampling.theta_step = 0.3;
        config.sampling.phi_step = 0.1;
        config.animation.frame_interval_ms = 0;
        config
    }

    #[test]
    fn test_frame_limit() {
        let mut driver = Driver::from_config(&quick_config())
            .unwrap()
            .with_frame_limit(Some(3));
        let mut recorder = Recorder::default();

        let summary = driver.run(&mut recorder).unwrap();
        assert_eq!(summary, RunSummary { frames: 3, quit: false });
        assert_eq!(recorder.clears, 1);
        assert_eq!(recorder.frames.len(), 3);

        let rotation = driver.context().rotation();
        assert!((rotation.a - 0.12).abs() < 1e-12);
        assert!((rotation.b - 0.06).abs() < 1e-12);
    }

    #[test]
    fn test_presenter_quit_stops_unbounded_run() {
        let mut driver = Driver::from_config(&quick_config()).unwrap();
        let mut recorder = Recorder {
            quit_after: Some(2),
            ..Default::default()
        };

        let summary = driver.run(&mut recorder).unwrap();
        assert_eq!(summary, RunSummary { frames: 2, quit: true });
    }

    #[test]
    fn test_frames_change_as_angles_advance() {
        let mut config = quick_config();
        config.animation.a_step = 0.5;
        let mut driver = Driver::from_config(&config)
            .unwrap()
            .with_frame_limit(Some(2));
        let mut recorder = Recorder::default();
        driver.run(&mut recorder).unwrap();
        assert_ne!(recorder.frames[0], recorder.frames[1]);
        assert_ne!(driver.context().rotation(), Rotation::default());
    }
}
