//! Spinning ASCII torus.
//!
//! Each frame sweeps a parametric grid over the torus, rotates and projects
//! every sample, shades it against a fixed light and keeps the nearest lit
//! sample per character cell.

pub mod animation;
pub mod compositor;
pub mod config;
pub mod frame;
pub mod lighting;
pub mod presenter;
pub mod renderer;
pub mod sampler;
pub mod transform;

pub use animation::{Driver, RunSummary};
pub use config::{load_config, AppConfig, ConfigError};
pub use frame::FrameStore;
pub use presenter::{Presenter, TerminalPresenter, TextPresenter};
pub use renderer::{FrameStats, RenderContext};
pub use transform::Rotation;
