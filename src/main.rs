use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use ascii_donut::{load_config, AppConfig, Driver, TerminalPresenter, TextPresenter};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "trace"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Error => write!(f, "error"),
        }
    }
}

#[derive(Parser)]
#[command(name = "ascii-donut")]
#[command(version)]
#[command(about = "Spinning ASCII torus for the terminal")]
struct Cli {
    /// Path to a YAML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override screen width in characters
    #[arg(long)]
    width: Option<usize>,

    /// Override screen height in characters
    #[arg(long)]
    height: Option<usize>,

    /// Stop after this many frames
    #[arg(short = 'n', long)]
    frames: Option<u64>,

    /// Print frames as plain text instead of driving the terminal
    #[arg(long)]
    plain: bool,

    /// Set logging level (trace, debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<LogLevel>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level_filter = if let Some(level) = cli.log_level {
        level.to_string()
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
            .to_string()
    };

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&level_filter))
        .with_writer(io::stderr)
        .init();

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {:?}", path);
            load_config(path).with_context(|| format!("loading {}", path.display()))?
        }
        None => AppConfig::default(),
    };

    if let Some(width) = cli.width {
        config.screen.width = width;
    }
    if let Some(height) = cli.height {
        config.screen.height = height;
    }

    let mut driver = Driver::from_config(&config)
        .context("invalid configuration")?
        .with_frame_limit(cli.frames);

    let summary = if cli.plain {
        let mut presenter = TextPresenter::new(io::stdout().lock());
        driver.run(&mut presenter)
    } else {
        let mut presenter =
            TerminalPresenter::new(io::stdout()).context("failed to initialize terminal")?;
        presenter.check_fit(config.screen.width, config.screen.height);
        driver.run(&mut presenter)
    }
    .context("presenting frames")?;

    tracing::info!(frames = summary.frames, "Done");

    Ok(())
}
