//! Binary entrypoint for the photo timeline.
//!
//! Loads the configuration and manifest, then drives the page from stdin
//! commands until Ctrl-C or end of input.

use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use photo_timeline::config::Configuration;
use photo_timeline::events::PageCommand;
use photo_timeline::page::TimelinePage;
use photo_timeline::tasks;
use photo_timeline::timeline;

#[derive(Debug, Parser)]
#[command(name = "photo-timeline", version, about = "Photo timeline slideshow")]
struct Cli {
    /// Path to YAML config file
    #[arg(short, long, value_name = "FILE", default_value = "config.yaml")]
    config: PathBuf,

    /// Override the timeline manifest path from the config
    #[arg(long, value_name = "FILE")]
    timeline: Option<PathBuf>,

    /// Deterministic shuffle seed for slideshow sessions
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,

    /// Start the slideshow immediately
    #[arg(long)]
    autostart: bool,

    /// Increase log verbosity (repeatable)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbosity: u8) -> Result<()> {
    let level = match verbosity {
        0 => Level::INFO,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let filter = EnvFilter::from_default_env().add_directive(
        format!("photo_timeline={level}")
            .parse()
            .context("building log filter")?,
    );
    fmt().with_env_filter(filter).with_target(true).init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let mut cfg = if cli.config.exists() {
        Configuration::from_yaml_file(&cli.config)
            .with_context(|| format!("loading config from {}", cli.config.display()))?
    } else {
        warn!(path = %cli.config.display(), "config file not found; using defaults");
        Configuration::default()
    };
    if let Some(path) = cli.timeline {
        cfg.timeline_path = path;
    }
    if cli.seed.is_some() {
        cfg.shuffle_seed = cli.seed;
    }
    let cfg = cfg.validated().context("validating configuration")?;
    info!(
        timeline = %cfg.timeline_path.display(),
        advance = %humantime::format_duration(cfg.slideshow.advance),
        "configuration loaded"
    );

    let grid = timeline::load_grid(&cfg.timeline_path, &cfg.images)
        .with_context(|| format!("loading timeline from {}", cfg.timeline_path.display()))?;
    let page = TimelinePage::new(grid, &cfg);

    let (page_tx, page_rx) = mpsc::channel::<PageCommand>(32);
    let cancel = CancellationToken::new();

    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if let Err(err) = tokio::signal::ctrl_c().await {
                warn!("ctrl-c handler failed: {err}");
            }
            cancel.cancel();
        });
    }

    // Detached: a read blocked on stdin must not hold up shutdown.
    tasks::keyboard::spawn_reader(BufReader::new(io::stdin()), page_tx.clone(), cancel.clone())
        .context("spawning keyboard reader")?;

    if cli.autostart {
        page_tx
            .send(PageCommand::StartSlideshow)
            .await
            .context("page task unavailable")?;
    }
    drop(page_tx);

    let page = tasks::page::run(page, page_rx, cancel.clone()).await?;
    cancel.cancel();
    info!(
        step = page.slideshow().step(),
        selected = page.selection().len(),
        "shutdown complete"
    );
    Ok(())
}
