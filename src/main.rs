use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use sixpack::client::WebSocketConnector;
use sixpack::config::PanelConfig;
use sixpack::core::TelemetryFrame;
use sixpack::engine::PanelRuntime;
use sixpack::render::HeadlessSurface;

#[derive(Parser, Debug)]
#[command(version, about = "six-pack flight instrument panel driven by streaming telemetry")]
struct Args {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Telemetry endpoint, overrides the configuration file
    #[arg(short, long)]
    endpoint: Option<String>,

    /// Show the demo frame until live telemetry arrives
    #[arg(long)]
    demo: bool,

    /// Close after this many render ticks
    #[arg(long)]
    ticks: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    if let Err(e) = run(args).await {
        error!("{:#}", e);
        return Err(e);
    }
    Ok(())
}

async fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => PanelConfig::load(path)?,
        None => PanelConfig::default(),
    };
    if let Some(endpoint) = args.endpoint {
        config.endpoint = endpoint;
    }

    let runtime = PanelRuntime::new(config)?;
    if args.demo {
        runtime.context().mailbox.publish(TelemetryFrame::demo());
    }

    let close_requested = Arc::new(AtomicBool::new(false));
    let mut surface = HeadlessSurface::new(&runtime.config().window, close_requested.clone())
        .context("Failed to create render surface")?;
    if let Some(limit) = args.ticks {
        surface = surface.with_frame_limit(limit);
    }

    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("close requested");
                close_requested.store(true, Ordering::Relaxed);
            }
            Err(e) => warn!("cannot listen for ctrl-c: {}", e),
        }
    });

    let summary = runtime.run(surface, WebSocketConnector::new()).await?;
    info!(ticks = summary.ticks, "panel closed");
    Ok(())
}
