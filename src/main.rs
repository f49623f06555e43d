//! Magview - a terminal 3D plot view for magnetometer data.

use anyhow::{Context, Result};
use clap::Parser;
use magview::{AxisLabels, Config, PlotRenderer};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "magview")]
#[command(about = "A terminal 3D plot view for magnetometer data", long_about = None)]
struct Args {
    /// Rendering backend: terminal or svg (default: terminal when attached to one)
    #[arg(long)]
    backend: Option<String>,

    /// SVG output file, also used by the export key
    #[arg(long, default_value = "magnetometer.svg")]
    output: PathBuf,

    /// SVG width in pixels
    #[arg(long, default_value_t = 800)]
    width: u32,

    /// SVG height in pixels
    #[arg(long, default_value_t = 600)]
    height: u32,

    /// Enable logging to specified file
    #[arg(long)]
    log: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let log_file = std::fs::File::create(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(log_file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Magview");
    }

    let mut config = Config::default();
    config.render.svg_path = args.output.clone();
    config.render.svg_size = (args.width, args.height);

    let mut renderer = PlotRenderer::with_config(config);
    if let Some(name) = &args.backend {
        renderer.configure_backend(name)?;
    }

    let mut figure = renderer.create_figure();
    let axes = renderer
        .add_subplot_3d(&mut figure)
        .context("Unable to create the 3D plot")?;
    let labels = AxisLabels::magnetometer();
    renderer.set_labels(axes, &labels.title, &labels.x, &labels.y, &labels.z);

    renderer.show(figure)?;

    if renderer.backend().is_some_and(|backend| !backend.is_interactive()) {
        println!("Wrote {}", args.output.display());
    }

    tracing::info!("Magview exited");
    Ok(())
}
