use clap::Parser;
use env_logger::Env;
use image::ImageReader;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;
use std::time::Instant;

use platewatch::{CaptureSession, ExportSnapshot, ScanPipeline};

#[derive(Parser)]
#[command(name = "platewatch")]
#[command(about = "Overlay simulated license-plate detections on a camera feed")]
struct Cli {
    /// Scan this image headlessly instead of opening the window
    #[arg(value_name = "IMAGE")]
    image_path: Option<PathBuf>,

    /// Number of simulated detections to produce (image mode)
    #[arg(short = 'n', long, default_value_t = 3)]
    count: u32,

    /// Seed the random generators for reproducible output (image mode)
    #[arg(long)]
    seed: Option<u64>,

    /// Write detection history and statistics as JSON
    #[arg(long, value_name = "PATH")]
    export: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    info!("Starting platewatch");

    let args = Cli::parse();
    match args.image_path.clone() {
        Some(path) => run_headless(path, &args),
        None => launch_gui(),
    }
}

#[cfg(feature = "gui")]
fn launch_gui() -> anyhow::Result<()> {
    platewatch::gui::run()?;
    Ok(())
}

#[cfg(not(feature = "gui"))]
fn launch_gui() -> anyhow::Result<()> {
    anyhow::bail!("Built without the gui feature; pass an image path to scan instead")
}

fn run_headless(path: PathBuf, args: &Cli) -> anyhow::Result<()> {
    if args.verbose {
        println!("Loading image: {:?}", path);
    }

    // Load image
    let img = ImageReader::open(&path)?
        .decode()
        .map_err(|e| anyhow::anyhow!("Failed to decode image: {}", e))?;

    if args.verbose {
        println!("Image loaded: {}x{}\n", img.width(), img.height());
    }

    let pipeline = ScanPipeline::new().with_verbose(args.verbose);
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    // Drive the same session lifecycle the window uses
    let mut session = CaptureSession::new();
    session.start()?;
    for _ in 0..args.count {
        session.begin_scan()?;
        let started = Instant::now();
        let detection = pipeline.scan_frame(&img, &mut rng);
        let latency_ms = started.elapsed().as_secs_f32() * 1000.0;
        session.complete_scan(detection, latency_ms)?;
        session.clear_overlay();
    }
    session.stop();

    println!("\n=== Plate Detection Results ===");
    println!("Total detections: {}", session.stats().detections);

    if session.stats().detections > 0 {
        println!("\nDetected plates:");
        for detection in session.history() {
            println!(
                "  {} at ({}, {}) - confidence: {:.1}%",
                detection.plate, detection.region.x, detection.region.y, detection.confidence
            );
        }
        println!(
            "\nAverage confidence: {:.1}%  Last latency: {:.2} ms",
            session.stats().avg_confidence,
            session.stats().last_latency_ms
        );
    }

    if let Some(export_path) = &args.export {
        ExportSnapshot::from_session(&session).write_to(&export_path)?;
        println!("Exported snapshot to {}", export_path.display());
    }

    Ok(())
}
