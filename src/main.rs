//! Wavefield - headless FFT ocean simulator
//!
//! Runs the height-field simulation for a fixed number of ticks and reports
//! surface statistics; optionally dumps the last frame as a PNG.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use wavefield::cli::Args;
use wavefield::snapshot::write_heightmap_png;
use wavefield::{OceanError, OceanSurface};

fn run(args: &Args) -> Result<(), OceanError> {
    let config = args.simulation_config()?;
    if let Some(path) = &args.save_config {
        config.save_to_file(path)?;
        println!("Saved config to {}", path.display());
    }

    let mut ocean = OceanSurface::new(config)?;
    let size = ocean.size();
    println!(
        "Grid {}x{}, wind ({}, {}) m/s, A = {}, g = {}, seed {}",
        size.width,
        size.height,
        ocean.wind_speed_x(),
        ocean.wind_speed_z(),
        ocean.phillips_constant(),
        ocean.gravity(),
        ocean.seed()
    );

    let start = Instant::now();
    for frame in 0..args.frames {
        let time_s = frame as f32 * args.dt;
        let stats = ocean.update(time_s)?.stats();
        log::debug!(
            "frame {:>4} t={:.3}s min={:.4} max={:.4} var={:.6}",
            frame,
            time_s,
            stats.min,
            stats.max,
            stats.variance
        );
    }
    let elapsed = start.elapsed();

    let stats = ocean.heights().stats();
    println!(
        "Simulated {} frames in {:.2?} ({:.3} ms/frame)",
        args.frames,
        elapsed,
        elapsed.as_secs_f64() * 1000.0 / args.frames.max(1) as f64
    );
    println!(
        "Final heights: min {:.4}, max {:.4}, mean {:.5}, variance {:.6}",
        stats.min, stats.max, stats.mean, stats.variance
    );

    if let Some(path) = &args.png {
        write_heightmap_png(ocean.heights(), path)?;
        println!("Heightmap written to {}", path.display());
    }

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
