//! terrain-viewer: generates a gradient-noise terrain and prints a coloured
//! top-down preview of the area around the camera.
//!
//! Usage: `terrain-viewer [CONFIG.ron]` (defaults to `./terrain.ron`).

mod config;
mod preview;
mod top_down;

use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use procgen::{ElevationMap, ElevationSource, FixedRangeElevation, GradientNoise};
use rand::prelude::*;

use config::{ElevationMode, ViewerConfig};
use top_down::{band_histogram, colourize, sample_viewport};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path);
    let config = ViewerConfig::load(&config_path);

    let domain = config.domain().context("invalid terrain domain")?;
    let ramp = config.ramp.build().context("invalid colour ramp")?;

    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::info!(
        "Generating {}x{} terrain (step {}, {} nodes per side), seed {}",
        domain.side(),
        domain.side(),
        domain.step(),
        domain.nodes_per_side(),
        seed
    );
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = GradientNoise::new(domain, &mut rng);

    let source: Box<dyn ElevationSource> = match config.mode {
        ElevationMode::Baked => Box::new(ElevationMap::from_noise(&noise)),
        ElevationMode::FixedRange { low, high } => Box::new(
            FixedRangeElevation::new(noise, low, high).context("invalid fixed elevation range")?,
        ),
    };

    let viewport = config.viewport().context("invalid viewport")?;
    log::info!(
        "Viewport {}x{} at ({}, {}), camera {:?}",
        viewport.side,
        viewport.side,
        viewport.left,
        viewport.top,
        config.camera()
    );

    let elevations = sample_viewport(source.as_ref(), &viewport);
    for (band, count) in band_histogram(&elevations, &ramp).iter().enumerate() {
        log::info!("  band {}: {} samples", band, count);
    }

    let frame = colourize(&elevations, &ramp).downsample(config.preview_columns);
    log::debug!(
        "Preview frame {}x{} ({} bytes)",
        frame.width(),
        frame.height(),
        frame.to_bytes().len()
    );
    let stdout = io::stdout();
    preview::write_ansi(&frame, &mut stdout.lock()).context("failed to write preview")?;

    Ok(())
}
