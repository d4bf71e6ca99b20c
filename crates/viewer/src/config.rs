//! Viewer configuration (terrain size, seed, camera, colour ramp). Loaded from terrain.ron at startup.

use procgen::{ColourRamp, Domain, TerrainError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use terrain_core::Rgb;

use crate::top_down::Viewport;

/// Largest terrain side the viewer will bake (one `f32` per sample).
pub const MAX_SIDE: u32 = 16_384;
/// Largest top-down viewport side.
pub const MAX_VIEW_SIDE: u32 = 4_096;

/// How elevations are produced for the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum ElevationMode {
    /// Bake the whole map once, normalized by its observed range.
    #[default]
    Baked,
    /// Evaluate per sample, normalized by a fixed raw range.
    FixedRange { low: f32, high: f32 },
}

/// Colour ramp as written in the config file. Colours are `0xRRGGBB`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RampConfig {
    #[serde(default)]
    pub min: f32,
    #[serde(default = "default_ramp_max")]
    pub max: f32,
    pub min_colour: u32,
    pub max_colour: u32,
    /// `(threshold, colour)` pairs, any order.
    #[serde(default)]
    pub breakpoints: Vec<(f32, u32)>,
}

fn default_ramp_max() -> f32 {
    1.0
}

impl Default for RampConfig {
    fn default() -> Self {
        let ramp = ColourRamp::terrain();
        Self {
            min: ramp.min(),
            max: ramp.max(),
            min_colour: ramp.min_colour().to_hex(),
            max_colour: ramp.max_colour().to_hex(),
            breakpoints: ramp
                .breakpoints()
                .iter()
                .map(|b| (b.threshold, b.colour.to_hex()))
                .collect(),
        }
    }
}

impl RampConfig {
    pub fn build(&self) -> Result<ColourRamp, TerrainError> {
        ColourRamp::with_breakpoints(
            self.min,
            Rgb::from_hex(self.min_colour),
            self.max,
            Rgb::from_hex(self.max_colour),
            self.breakpoints.iter().map(|&(t, hex)| (t, Rgb::from_hex(hex))),
        )
    }
}

/// Viewer settings. Loaded from `terrain.ron` in the current directory unless a path is given.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewerConfig {
    /// Terrain side in samples.
    #[serde(default = "default_side")]
    pub side: u32,
    /// Samples between gradient nodes. Must divide `side`.
    #[serde(default = "default_step")]
    pub step: u32,
    /// RNG seed. None = seed from entropy (the chosen seed is logged).
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default)]
    pub mode: ElevationMode,
    /// Camera position in samples. None = (side / 2, 3 * side / 4).
    #[serde(default)]
    pub camera: Option<(i32, i32)>,
    /// Side of the top-down viewport in samples.
    #[serde(default = "default_view_side")]
    pub view_side: u32,
    /// Terminal columns used for the preview.
    #[serde(default = "default_preview_columns")]
    pub preview_columns: u32,
    #[serde(default)]
    pub ramp: RampConfig,
}

fn default_side() -> u32 {
    2000
}
fn default_step() -> u32 {
    80
}
fn default_view_side() -> u32 {
    200
}
fn default_preview_columns() -> u32 {
    80
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            side: default_side(),
            step: default_step(),
            seed: None,
            mode: ElevationMode::default(),
            camera: None,
            view_side: default_view_side(),
            preview_columns: default_preview_columns(),
            ramp: RampConfig::default(),
        }
    }
}

impl ViewerConfig {
    /// Load config from `path`. If the file is missing or invalid, returns default config.
    pub fn load(path: &Path) -> Self {
        if let Ok(data) = std::fs::read_to_string(path) {
            match Self::from_ron(&data) {
                Ok(c) => return c,
                Err(e) => log::warn!("Invalid config at {:?}: {}, using defaults", path, e),
            }
        } else {
            log::debug!("No config at {:?}, using defaults", path);
        }
        Self::default()
    }

    pub fn from_ron(data: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str(data)
    }

    pub fn domain(&self) -> Result<Domain, TerrainError> {
        if self.side > MAX_SIDE {
            return Err(TerrainError::DomainTooLarge { side: self.side });
        }
        Domain::square(self.side, self.step)
    }

    /// Viewport centred on the camera, `view_side` samples across.
    pub fn viewport(&self) -> Result<Viewport, TerrainError> {
        if self.view_side > MAX_VIEW_SIDE {
            return Err(TerrainError::ViewportTooLarge {
                side: self.view_side,
                max: MAX_VIEW_SIDE,
            });
        }
        Ok(Viewport::centred_on(self.camera(), self.view_side))
    }

    pub fn camera(&self) -> (i32, i32) {
        self.camera.unwrap_or_else(|| {
            let side = self.side as i64;
            ((side / 2) as i32, (3 * side / 4) as i32)
        })
    }
}

pub fn default_config_path() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")).join("terrain.ron")
}
