//! Top-down view of an elevation source around the camera.

use procgen::{ColourRamp, ElevationSource};
use terrain_core::{Grid2, Rgb};

/// Square window into the terrain, in sample coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub left: i32,
    pub top: i32,
    pub side: u32,
}

impl Viewport {
    /// Window of `side` samples centred on `camera`. Near the origin the
    /// window stops at 0 instead of reaching into negative coordinates; past the
    /// far edge it keeps going and those samples read as elevation 0.
    pub fn centred_on(camera: (i32, i32), side: u32) -> Self {
        let half = (side / 2) as i32;
        Self {
            left: camera.0.saturating_sub(half).max(0),
            top: camera.1.saturating_sub(half).max(0),
            side,
        }
    }
}

/// RGB pixels, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pixels: Grid2<Rgb>,
}

impl Frame {
    pub fn width(&self) -> usize {
        self.pixels.width()
    }

    pub fn height(&self) -> usize {
        self.pixels.height()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb> {
        self.pixels.get(x, y).copied()
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, Rgb> {
        self.pixels.rows()
    }

    /// Packed `RGBRGB...` bytes.
    pub fn to_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.pixels.as_slice())
    }

    /// Nearest-neighbour shrink to at most `columns` pixels wide, keeping the aspect ratio.
    pub fn downsample(&self, columns: u32) -> Frame {
        let columns = (columns as usize).clamp(1, self.width().max(1));
        if columns >= self.width() {
            return self.clone();
        }
        let rows = (self.height() * columns / self.width()).max(1);
        let pixels = Grid2::from_fn(columns, rows, |x, y| {
            let sx = x * self.width() / columns;
            let sy = y * self.height() / rows;
            self.pixels[(sx, sy)]
        });
        Frame { pixels }
    }
}

/// Elevations inside `viewport`, row-major.
pub fn sample_viewport<S: ElevationSource + ?Sized>(source: &S, viewport: &Viewport) -> Grid2<f32> {
    let side = viewport.side as usize;
    Grid2::from_fn(side, side, |x, y| {
        source.elevation_at(
            viewport.left.saturating_add(x as i32),
            viewport.top.saturating_add(y as i32),
        )
    })
}

/// Colour every elevation through `ramp`.
pub fn colourize(elevations: &Grid2<f32>, ramp: &ColourRamp) -> Frame {
    let pixels = Grid2::from_fn(elevations.width(), elevations.height(), |x, y| {
        ramp.lookup(elevations[(x, y)])
    });
    Frame { pixels }
}

/// Samples per ramp band, lowest band first.
pub fn band_histogram(elevations: &Grid2<f32>, ramp: &ColourRamp) -> Vec<usize> {
    let mut counts = vec![0; ramp.breakpoints().len() + 1];
    for &e in elevations.iter() {
        counts[ramp.band_of(e)] += 1;
    }
    counts
}
