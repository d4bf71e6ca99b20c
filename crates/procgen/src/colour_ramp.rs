//! Elevation → colour mapping through sorted, smoothly blended breakpoints.

use terrain_core::{Rgb, TerrainError};

use crate::ease::ease;

/// A colour pinned to an elevation threshold inside the ramp.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breakpoint {
    pub threshold: f32,
    pub colour: Rgb,
}

/// Colour ramp over `[min, max]`.
///
/// The bounds carry their own colours; breakpoints sit strictly between them
/// and are kept sorted by threshold as they are inserted. Populate the ramp
/// first, then query it.
#[derive(Debug, Clone, PartialEq)]
pub struct ColourRamp {
    min: f32,
    max: f32,
    min_colour: Rgb,
    max_colour: Rgb,
    breakpoints: Vec<Breakpoint>,
}

impl ColourRamp {
    /// Empty ramp blending `min_colour` at `min` into `max_colour` at `max`.
    pub fn new(min: f32, min_colour: Rgb, max: f32, max_colour: Rgb) -> Result<Self, TerrainError> {
        if !(min.is_finite() && max.is_finite() && min < max) {
            return Err(TerrainError::InvalidRampBounds { min, max });
        }
        Ok(Self {
            min,
            max,
            min_colour,
            max_colour,
            breakpoints: Vec::new(),
        })
    }

    /// Ramp populated from `(threshold, colour)` pairs, in any order.
    pub fn with_breakpoints(
        min: f32,
        min_colour: Rgb,
        max: f32,
        max_colour: Rgb,
        breakpoints: impl IntoIterator<Item = (f32, Rgb)>,
    ) -> Result<Self, TerrainError> {
        let mut ramp = Self::new(min, min_colour, max, max_colour)?;
        for (threshold, colour) in breakpoints {
            ramp.insert(threshold, colour)?;
        }
        Ok(ramp)
    }

    /// Deep water through grass, earth and rock to snow over [0, 1].
    pub fn terrain() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            min_colour: Rgb::from_hex(0x000080),
            max_colour: Rgb::from_hex(0xFFFFFF),
            breakpoints: vec![
                Breakpoint {
                    threshold: 0.3,
                    colour: Rgb::from_hex(0x228B22),
                },
                Breakpoint {
                    threshold: 0.85,
                    colour: Rgb::from_hex(0xC19A6B),
                },
                Breakpoint {
                    threshold: 0.95,
                    colour: Rgb::from_hex(0xC8C8C8),
                },
            ],
        }
    }

    /// Black at 0 to white at 1.
    pub fn greyscale() -> Self {
        Self {
            min: 0.0,
            max: 1.0,
            min_colour: Rgb::BLACK,
            max_colour: Rgb::WHITE,
            breakpoints: Vec::new(),
        }
    }

    /// Add a breakpoint, keeping thresholds sorted.
    ///
    /// The threshold must lie strictly inside `(min, max)` and must not repeat
    /// an existing one.
    pub fn insert(&mut self, threshold: f32, colour: Rgb) -> Result<(), TerrainError> {
        if !(threshold > self.min && threshold < self.max) {
            return Err(TerrainError::ThresholdOutOfRange {
                threshold,
                min: self.min,
                max: self.max,
            });
        }
        // Index of the first breakpoint whose threshold exceeds the new one.
        let idx = self.breakpoints.partition_point(|b| b.threshold <= threshold);
        if idx > 0 && self.breakpoints[idx - 1].threshold == threshold {
            return Err(TerrainError::DuplicateThreshold { threshold });
        }
        self.breakpoints.insert(idx, Breakpoint { threshold, colour });
        Ok(())
    }

    /// Colour for `elevation`.
    ///
    /// Finds the pair `lower < elevation <= upper` (the bounds stand in when no
    /// breakpoint brackets that side) and blends their colours by
    /// `ease((elevation - lower) / (upper - lower))`. Elevations outside the
    /// ramp saturate at the boundary colours.
    pub fn lookup(&self, elevation: f32) -> Rgb {
        if elevation.is_nan() {
            return self.min_colour;
        }
        let idx = self.breakpoints.partition_point(|b| b.threshold < elevation);

        let (lower, lower_colour) = match idx.checked_sub(1) {
            Some(i) => (self.breakpoints[i].threshold, self.breakpoints[i].colour),
            None => (self.min, self.min_colour),
        };
        let (upper, upper_colour) = match self.breakpoints.get(idx) {
            Some(b) => (b.threshold, b.colour),
            None => (self.max, self.max_colour),
        };

        let t = ((elevation - lower) / (upper - lower)).clamp(0.0, 1.0);
        lower_colour.blend(upper_colour, ease(t))
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn min_colour(&self) -> Rgb {
        self.min_colour
    }

    pub fn max_colour(&self) -> Rgb {
        self.max_colour
    }

    /// Breakpoints in ascending threshold order.
    pub fn breakpoints(&self) -> &[Breakpoint] {
        &self.breakpoints
    }

    pub fn thresholds(&self) -> Vec<f32> {
        self.breakpoints.iter().map(|b| b.threshold).collect()
    }

    /// Index of the band `elevation` falls in: 0 up to the first breakpoint,
    /// `breakpoints().len()` above the last one.
    pub fn band_of(&self, elevation: f32) -> usize {
        self.breakpoints.partition_point(|b| b.threshold < elevation)
    }
}

impl Default for ColourRamp {
    fn default() -> Self {
        Self::terrain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAVY: Rgb = Rgb::from_hex(0x000080);
    const GREEN: Rgb = Rgb::from_hex(0x228B22);
    const GREY: Rgb = Rgb::from_hex(0xC8C8C8);
    const BROWN: Rgb = Rgb::from_hex(0xC19A6B);

    fn navy_green_white() -> ColourRamp {
        let mut ramp = ColourRamp::new(0.0, NAVY, 1.0, Rgb::WHITE).unwrap();
        ramp.insert(0.5, GREEN).unwrap();
        ramp
    }

    fn strictly_between(v: u8, a: u8, b: u8) -> bool {
        (a < v && v < b) || (b < v && v < a)
    }

    #[test]
    fn ramp_round_trip() {
        let ramp = navy_green_white();
        assert_eq!(ramp.lookup(0.0), NAVY);
        assert_eq!(ramp.lookup(1.0), Rgb::WHITE);
        assert_eq!(ramp.lookup(0.5), GREEN);

        let quarter = ramp.lookup(0.25);
        assert!(strictly_between(quarter.r, NAVY.r, GREEN.r), "{:?}", quarter);
        assert!(strictly_between(quarter.g, NAVY.g, GREEN.g), "{:?}", quarter);
        assert!(strictly_between(quarter.b, NAVY.b, GREEN.b), "{:?}", quarter);
    }

    #[test]
    fn insertion_keeps_thresholds_sorted() {
        let mut ramp = ColourRamp::new(0.0, NAVY, 1.0, Rgb::WHITE).unwrap();
        ramp.insert(0.85, GREY).unwrap();
        ramp.insert(0.3, BROWN).unwrap();
        ramp.insert(0.95, Rgb::WHITE).unwrap();
        assert_eq!(ramp.thresholds(), vec![0.3, 0.85, 0.95]);
        assert_eq!(ramp.breakpoints()[0].colour, BROWN);
        assert_eq!(ramp.breakpoints()[1].colour, GREY);
    }

    #[test]
    fn insert_rejects_thresholds_on_or_outside_bounds() {
        let mut ramp = ColourRamp::new(0.0, NAVY, 1.0, Rgb::WHITE).unwrap();
        for bad in [0.0, 1.0, -0.1, 1.5, f32::NAN] {
            assert!(
                matches!(
                    ramp.insert(bad, GREEN),
                    Err(TerrainError::ThresholdOutOfRange { .. })
                ),
                "{} should be rejected",
                bad
            );
        }
        assert!(ramp.breakpoints().is_empty());
    }

    #[test]
    fn insert_rejects_duplicates() {
        let mut ramp = navy_green_white();
        assert_eq!(
            ramp.insert(0.5, GREY),
            Err(TerrainError::DuplicateThreshold { threshold: 0.5 })
        );
        assert_eq!(ramp.breakpoints().len(), 1);
    }

    #[test]
    fn new_rejects_inverted_bounds() {
        assert_eq!(
            ColourRamp::new(1.0, NAVY, 0.0, Rgb::WHITE),
            Err(TerrainError::InvalidRampBounds { min: 1.0, max: 0.0 })
        );
        assert!(ColourRamp::new(0.5, NAVY, 0.5, Rgb::WHITE).is_err());
    }

    #[test]
    fn lookup_is_continuous_at_breakpoints() {
        let ramp = ColourRamp::terrain();
        for bp in ramp.breakpoints() {
            for eps in [1e-3_f32, 1e-4] {
                for e in [bp.threshold - eps, bp.threshold + eps] {
                    let c = ramp.lookup(e);
                    let close = |a: u8, b: u8| (a as i32 - b as i32).abs() <= 1;
                    assert!(
                        close(c.r, bp.colour.r) && close(c.g, bp.colour.g) && close(c.b, bp.colour.b),
                        "lookup({}) = {:?}, breakpoint colour {:?}",
                        e,
                        c,
                        bp.colour
                    );
                }
            }
            assert_eq!(ramp.lookup(bp.threshold), bp.colour);
        }
    }

    #[test]
    fn lookup_without_breakpoints_blends_bounds() {
        let ramp = ColourRamp::greyscale();
        assert_eq!(ramp.lookup(0.0), Rgb::BLACK);
        assert_eq!(ramp.lookup(0.5), Rgb::new(128, 128, 128));
        assert_eq!(ramp.lookup(1.0), Rgb::WHITE);
    }

    #[test]
    fn lookup_saturates_outside_bounds() {
        let ramp = navy_green_white();
        assert_eq!(ramp.lookup(-3.0), NAVY);
        assert_eq!(ramp.lookup(7.0), Rgb::WHITE);
        assert_eq!(ramp.lookup(f32::NAN), NAVY);
    }

    #[test]
    fn with_breakpoints_matches_terrain_preset() {
        let built = ColourRamp::with_breakpoints(
            0.0,
            NAVY,
            1.0,
            Rgb::WHITE,
            [(0.95, GREY), (0.3, GREEN), (0.85, BROWN)],
        )
        .unwrap();
        assert_eq!(built, ColourRamp::terrain());
    }

    #[test]
    fn band_of_counts_breakpoints_below() {
        let ramp = ColourRamp::terrain();
        assert_eq!(ramp.band_of(0.1), 0);
        assert_eq!(ramp.band_of(0.3), 0);
        assert_eq!(ramp.band_of(0.5), 1);
        assert_eq!(ramp.band_of(0.9), 2);
        assert_eq!(ramp.band_of(0.99), 3);
    }
}
