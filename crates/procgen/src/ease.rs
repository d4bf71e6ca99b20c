//! Interpolants shared by the noise evaluator and the colour ramp.

/// Cubic smoothstep `3t² - 2t³`.
///
/// ease(0) = 0, ease(0.5) = 0.5, ease(1) = 1, with zero slope at both ends, so
/// blends between neighbouring grid cells (or ramp bands) meet without creases.
#[inline]
pub fn ease(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// `a * (1 - w) + b * w`.
#[inline]
pub fn lerp(a: f32, b: f32, w: f32) -> f32 {
    (1.0 - w) * a + w * b
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ease_fixed_points() {
        assert_eq!(ease(0.0), 0.0);
        assert_eq!(ease(0.5), 0.5);
        assert_eq!(ease(1.0), 1.0);
    }

    #[test]
    fn ease_is_monotonic_on_unit_interval() {
        let mut prev = ease(0.0);
        for i in 1..=1000 {
            let v = ease(i as f32 / 1000.0);
            assert!(v >= prev, "ease dropped from {} to {} at step {}", prev, v, i);
            prev = v;
        }
    }

    #[test]
    fn ease_is_flat_at_the_ends() {
        let h = 1e-3;
        assert!((ease(h) - ease(0.0)) / h < 0.01);
        assert!((ease(1.0) - ease(1.0 - h)) / h < 0.01);
    }

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(-2.0, 3.0, 0.0), -2.0);
        assert_eq!(lerp(-2.0, 3.0, 1.0), 3.0);
        assert_eq!(lerp(0.0, 4.0, 0.25), 1.0);
    }
}
