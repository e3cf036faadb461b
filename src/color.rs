//! HSV color conversion and vertex color ramps.

/// Convert an HSV color to RGB.
///
/// All components are in `[0, 1]`; hue wraps, so `h = 1.25` is the same as
/// `h = 0.25`.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let h = h.rem_euclid(1.0) * 6.0;
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    match sector as u32 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// A flat RGBA array sweeping the hue circle once across `n` vertices, at
/// full saturation and value.
pub fn rainbow_rgba(n: usize) -> Vec<f32> {
    let mut colors = Vec::with_capacity(n * 4);
    for i in 0..n {
        let [r, g, b] = hsv_to_rgb(i as f32 / n as f32, 1.0, 1.0);
        colors.extend_from_slice(&[r, g, b, 1.0]);
    }
    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_rgb_eq(actual: [f32; 3], expected: [f32; 3]) {
        for (a, e) in actual.iter().zip(expected.iter()) {
            assert!((a - e).abs() < 1e-6, "{:?} != {:?}", actual, expected);
        }
    }

    #[test]
    fn test_primary_hues() {
        assert_rgb_eq(hsv_to_rgb(0.0, 1.0, 1.0), [1.0, 0.0, 0.0]); // red
        assert_rgb_eq(hsv_to_rgb(1.0 / 3.0, 1.0, 1.0), [0.0, 1.0, 0.0]); // green
        assert_rgb_eq(hsv_to_rgb(2.0 / 3.0, 1.0, 1.0), [0.0, 0.0, 1.0]); // blue
    }

    #[test]
    fn test_zero_saturation_is_gray() {
        assert_rgb_eq(hsv_to_rgb(0.42, 0.0, 0.5), [0.5, 0.5, 0.5]);
    }

    #[test]
    fn test_hue_wraps() {
        assert_rgb_eq(hsv_to_rgb(1.25, 1.0, 1.0), hsv_to_rgb(0.25, 1.0, 1.0));
    }

    #[test]
    fn test_rainbow_shape() {
        let colors = rainbow_rgba(12);
        assert_eq!(colors.len(), 48);
        // First vertex is pure red at full alpha
        assert_rgb_eq([colors[0], colors[1], colors[2]], [1.0, 0.0, 0.0]);
        assert_eq!(colors[3], 1.0);
    }
}
