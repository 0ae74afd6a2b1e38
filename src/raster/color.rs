// src/raster/color.rs

//! RGB <-> YUV conversion with studio-swing BT.601 coefficients.
//!
//! Luma is offset by 16 and chroma centered on 128, so a full-black pixel
//! lands at (16, 128, 128) rather than (0, 128, 128). The inverse rounds
//! to the nearest integer and clamps each channel to [0, 255]; the pair
//! round-trips within one code value per channel for all 8-bit inputs.

/// Converts an 8-bit RGB triple to studio-swing YUV.
pub fn rgb_to_yuv(r: u8, g: u8, b: u8) -> (f64, f64, f64) {
    let (r, g, b) = (r as f64, g as f64, b as f64);
    let y = 0.257 * r + 0.504 * g + 0.098 * b + 16.0;
    let u = -0.148 * r - 0.291 * g + 0.439 * b + 128.0;
    let v = 0.439 * r - 0.368 * g - 0.071 * b + 128.0;
    (y, u, v)
}

/// Converts studio-swing YUV back to 8-bit RGB, rounding to the nearest
/// integer and clamping each channel to [0, 255].
pub fn yuv_to_rgb(y: f64, u: f64, v: f64) -> (u8, u8, u8) {
    let r = 1.164 * (y - 16.0) + 1.596 * (v - 128.0);
    let g = 1.164 * (y - 16.0) - 0.813 * (v - 128.0) - 0.391 * (u - 128.0);
    let b = 1.164 * (y - 16.0) + 2.018 * (u - 128.0);
    (clamp_channel(r), clamp_channel(g), clamp_channel(b))
}

fn clamp_channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_triple_maps_into_studio_range() {
        let (y, u, v) = rgb_to_yuv(100, 150, 200);
        assert!((y - 136.9).abs() < 1e-9);
        assert!((u - 157.35).abs() < 1e-9);
        assert!((v - 102.5).abs() < 1e-9);
    }

    #[test]
    fn black_and_white_hit_the_studio_endpoints() {
        let (y, u, v) = rgb_to_yuv(0, 0, 0);
        assert!((y - 16.0).abs() < 1e-9);
        assert!((u - 128.0).abs() < 1e-9);
        assert!((v - 128.0).abs() < 1e-9);

        let (y, _, _) = rgb_to_yuv(255, 255, 255);
        // 0.257 + 0.504 + 0.098 sums to 0.859, so white lands near 235.
        assert!((y - 235.045).abs() < 1e-9);
    }

    #[test]
    fn round_trip_is_within_one_code_value() {
        for r in (0..=255).step_by(5) {
            for g in (0..=255).step_by(5) {
                for b in (0..=255).step_by(5) {
                    let (y, u, v) = rgb_to_yuv(r as u8, g as u8, b as u8);
                    let (r2, g2, b2) = yuv_to_rgb(y, u, v);
                    assert!((r2 as i32 - r).abs() <= 1, "r: {r} -> {r2}");
                    assert!((g2 as i32 - g).abs() <= 1, "g: {g} -> {g2}");
                    assert!((b2 as i32 - b).abs() <= 1, "b: {b} -> {b2}");
                }
            }
        }
    }

    #[test]
    fn inverse_clamps_out_of_gamut_values() {
        // Chroma pushed past the representable gamut must saturate, not wrap.
        assert_eq!(yuv_to_rgb(16.0, 128.0, 255.0).0, 203);
        assert_eq!(yuv_to_rgb(235.0, 128.0, 255.0).0, 255);
        assert_eq!(yuv_to_rgb(16.0, 0.0, 128.0).2, 0);
    }
}
