//! Ionospheric bands: six translucent ribbons at prescribed fractional
//! heights, rippling with a two-term sine wave that grows with storm
//! severity. Each band also strokes its wavy center line.

use super::{drawable, FrameState, RenderError};
use crate::draw::color::Rgba;
use crate::surface::Surface;

/// (y fraction, rgb, base alpha, storm alpha gain, thickness fraction of height)
pub const BANDS: [(f32, [f32; 3], f32, f32, f32); 6] = [
    (0.05, [160.0, 100.0, 255.0], 0.14, 0.10, 0.04),
    (0.13, [100.0, 60.0, 255.0], 0.20, 0.12, 0.06),
    (0.23, [60.0, 120.0, 255.0], 0.17, 0.08, 0.055),
    (0.33, [20.0, 190.0, 215.0], 0.16, 0.07, 0.055),
    (0.44, [50.0, 170.0, 255.0], 0.10, 0.05, 0.08),
    (0.57, [90.0, 200.0, 235.0], 0.08, 0.04, 0.10),
];

/// Vertical displacement of a band at column `x`. The primary term speeds up
/// and grows with the storm; the secondary term is a fixed counter-ripple.
/// Trig runs in double precision so the wave keeps moving at large phases.
pub fn ripple(x: f32, t: f64, storm: f32) -> f32 {
    let amplitude = (7.0 + 14.0 * storm) as f64;
    let primary = (x as f64 * 0.005 + t * (0.6 + storm) as f64).sin() * amplitude;
    let counter = (x as f64 * 0.011 - t * 0.4).sin() * 4.0;
    (primary + counter) as f32
}

pub fn draw(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let h = surface.height() as f32;
    let w = surface.width();
    for (y_frac, [r, g, b], alpha_base, alpha_gain, thick_frac) in BANDS {
        let cy = y_frac * h;
        let thick = thick_frac * h;
        let alpha = alpha_base + frame.storm * alpha_gain;
        for x in 0..w {
            let wave = ripple(x as f32, frame.t, frame.storm);
            let top = cy - thick * 0.6 + wave;
            let span = thick * 1.2;
            let y0 = top.floor() as i32;
            let y1 = (top + span).ceil() as i32;
            for y in y0..=y1 {
                let ty = (y as f32 - top) / span;
                // Fade in over the top 35%, hold, fade out over the bottom 35%
                let edge = if ty < 0.35 {
                    ty / 0.35
                } else if ty > 0.65 {
                    (1.0 - ty) / 0.35
                } else {
                    1.0
                };
                let a = alpha * edge.clamp(0.0, 1.0);
                if a > 0.0 {
                    surface.blend_pixel(x as i32, y, Rgba::rgba(r, g, b, a));
                }
            }
            // Center line at 2.2x the band alpha
            let line_a = (alpha * 2.2).min(1.0);
            surface.blend_pixel(x as i32, (cy + wave).round() as i32, Rgba::rgba(r, g, b, line_a));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ripple_amplitude_grows_with_storm() {
        // Peak-to-peak over one slow cycle
        let extent = |storm: f32| {
            let mut lo = f32::INFINITY;
            let mut hi = f32::NEG_INFINITY;
            for x in 0..2000 {
                let v = ripple(x as f32, 0.0, storm);
                lo = lo.min(v);
                hi = hi.max(v);
            }
            hi - lo
        };
        assert!(extent(1.0) > extent(0.0) + 20.0);
    }

    #[test]
    fn ripple_keeps_moving_at_large_phase() {
        // One tick must still displace the wave after days of accumulation,
        // where single-precision trig arguments would have stalled.
        let t = 131072.0_f64;
        let a = ripple(100.0, t, 0.5);
        let b = ripple(100.0, t + 0.007, 0.5);
        assert!((a - b).abs() > 1e-3, "wave frozen: {} vs {}", a, b);
    }

    #[test]
    fn band_heights_are_ascending() {
        for pair in BANDS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
    }
}
