//! Aurora curtains: vertical strips spread across the frame whose horizontal
//! sway, hue, and opacity all respond to storm severity. The hue family
//! drifts away from green as storms intensify.

use super::{drawable, FrameState, RenderError};
use crate::core::intensity::scaled_count;
use crate::draw::color::Rgba;
use crate::draw::gradient::Gradient;
use crate::surface::Surface;

pub fn draw(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let storm = frame.storm;
    let count = scaled_count(4, 4.0, storm);
    let base_alpha = 0.08 + storm * 0.18;
    let column_h = h * (0.65 + storm * 0.2);
    let grad_len = h * (0.5 + storm * 0.2);

    for ai in 0..count {
        let curtain_x = w * (0.04 + ai as f32 * (0.9 / count as f32));
        let curtain_w = w * (0.14 + storm * 0.08);
        let hue = 155.0 + ai as f32 * 35.0 + (frame.t * 0.7 + ai as f64).sin() as f32 * 25.0
            - storm * 20.0;
        let grad = Gradient::new(vec![
            (0.0, Rgba::hsla(hue, 0.85, 0.65, 0.0)),
            (0.1, Rgba::hsla(hue, 0.95, 0.70, base_alpha)),
            (0.3, Rgba::hsla(hue, 0.90, 0.65, (base_alpha * 1.6).min(1.0))),
            (0.55, Rgba::hsla(hue, 0.80, 0.60, base_alpha * 0.7)),
            (1.0, Rgba::hsla(hue, 0.70, 0.55, 0.0)),
        ]);
        let mut x = curtain_x;
        while x < curtain_x + curtain_w {
            let nx = (x - curtain_x) / curtain_w;
            let wave = (nx as f64 * std::f64::consts::PI * 3.0
                + frame.t * (0.8 + storm * 0.5) as f64
                + ai as f64 * 1.2)
                .sin() as f32
                * (20.0 + storm * 30.0);
            let xi = (x + wave) as i32;
            let mut y = 0.0;
            while y < column_h {
                let color = grad.sample(y / grad_len);
                if color.a > 0.0 {
                    for dx in 0..3 {
                        surface.blend_pixel(xi + dx, y as i32, color);
                    }
                }
                y += 1.0;
            }
            x += 3.0;
        }
    }
    Ok(())
}
