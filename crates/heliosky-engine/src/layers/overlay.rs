//! Ambient overlays: a full-frame storm tint radiating from the star, and
//! the pale horizon glow across the bottom of the frame.

use super::{drawable, FrameState, RenderError};
use crate::draw::color::Rgba;
use crate::draw::gradient::Gradient;
use crate::draw::shapes::{fill_radial_gradient, fill_rows_gradient};
use crate::surface::Surface;
use glam::Vec2;

pub fn draw_storm_tint(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let w = surface.width() as f32;
    let h = surface.height() as f32;
    let storm = frame.storm;
    let grad = Gradient::new(vec![
        (0.0, Rgba::rgba(255.0, 140.0 - storm * 80.0, 20.0, 0.04 + storm * 0.12)),
        (0.35, Rgba::rgba(255.0, 80.0 - storm * 50.0, 10.0, 0.02 + storm * 0.07)),
        (0.7, Rgba::rgba(180.0, 20.0, 0.0, 0.01)),
        (1.0, Rgba::TRANSPARENT),
    ]);
    let origin = Vec2::new(frame.star.center.x, h * 0.12);
    fill_radial_gradient(surface, origin, frame.star.radius, w.max(h) * 1.5, &grad);
    Ok(())
}

pub fn draw_horizon_glow(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let _ = frame;
    let h = surface.height();
    let grad = Gradient::new(vec![
        (0.0, Rgba::rgba(200.0, 230.0, 255.0, 0.0)),
        (0.5, Rgba::rgba(220.0, 242.0, 255.0, 0.14)),
        (1.0, Rgba::rgba(255.0, 252.0, 245.0, 0.28)),
    ]);
    fill_rows_gradient(surface, (h as f32 * 0.72) as u32, h, &grad);
    Ok(())
}
