//! Wind particle layer: draws the field snapshot as soft points whose alpha
//! follows the triangular life envelope and whose hue drifts with age and
//! storm severity.

use super::{drawable, FrameState, RenderError};
use crate::draw::color::Rgba;
use crate::draw::shapes::stamp_point;
use crate::surface::Surface;
use crate::systems::wind::WindParticle;

pub fn draw(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let storm = frame.storm;
    for p in frame.wind {
        let lr = p.life_fraction();
        let alpha = WindParticle::alpha_envelope(lr) * (0.6 + storm * 0.3);
        if alpha <= 0.0 {
            continue;
        }
        let hue = p.hue + lr * 25.0 + storm * 30.0;
        let color = Rgba::hsla(hue, 0.9, 0.72, alpha);
        stamp_point(surface, p.pos, p.radius * (1.0 - lr * 0.4), color);
    }
    Ok(())
}
