//! Shockwave rings: concentric expanding annuli. Each ring runs its own
//! staggered copy of the event phase, so the pulses repeat continuously and
//! quicken with storm severity.

use super::{drawable, FrameState, RenderError};
use crate::core::intensity::scaled_count;
use crate::draw::color::Rgba;
use crate::draw::gradient::Gradient;
use crate::draw::shapes::fill_radial_gradient;
use crate::surface::Surface;

/// Phase offset between successive rings.
pub const RING_STAGGER: f32 = 0.33;

/// Per-ring phase in [0, 1): the shared event phase, staggered by index.
pub fn ring_phase(event_phase: f32, index: usize) -> f32 {
    (event_phase + index as f32 * RING_STAGGER).fract()
}

pub fn draw(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let storm = frame.storm;
    let r = frame.star.radius;
    let count = scaled_count(2, 2.0, storm);
    for ri in 0..count {
        let p = ring_phase(frame.event_phase, ri);
        let ring_r = r * (1.8 + p * (5.0 + storm * 4.0));
        let alpha = (1.0 - p) * (0.22 + storm * 0.15);
        let grad = Gradient::new(vec![
            (0.0, Rgba::rgba(255.0, 160.0, 40.0, 0.0)),
            (0.5, Rgba::rgba(255.0, 140.0 - storm * 40.0, 30.0, alpha)),
            (1.0, Rgba::rgba(255.0, 80.0, 0.0, 0.0)),
        ]);
        fill_radial_gradient(surface, frame.star.center, ring_r * 0.9, ring_r * 1.1, &grad);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ring_phases_are_staggered_and_bounded() {
        for ri in 0..4 {
            let p = ring_phase(0.9, ri);
            assert!((0.0..1.0).contains(&p));
        }
        assert!((ring_phase(0.5, 1) - 0.83).abs() < 1e-5);
        assert!((ring_phase(0.9, 1) - 0.23).abs() < 1e-5);
    }
}
