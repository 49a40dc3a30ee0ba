//! Coronal-mass-ejection jets: three fixed-angle wedges that pulse in length
//! with the event phase and grow longer and hotter with storm severity.

use super::{drawable, FrameState, RenderError};
use crate::draw::color::Rgba;
use crate::draw::gradient::Gradient;
use crate::draw::shapes::fill_wedge;
use crate::surface::Surface;
use std::f32::consts::PI;

/// Jet axes, pointing down-left away from the star.
pub const JET_ANGLES: [f32; 3] = [PI + 0.45, PI + 0.65, PI + 0.85];

/// Jet extent in star radii for the given jet index.
pub fn jet_length(radius: f32, event_phase: f32, storm: f32, index: usize) -> f32 {
    radius * (3.5 + event_phase * (4.0 + storm * 6.0) - index as f32 * 0.4)
}

pub fn draw(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let storm = frame.storm;
    for (ji, &angle) in JET_ANGLES.iter().enumerate() {
        let len = jet_length(frame.star.radius, frame.event_phase, storm, ji);
        let spread = 0.18 - ji as f32 * 0.04;
        let jf = ji as f32;
        let grad = Gradient::new(vec![
            (0.0, Rgba::rgba(255.0, 200.0 - storm * 60.0, 60.0, 0.7 - jf * 0.15)),
            (0.25, Rgba::rgba(255.0, 130.0 - storm * 40.0, 20.0, 0.45 - jf * 0.1)),
            (0.6, Rgba::rgba(255.0, 60.0 - storm * 20.0, 0.0, 0.18 - jf * 0.05)),
            (1.0, Rgba::rgba(200.0, 20.0, 0.0, 0.0)),
        ]);
        fill_wedge(surface, frame.star.center, angle, spread, len, &grad);
    }
    Ok(())
}
