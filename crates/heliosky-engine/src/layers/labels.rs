//! Band labels: static text annotations at each ionospheric band's height,
//! each with a dashed guide line across the frame.

use super::{drawable, FrameState, RenderError};
use crate::draw::color::Rgba;
use crate::draw::shapes::dashed_hline;
use crate::draw::text::{draw_text, text_width, GLYPH_HEIGHT};
use crate::surface::Surface;

/// Left inset of the label text and minimum clearance to the right edge.
const TEXT_MARGIN: i32 = 14;

pub const LABELS: [(f32, &str, [f32; 3]); 6] = [
    (0.05, "EXOSPHERE", [160.0, 100.0, 255.0]),
    (0.13, "THERMOSPHERE F2 ~300KM", [100.0, 60.0, 255.0]),
    (0.23, "THERMOSPHERE F1 ~180KM", [60.0, 120.0, 255.0]),
    (0.33, "MESOSPHERE E ~110KM", [20.0, 190.0, 215.0]),
    (0.44, "STRATOSPHERE ~50KM", [50.0, 170.0, 255.0]),
    (0.57, "TROPOSPHERE ~12KM", [90.0, 200.0, 235.0]),
];

pub fn draw(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let _ = frame;
    let h = surface.height() as f32;
    let w = surface.width() as i32;
    for (y_frac, label, [r, g, b]) in LABELS {
        let cy = (y_frac * h) as i32;
        // Skip text that would overflow the right edge; the guide line still
        // marks the band on narrow viewports.
        if TEXT_MARGIN + text_width(label) <= w {
            draw_text(surface, label, TEXT_MARGIN, cy - GLYPH_HEIGHT - 7, Rgba::rgba(r, g, b, 0.82));
        }
        dashed_hline(surface, cy, Rgba::rgba(r, g, b, 0.22), 3, 7);
    }
    Ok(())
}
