//! Sky gradient: near-black at the top through deep blue to a pale horizon.
//! The top stops redden with storm severity; everything else is static.

use super::{drawable, FrameState, RenderError};
use crate::draw::gradient::Gradient;
use crate::draw::shapes::fill_rows_gradient;
use crate::draw::color::Rgba;
use crate::surface::Surface;

pub fn draw(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let height = surface.height();
    let storm_r = (frame.storm * 40.0).round();
    let grad = Gradient::new(vec![
        (0.00, Rgba::rgb(1.0 + storm_r, 3.0 + storm_r / 4.0, 15.0)),
        (0.07, Rgba::rgb(7.0 + storm_r, 12.0, 30.0)),
        (0.16, Rgba::hex(0x0b2050)),
        (0.28, Rgba::hex(0x0d4a9e)),
        (0.42, Rgba::hex(0x1668c4)),
        (0.57, Rgba::hex(0x2e8fd8)),
        (0.70, Rgba::hex(0x5ab5e8)),
        (0.83, Rgba::hex(0x98d4f2)),
        (0.93, Rgba::hex(0xc8e9f8)),
        (1.00, Rgba::hex(0xe8f5fb)),
    ]);
    fill_rows_gradient(surface, 0, height, &grad);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::StarGeometry;

    fn frame(storm: f32) -> FrameState<'static> {
        FrameState {
            t: 0.0,
            storm,
            flare: 0.0,
            event_phase: 0.0,
            star: StarGeometry::for_viewport(64.0, 64.0),
            wind: &[],
        }
    }

    #[test]
    fn top_reddens_with_storm() {
        let mut calm = Surface::new(16, 32);
        draw(&mut calm, &frame(0.0)).unwrap();
        let mut stormy = Surface::new(16, 32);
        draw(&mut stormy, &frame(1.0)).unwrap();
        let calm_r = calm.pixel(8, 0).unwrap().r;
        let storm_r = stormy.pixel(8, 0).unwrap().r;
        assert!(storm_r > calm_r, "storm must redden the zenith");
    }

    #[test]
    fn empty_surface_is_a_fault() {
        let mut s = Surface::new(0, 10);
        assert_eq!(draw(&mut s, &frame(0.0)), Err(RenderError::EmptySurface));
    }
}
