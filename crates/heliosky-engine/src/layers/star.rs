//! Star body: seven nested radial halos, an inner corona, and the disc with
//! an off-center highlight. Every channel warms and brightens with flare
//! severity.

use super::{drawable, FrameState, RenderError};
use crate::draw::color::Rgba;
use crate::draw::gradient::Gradient;
use crate::draw::shapes::{fill_disc_offset, fill_radial_gradient};
use crate::surface::Surface;
use glam::Vec2;

/// Outer halos plus the inner corona. Drawn widest-first so the tighter,
/// brighter shells blend over the faint outer spread.
pub fn draw_halo(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let center = frame.star.center;
    let r = frame.star.radius;
    let flare = frame.flare;

    for gi in (1..=7).rev() {
        let spread = r * (1.0 + gi as f32 * (0.75 + flare * 0.3));
        let a = (0.032 + flare * 0.02) / gi as f32;
        let grad = Gradient::new(vec![
            (0.0, Rgba::rgba(255.0, 215.0 - flare * 30.0, 60.0, (a * 5.0).min(1.0))),
            (0.4, Rgba::rgba(255.0, 160.0 - flare * 20.0, 20.0, a * 2.0)),
            (1.0, Rgba::rgba(255.0, 80.0, 0.0, 0.0)),
        ]);
        fill_radial_gradient(surface, center, r * 0.4, spread, &grad);
    }

    let corona_r = r * (2.2 + flare * 0.5);
    let corona = Gradient::new(vec![
        (0.0, Rgba::rgba(255.0, 240.0 - flare * 40.0, 120.0, 0.55 + flare * 0.2)),
        (0.4, Rgba::rgba(255.0, 180.0 - flare * 30.0, 40.0, 0.25 + flare * 0.1)),
        (1.0, Rgba::rgba(255.0, 100.0, 0.0, 0.0)),
    ]);
    fill_radial_gradient(surface, center, r * 0.8, corona_r, &corona);
    Ok(())
}

/// The solid disc with its off-center highlight.
pub fn draw_disc(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let center = frame.star.center;
    let r = frame.star.radius;
    let flare = frame.flare;
    let grad = Gradient::new(vec![
        (0.0, Rgba::hex(0xfffef0)),
        (0.35, Rgba::rgb(255.0, 248.0 - flare * 20.0, 200.0 - flare * 30.0)),
        (0.7, Rgba::rgb(255.0, 220.0 - flare * 30.0, 40.0 - flare * 5.0)),
        (1.0, Rgba::rgb(255.0, 150.0 - flare * 30.0, 0.0)),
    ]);
    let highlight = center - Vec2::splat(r * 0.25);
    fill_disc_offset(surface, center, r, highlight, &grad);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layers::StarGeometry;

    fn frame(flare: f32) -> FrameState<'static> {
        FrameState {
            t: 0.0,
            storm: 0.0,
            flare,
            event_phase: 0.0,
            star: StarGeometry::for_viewport(200.0, 200.0),
            wind: &[],
        }
    }

    #[test]
    fn disc_center_is_opaque_white() {
        let mut s = Surface::new(200, 200);
        draw_disc(&mut s, &frame(0.0)).unwrap();
        let g = StarGeometry::for_viewport(200.0, 200.0);
        let p = s.pixel(g.center.x as i32, g.center.y as i32).unwrap();
        assert!(p.r > 240 && p.g > 200, "disc core must be bright: {:?}", p);
    }

    #[test]
    fn halo_brightens_with_flare() {
        let sample = |flare: f32| {
            let mut s = Surface::new(200, 200);
            draw_halo(&mut s, &frame(flare)).unwrap();
            let g = StarGeometry::for_viewport(200.0, 200.0);
            s.pixel((g.center.x - g.radius * 2.0) as i32, g.center.y as i32)
                .unwrap()
                .a
        };
        assert!(sample(1.0) > sample(0.0), "flare must widen and brighten the halo");
    }
}
