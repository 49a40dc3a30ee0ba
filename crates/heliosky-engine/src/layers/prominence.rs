//! Prominence arcs: quadratic loops anchored at two points on the star's
//! rim, bulging outward. Count, loop height, stroke width, and glow all grow
//! with storm severity.

use super::{drawable, FrameState, RenderError};
use crate::core::intensity::scaled_count;
use crate::draw::color::Rgba;
use crate::draw::shapes::{quad_bezier, stroke_polyline_glow};
use crate::surface::Surface;
use glam::Vec2;
use std::f64::consts::TAU;

const ARC_SAMPLES: usize = 24;

pub fn draw(surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
    drawable(surface)?;
    let center = frame.star.center;
    let r = frame.star.radius;
    let storm = frame.storm;
    let t = frame.t;
    let count = scaled_count(5, 4.0, storm);

    for pi in 0..count {
        let fi = pi as f32;
        let fd = pi as f64;
        // The base angle grows without bound; wrap in f64 before narrowing
        // so it keeps rotating at large phases.
        let base = ((fd / count as f64) * TAU + t * (0.12 + storm * 0.08) as f64)
            .rem_euclid(TAU) as f32;
        let anchor_r = r * (1.05 + (t * 0.9 + fd * 1.3).sin() as f32 * (0.1 + storm * 0.2));
        let arc_spread = 0.28 + (t * 0.6 + fd).sin() as f32 * 0.08;
        let p1 = center + Vec2::from_angle(base - arc_spread) * anchor_r;
        let p2 = center + Vec2::from_angle(base + arc_spread) * anchor_r;
        let loop_h = anchor_r * (0.55 + storm * 0.5 + (t * 0.7 + fd).sin() as f32 * 0.25);
        let cp = center + Vec2::from_angle(base) * (anchor_r + loop_h);

        let points: Vec<Vec2> = (0..=ARC_SAMPLES)
            .map(|i| quad_bezier(p1, cp, p2, i as f32 / ARC_SAMPLES as f32))
            .collect();
        let color = Rgba::rgba(
            255.0,
            80.0 + fi * 20.0 - storm * 30.0,
            fi * 8.0,
            0.5 + storm * 0.3,
        );
        let glow = Rgba::rgba(255.0, 100.0 - storm * 50.0, 0.0, 0.6);
        stroke_polyline_glow(
            surface,
            &points,
            2.5 + storm * 1.5,
            color,
            12.0 + storm * 8.0,
            glow,
        );
    }
    Ok(())
}
