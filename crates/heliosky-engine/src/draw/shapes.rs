//! Shape rasterizers: gradient row fills, radial fills, wedges, glow strokes,
//! point stamps, and dashed guide lines. Everything blends source-over onto
//! the surface and clips at the frame edges.

use crate::draw::color::Rgba;
use crate::draw::gradient::Gradient;
use crate::surface::Surface;
use glam::Vec2;
use std::f32::consts::{PI, TAU};

/// Fill rows `y0..y1` with a vertical gradient sampled per row.
pub fn fill_rows_gradient(surface: &mut Surface, y0: u32, y1: u32, grad: &Gradient) {
    let y1 = y1.min(surface.height());
    if y0 >= y1 {
        return;
    }
    let span = (y1 - y0 - 1).max(1) as f32;
    for y in y0..y1 {
        let color = grad.sample((y - y0) as f32 / span);
        for x in 0..surface.width() {
            surface.blend_pixel(x as i32, y as i32, color);
        }
    }
}

/// Fill a disc of radius `r1` with a radial gradient running from `r0` out to
/// `r1` (distances inside `r0` sample the first stop).
pub fn fill_radial_gradient(surface: &mut Surface, center: Vec2, r0: f32, r1: f32, grad: &Gradient) {
    if r1 <= 0.0 {
        return;
    }
    let x_min = ((center.x - r1).floor() as i32).max(0);
    let x_max = ((center.x + r1).ceil() as i32).min(surface.width() as i32 - 1);
    let y_min = ((center.y - r1).floor() as i32).max(0);
    let y_max = ((center.y + r1).ceil() as i32).min(surface.height() as i32 - 1);
    let span = (r1 - r0).max(1e-3);
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let d = Vec2::new(x as f32, y as f32).distance(center);
            if d > r1 {
                continue;
            }
            let t = ((d - r0) / span).clamp(0.0, 1.0);
            surface.blend_pixel(x, y, grad.sample(t));
        }
    }
}

/// Fill a disc whose gradient is anchored at an off-center highlight point.
pub fn fill_disc_offset(
    surface: &mut Surface,
    center: Vec2,
    radius: f32,
    highlight: Vec2,
    grad: &Gradient,
) {
    if radius <= 0.0 {
        return;
    }
    let x_min = ((center.x - radius).floor() as i32).max(0);
    let x_max = ((center.x + radius).ceil() as i32).min(surface.width() as i32 - 1);
    let y_min = ((center.y - radius).floor() as i32).max(0);
    let y_max = ((center.y + radius).ceil() as i32).min(surface.height() as i32 - 1);
    let reach = radius + highlight.distance(center);
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let p = Vec2::new(x as f32, y as f32);
            if p.distance(center) > radius {
                continue;
            }
            let t = (p.distance(highlight) / reach).clamp(0.0, 1.0);
            surface.blend_pixel(x, y, grad.sample(t));
        }
    }
}

/// Smallest signed angular difference between two angles.
pub fn angular_difference(a: f32, b: f32) -> f32 {
    (a - b + PI).rem_euclid(TAU) - PI
}

/// Fill a conical wedge: apex at `center`, axis `angle`, angular half-width
/// `half_spread`, extent `length`. The gradient runs along the axis.
pub fn fill_wedge(
    surface: &mut Surface,
    center: Vec2,
    angle: f32,
    half_spread: f32,
    length: f32,
    grad: &Gradient,
) {
    if length <= 0.0 || half_spread <= 0.0 {
        return;
    }
    let x_min = ((center.x - length).floor() as i32).max(0);
    let x_max = ((center.x + length).ceil() as i32).min(surface.width() as i32 - 1);
    let y_min = ((center.y - length).floor() as i32).max(0);
    let y_max = ((center.y + length).ceil() as i32).min(surface.height() as i32 - 1);
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let rel = Vec2::new(x as f32, y as f32) - center;
            let d = rel.length();
            if d > length || d < 1e-3 {
                continue;
            }
            if angular_difference(rel.y.atan2(rel.x), angle).abs() > half_spread {
                continue;
            }
            surface.blend_pixel(x, y, grad.sample(d / length));
        }
    }
}

/// Stamp a filled disc with a soft half-pixel edge.
pub fn stamp_point(surface: &mut Surface, pos: Vec2, radius: f32, color: Rgba) {
    if radius <= 0.0 || color.a <= 0.0 {
        return;
    }
    let x_min = (pos.x - radius).floor() as i32;
    let x_max = (pos.x + radius).ceil() as i32;
    let y_min = (pos.y - radius).floor() as i32;
    let y_max = (pos.y + radius).ceil() as i32;
    for y in y_min..=y_max {
        for x in x_min..=x_max {
            let d = Vec2::new(x as f32, y as f32).distance(pos);
            let coverage = (radius + 0.5 - d).clamp(0.0, 1.0);
            if coverage > 0.0 {
                surface.blend_pixel(x, y, color.with_alpha(color.a * coverage));
            }
        }
    }
}

/// Stroke a polyline with a solid core plus a soft outer glow, stamped at
/// roughly two-pixel spacing along each segment (the stamps are much wider
/// than the spacing, so the stroke stays continuous).
pub fn stroke_polyline_glow(
    surface: &mut Surface,
    points: &[Vec2],
    width: f32,
    color: Rgba,
    glow_radius: f32,
    glow_color: Rgba,
) {
    if points.len() < 2 {
        return;
    }
    let core = width * 0.5;
    let reach = core + glow_radius;
    for pair in points.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        let steps = (a.distance(b) / 2.0).ceil().max(1.0) as u32;
        for i in 0..=steps {
            let p = a.lerp(b, i as f32 / steps as f32);
            let x_min = (p.x - reach).floor() as i32;
            let x_max = (p.x + reach).ceil() as i32;
            let y_min = (p.y - reach).floor() as i32;
            let y_max = (p.y + reach).ceil() as i32;
            for y in y_min..=y_max {
                for x in x_min..=x_max {
                    let d = Vec2::new(x as f32, y as f32).distance(p);
                    if d <= core {
                        surface.blend_pixel(x, y, color);
                    } else if d <= reach && glow_radius > 0.0 {
                        let fade = 1.0 - (d - core) / glow_radius;
                        // Glow stamps overlap heavily along the stroke; keep
                        // each faint so the sum stays a halo, not a band.
                        surface.blend_pixel(x, y, glow_color.with_alpha(glow_color.a * fade * 0.08));
                    }
                }
            }
        }
    }
}

/// Evaluate a quadratic Bezier at `t`.
pub fn quad_bezier(p0: Vec2, cp: Vec2, p1: Vec2, t: f32) -> Vec2 {
    let u = 1.0 - t;
    p0 * (u * u) + cp * (2.0 * u * t) + p1 * (t * t)
}

/// Dashed horizontal guide line across the full width at row `y`.
pub fn dashed_hline(surface: &mut Surface, y: i32, color: Rgba, on: u32, off: u32) {
    let period = (on + off).max(1);
    for x in 0..surface.width() {
        if x % period < on {
            surface.blend_pixel(x as i32, y, color);
        }
    }
}
