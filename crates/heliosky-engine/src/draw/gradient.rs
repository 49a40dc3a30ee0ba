use crate::draw::color::Rgba;

/// A multi-stop color ramp sampled on [0, 1]. Serves both linear gradients
/// (parameterized by a normalized coordinate) and radial gradients
/// (parameterized by normalized distance from the center).
pub struct Gradient {
    /// Stops as (position, color), positions ascending in [0, 1].
    stops: Vec<(f32, Rgba)>,
}

impl Gradient {
    /// Build a gradient from ascending stops. At least one stop is required.
    pub fn new(stops: Vec<(f32, Rgba)>) -> Self {
        debug_assert!(!stops.is_empty());
        debug_assert!(stops.windows(2).all(|w| w[0].0 <= w[1].0));
        Self { stops }
    }

    /// Sample the ramp. Values outside [0, 1] clamp to the end stops.
    pub fn sample(&self, t: f32) -> Rgba {
        let (first_pos, first) = self.stops[0];
        if t <= first_pos {
            return first;
        }
        for pair in self.stops.windows(2) {
            let (p0, c0) = pair[0];
            let (p1, c1) = pair[1];
            if t <= p1 {
                let span = (p1 - p0).max(1e-6);
                return c0.lerp(c1, (t - p0) / span);
            }
        }
        self.stops[self.stops.len() - 1].1
    }
}
