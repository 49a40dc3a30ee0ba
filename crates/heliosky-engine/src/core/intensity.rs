//! Intensity model: normalizes raw drive indices into unit-interval severity
//! scalars and the cyclic event phase that drives ejections and shockwaves.

use serde::{Deserialize, Serialize};

/// Upper bound of the geomagnetic-disturbance index.
pub const GEOMAGNETIC_MAX: f32 = 9.0;
/// Upper bound of the solar-flare index.
pub const FLARE_MAX: f32 = 10.0;

/// External drive parameters, supplied by the host at arbitrary times.
/// Out-of-range values are clamped, never rejected — bad telemetry must
/// degrade the animation gracefully, not halt it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriveParameters {
    /// Geomagnetic-disturbance index, clamped to [0, 9].
    pub geomagnetic_index: f32,
    /// Solar-flare index, clamped to [0, 10].
    pub flare_index: f32,
}

impl Default for DriveParameters {
    /// Baseline used before any external value arrives.
    fn default() -> Self {
        Self {
            geomagnetic_index: 2.0,
            flare_index: 1.0,
        }
    }
}

impl DriveParameters {
    pub fn new(geomagnetic_index: f32, flare_index: f32) -> Self {
        Self {
            geomagnetic_index,
            flare_index,
        }
        .clamped()
    }

    pub fn clamped(self) -> Self {
        Self {
            geomagnetic_index: self.geomagnetic_index.clamp(0.0, GEOMAGNETIC_MAX),
            flare_index: self.flare_index.clamp(0.0, FLARE_MAX),
        }
    }

    /// Derive normalized severity scalars. Pure, safe to call every tick.
    pub fn severity(self) -> Severity {
        let p = self.clamped();
        Severity {
            storm: (p.geomagnetic_index / GEOMAGNETIC_MAX).min(1.0),
            flare: (p.flare_index / FLARE_MAX).min(1.0),
        }
    }
}

/// Normalized [0, 1] severity scalars, recomputed every frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Severity {
    /// Drives ripple amplitude, aurora count, particle speed, jet length.
    pub storm: f32,
    /// Drives the star's brightness and glow.
    pub flare: f32,
}

/// Cyclic [0, 1) phase for periodic effects. Its angular speed rises with
/// storm severity, so ejection and shockwave pulses quicken during storms.
/// Evaluated in double precision: `t` grows without bound and an `f32` sine
/// argument loses per-tick resolution long before the accumulator does.
pub fn event_phase(t: f64, storm: f32) -> f32 {
    (((t * (0.3 + 0.4 * storm as f64)).sin() + 1.0) * 0.5) as f32
}

/// Storm-scaled element count: `base + round(storm * extra)`.
/// Intentionally a coarse step function rather than a continuous blend.
pub fn scaled_count(base: usize, extra: f32, storm: f32) -> usize {
    base + (storm.clamp(0.0, 1.0) * extra).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_clamps_out_of_range() {
        let hi = DriveParameters::new(42.0, 99.0).severity();
        assert_eq!(hi.storm, 1.0);
        assert_eq!(hi.flare, 1.0);
        let lo = DriveParameters::new(-3.0, -1.0).severity();
        assert_eq!(lo.storm, 0.0);
        assert_eq!(lo.flare, 0.0);
    }

    #[test]
    fn storm_is_monotonic_in_index() {
        let mut last = -1.0;
        for kp in 0..=9 {
            let s = DriveParameters::new(kp as f32, 0.0).severity().storm;
            assert!(s >= last, "storm must be non-decreasing");
            assert!((0.0..=1.0).contains(&s));
            last = s;
        }
    }

    #[test]
    fn default_baseline() {
        let d = DriveParameters::default();
        assert_eq!(d.geomagnetic_index, 2.0);
        assert_eq!(d.flare_index, 1.0);
    }

    #[test]
    fn event_phase_stays_in_unit_interval() {
        for i in 0..2000 {
            let p = event_phase(i as f64 * 0.007, 0.7);
            assert!((0.0..=1.0).contains(&p), "phase {} out of range", p);
        }
    }

    #[test]
    fn event_phase_still_cycles_after_long_sessions() {
        // At this accumulated phase an f32 sine argument has lost per-tick
        // resolution; the f64 path must still produce distinct values.
        let t0 = 131072.0_f64;
        let a = event_phase(t0, 0.0);
        let b = event_phase(t0 + 0.007, 0.0);
        assert!((a - b).abs() > 1e-5, "phase must keep moving: {} vs {}", a, b);
    }

    #[test]
    fn shockwave_ring_counts_at_extremes() {
        assert_eq!(scaled_count(2, 2.0, 0.0), 2);
        assert_eq!(scaled_count(2, 2.0, 1.0), 4);
    }

    #[test]
    fn aurora_counts_at_extremes() {
        assert_eq!(scaled_count(4, 4.0, 0.0), 4);
        assert_eq!(scaled_count(4, 4.0, 1.0), 8);
    }
}
