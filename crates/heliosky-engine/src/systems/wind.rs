//! Solar-wind particle field.
//!
//! A fixed-capacity pool of outward-drifting particles whose apparent speed
//! and brightness scale with storm severity. Slots are recycled in place —
//! an expired particle is reinitialized near the star, never removed — so the
//! pool allocates once and the hot path is free of churn.

use crate::core::rng::Rng;
use glam::Vec2;

/// Pool capacity, fixed at construction.
pub const POOL_SIZE: usize = 220;
/// Age advance per tick, matching the phase step.
pub const AGE_STEP: f32 = 0.007;
/// Particles drifting past this x are respawned.
pub const LEFT_RESPAWN_MARGIN: f32 = -10.0;
/// Respawn offset bound, as a multiple of the star radius.
pub const RESPAWN_SPREAD: f32 = 2.5;

/// A single wind particle. Owned exclusively by the field.
#[derive(Debug, Clone, Copy)]
pub struct WindParticle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub age: f32,
    pub max_age: f32,
    pub radius: f32,
    pub hue: f32,
}

impl WindParticle {
    /// Normalized age in [0, 1].
    pub fn life_fraction(&self) -> f32 {
        if self.max_age <= 0.0 {
            return 1.0;
        }
        (self.age / self.max_age).clamp(0.0, 1.0)
    }

    /// Triangular opacity envelope over normalized age: ramp up over the
    /// first 20% of life, hold at full opacity through 75%, ramp down over
    /// the remaining 25%. Three exact linear segments, so particles never
    /// pop at spawn or despawn.
    pub fn alpha_envelope(lr: f32) -> f32 {
        let lr = lr.clamp(0.0, 1.0);
        if lr < 0.2 {
            lr / 0.2
        } else if lr > 0.75 {
            (1.0 - lr) / 0.25
        } else {
            1.0
        }
    }
}

/// Fixed-size pool of wind particles with bounded lifetime and recycling.
pub struct WindField {
    particles: Vec<WindParticle>,
    rng: Rng,
}

impl WindField {
    /// Seed a pool scattered over the upper-right region of the viewport,
    /// drifting left with a slight vertical wander.
    pub fn new(seed: u64, capacity: usize, width: f32, height: f32) -> Self {
        let mut rng = Rng::new(seed.wrapping_add(7919));
        let particles = (0..capacity)
            .map(|_| WindParticle {
                pos: Vec2::new(
                    width * (0.76 + rng.next_f32() * 0.22),
                    height * rng.next_f32() * 0.28,
                ),
                vel: Vec2::new(-(rng.next_f32() * 1.6 + 0.4), rng.next_signed(0.225)),
                age: rng.next_f32(),
                max_age: rng.next_range(0.3, 1.0),
                radius: rng.next_range(0.5, 3.0),
                hue: rng.next_range(15.0, 55.0),
            })
            .collect();
        Self { particles, rng }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Snapshot for the compositor.
    pub fn particles(&self) -> &[WindParticle] {
        &self.particles
    }

    /// Advance every particle one tick. Horizontal advection speeds up with
    /// storm severity; expired or off-screen particles respawn near the star.
    pub fn advance(&mut self, storm: f32, star_center: Vec2, star_radius: f32) {
        let speed_mult = 1.0 + 3.5 * storm;
        for p in &mut self.particles {
            p.pos.x += p.vel.x * speed_mult;
            p.pos.y += p.vel.y;
            p.age += AGE_STEP;
            if p.age > p.max_age || p.pos.x < LEFT_RESPAWN_MARGIN {
                p.pos = star_center
                    + Vec2::new(
                        self.rng.next_signed(0.5) * RESPAWN_SPREAD * star_radius,
                        self.rng.next_signed(0.5) * RESPAWN_SPREAD * star_radius,
                    );
                p.age = 0.0;
                p.max_age = self.rng.next_range(0.3, 1.0);
                p.hue = self.rng.next_range(15.0, 55.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn star() -> (Vec2, f32) {
        (Vec2::new(696.0, 42.0), 51.0)
    }

    #[test]
    fn pool_size_is_fixed() {
        let mut field = WindField::new(42, POOL_SIZE, 800.0, 600.0);
        let (center, radius) = star();
        for _ in 0..500 {
            field.advance(0.5, center, radius);
            assert_eq!(field.len(), POOL_SIZE);
        }
    }

    #[test]
    fn age_invariant_holds_after_every_tick() {
        let mut field = WindField::new(7, POOL_SIZE, 800.0, 600.0);
        let (center, radius) = star();
        for _ in 0..1000 {
            field.advance(1.0, center, radius);
            for p in field.particles() {
                assert!(p.age >= 0.0 && p.age <= p.max_age, "age {} > max {}", p.age, p.max_age);
            }
        }
    }

    #[test]
    fn respawn_lands_near_star_with_zero_age() {
        let mut field = WindField::new(3, 8, 800.0, 600.0);
        let (center, radius) = star();
        // Force every particle past its lifetime
        for p in &mut field.particles {
            p.age = p.max_age + 1.0;
        }
        field.advance(0.0, center, radius);
        for p in field.particles() {
            assert_eq!(p.age, 0.0);
            let off = p.pos - center;
            // One advection step may follow the respawn placement
            assert!(off.x.abs() <= RESPAWN_SPREAD * radius + 2.0);
            assert!(off.y.abs() <= RESPAWN_SPREAD * radius + 1.0);
        }
    }

    #[test]
    fn envelope_matches_reference_shape() {
        assert_eq!(WindParticle::alpha_envelope(0.0), 0.0);
        assert_eq!(WindParticle::alpha_envelope(0.2), 1.0);
        assert_eq!(WindParticle::alpha_envelope(0.5), 1.0);
        assert_eq!(WindParticle::alpha_envelope(0.75), 1.0);
        assert_eq!(WindParticle::alpha_envelope(1.0), 0.0);
        // Linear between breakpoints
        assert!((WindParticle::alpha_envelope(0.1) - 0.5).abs() < 1e-6);
        assert!((WindParticle::alpha_envelope(0.875) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn storm_scales_advection_speed() {
        let mut field = WindField::new(42, 4, 800.0, 600.0);
        // Pin a particle so the step is predictable
        field.particles[0].vel = Vec2::new(-1.0, 0.0);
        field.particles[0].age = 0.0;
        field.particles[0].max_age = 10.0;
        field.particles[0].pos = Vec2::new(400.0, 100.0);
        let (center, radius) = star();
        field.advance(1.0, center, radius);
        let moved = 400.0 - field.particles()[0].pos.x;
        assert!((moved - 4.5).abs() < 1e-4, "multiplier at storm=1 must be 4.5, moved {}", moved);
    }
}
