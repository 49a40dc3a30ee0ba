/// Default phase advance per tick. Chosen so full effect cycles take several
/// seconds at typical display refresh rates.
pub const PHASE_STEP: f64 = 0.007;

/// Monotonic phase accumulator driving the render loop.
/// Advances by a fixed step per tick, independent of wall-clock frame time,
/// so the animation stays coherent under variable frame timing.
///
/// The accumulator is double precision: sessions are unbounded, and an `f32`
/// sum stops moving once half the step falls below the ulp (at t = 131072 a
/// 0.007 step is a no-op, freezing the animation after a few days).
pub struct PhaseClock {
    /// Accumulated phase. Never resets while the clock lives.
    t: f64,
    /// The fixed phase increment per tick.
    step: f64,
    running: bool,
}

impl PhaseClock {
    pub fn new(step: f64) -> Self {
        Self {
            t: 0.0,
            step,
            running: false,
        }
    }

    /// Begin ticking. Calling while already running is a no-op.
    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop ticking. Safe to call multiple times and with no tick pending.
    /// Does not reset accumulated phase; a later `start()` resumes.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance one tick. Returns the new phase, or `None` when stopped
    /// (a stopped clock must never advance).
    pub fn advance(&mut self) -> Option<f64> {
        if !self.running {
            return None;
        }
        self.t += self.step;
        Some(self.t)
    }

    /// Current accumulated phase.
    pub fn phase(&self) -> f64 {
        self.t
    }

    /// The fixed phase step.
    pub fn step(&self) -> f64 {
        self.step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_moves_by_fixed_step() {
        let mut clock = PhaseClock::new(PHASE_STEP);
        clock.start();
        let t = clock.advance().unwrap();
        assert!((t - PHASE_STEP).abs() < 1e-6);
        let t = clock.advance().unwrap();
        assert!((t - 2.0 * PHASE_STEP).abs() < 1e-6);
    }

    #[test]
    fn stopped_clock_does_not_advance() {
        let mut clock = PhaseClock::new(PHASE_STEP);
        assert!(clock.advance().is_none());
        assert_eq!(clock.phase(), 0.0);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut clock = PhaseClock::new(PHASE_STEP);
        clock.start();
        clock.stop();
        clock.stop();
        assert!(!clock.is_running());
        assert!(clock.advance().is_none());
    }

    #[test]
    fn restart_resumes_phase() {
        let mut clock = PhaseClock::new(PHASE_STEP);
        clock.start();
        for _ in 0..10 {
            clock.advance();
        }
        let before = clock.phase();
        clock.stop();
        clock.start();
        let t = clock.advance().unwrap();
        assert!((t - before - PHASE_STEP).abs() < 1e-9);
    }

    #[test]
    fn phase_keeps_advancing_in_long_sessions() {
        let mut clock = PhaseClock::new(PHASE_STEP);
        clock.start();
        // Park the accumulator where a single-precision sum stalls
        // (ulp of 131072_f32 is 0.0156, more than twice the step).
        clock.t = 131072.0;
        let before = clock.phase();
        let t = clock.advance().unwrap();
        assert!(t > before, "phase must advance at t = {}", before);
        assert!((t - before - PHASE_STEP).abs() < 1e-9);

        // And it stays strictly monotonic from there.
        let mut last = t;
        for _ in 0..10_000 {
            let next = clock.advance().unwrap();
            assert!(next > last);
            last = next;
        }
    }
}
