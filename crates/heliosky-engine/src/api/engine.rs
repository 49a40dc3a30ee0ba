//! The engine facade: owns the clock, drive parameters, wind field, and
//! surface, and runs one full render pass per tick.

use crate::api::config::EngineConfig;
use crate::core::clock::PhaseClock;
use crate::core::intensity::{event_phase, DriveParameters};
use crate::layers::{self, FrameState, StarGeometry};
use crate::surface::Surface;
use crate::systems::wind::WindField;

/// What the host should do after a tick: schedule exactly one further frame,
/// or none. This carries the one-tick-in-flight invariant — every
/// acknowledged tick yields exactly one scheduling decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Request one more frame.
    Continue,
    /// The engine is stopped; request nothing.
    Stopped,
}

/// The animation engine. Constructed once per mount; `stop()`/`start()`
/// within its lifetime resumes with phase and particle pool intact — only a
/// fresh `Engine` reseeds.
pub struct Engine {
    clock: PhaseClock,
    drive: DriveParameters,
    wind: WindField,
    surface: Surface,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            clock: PhaseClock::new(config.phase_step),
            drive: config.drive.clamped(),
            wind: WindField::new(
                config.seed,
                config.pool_size,
                config.width as f32,
                config.height as f32,
            ),
            surface: Surface::new(config.width, config.height),
        }
    }

    /// Begin ticking. No-op if already running.
    pub fn start(&mut self) {
        self.clock.start();
    }

    /// Stop ticking. Idempotent; phase and particles are preserved.
    pub fn stop(&mut self) {
        self.clock.stop();
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    /// Replace both drive scalars. Out-of-range values are clamped. The next
    /// tick reads whatever is current; no cross-frame consistency is needed.
    pub fn set_drive(&mut self, geomagnetic_index: f32, flare_index: f32) {
        self.drive = DriveParameters::new(geomagnetic_index, flare_index);
    }

    pub fn drive(&self) -> DriveParameters {
        self.drive
    }

    /// Track a viewport change. Takes effect on the next tick; never touches
    /// phase or particle state.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.surface.resize(width, height);
    }

    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    pub fn phase(&self) -> f64 {
        self.clock.phase()
    }

    pub fn wind(&self) -> &WindField {
        &self.wind
    }

    /// Run one tick: advance phase, read the intensity model, advance the
    /// wind field, and compose all layers back-to-front onto the surface.
    /// A tick while stopped does nothing and schedules nothing.
    pub fn tick(&mut self) -> TickOutcome {
        let t = match self.clock.advance() {
            Some(t) => t,
            None => return TickOutcome::Stopped,
        };
        let severity = self.drive.severity();
        let star = StarGeometry::for_viewport(
            self.surface.width() as f32,
            self.surface.height() as f32,
        );
        self.wind.advance(severity.storm, star.center, star.radius);

        self.surface.clear();
        let frame = FrameState {
            t,
            storm: severity.storm,
            flare: severity.flare,
            event_phase: event_phase(t, severity.storm),
            star,
            wind: self.wind.particles(),
        };
        layers::compose(&mut self.surface, &frame);
        TickOutcome::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::intensity::scaled_count;

    fn small_engine() -> Engine {
        Engine::new(EngineConfig {
            width: 96,
            height: 64,
            ..Default::default()
        })
    }

    #[test]
    fn tick_while_stopped_is_a_no_op() {
        let mut engine = small_engine();
        assert_eq!(engine.tick(), TickOutcome::Stopped);
        assert_eq!(engine.phase(), 0.0);
    }

    #[test]
    fn double_stop_then_restart_resumes() {
        let mut engine = small_engine();
        engine.start();
        engine.tick();
        engine.tick();
        let phase = engine.phase();
        engine.stop();
        engine.stop();
        assert_eq!(engine.tick(), TickOutcome::Stopped);
        engine.start();
        assert_eq!(engine.tick(), TickOutcome::Continue);
        assert!(engine.phase() > phase);
    }

    #[test]
    fn resize_between_ticks_preserves_animation_state() {
        let mut engine = Engine::new(EngineConfig {
            width: 800,
            height: 600,
            ..Default::default()
        });
        engine.start();
        engine.tick();
        let phase = engine.phase();
        let ages: Vec<f32> = engine.wind().particles().iter().map(|p| p.age).collect();
        let positions: Vec<_> = engine.wind().particles().iter().map(|p| p.pos).collect();

        engine.resize(1920, 1080);

        assert_eq!(engine.phase(), phase);
        for (p, (&age, &pos)) in engine
            .wind()
            .particles()
            .iter()
            .zip(ages.iter().zip(positions.iter()))
        {
            assert_eq!(p.age, age);
            assert_eq!(p.pos, pos);
        }
        assert_eq!(engine.surface().width(), 1920);
        assert_eq!(engine.surface().height(), 1080);
    }

    #[test]
    fn out_of_range_drive_is_clamped() {
        let mut engine = small_engine();
        engine.set_drive(99.0, -5.0);
        let d = engine.drive();
        assert_eq!(d.geomagnetic_index, 9.0);
        assert_eq!(d.flare_index, 0.0);
        let s = d.severity();
        assert_eq!(s.storm, 1.0);
        assert_eq!(s.flare, 0.0);
    }

    #[test]
    fn calm_session_holds_baseline_counts() {
        let mut engine = small_engine();
        engine.set_drive(0.0, 0.0);
        engine.start();
        for _ in 0..1000 {
            assert_eq!(engine.tick(), TickOutcome::Continue);
            let storm = engine.drive().severity().storm;
            assert_eq!(scaled_count(4, 4.0, storm), 4, "aurora stays at baseline");
            assert_eq!(scaled_count(2, 2.0, storm), 2, "rings stay at baseline");
        }
        assert!((engine.phase() - 7.0).abs() < 1e-2);
    }

    #[test]
    fn extreme_session_reaches_maximum_counts() {
        let mut engine = small_engine();
        engine.set_drive(9.0, 10.0);
        engine.start();
        for _ in 0..1000 {
            assert_eq!(engine.tick(), TickOutcome::Continue);
        }
        let severity = engine.drive().severity();
        assert_eq!(scaled_count(4, 4.0, severity.storm), 8);
        assert_eq!(scaled_count(2, 2.0, severity.storm), 4);
        assert_eq!(1.0 + 3.5 * severity.storm, 4.5);
        // Pool never grew or shrank
        assert_eq!(engine.wind().len(), 220);
    }
}
