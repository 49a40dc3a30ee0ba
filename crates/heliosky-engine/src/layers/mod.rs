//! Layer compositor.
//!
//! Each layer is a pure function of the surface and the per-frame state;
//! nothing here retains state between frames. Layers are drawn strictly
//! back-to-front so later layers blend over earlier ones, and a failure in
//! one layer is logged and swallowed — the remaining layers still draw.

pub mod aurora;
pub mod bands;
pub mod ejecta;
pub mod labels;
pub mod overlay;
pub mod prominence;
pub mod shockwave;
pub mod sky;
pub mod star;
pub mod wind;

use crate::surface::Surface;
use crate::systems::wind::WindParticle;
use glam::Vec2;
use thiserror::Error;

/// Rendering faults. None of these are fatal; the compositor degrades to a
/// partially drawn frame instead of propagating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("surface has no drawable area")]
    EmptySurface,
}

/// Star placement derived from the viewport: a fixed fractional offset from
/// the top-right, radius proportional to the smaller dimension.
#[derive(Debug, Clone, Copy)]
pub struct StarGeometry {
    pub center: Vec2,
    pub radius: f32,
}

impl StarGeometry {
    pub fn for_viewport(width: f32, height: f32) -> Self {
        Self {
            center: Vec2::new(width * 0.87, height * 0.07),
            radius: width.min(height) * 0.085,
        }
    }
}

/// Everything a layer needs for one frame, passed explicitly. The only
/// mutable state in the engine lives in the clock and the wind field; a frame
/// is a pure re-render from these values.
pub struct FrameState<'a> {
    /// Accumulated animation phase. Double precision: it grows without bound
    /// over a session, and layers feed it to trig functions whose arguments
    /// must keep per-tick resolution.
    pub t: f64,
    /// Normalized geomagnetic severity in [0, 1].
    pub storm: f32,
    /// Normalized flare severity in [0, 1].
    pub flare: f32,
    /// Cyclic [0, 1) phase for ejections and shockwaves.
    pub event_phase: f32,
    pub star: StarGeometry,
    pub wind: &'a [WindParticle],
}

/// Visual layers in back-to-front draw order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[repr(u8)]
pub enum LayerId {
    Sky = 0,
    Bands = 1,
    Aurora = 2,
    StarHalo = 3,
    StarDisc = 4,
    Prominences = 5,
    Ejecta = 6,
    Shockwaves = 7,
    WindParticles = 8,
    StormTint = 9,
    HorizonGlow = 10,
    Labels = 11,
}

impl LayerId {
    pub const COUNT: usize = 12;

    /// All layers, back to front. Ordering is a correctness requirement.
    pub const ALL: [LayerId; Self::COUNT] = [
        LayerId::Sky,
        LayerId::Bands,
        LayerId::Aurora,
        LayerId::StarHalo,
        LayerId::StarDisc,
        LayerId::Prominences,
        LayerId::Ejecta,
        LayerId::Shockwaves,
        LayerId::WindParticles,
        LayerId::StormTint,
        LayerId::HorizonGlow,
        LayerId::Labels,
    ];

    pub fn draw(self, surface: &mut Surface, frame: &FrameState) -> Result<(), RenderError> {
        match self {
            LayerId::Sky => sky::draw(surface, frame),
            LayerId::Bands => bands::draw(surface, frame),
            LayerId::Aurora => aurora::draw(surface, frame),
            LayerId::StarHalo => star::draw_halo(surface, frame),
            LayerId::StarDisc => star::draw_disc(surface, frame),
            LayerId::Prominences => prominence::draw(surface, frame),
            LayerId::Ejecta => ejecta::draw(surface, frame),
            LayerId::Shockwaves => shockwave::draw(surface, frame),
            LayerId::WindParticles => wind::draw(surface, frame),
            LayerId::StormTint => overlay::draw_storm_tint(surface, frame),
            LayerId::HorizonGlow => overlay::draw_horizon_glow(surface, frame),
            LayerId::Labels => labels::draw(surface, frame),
        }
    }
}

/// Render one full frame. A fault in one layer must not blank the others:
/// failures are logged and the remaining layers still attempt to draw.
pub fn compose(surface: &mut Surface, frame: &FrameState) {
    for layer in LayerId::ALL {
        if let Err(err) = layer.draw(surface, frame) {
            log::warn!("layer {:?} skipped: {}", layer, err);
        }
    }
}

/// Guard shared by every layer: an unsized surface is a rendering fault, not
/// a panic.
fn drawable(surface: &Surface) -> Result<(), RenderError> {
    if surface.is_empty() {
        Err(RenderError::EmptySurface)
    } else {
        Ok(())
    }
}
