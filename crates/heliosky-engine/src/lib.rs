pub mod api;
pub mod core;
pub mod draw;
pub mod layers;
pub mod surface;
pub mod systems;

// Re-export key types at crate root for convenience
pub use api::config::EngineConfig;
pub use api::engine::{Engine, TickOutcome};
pub use crate::core::clock::{PhaseClock, PHASE_STEP};
pub use crate::core::intensity::{event_phase, scaled_count, DriveParameters, Severity};
pub use crate::core::rng::Rng;
pub use draw::color::Rgba;
pub use draw::gradient::Gradient;
pub use layers::{compose, FrameState, LayerId, RenderError, StarGeometry};
pub use surface::{Pixel, Surface};
pub use systems::wind::{WindField, WindParticle};
