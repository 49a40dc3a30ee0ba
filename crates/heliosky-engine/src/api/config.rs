use crate::core::clock::PHASE_STEP;
use crate::core::intensity::DriveParameters;
use crate::systems::wind::POOL_SIZE;
use serde::{Deserialize, Serialize};

/// Engine configuration, provided by the host at mount time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Initial viewport width in pixels.
    pub width: u32,
    /// Initial viewport height in pixels.
    pub height: u32,
    /// Wind particle pool capacity (default: 220). Fixed for the engine's
    /// lifetime — the pool recycles, it never grows or shrinks.
    pub pool_size: usize,
    /// Phase advance per tick (default: 0.007).
    pub phase_step: f64,
    /// RNG seed for the particle pool.
    pub seed: u64,
    /// Drive parameters active before the host pushes any value.
    pub drive: DriveParameters,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            pool_size: POOL_SIZE,
            phase_step: PHASE_STEP,
            seed: 42,
            drive: DriveParameters::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a config from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let c = EngineConfig::default();
        assert_eq!(c.pool_size, 220);
        assert_eq!(c.phase_step, 0.007);
        assert_eq!(c.drive.geomagnetic_index, 2.0);
        assert_eq!(c.drive.flare_index, 1.0);
    }

    #[test]
    fn parse_partial_json_fills_defaults() {
        let c = EngineConfig::from_json(r#"{ "width": 1280, "height": 720 }"#).unwrap();
        assert_eq!(c.width, 1280);
        assert_eq!(c.height, 720);
        assert_eq!(c.pool_size, 220);
    }
}
