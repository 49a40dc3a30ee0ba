use heliosky_engine::{Engine, EngineConfig, TickOutcome};

/// Wires the engine to the browser loop.
///
/// The page's requestAnimationFrame callback calls `tick()` once per frame
/// and schedules exactly one further frame while it returns `true` — the
/// cooperative restatement of the recursive frame-callback chain. Resize and
/// drive updates arrive on the same logical thread as ticks, so no
/// synchronization is needed.
pub struct VizRunner {
    engine: Engine,
}

impl VizRunner {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            engine: Engine::new(EngineConfig {
                width,
                height,
                ..Default::default()
            }),
        }
    }

    pub fn start(&mut self) {
        self.engine.start();
    }

    pub fn stop(&mut self) {
        self.engine.stop();
    }

    /// Render one frame. Returns whether the host should schedule another.
    pub fn tick(&mut self) -> bool {
        self.engine.tick() == TickOutcome::Continue
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.engine.resize(width, height);
    }

    pub fn set_drive(&mut self, geomagnetic_index: f32, flare_index: f32) {
        self.engine.set_drive(geomagnetic_index, flare_index);
    }

    // ---- Frame buffer accessors for zero-copy canvas blits ----

    pub fn frame_ptr(&self) -> *const u8 {
        self.engine.surface().frame_ptr()
    }

    pub fn frame_len(&self) -> u32 {
        self.engine.surface().frame_len() as u32
    }

    pub fn width(&self) -> u32 {
        self.engine.surface().width()
    }

    pub fn height(&self) -> u32 {
        self.engine.surface().height()
    }
}
