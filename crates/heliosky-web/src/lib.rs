//! `#[wasm_bindgen]` exports for the heliosky background visualization.
//!
//! The host page owns the requestAnimationFrame chain: it calls `viz_tick()`
//! from its frame callback and schedules exactly one further frame while the
//! return value is `true`. Resize events and live index updates are pushed
//! through `viz_resize` / `viz_set_drive`; the frame buffer is read back
//! zero-copy via `viz_frame()` (or the raw pointer/len pair) and blitted
//! into a canvas `ImageData`.

pub mod runner;

pub use runner::VizRunner;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

thread_local! {
    static RUNNER: RefCell<Option<VizRunner>> = RefCell::new(None);
}

fn with_runner<R>(f: impl FnOnce(&mut VizRunner) -> R) -> R {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        let runner = borrow
            .as_mut()
            .expect("Visualization not initialized. Call viz_init() first.");
        f(runner)
    })
}

/// Mount: allocate the particle pool, seed phase, size the surface.
#[wasm_bindgen]
pub fn viz_init(width: u32, height: u32) {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(VizRunner::new(width, height));
    });
    log::info!("heliosky: initialized at {}x{}", width, height);
}

/// Begin ticking. No-op if already running.
#[wasm_bindgen]
pub fn viz_start() {
    with_runner(|r| r.start());
}

/// Stop ticking. Idempotent; a later `viz_start` resumes.
#[wasm_bindgen]
pub fn viz_stop() {
    with_runner(|r| r.stop());
}

/// Render one frame. Returns `true` while the host should schedule the next
/// frame callback, `false` once stopped.
#[wasm_bindgen]
pub fn viz_tick() -> bool {
    with_runner(|r| r.tick())
}

/// Viewport resize; takes effect on the next tick without disturbing
/// animation state.
#[wasm_bindgen]
pub fn viz_resize(width: u32, height: u32) {
    with_runner(|r| r.resize(width, height));
}

/// Push fresh drive indices. Out-of-range values are clamped.
#[wasm_bindgen]
pub fn viz_set_drive(geomagnetic_index: f32, flare_index: f32) {
    with_runner(|r| r.set_drive(geomagnetic_index, flare_index));
}

/// Zero-copy view of the RGBA frame buffer for `ImageData`. The view aliases
/// wasm memory: consume it before the next `viz_tick` or `viz_resize`.
#[wasm_bindgen]
pub fn viz_frame() -> js_sys::Uint8ClampedArray {
    with_runner(|r| {
        let ptr = r.frame_ptr() as u32;
        let len = r.frame_len();
        js_sys::Uint8ClampedArray::new(
            &wasm_bindgen::memory()
                .unchecked_into::<js_sys::WebAssembly::Memory>()
                .buffer(),
        )
        .subarray(ptr, ptr + len)
    })
}

// ---- Raw accessors for hosts that prefer pointer reads ----

#[wasm_bindgen]
pub fn viz_frame_ptr() -> *const u8 {
    with_runner(|r| r.frame_ptr())
}

#[wasm_bindgen]
pub fn viz_frame_len() -> u32 {
    with_runner(|r| r.frame_len())
}

#[wasm_bindgen]
pub fn viz_width() -> u32 {
    with_runner(|r| r.width())
}

#[wasm_bindgen]
pub fn viz_height() -> u32 {
    with_runner(|r| r.height())
}
