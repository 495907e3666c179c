use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Per-frame snapshot, filled only while perf metrics are enabled
#[wasm_bindgen]
#[derive(Clone, Debug, Default, Serialize)]
pub struct PerfStats {
    pub(super) step_ms: f64,
    pub(super) render_ms: f64,
    pub(super) particle_count: u32,
    pub(super) anchored_count: u32,
    pub(super) disturbed_count: u32,
    pub(super) frame: u64,
    pub(super) generation: u32,
}

impl PerfStats {
    pub(crate) fn reset(&mut self) {
        *self = PerfStats::default();
    }
}

#[wasm_bindgen]
impl PerfStats {
    #[wasm_bindgen(getter)]
    pub fn step_ms(&self) -> f64 { self.step_ms }
    #[wasm_bindgen(getter)]
    pub fn render_ms(&self) -> f64 { self.render_ms }
    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.particle_count }
    #[wasm_bindgen(getter)]
    pub fn anchored_count(&self) -> u32 { self.anchored_count }
    #[wasm_bindgen(getter)]
    pub fn disturbed_count(&self) -> u32 { self.disturbed_count }
    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.frame }
    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 { self.generation }

    /// Snapshot as JSON (debug overlays, logging)
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}
