//! Scene - one interactive pixel-scatter canvas
//!
//! SceneCore owns everything a canvas needs (config, glyph mask, source
//! bitmap, particle grid, pointer, framebuffer) so several scenes can live
//! side by side and tests can drive one frame at a time.
//!
//! - init/      - construction
//! - commands/  - image load, resize, config, input
//! - step/      - per-frame particle update
//! - render/    - rasterization into the ABGR framebuffer
//! - frame_loop/ - tick + host scheduler + cancel handle
//! - perf/      - optional frame timings

use crate::core::math::Vec2;
use crate::domain::bitmap::Bitmap;
use crate::domain::config::SceneConfig;
use crate::domain::layout::CanvasSize;
use crate::spatial::grid::ParticleGrid;
use crate::systems::input::{InputEvent, PointerState};
use crate::systems::logo_mask::LogoMask;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/step.rs"]
mod step;
#[path = "render/render_extract.rs"]
mod render_extract;
#[path = "frame_loop/frame_loop.rs"]
mod frame_loop;
mod facade;

pub use facade::{JsScheduler, PixelScene};
pub use frame_loop::{FrameLoop, FrameScheduler, HostDriven, LoopHandle, ManualScheduler};
pub use perf_stats::PerfStats;

use perf_timer::PerfTimer;

/// The simulation context for one canvas
pub struct SceneCore {
    config: SceneConfig,
    mask: LogoMask,
    bitmap: Bitmap,
    viewport_width: f64,
    viewport_height: f64,
    grid: ParticleGrid,
    pointer: PointerState,

    // Render target, canvas.width * canvas.height ABGR pixels
    frame_buffer: Vec<u32>,

    // State
    frame: u64,
    generation: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: PerfStats,
}

impl SceneCore {
    /// Empty scene for a viewport; nothing is drawn until an image loads
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        init::create_scene_core(SceneConfig::default(), viewport_width, viewport_height)
    }

    pub fn with_config(config: SceneConfig, viewport_width: f64, viewport_height: f64) -> Self {
        init::create_scene_core(config, viewport_width, viewport_height)
    }

    pub fn config(&self) -> &SceneConfig { &self.config }

    pub fn grid(&self) -> &ParticleGrid { &self.grid }

    pub fn mask(&self) -> &LogoMask { &self.mask }

    pub fn pointer(&self) -> &PointerState { &self.pointer }

    pub fn canvas(&self) -> CanvasSize { self.grid.canvas() }

    pub fn width(&self) -> u32 { self.grid.canvas().width }

    pub fn height(&self) -> u32 { self.grid.canvas().height }

    pub fn particle_count(&self) -> usize { self.grid.len() }

    pub fn anchored_count(&self) -> usize { self.grid.anchored_count() }

    pub fn disturbed_count(&self) -> usize { self.grid.disturbed_count() }

    pub fn frame(&self) -> u64 { self.frame }

    /// Incremented on every grid rebuild
    pub fn generation(&self) -> u32 { self.generation }

    /// Replace the config: rebuilds the mask, pointer radius and grid
    pub fn apply_config(&mut self, config: SceneConfig) -> Result<(), String> {
        commands::apply_config(self, config)
    }

    pub fn load_config_json(&mut self, json: &str) -> Result<(), String> {
        let config = SceneConfig::from_json(json)?;
        self.apply_config(config)
    }

    /// Load decoded RGBA pixels, re-layout the canvas and rebuild the grid
    pub fn load_image_rgba(&mut self, width: u32, height: u32, rgba: Vec<u8>) -> Result<(), String> {
        commands::load_image_rgba(self, width, height, rgba)
    }

    pub fn load_bitmap(&mut self, bitmap: Bitmap) {
        commands::load_bitmap(self, bitmap)
    }

    /// Window resized: re-layout and rebuild from scratch
    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) {
        commands::resize(self, viewport_width, viewport_height)
    }

    /// Bypass layout and use an explicit canvas size
    pub fn set_canvas_size(&mut self, width: u32, height: u32) {
        commands::set_canvas_size(self, CanvasSize::new(width, height))
    }

    /// Throw away all particle state and rebuild from the current bitmap
    pub fn rebuild_grid(&mut self) {
        let canvas = self.grid.canvas();
        commands::rebuild_grid(self, canvas)
    }

    /// Every particle back to its origin, at rest
    pub fn reset_particles(&mut self) {
        commands::reset_particles(self)
    }

    pub fn handle_input(&mut self, event: InputEvent, canvas_origin: Vec2) {
        commands::handle_input(self, event, canvas_origin)
    }

    /// Place (or clear) the pointer directly in canvas coordinates
    pub fn set_pointer(&mut self, position: Option<Vec2>) {
        settings::set_pointer(self, position)
    }

    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled)
    }

    /// Last frame's perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> PerfStats {
        settings::get_perf_stats(self)
    }

    /// Advance every particle one step
    pub fn step(&mut self) {
        step::step(self)
    }

    /// Clear the framebuffer and draw every particle
    pub fn render(&mut self) {
        render_extract::render(self)
    }

    pub fn frame_buffer(&self) -> &[u32] {
        &self.frame_buffer
    }

    /// Pointer to the framebuffer (for JS `ImageData` copies)
    pub fn frame_ptr(&self) -> *const u32 {
        self.frame_buffer.as_ptr()
    }

    pub fn frame_len_elements(&self) -> usize {
        self.frame_buffer.len()
    }

    pub fn frame_len_bytes(&self) -> usize {
        self.frame_buffer.len() * std::mem::size_of::<u32>()
    }

    /// ABGR pixel at (x, y), `None` outside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        render_extract::pixel(self, x, y)
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
