use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;

use crate::core::math::Vec2;
use crate::systems::input::InputEvent;

use super::frame_loop::{FrameLoop, FrameScheduler, HostDriven};
use super::perf_stats::PerfStats;
use super::SceneCore;

/// Calls a JS function to request the next frame,
/// e.g. `() => requestAnimationFrame(loop)`
pub struct JsScheduler {
    callback: js_sys::Function,
}

impl JsScheduler {
    pub fn new(callback: js_sys::Function) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for JsScheduler {
    fn request_frame(&mut self) {
        if let Err(e) = self.callback.call0(&JsValue::NULL) {
            console_warn!("frame scheduler callback failed: {:?}", e);
        }
    }
}

#[wasm_bindgen]
pub struct PixelScene {
    core: SceneCore,
    frame_loop: FrameLoop,
    scheduler: Option<JsScheduler>,
}

#[wasm_bindgen]
impl PixelScene {
    /// Create an empty scene for the current viewport size
    #[wasm_bindgen(constructor)]
    pub fn new(viewport_width: f64, viewport_height: f64) -> Self {
        Self {
            core: SceneCore::new(viewport_width, viewport_height),
            frame_loop: FrameLoop::new(),
            scheduler: None,
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn particle_count(&self) -> u32 { self.core.particle_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn anchored_count(&self) -> u32 { self.core.anchored_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn disturbed_count(&self) -> u32 { self.core.disturbed_count() as u32 }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn generation(&self) -> u32 { self.core.generation() }

    /// Apply a JSON scene config (missing fields take defaults)
    pub fn load_config(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .load_config_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn get_config_json(&self) -> String {
        self.core.config().to_json()
    }

    /// Image path to load, chosen from the configured set
    pub fn pick_image(&self, seed: u32) -> Option<String> {
        crate::domain::assets::pick_image(&self.core.config().images, seed).map(str::to_string)
    }

    /// Decoded RGBA pixels (`getImageData().data`) at the image's natural size
    pub fn load_image(&mut self, rgba: Vec<u8>, width: u32, height: u32) -> Result<(), JsValue> {
        self.core
            .load_image_rgba(width, height, rgba)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    pub fn resize(&mut self, viewport_width: f64, viewport_height: f64) {
        self.core.resize(viewport_width, viewport_height);
    }

    pub fn reset_particles(&mut self) {
        self.core.reset_particles();
    }

    // === INPUT ===
    // Client coordinates plus the canvas bounding rect's left/top

    pub fn pointer_move(&mut self, client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) {
        let event = InputEvent::MouseMove { client: Vec2::new(client_x, client_y) };
        self.core.handle_input(event, Vec2::new(rect_left, rect_top));
    }

    pub fn pointer_leave(&mut self) {
        self.core.handle_input(InputEvent::MouseLeave, Vec2::ZERO);
    }

    pub fn touch_start(&mut self, client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) {
        let event = InputEvent::TouchStart { primary: Some(Vec2::new(client_x, client_y)) };
        self.core.handle_input(event, Vec2::new(rect_left, rect_top));
    }

    pub fn touch_move(&mut self, client_x: f32, client_y: f32, rect_left: f32, rect_top: f32) {
        let event = InputEvent::TouchMove { primary: Some(Vec2::new(client_x, client_y)) };
        self.core.handle_input(event, Vec2::new(rect_left, rect_top));
    }

    pub fn touch_end(&mut self) {
        self.core.handle_input(InputEvent::TouchEnd, Vec2::ZERO);
    }

    // === FRAME LOOP ===

    /// Function called whenever the loop wants another frame
    pub fn set_scheduler(&mut self, callback: js_sys::Function) {
        self.scheduler = Some(JsScheduler::new(callback));
    }

    /// Arm the loop and request the first frame.
    /// No-op while running; a restart reuses a frame that is still queued.
    pub fn start(&mut self) {
        match self.scheduler.as_mut() {
            Some(s) => self.frame_loop.start(s),
            None => self.frame_loop.start(&mut HostDriven),
        };
    }

    /// One frame: step, render, request the next one.
    /// Returns false once stopped.
    pub fn tick(&mut self) -> bool {
        let Self { core, frame_loop, scheduler } = self;
        match scheduler.as_mut() {
            Some(s) => frame_loop.tick(core, s),
            None => frame_loop.tick(core, &mut HostDriven),
        }
    }

    pub fn stop(&mut self) {
        self.frame_loop.stop();
    }

    pub fn is_running(&self) -> bool {
        self.frame_loop.is_running()
    }

    /// Advance particles without drawing
    pub fn step(&mut self) {
        self.core.step();
    }

    pub fn render(&mut self) {
        self.core.render();
    }

    // === FRAMEBUFFER ===

    /// Pointer to the ABGR framebuffer in wasm memory
    pub fn frame_ptr(&self) -> *const u32 {
        self.core.frame_ptr()
    }

    pub fn frame_len_elements(&self) -> usize {
        self.core.frame_len_elements()
    }

    pub fn frame_len_bytes(&self) -> usize {
        self.core.frame_len_bytes()
    }

    /// Copy the framebuffer onto a 2D context at (0, 0)
    pub fn render_to(&self, ctx: &web_sys::CanvasRenderingContext2d) -> Result<(), JsValue> {
        let (w, h) = (self.core.width(), self.core.height());
        if w == 0 || h == 0 {
            return Ok(());
        }
        let bytes: Vec<u8> = self
            .core
            .frame_buffer()
            .iter()
            .flat_map(|px| px.to_le_bytes())
            .collect();
        let image = web_sys::ImageData::new_with_u8_clamped_array_and_sh(Clamped(&bytes[..]), w, h)?;
        ctx.put_image_data(&image, 0.0, 0.0)
    }

    // === PERF ===

    /// Enable or disable per-frame metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    pub fn get_perf_stats(&self) -> PerfStats {
        self.core.get_perf_stats()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_start_runs_one_step_per_tick() {
        let mut scene = PixelScene::new(800.0, 600.0);
        assert!(!scene.is_running());

        scene.start();
        scene.start();
        assert!(scene.is_running());
        assert!(scene.tick());
        assert_eq!(scene.frame(), 1);

        scene.stop();
        scene.start();
        assert!(scene.tick());
        assert_eq!(scene.frame(), 2);
    }
}
