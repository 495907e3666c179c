use crate::core::math::Vec2;
use crate::domain::bitmap::Bitmap;
use crate::domain::config::SceneConfig;
use crate::domain::layout::{fit_canvas, CanvasSize};
use crate::spatial::grid::ParticleGrid;
use crate::systems::input::InputEvent;
use crate::systems::logo_mask::LogoMask;

use super::SceneCore;

pub(super) fn apply_config(scene: &mut SceneCore, config: SceneConfig) -> Result<(), String> {
    config.validate()?;
    scene.mask = LogoMask::new(&config.logo);
    scene.pointer.set_radius(config.pointer.radius);
    scene.config = config;
    console_log!("⚙️ Scene config applied (block {}px)", scene.config.block_size);
    relayout(scene);
    Ok(())
}

pub(super) fn load_image_rgba(scene: &mut SceneCore, width: u32, height: u32, rgba: Vec<u8>) -> Result<(), String> {
    let bitmap = Bitmap::from_rgba(width, height, rgba).map_err(|e| {
        console_warn!("Image rejected: {}", e);
        e
    })?;
    load_bitmap(scene, bitmap);
    Ok(())
}

pub(super) fn load_bitmap(scene: &mut SceneCore, bitmap: Bitmap) {
    console_log!("🖼️ Image loaded: {}x{}", bitmap.width(), bitmap.height());
    scene.bitmap = bitmap;
    relayout(scene);
}

pub(super) fn resize(scene: &mut SceneCore, viewport_width: f64, viewport_height: f64) {
    scene.viewport_width = viewport_width;
    scene.viewport_height = viewport_height;
    relayout(scene);
}

pub(super) fn set_canvas_size(scene: &mut SceneCore, canvas: CanvasSize) {
    rebuild_grid(scene, canvas);
}

fn relayout(scene: &mut SceneCore) {
    let canvas = fit_canvas(
        scene.bitmap.width(),
        scene.bitmap.height(),
        scene.viewport_width,
        scene.viewport_height,
        &scene.config.layout,
        scene.config.block_size,
    );
    rebuild_grid(scene, canvas);
}

/// Full rebuild; every particle from the previous generation is dropped
pub(super) fn rebuild_grid(scene: &mut SceneCore, canvas: CanvasSize) {
    scene.generation = scene.generation.wrapping_add(1);
    scene.grid = ParticleGrid::build(
        &scene.bitmap,
        canvas,
        scene.config.block_size,
        &scene.mask,
        scene.generation,
    );

    scene.frame_buffer.clear();
    scene.frame_buffer.resize(canvas.area(), crate::core::color::CLEAR_COLOR);

    console_log!(
        "🧱 Grid rebuilt: {}x{} canvas, {} blocks ({} anchored)",
        canvas.width,
        canvas.height,
        scene.grid.len(),
        scene.grid.anchored_count()
    );
}

pub(super) fn reset_particles(scene: &mut SceneCore) {
    scene.grid.reset();
}

pub(super) fn handle_input(scene: &mut SceneCore, event: InputEvent, canvas_origin: Vec2) {
    scene.pointer.handle(event, canvas_origin);
}
