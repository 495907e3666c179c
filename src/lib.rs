//! Pixel Scatter Engine - pixelated image whose blocks scatter under the pointer
//!
//! Every block of the source image becomes a particle. Blocks near the
//! pointer get pushed away and fall; the rest ease back to where they came
//! from. Blocks inside the "S.S" mark never move.
//!
//! Architecture:
//! - core/       - logging macros, vector math, colors
//! - domain/     - config, bitmaps, layout, image choice
//! - systems/    - logo mask, pointer input, particle physics
//! - spatial/    - block grid builder
//! - simulation/ - scene context, frame loop, wasm facade

// Logging macros (must be first for macro export!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod spatial;
pub mod simulation;

use wasm_bindgen::prelude::*;

// Re-export wasm-bindgen-rayon for thread pool initialization
#[cfg(all(feature = "parallel", target_arch = "wasm32"))]
pub use wasm_bindgen_rayon::init_thread_pool;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("🦀 Pixel Scatter engine initialized!");
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Pick one image from the default set (`seed` e.g. `Date.now() | 0`)
#[wasm_bindgen]
pub fn pick_image(seed: u32) -> Option<String> {
    let config = domain::config::SceneConfig::default();
    domain::assets::pick_image(&config.images, seed).map(str::to_string)
}

// Re-export main types
pub use crate::core::color::Rgb;
pub use crate::core::math::Vec2;
pub use domain::bitmap::Bitmap;
pub use domain::config::SceneConfig;
pub use domain::layout::{fit_canvas, CanvasSize};
pub use simulation::{FrameLoop, FrameScheduler, LoopHandle, ManualScheduler, PixelScene, SceneCore};
pub use spatial::grid::ParticleGrid;
pub use systems::input::{InputEvent, PointerState};
pub use systems::logo_mask::LogoMask;
pub use systems::particle::{Particle, ParticleState};
