use crate::domain::bitmap::Bitmap;
use crate::domain::config::SceneConfig;
use crate::spatial::grid::ParticleGrid;
use crate::systems::input::PointerState;
use crate::systems::logo_mask::LogoMask;

use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn create_scene_core(config: SceneConfig, viewport_width: f64, viewport_height: f64) -> SceneCore {
    SceneCore {
        mask: LogoMask::new(&config.logo),
        pointer: PointerState::new(config.pointer.radius),
        config,
        bitmap: Bitmap::empty(),
        viewport_width,
        viewport_height,
        grid: ParticleGrid::default(),
        frame_buffer: Vec::new(),
        frame: 0,
        generation: 0,
        perf_enabled: false,
        perf_stats: PerfStats::default(),
    }
}
