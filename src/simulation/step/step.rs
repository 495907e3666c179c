#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{PerfTimer, SceneCore};

pub(super) fn step(scene: &mut SceneCore) {
    let perf_on = scene.perf_enabled;
    let step_start = if perf_on { Some(PerfTimer::start()) } else { None };

    // Every particle reads the same pointer snapshot for this frame
    let pointer = scene.pointer;
    let physics = scene.config.physics;
    let floor_y = scene.grid.canvas().height as f32 + physics.floor_margin;

    #[cfg(feature = "parallel")]
    {
        scene
            .grid
            .particles_mut()
            .par_iter_mut()
            .for_each(|p| p.update(&pointer, &physics, floor_y));
    }
    #[cfg(not(feature = "parallel"))]
    {
        for p in scene.grid.particles_mut().iter_mut() {
            p.update(&pointer, &physics, floor_y);
        }
    }

    scene.frame += 1;

    if perf_on {
        scene.perf_stats.particle_count = scene.grid.len() as u32;
        scene.perf_stats.anchored_count = scene.grid.anchored_count() as u32;
        scene.perf_stats.disturbed_count = scene.grid.disturbed_count() as u32;
        scene.perf_stats.frame = scene.frame;
        scene.perf_stats.generation = scene.generation;
        if let Some(start) = step_start {
            scene.perf_stats.step_ms = start.elapsed_ms();
        }
    }
}
