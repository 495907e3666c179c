use crate::core::color::CLEAR_COLOR;

use super::{PerfTimer, SceneCore};

pub(super) fn render(scene: &mut SceneCore) {
    let perf_on = scene.perf_enabled;
    let render_start = if perf_on { Some(PerfTimer::start()) } else { None };

    let canvas = scene.grid.canvas();
    let width = canvas.width as i64;
    let height = canvas.height as i64;

    scene.frame_buffer.fill(CLEAR_COLOR);

    // Later particles paint over earlier ones, same as canvas fillRect order
    for p in scene.grid.particles() {
        let pos = p.position();
        let x = pos.x.floor() as i64;
        let y = pos.y.floor() as i64;
        let size = p.size() as i64;
        fill_rect(&mut scene.frame_buffer, width, height, x, y, size, p.color().to_abgr());
    }

    if let Some(start) = render_start {
        scene.perf_stats.render_ms = start.elapsed_ms();
    }
}

/// Fill a `size` x `size` square clipped to the buffer
fn fill_rect(buffer: &mut [u32], width: i64, height: i64, x: i64, y: i64, size: i64, color: u32) {
    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + size).min(width);
    let y1 = (y + size).min(height);
    if x0 >= x1 || y0 >= y1 {
        return;
    }

    for row in y0..y1 {
        let start = (row * width + x0) as usize;
        let end = (row * width + x1) as usize;
        buffer[start..end].fill(color);
    }
}

pub(super) fn pixel(scene: &SceneCore, x: u32, y: u32) -> Option<u32> {
    let canvas = scene.grid.canvas();
    if x >= canvas.width || y >= canvas.height {
        return None;
    }
    scene
        .frame_buffer
        .get(y as usize * canvas.width as usize + x as usize)
        .copied()
}
