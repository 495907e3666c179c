//! Canvas layout - fit the image aspect ratio inside the viewport

use super::config::LayoutConfig;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CanvasSize {
    pub width: u32,
    pub height: u32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Largest canvas with the image's aspect ratio that fits inside the
/// viewport fractions, floored to whole blocks.
pub fn fit_canvas(
    image_w: u32,
    image_h: u32,
    viewport_w: f64,
    viewport_h: f64,
    layout: &LayoutConfig,
    block_size: u32,
) -> CanvasSize {
    if image_w == 0 || image_h == 0 || block_size == 0 {
        return CanvasSize::default();
    }
    if !(viewport_w > 0.0 && viewport_h > 0.0) {
        return CanvasSize::default();
    }

    let max_w = viewport_w * layout.max_width_fraction;
    let max_h = viewport_h * layout.max_height_fraction;
    let aspect = image_w as f64 / image_h as f64;

    let mut w = max_w;
    let mut h = w / aspect;
    if h > max_h {
        h = max_h;
        w = h * aspect;
    }

    CanvasSize {
        width: floor_to_block(w, block_size),
        height: floor_to_block(h, block_size),
    }
}

fn floor_to_block(v: f64, block_size: u32) -> u32 {
    let block = block_size as f64;
    ((v / block).floor() * block) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_bound_landscape() {
        // 1000x500 viewport -> max 900x425; 2:1 image -> 850x425 -> floored
        let size = fit_canvas(200, 100, 1000.0, 500.0, &LayoutConfig::default(), 8);
        assert_eq!(size, CanvasSize::new(848, 424));
    }

    #[test]
    fn height_bound_portrait() {
        let size = fit_canvas(100, 200, 1000.0, 1000.0, &LayoutConfig::default(), 8);
        // max_h = 850 -> w = 425
        assert_eq!(size, CanvasSize::new(424, 848));
    }

    #[test]
    fn dimensions_are_block_multiples() {
        for (vw, vh) in [(333.0, 777.0), (1920.0, 1080.0), (411.0, 731.0)] {
            let size = fit_canvas(640, 480, vw, vh, &LayoutConfig::default(), 8);
            assert_eq!(size.width % 8, 0);
            assert_eq!(size.height % 8, 0);
        }
    }

    #[test]
    fn degenerate_inputs_give_empty_canvas() {
        let layout = LayoutConfig::default();
        assert_eq!(fit_canvas(0, 100, 800.0, 600.0, &layout, 8), CanvasSize::default());
        assert_eq!(fit_canvas(100, 100, 0.0, 600.0, &layout, 8), CanvasSize::default());
    }
}
