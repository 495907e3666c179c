//! Bitmap - decoded RGBA8 source image
//!
//! The host decodes the image (browser `Image` + `getImageData`) and hands the
//! raw bytes over. Sampling treats the bitmap as if it had been drawn
//! stretched over the whole canvas.

use crate::core::color::Rgb;

#[derive(Clone, Debug, Default)]
pub struct Bitmap {
    width: u32,
    height: u32,
    rgba: Vec<u8>,
}

impl Bitmap {
    pub fn from_rgba(width: u32, height: u32, rgba: Vec<u8>) -> Result<Self, String> {
        let expected = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| format!("bitmap {}x{} is too large", width, height))?;
        if rgba.len() != expected {
            return Err(format!(
                "bitmap {}x{} needs {} bytes, got {}",
                width,
                height,
                expected,
                rgba.len()
            ));
        }
        Ok(Self { width, height, rgba })
    }

    /// Stand-in used before any image has loaded
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn width(&self) -> u32 { self.width }

    pub fn height(&self) -> u32 { self.height }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Color at source pixel (x, y), clamped to bounds
    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        if self.is_empty() {
            return Rgb::BLACK;
        }
        let x = x.min(self.width - 1) as usize;
        let y = y.min(self.height - 1) as usize;
        let i = (y * self.width as usize + x) * 4;
        Rgb::new(self.rgba[i], self.rgba[i + 1], self.rgba[i + 2])
    }

    /// Color at canvas pixel (cx, cy) with the bitmap stretched to
    /// `canvas_w` x `canvas_h` (nearest neighbour)
    pub fn sample_stretched(&self, cx: u32, cy: u32, canvas_w: u32, canvas_h: u32) -> Rgb {
        if self.is_empty() || canvas_w == 0 || canvas_h == 0 {
            return Rgb::BLACK;
        }
        let sx = (cx as u64 * self.width as u64 / canvas_w as u64) as u32;
        let sy = (cy as u64 * self.height as u64 / canvas_h as u64) as u32;
        self.pixel(sx, sy)
    }
}
