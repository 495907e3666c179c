//! RGB color with ABGR packing
//!
//! ABGR (little-endian 0xAABBGGRR -> bytes [RR,GG,BB,AA]) lets the host copy
//! the framebuffer straight into canvas `ImageData`.

/// Fully transparent pixel, what `clearRect` leaves behind
pub const CLEAR_COLOR: u32 = 0x0000_0000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Opaque ABGR packing
    #[inline]
    pub fn to_abgr(self) -> u32 {
        0xFF00_0000 | ((self.b as u32) << 16) | ((self.g as u32) << 8) | (self.r as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn abgr_byte_order_matches_canvas() {
        let packed = Rgb::new(0x11, 0x22, 0x33).to_abgr();
        assert_eq!(packed.to_le_bytes(), [0x11, 0x22, 0x33, 0xFF]);
    }
}
