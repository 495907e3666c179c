//! LogoMask - classifies blocks that belong to the "S.S" mark
//!
//! Pure geometry: two S letterforms placed at ±(letter_width + spacing)
//! from the canvas center and a square dot between them sitting on the
//! letters' baseline. Blocks inside the mark become anchored particles.

mod glyph;

pub use glyph::{Band, Letterform, Span, StrokeRect};

use crate::domain::config::LogoConfig;

#[derive(Clone, Debug, PartialEq)]
pub struct LogoMask {
    letter: Letterform,
    letter_centers: [f32; 2],
    dot: StrokeRect,
}

impl LogoMask {
    pub fn new(logo: &LogoConfig) -> Self {
        let offset = logo.letter_width + logo.spacing;
        let half_dot = logo.dot_size / 2.0;
        let baseline = logo.letter_height / 2.0;

        Self {
            letter: Letterform::s_shape(logo.letter_width, logo.letter_height, logo.stroke),
            letter_centers: [-offset, offset],
            dot: StrokeRect::new(
                Span::new(-half_dot, half_dot),
                Span::new(baseline - logo.dot_size, baseline),
            ),
        }
    }

    /// Is the block at canvas position (x, y) part of the mark?
    pub fn is_anchored(&self, x: f32, y: f32, canvas_width: f32, canvas_height: f32) -> bool {
        self.contains_relative(x - canvas_width / 2.0, y - canvas_height / 2.0)
    }

    /// Membership for a point relative to the canvas center
    pub fn contains_relative(&self, rx: f32, ry: f32) -> bool {
        if self.dot.contains(rx, ry) {
            return true;
        }
        self.letter_centers
            .iter()
            .any(|cx| self.letter.contains(rx - cx, ry))
    }
}

impl Default for LogoMask {
    fn default() -> Self {
        Self::new(&LogoConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: f32 = 800.0;
    const H: f32 = 400.0;

    #[test]
    fn canvas_center_row_hits_mid_bars_only() {
        let mask = LogoMask::default();
        // Mid-bar of the right S spans x in [100, 200]
        assert!(mask.contains_relative(150.0, 0.0));
        assert!(mask.contains_relative(100.0, 0.0));
        assert!(mask.contains_relative(-200.0, 0.0));
        // Gap between the letters (dot sits lower)
        assert!(!mask.contains_relative(0.0, 0.0));
        assert!(!mask.contains_relative(201.0, 0.0));
    }

    #[test]
    fn dot_sits_on_baseline() {
        let mask = LogoMask::default();
        assert!(mask.contains_relative(0.0, 62.5));
        assert!(mask.contains_relative(12.5, 50.0));
        assert!(mask.contains_relative(-12.5, 75.0));
        assert!(!mask.contains_relative(0.0, 49.0));
        assert!(!mask.contains_relative(13.0, 60.0));
    }

    #[test]
    fn curve_transitions_are_one_sided() {
        let mask = LogoMask::default();
        // Left S (center -150): upper transition on the left edge only
        assert!(mask.contains_relative(-150.0 - 40.0, -30.0));
        assert!(!mask.contains_relative(-150.0 + 40.0, -30.0));
        // lower transition on the right edge only
        assert!(mask.contains_relative(-150.0 + 40.0, 30.0));
        assert!(!mask.contains_relative(-150.0 - 40.0, 30.0));
    }

    #[test]
    fn top_right_stroke_is_clipped_to_cap_band() {
        let mask = LogoMask::default();
        // stroke reaches -75 + 37.5 but the cap band ends at -45
        assert!(mask.contains_relative(150.0 + 40.0, -45.0));
        assert!(!mask.contains_relative(150.0 + 40.0, -40.0));
    }

    #[test]
    fn far_corners_are_never_anchored() {
        let mask = LogoMask::default();
        assert!(!mask.is_anchored(0.0, 0.0, W, H));
        assert!(!mask.is_anchored(W - 8.0, H - 8.0, W, H));
    }

    #[test]
    fn mirrored_rows_are_symmetric() {
        let mask = LogoMask::default();
        let (cx, cy) = (W / 2.0, H / 2.0);
        let rows = (-75..=-45).chain(-12..=12).chain(45..=75);
        for dy in rows {
            let y = cy + dy as f32;
            for d in 0..=320 {
                let d = d as f32;
                assert_eq!(
                    mask.is_anchored(cx - d, y, W, H),
                    mask.is_anchored(cx + d, y, W, H),
                    "row {} offset {}",
                    dy,
                    d
                );
            }
        }
    }

    #[test]
    fn letters_are_point_symmetric() {
        let mask = LogoMask::default();
        for v in -80..=80 {
            for u in 13..=220 {
                let (u, v) = (u as f32, v as f32);
                assert_eq!(
                    mask.contains_relative(u, v),
                    mask.contains_relative(-u, -v),
                    "({}, {})",
                    u,
                    v
                );
            }
        }
    }

    #[test]
    fn zero_stroke_leaves_only_degenerate_lines() {
        let logo = LogoConfig { stroke: 0.0, dot_size: 0.0, ..LogoConfig::default() };
        let mask = LogoMask::new(&logo);
        assert!(!mask.contains_relative(150.0, 30.0));
        assert!(mask.contains_relative(150.0, 0.0));
    }
}
