/// Closed interval, both ends inclusive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Span {
    pub min: f32,
    pub max: f32,
}

impl Span {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    #[inline]
    pub fn contains(&self, v: f32) -> bool {
        v >= self.min && v <= self.max
    }
}

/// Axis-aligned stroke rectangle in glyph-local coordinates
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeRect {
    pub x: Span,
    pub y: Span,
}

impl StrokeRect {
    pub const fn new(x: Span, y: Span) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.x.contains(x) && self.y.contains(y)
    }
}

/// Horizontal slice of a letterform with the strokes drawn inside it
#[derive(Clone, Debug, PartialEq)]
pub struct Band {
    pub y: Span,
    pub strokes: Vec<StrokeRect>,
}

impl Band {
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.y.contains(y) && self.strokes.iter().any(|s| s.contains(x, y))
    }
}

/// A letterform centred on its local origin
#[derive(Clone, Debug, PartialEq)]
pub struct Letterform {
    bands: Vec<Band>,
}

impl Letterform {
    /// Geometric "S": caps top and bottom, one curve transition on each side,
    /// a bar across the middle.
    pub fn s_shape(width: f32, height: f32, stroke: f32) -> Self {
        let hw = width / 2.0;
        let hh = height / 2.0;
        let section = height / 5.0;

        let full_x = Span::new(-hw, hw);
        let left_x = Span::new(-hw, -hw + stroke);
        let right_x = Span::new(hw - stroke, hw);

        let top = Span::new(-hh, -hh + section);
        let upper = Span::new(-hh + section, -hh + section * 2.0);
        let middle = Span::new(-stroke / 2.0, stroke / 2.0);
        let lower = Span::new(hh - section * 2.0, hh - section);
        let bottom = Span::new(hh - section, hh);

        let bands = vec![
            Band {
                y: top,
                strokes: vec![
                    StrokeRect::new(full_x, Span::new(-hh, -hh + stroke)),
                    StrokeRect::new(left_x, top),
                    StrokeRect::new(right_x, Span::new(-hh, -hh + stroke * 1.5)),
                ],
            },
            Band {
                y: upper,
                strokes: vec![StrokeRect::new(left_x, upper)],
            },
            Band {
                y: middle,
                strokes: vec![StrokeRect::new(full_x, middle)],
            },
            Band {
                y: lower,
                strokes: vec![StrokeRect::new(right_x, lower)],
            },
            Band {
                y: bottom,
                strokes: vec![
                    StrokeRect::new(full_x, Span::new(hh - stroke, hh)),
                    StrokeRect::new(right_x, bottom),
                    StrokeRect::new(left_x, Span::new(hh - stroke * 1.5, hh)),
                ],
            },
        ];

        Self { bands }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Bands may overlap, membership is an OR over all of them
    #[inline]
    pub fn contains(&self, x: f32, y: f32) -> bool {
        self.bands.iter().any(|b| b.contains(x, y))
    }
}
