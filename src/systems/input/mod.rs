//! Input tracker - pointer position and the repulsive force field around it
//!
//! Events arrive in client (viewport) coordinates together with the canvas
//! rect's top-left corner, and are stored canvas-local. No smoothing.

use crate::core::math::Vec2;

/// Raw pointer/touch event from the host
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    MouseMove { client: Vec2 },
    MouseLeave,
    /// `primary` is the first touch point, if the event carried any
    TouchStart { primary: Option<Vec2> },
    TouchMove { primary: Option<Vec2> },
    TouchEnd,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    position: Option<Vec2>,
    radius: f32,
}

impl PointerState {
    pub fn new(radius: f32) -> Self {
        Self { position: None, radius }
    }

    pub fn position(&self) -> Option<Vec2> { self.position }

    pub fn radius(&self) -> f32 { self.radius }

    pub fn set_radius(&mut self, radius: f32) {
        self.radius = radius;
    }

    /// Place the pointer directly in canvas coordinates
    pub fn set_position(&mut self, position: Vec2) {
        self.position = Some(position);
    }

    pub fn clear(&mut self) {
        self.position = None;
    }

    /// Apply a host event; `canvas_origin` is the canvas rect's top-left in
    /// client coordinates.
    pub fn handle(&mut self, event: InputEvent, canvas_origin: Vec2) {
        match event {
            InputEvent::MouseMove { client } => self.set_position(client - canvas_origin),
            InputEvent::TouchStart { primary } | InputEvent::TouchMove { primary } => {
                if let Some(client) = primary {
                    self.set_position(client - canvas_origin);
                }
            }
            InputEvent::MouseLeave | InputEvent::TouchEnd => self.clear(),
        }
    }

    /// Velocity impulse the pointer applies to a block at `at`, or `None`
    /// when the pointer is absent or out of range.
    ///
    /// Points away from the pointer; magnitude falls off linearly from
    /// `strength` at the pointer to zero at the radius.
    #[inline]
    pub fn repulsion(&self, at: Vec2, strength: f32) -> Option<Vec2> {
        let pointer = self.position?;
        let d = pointer - at;
        let distance = d.length();
        if distance >= self.radius {
            return None;
        }
        let force = (self.radius - distance) / self.radius;
        let angle = d.y.atan2(d.x);
        Some(Vec2::from_angle(angle) * (-force * strength))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Vec2 = Vec2 { x: 20.0, y: 50.0 };

    #[test]
    fn mouse_move_is_canvas_local() {
        let mut pointer = PointerState::new(100.0);
        pointer.handle(InputEvent::MouseMove { client: Vec2::new(120.0, 150.0) }, ORIGIN);
        assert_eq!(pointer.position(), Some(Vec2::new(100.0, 100.0)));
    }

    #[test]
    fn leave_and_touch_end_clear() {
        let mut pointer = PointerState::new(100.0);
        pointer.handle(InputEvent::MouseMove { client: Vec2::new(30.0, 60.0) }, ORIGIN);
        pointer.handle(InputEvent::MouseLeave, ORIGIN);
        assert_eq!(pointer.position(), None);

        pointer.handle(InputEvent::TouchStart { primary: Some(Vec2::new(30.0, 60.0)) }, ORIGIN);
        assert_eq!(pointer.position(), Some(Vec2::new(10.0, 10.0)));
        pointer.handle(InputEvent::TouchMove { primary: Some(Vec2::new(40.0, 70.0)) }, ORIGIN);
        assert_eq!(pointer.position(), Some(Vec2::new(20.0, 20.0)));
        pointer.handle(InputEvent::TouchEnd, ORIGIN);
        assert_eq!(pointer.position(), None);
    }

    #[test]
    fn touch_without_points_keeps_state() {
        let mut pointer = PointerState::new(100.0);
        pointer.set_position(Vec2::new(5.0, 5.0));
        pointer.handle(InputEvent::TouchMove { primary: None }, ORIGIN);
        assert_eq!(pointer.position(), Some(Vec2::new(5.0, 5.0)));
    }

    #[test]
    fn repulsion_points_away_and_scales_linearly() {
        let mut pointer = PointerState::new(100.0);
        pointer.set_position(Vec2::new(0.0, 0.0));

        let near = pointer.repulsion(Vec2::new(25.0, 0.0), 8.0).expect("in range");
        assert!((near.x - 6.0).abs() < 1e-5);
        assert!(near.y.abs() < 1e-5);

        let far = pointer.repulsion(Vec2::new(0.0, -75.0), 8.0).expect("in range");
        assert!(far.x.abs() < 1e-5);
        assert!((far.y + 2.0).abs() < 1e-5);
    }

    #[test]
    fn no_repulsion_at_or_beyond_radius_or_when_absent() {
        let mut pointer = PointerState::new(100.0);
        assert_eq!(pointer.repulsion(Vec2::new(1.0, 1.0), 8.0), None);
        pointer.set_position(Vec2::ZERO);
        assert_eq!(pointer.repulsion(Vec2::new(100.0, 0.0), 8.0), None);
        assert_eq!(pointer.repulsion(Vec2::new(300.0, 40.0), 8.0), None);
    }
}
