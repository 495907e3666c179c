//! Particle - one image block with its own little state machine
//!
//! - `Anchored`: part of the logo, never moves
//! - `Settled`: eases back toward its origin every step
//! - `Disturbed`: free motion under gravity and friction, for the rest of
//!   the grid generation (only a rebuild or `reset` brings it back)

use crate::core::color::Rgb;
use crate::core::math::Vec2;
use crate::domain::config::PhysicsConfig;
use crate::systems::input::PointerState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParticleState {
    Anchored,
    Settled,
    Disturbed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    origin: Vec2,
    position: Vec2,
    velocity: Vec2,
    color: Rgb,
    size: u32,
    state: ParticleState,
}

impl Particle {
    pub fn new(origin: Vec2, color: Rgb, size: u32, anchored: bool) -> Self {
        Self {
            origin,
            position: origin,
            velocity: Vec2::ZERO,
            color,
            size,
            state: if anchored { ParticleState::Anchored } else { ParticleState::Settled },
        }
    }

    pub fn origin(&self) -> Vec2 { self.origin }

    /// Top-left corner this frame; always `origin` while anchored
    pub fn position(&self) -> Vec2 { self.position }

    pub fn velocity(&self) -> Vec2 { self.velocity }

    /// Displace a block by hand (tests only; anchored blocks stay put)
    #[cfg(test)]
    pub(crate) fn set_position(&mut self, position: Vec2) {
        if self.state != ParticleState::Anchored {
            self.position = position;
        }
    }

    pub fn color(&self) -> Rgb { self.color }

    pub fn size(&self) -> u32 { self.size }

    pub fn state(&self) -> ParticleState { self.state }

    pub fn is_anchored(&self) -> bool {
        self.state == ParticleState::Anchored
    }

    pub fn is_disturbed(&self) -> bool {
        self.state == ParticleState::Disturbed
    }

    /// Advance one frame.
    ///
    /// `floor_y` is the lowest y a disturbed block may reach
    /// (canvas height + floor margin).
    #[inline]
    pub fn update(&mut self, pointer: &PointerState, physics: &PhysicsConfig, floor_y: f32) {
        if self.state == ParticleState::Anchored {
            return;
        }

        // Pushed on every frame the pointer is close, not just the first
        if let Some(impulse) = pointer.repulsion(self.position, physics.repel_force) {
            self.state = ParticleState::Disturbed;
            self.velocity += impulse;
        }

        match self.state {
            ParticleState::Disturbed => {
                self.velocity.y += physics.gravity;
                self.velocity *= physics.friction;
                self.position += self.velocity;

                if self.position.y > floor_y {
                    self.position.y = floor_y;
                }
            }
            ParticleState::Settled => {
                let offset = self.origin - self.position;
                self.position += offset * physics.ease;
            }
            ParticleState::Anchored => {}
        }
    }

    /// Back to origin at rest; anchored blocks stay anchored
    pub fn reset(&mut self) {
        self.position = self.origin;
        self.velocity = Vec2::ZERO;
        if self.state == ParticleState::Disturbed {
            self.state = ParticleState::Settled;
        }
    }
}
