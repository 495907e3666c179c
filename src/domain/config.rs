//! SceneConfig - all tunables for a pixel-scatter scene
//!
//! Loaded from JSON (every field optional, missing ones take defaults):
//! ```json
//! { "block_size": 8, "pointer": { "radius": 100 }, "physics": { "gravity": 0.3 } }
//! ```

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Edge length of one block / particle in pixels
    pub block_size: u32,
    pub pointer: PointerConfig,
    pub physics: PhysicsConfig,
    pub layout: LayoutConfig,
    pub logo: LogoConfig,
    /// Candidate image paths, one is picked per page load
    pub images: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PointerConfig {
    /// Influence radius in pixels
    pub radius: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Impulse scale at zero distance
    pub repel_force: f32,
    /// Added to vy every disturbed step
    pub gravity: f32,
    /// Velocity multiplier per disturbed step
    pub friction: f32,
    /// Fraction of the remaining offset closed per settled step
    pub ease: f32,
    /// How far below the canvas a falling block may travel
    pub floor_margin: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub max_width_fraction: f64,
    pub max_height_fraction: f64,
}

/// Glyph geometry for the "S.S" mark, in pixels
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogoConfig {
    pub letter_width: f32,
    pub letter_height: f32,
    pub stroke: f32,
    pub spacing: f32,
    pub dot_size: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            block_size: 8,
            pointer: PointerConfig::default(),
            physics: PhysicsConfig::default(),
            layout: LayoutConfig::default(),
            logo: LogoConfig::default(),
            images: vec![
                "imgs/city_r.jpeg".to_string(),
                "imgs/fence_r.jpeg".to_string(),
                "imgs/ipod_r.jpeg".to_string(),
            ],
        }
    }
}

impl Default for PointerConfig {
    fn default() -> Self {
        Self { radius: 100.0 }
    }
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            repel_force: 8.0,
            gravity: 0.3,
            friction: 0.95,
            ease: 0.1,
            floor_margin: 100.0,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            max_width_fraction: 0.9,
            max_height_fraction: 0.85,
        }
    }
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            letter_width: 100.0,
            letter_height: 150.0,
            stroke: 25.0,
            spacing: 50.0,
            dot_size: 25.0,
        }
    }
}

/// Largest accepted block edge in pixels
pub const MAX_BLOCK_SIZE: u32 = 1024;

impl SceneConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let config: SceneConfig = serde_json::from_str(json).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.block_size == 0 {
            return Err("block_size must be > 0".to_string());
        }
        if self.block_size > MAX_BLOCK_SIZE {
            return Err(format!("block_size must be <= {}", MAX_BLOCK_SIZE));
        }
        if !(self.pointer.radius > 0.0) {
            return Err("pointer.radius must be > 0".to_string());
        }
        let p = &self.physics;
        if !(p.friction > 0.0 && p.friction <= 1.0) {
            return Err("physics.friction must be in (0, 1]".to_string());
        }
        if !(p.ease > 0.0 && p.ease <= 1.0) {
            return Err("physics.ease must be in (0, 1]".to_string());
        }
        if !p.repel_force.is_finite() || !p.gravity.is_finite() || !p.floor_margin.is_finite() {
            return Err("physics values must be finite".to_string());
        }
        let l = &self.layout;
        for (name, v) in [
            ("layout.max_width_fraction", l.max_width_fraction),
            ("layout.max_height_fraction", l.max_height_fraction),
        ] {
            if !(v > 0.0 && v <= 1.0) {
                return Err(format!("{} must be in (0, 1]", name));
            }
        }
        let g = &self.logo;
        if !(g.letter_height > 0.0) {
            return Err("logo.letter_height must be > 0".to_string());
        }
        if g.letter_width < 0.0 || g.stroke < 0.0 || g.spacing < 0.0 || g.dot_size < 0.0 {
            return Err("logo dimensions must be >= 0".to_string());
        }
        Ok(())
    }
}
