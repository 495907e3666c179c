//! Systems - per-block behavior: glyph classification, pointer input,
//! particle physics

pub mod logo_mask;
pub mod input;
pub mod particle;
