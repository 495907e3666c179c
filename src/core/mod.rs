//! Core - shared primitives (logging macros, vector math, colors)

#[macro_use]
pub mod utils;
pub mod math;
pub mod color;
