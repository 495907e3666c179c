//! Spatial - block lattice over the canvas

pub mod grid;
