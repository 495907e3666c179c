//! Domain - scene configuration, source bitmaps, layout and asset choice

pub mod config;
pub mod bitmap;
pub mod layout;
pub mod assets;
