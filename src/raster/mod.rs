// src/raster/mod.rs

//! In-memory raster model: owned 2-D cell buffers and pixel types.

pub mod color;
pub mod raster;

// Re-export commonly used types
pub use color::{rgb_to_yuv, yuv_to_rgb};
pub use raster::{Pixel, Pixmap, Raster, SampleGrid};
