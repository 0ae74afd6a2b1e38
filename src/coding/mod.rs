// src/coding/mod.rs

//! The block coding core: tiling, per-tile transforms, scan order and
//! run-length coding.

pub mod dct;
pub mod haar;
pub mod pipeline;
pub mod rle;
pub mod serpentine;
pub mod tiles;
pub mod transform;

// Re-export the operation surface
pub use dct::Dct;
pub use haar::{Haar, SUB_AREA, SUB_DIM, Subbands};
pub use pipeline::{roundtrip_grid, transform_grid};
pub use rle::{decode_zero_runs, encode_zero_runs};
pub use serpentine::serpentine;
pub use tiles::{
    TILE_AREA, TILE_DIM, Tile, partition, reassemble, reassemble_checked, tile_count, tile_offsets,
};
pub use transform::TileTransform;
