//! A Rust library for block-wise transform coding of image sample grids.
//!
//! This crate provides the core of a classical image coder: fixed 8x8
//! tiling of a sample grid, a pair of interchangeable orthogonal per-tile
//! transforms, anti-diagonal serpentine traversal, and run-length coding
//! of zero runs.
//!
//! # Quick Start
//!
//! ```
//! use blockcoder::{Dct, SampleGrid, roundtrip_grid};
//!
//! // A synthetic grayscale grid; any multiple-of-8 shape survives intact.
//! let grid = SampleGrid::from_fn(16, 16, |x, y| (x * 3 + y * 5) as f64);
//!
//! // Tile it, run every tile through the transform and back, reassemble.
//! let restored = roundtrip_grid(&grid, &Dct);
//! assert_eq!(restored.dimensions(), grid.dimensions());
//! for (a, b) in grid.cells().iter().zip(restored.cells()) {
//!     assert!((a - b).abs() < 1e-6);
//! }
//! ```
//!
//! # Features
//!
//! - **Fixed 8x8 tiling**: Partition and reassembly with a documented
//!   truncation policy for non-multiple-of-8 grids
//! - **Two transform variants**: Cosine basis (8x8 coefficients) and Haar
//!   wavelet (four 4x4 sub-bands), both orthonormal with exact inverses
//! - **Serpentine traversal**: Anti-diagonal zig-zag scan of any raster
//! - **Zero-run coding**: Reversible `[0, run_length]` compression
//! - **Optional parallelism**: Enable the `rayon` feature for parallel
//!   per-tile transforms
//!
//! # Transforms
//!
//! Both variants satisfy the same round-trip contract (absolute error
//! below 1e-6 at pixel-range magnitudes), but their coefficient layouts
//! differ and are not interchangeable: [`Dct`] keeps the 8x8 block shape
//! while [`Haar`] splits a tile into approximation, horizontal, vertical
//! and diagonal sub-bands.

// Core modules
pub mod coding;
pub mod raster;
pub mod utils;

// Coding surface
pub use coding::{
    Dct, Haar, SUB_AREA, SUB_DIM, Subbands, TILE_AREA, TILE_DIM, Tile, TileTransform,
    decode_zero_runs, encode_zero_runs, partition, reassemble, reassemble_checked, roundtrip_grid,
    serpentine, tile_count, tile_offsets, transform_grid,
};

// Raster and color types
pub use raster::{Pixel, Pixmap, Raster, SampleGrid, rgb_to_yuv, yuv_to_rgb};

// Error types
pub use utils::{CoderError, Result};

// Constants
pub const BLOCKCODER_VERSION: &str = "0.3.0";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert_eq!(BLOCKCODER_VERSION, "0.3.0");
    }

    #[test]
    fn test_public_api_partition_reassemble() {
        let grid = SampleGrid::from_fn(16, 8, |x, y| (y * 16 + x) as f64);
        let tiles = partition(&grid);
        assert_eq!(tiles.len(), tile_count(16, 8));
        assert_eq!(reassemble(&tiles, 16, 8), grid);
    }

    #[test]
    fn test_scan_then_rle_composition() {
        // The classical coder chain: traverse a grid, then run-length
        // code the scan. Decode restores the scan exactly.
        let grid = SampleGrid::from_fn(8, 8, |x, y| {
            if (x + y) % 3 == 0 { 0.0 } else { (x + y) as f64 }
        });
        let scan: Vec<i32> = serpentine(&grid).iter().map(|&v| v as i32).collect();
        let encoded = encode_zero_runs(&scan);
        assert!(encoded.len() < scan.len());
        assert_eq!(decode_zero_runs(&encoded).unwrap(), scan);
    }
}
