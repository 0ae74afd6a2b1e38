// src/coding/pipeline.rs

//! Whole-grid runs of the per-tile transforms.
//!
//! Ties the tiling and transform layers together: partition the grid,
//! push every tile through the chosen transform, and for round trips
//! reassemble at the source dimensions. Tiles are independent, so with
//! the `rayon` feature the per-tile map runs on a parallel iterator;
//! output order is the row-major tile order either way.

use crate::coding::tiles::{self, Tile};
use crate::coding::transform::TileTransform;
use crate::raster::SampleGrid;

/// Partitions the grid and forward-transforms every tile, returning
/// coefficients in row-major tile order.
pub fn transform_grid<T>(grid: &SampleGrid, transform: &T) -> Vec<T::Coefficients>
where
    T: TileTransform + Sync,
    T::Coefficients: Send,
{
    let tiles = tiles::partition(grid);
    #[cfg(feature = "rayon")]
    let coefficients = {
        use rayon::prelude::*;
        tiles.par_iter().map(|tile| transform.forward(tile)).collect()
    };
    #[cfg(not(feature = "rayon"))]
    let coefficients = tiles.iter().map(|tile| transform.forward(tile)).collect();
    coefficients
}

/// Partitions the grid, runs every tile forward and back through the
/// transform, and reassembles at the source dimensions. For grids whose
/// dimensions are multiples of 8 the result matches the input to within
/// floating-point tolerance; truncated border samples come back as zero.
pub fn roundtrip_grid<T>(grid: &SampleGrid, transform: &T) -> SampleGrid
where
    T: TileTransform + Sync,
{
    let tiles = tiles::partition(grid);
    #[cfg(feature = "rayon")]
    let restored: Vec<Tile> = {
        use rayon::prelude::*;
        tiles.par_iter().map(|tile| transform.roundtrip(tile)).collect()
    };
    #[cfg(not(feature = "rayon"))]
    let restored: Vec<Tile> = tiles.iter().map(|tile| transform.roundtrip(tile)).collect();

    let (width, height) = grid.dimensions();
    tiles::reassemble(&restored, width, height)
}
