// src/coding/tiles.rs

//! Fixed 8x8 tiling of sample grids.
//!
//! `partition` slices a grid into full tiles at offsets that are multiples
//! of 8, dropping any trailing rows or columns that do not fill a tile.
//! That truncation is policy, not an error: the dropped samples are not
//! recoverable from the tile sequence. `reassemble` walks the same offsets
//! in the same order and writes tiles back over a zero-filled grid, so
//! `reassemble(partition(g), w, h)` reproduces `g` exactly whenever both
//! dimensions are multiples of 8.

use crate::raster::SampleGrid;
use crate::utils::{CoderError, Result};

/// Tile edge length in samples.
pub const TILE_DIM: u32 = 8;
/// Samples per tile.
pub const TILE_AREA: usize = (TILE_DIM * TILE_DIM) as usize;

/// A fixed 8x8 block of samples in row-major order.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Tile {
    samples: [f64; TILE_AREA],
}

impl Tile {
    /// Wraps a row-major sample array as a tile.
    pub fn from_samples(samples: [f64; TILE_AREA]) -> Self {
        Tile { samples }
    }

    /// Creates a tile with every sample set to one value.
    pub fn filled(value: f64) -> Self {
        Tile {
            samples: [value; TILE_AREA],
        }
    }

    /// Creates a tile by calling a function for each (x, y) position.
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> f64,
    {
        let mut samples = [0.0; TILE_AREA];
        for y in 0..TILE_DIM {
            for x in 0..TILE_DIM {
                samples[(y * TILE_DIM + x) as usize] = f(x, y);
            }
        }
        Tile { samples }
    }

    /// Copies an exactly 8x8 grid into a tile.
    pub fn from_grid(grid: &SampleGrid) -> Result<Self> {
        if grid.dimensions() != (TILE_DIM, TILE_DIM) {
            return Err(CoderError::ShapeMismatch {
                expected: (TILE_DIM, TILE_DIM),
                actual: grid.dimensions(),
            });
        }
        Ok(Tile::from_fn(|x, y| grid.get(x, y)))
    }

    pub fn get(&self, x: u32, y: u32) -> f64 {
        assert!(x < TILE_DIM && y < TILE_DIM);
        self.samples[(y * TILE_DIM + x) as usize]
    }

    pub fn samples(&self) -> &[f64; TILE_AREA] {
        &self.samples
    }
}

/// Iterates the top-left offsets of every full tile in a grid of the given
/// dimensions, row-major. Offsets whose remaining region is smaller than
/// 8x8 are never produced.
pub fn tile_offsets(width: u32, height: u32) -> impl Iterator<Item = (u32, u32)> {
    let cols = width / TILE_DIM;
    let rows = height / TILE_DIM;
    (0..rows).flat_map(move |r| (0..cols).map(move |c| (c * TILE_DIM, r * TILE_DIM)))
}

/// Number of full tiles a grid of the given dimensions partitions into.
pub fn tile_count(width: u32, height: u32) -> usize {
    ((width / TILE_DIM) as usize) * ((height / TILE_DIM) as usize)
}

/// Slices a grid into full 8x8 tiles in row-major offset order.
/// Grids smaller than 8x8 in either dimension yield an empty sequence.
pub fn partition(grid: &SampleGrid) -> Vec<Tile> {
    let (width, height) = grid.dimensions();
    tile_offsets(width, height)
        .map(|(ox, oy)| Tile::from_fn(|x, y| grid.get(ox + x, oy + y)))
        .collect()
}

/// Writes a tile sequence back over a zero-filled grid of the given
/// dimensions, consuming tiles in the row-major offset order `partition`
/// produces them. Tile count is not validated: extra tiles are ignored
/// and missing tiles leave their region at the zero fill. Callers that
/// want the count enforced use [`reassemble_checked`].
pub fn reassemble(tiles: &[Tile], width: u32, height: u32) -> SampleGrid {
    let slots = tile_count(width, height);
    if tiles.len() != slots {
        log::debug!(
            "reassemble: {} tiles supplied for {} slots in a {}x{} grid",
            tiles.len(),
            slots,
            width,
            height
        );
    }
    let mut grid = SampleGrid::new(width, height);
    for ((ox, oy), tile) in tile_offsets(width, height).zip(tiles) {
        for y in 0..TILE_DIM {
            for x in 0..TILE_DIM {
                grid.put(ox + x, oy + y, tile.get(x, y));
            }
        }
    }
    grid
}

/// Like [`reassemble`], but fails when the tile count does not match the
/// number of full-tile slots for the given dimensions.
pub fn reassemble_checked(tiles: &[Tile], width: u32, height: u32) -> Result<SampleGrid> {
    let expected = tile_count(width, height);
    if tiles.len() != expected {
        return Err(CoderError::TileCountMismatch {
            expected,
            actual: tiles.len(),
        });
    }
    Ok(reassemble(tiles, width, height))
}
