// src/coding/haar.rs

//! Single-level 2-D Haar wavelet transform over 8x8 tiles.
//!
//! One lifting pass along rows and one along columns, with the
//! orthonormal 1/sqrt(2) scaling, splits a tile into four 4x4 sub-bands:
//! the low-pass approximation plus horizontal, vertical and diagonal
//! detail. Naming follows the usual wavelet convention: the horizontal
//! band is high-pass along y and low-pass along x, so horizontal stripes
//! land there, and vice versa for the vertical band.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::coding::tiles::{TILE_AREA, TILE_DIM, Tile};
use crate::coding::transform::TileTransform;

const DIM: usize = TILE_DIM as usize;
const HALF: usize = DIM / 2;

/// Sub-band edge length in samples.
pub const SUB_DIM: u32 = TILE_DIM / 2;
/// Samples per sub-band.
pub const SUB_AREA: usize = (SUB_DIM * SUB_DIM) as usize;

/// The four 4x4 sub-bands of a Haar-transformed tile, each row-major.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Subbands {
    /// Low-pass in both directions; a half-resolution copy of the tile
    /// scaled by 2.
    pub approx: [f64; SUB_AREA],
    /// Horizontal detail (high-pass along y).
    pub horiz: [f64; SUB_AREA],
    /// Vertical detail (high-pass along x).
    pub vert: [f64; SUB_AREA],
    /// Diagonal detail (high-pass in both directions).
    pub diag: [f64; SUB_AREA],
}

/// The wavelet-basis transform variant. Coefficients are four 4x4
/// sub-bands rather than an 8x8 block, so they are not interchangeable
/// with the cosine variant's.
#[derive(Copy, Clone, Debug, Default)]
pub struct Haar;

impl TileTransform for Haar {
    type Coefficients = Subbands;

    fn forward(&self, tile: &Tile) -> Subbands {
        let samples = tile.samples();

        // Row pass: each row of 8 becomes 4 lows then 4 highs.
        let mut rows = [0.0; TILE_AREA];
        for y in 0..DIM {
            for i in 0..HALF {
                let a = samples[y * DIM + 2 * i];
                let b = samples[y * DIM + 2 * i + 1];
                rows[y * DIM + i] = (a + b) * FRAC_1_SQRT_2;
                rows[y * DIM + HALF + i] = (a - b) * FRAC_1_SQRT_2;
            }
        }

        // Column pass: top half low, bottom half high.
        let mut quads = [0.0; TILE_AREA];
        for x in 0..DIM {
            for i in 0..HALF {
                let a = rows[(2 * i) * DIM + x];
                let b = rows[(2 * i + 1) * DIM + x];
                quads[i * DIM + x] = (a + b) * FRAC_1_SQRT_2;
                quads[(HALF + i) * DIM + x] = (a - b) * FRAC_1_SQRT_2;
            }
        }

        let mut bands = Subbands {
            approx: [0.0; SUB_AREA],
            horiz: [0.0; SUB_AREA],
            vert: [0.0; SUB_AREA],
            diag: [0.0; SUB_AREA],
        };
        for y in 0..HALF {
            for x in 0..HALF {
                bands.approx[y * HALF + x] = quads[y * DIM + x];
                bands.vert[y * HALF + x] = quads[y * DIM + HALF + x];
                bands.horiz[y * HALF + x] = quads[(HALF + y) * DIM + x];
                bands.diag[y * HALF + x] = quads[(HALF + y) * DIM + HALF + x];
            }
        }
        bands
    }

    fn inverse(&self, coefficients: &Subbands) -> Tile {
        // Lay the sub-bands back out as quadrants.
        let mut quads = [0.0; TILE_AREA];
        for y in 0..HALF {
            for x in 0..HALF {
                quads[y * DIM + x] = coefficients.approx[y * HALF + x];
                quads[y * DIM + HALF + x] = coefficients.vert[y * HALF + x];
                quads[(HALF + y) * DIM + x] = coefficients.horiz[y * HALF + x];
                quads[(HALF + y) * DIM + HALF + x] = coefficients.diag[y * HALF + x];
            }
        }

        // The 1-D step is its own inverse up to the same scaling, so each
        // pass below is the exact adjoint of the forward pass.
        let mut rows = [0.0; TILE_AREA];
        for x in 0..DIM {
            for i in 0..HALF {
                let low = quads[i * DIM + x];
                let high = quads[(HALF + i) * DIM + x];
                rows[(2 * i) * DIM + x] = (low + high) * FRAC_1_SQRT_2;
                rows[(2 * i + 1) * DIM + x] = (low - high) * FRAC_1_SQRT_2;
            }
        }

        let mut samples = [0.0; TILE_AREA];
        for y in 0..DIM {
            for i in 0..HALF {
                let low = rows[y * DIM + i];
                let high = rows[y * DIM + HALF + i];
                samples[y * DIM + 2 * i] = (low + high) * FRAC_1_SQRT_2;
                samples[y * DIM + 2 * i + 1] = (low - high) * FRAC_1_SQRT_2;
            }
        }
        Tile::from_samples(samples)
    }
}
