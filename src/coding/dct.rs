// src/coding/dct.rs

//! Type-II discrete cosine transform over 8x8 tiles.
//!
//! Separable: a 1-D pass along rows, then along columns, each pass a
//! multiply by the orthonormal cosine basis matrix. With the orthonormal
//! scaling (DC row weighted by sqrt(1/8), AC rows by sqrt(2/8)) the
//! inverse is the plain transpose and no post-scale is needed. A constant
//! tile concentrates all energy in the DC coefficient at 8x its value.

use std::f64::consts::PI;
use std::sync::OnceLock;

use crate::coding::tiles::{TILE_AREA, TILE_DIM, Tile};
use crate::coding::transform::TileTransform;

const DIM: usize = TILE_DIM as usize;

static COSINE_BASIS: OnceLock<[[f64; DIM]; DIM]> = OnceLock::new();

/// Row `u` holds the length-8 basis vector for frequency `u`,
/// `c(u) * cos(pi * (2x + 1) * u / 16)`.
fn cosine_basis() -> &'static [[f64; DIM]; DIM] {
    COSINE_BASIS.get_or_init(|| {
        let mut basis = [[0.0; DIM]; DIM];
        for (u, row) in basis.iter_mut().enumerate() {
            let scale = if u == 0 {
                (1.0 / DIM as f64).sqrt()
            } else {
                (2.0 / DIM as f64).sqrt()
            };
            for (x, cell) in row.iter_mut().enumerate() {
                *cell = scale * (PI * (2 * x + 1) as f64 * u as f64 / 16.0).cos();
            }
        }
        basis
    })
}

/// The cosine-basis transform variant. Coefficients keep the 8x8 tile
/// shape, in frequency units: DC at (0, 0), horizontal frequency growing
/// along x, vertical along y.
#[derive(Copy, Clone, Debug, Default)]
pub struct Dct;

impl TileTransform for Dct {
    type Coefficients = Tile;

    fn forward(&self, tile: &Tile) -> Tile {
        let basis = cosine_basis();
        let samples = tile.samples();

        let mut rows = [0.0; TILE_AREA];
        for y in 0..DIM {
            for u in 0..DIM {
                let mut acc = 0.0;
                for x in 0..DIM {
                    acc += basis[u][x] * samples[y * DIM + x];
                }
                rows[y * DIM + u] = acc;
            }
        }

        let mut coeffs = [0.0; TILE_AREA];
        for v in 0..DIM {
            for u in 0..DIM {
                let mut acc = 0.0;
                for y in 0..DIM {
                    acc += basis[v][y] * rows[y * DIM + u];
                }
                coeffs[v * DIM + u] = acc;
            }
        }
        Tile::from_samples(coeffs)
    }

    fn inverse(&self, coefficients: &Tile) -> Tile {
        let basis = cosine_basis();
        let coeffs = coefficients.samples();

        // Undo the column pass first, multiplying by the basis transpose.
        let mut rows = [0.0; TILE_AREA];
        for y in 0..DIM {
            for u in 0..DIM {
                let mut acc = 0.0;
                for v in 0..DIM {
                    acc += basis[v][y] * coeffs[v * DIM + u];
                }
                rows[y * DIM + u] = acc;
            }
        }

        let mut samples = [0.0; TILE_AREA];
        for y in 0..DIM {
            for x in 0..DIM {
                let mut acc = 0.0;
                for u in 0..DIM {
                    acc += basis[u][x] * rows[y * DIM + u];
                }
                samples[y * DIM + x] = acc;
            }
        }
        Tile::from_samples(samples)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_is_orthonormal() {
        let basis = cosine_basis();
        for a in 0..DIM {
            for b in 0..DIM {
                let dot: f64 = (0..DIM).map(|x| basis[a][x] * basis[b][x]).sum();
                let expected = if a == b { 1.0 } else { 0.0 };
                assert!((dot - expected).abs() < 1e-12, "rows {a},{b}: {dot}");
            }
        }
    }

    #[test]
    fn constant_tile_concentrates_in_dc() {
        let coeffs = Dct.forward(&Tile::filled(150.0));
        assert!((coeffs.get(0, 0) - 1200.0).abs() < 1e-9);
        for y in 0..TILE_DIM {
            for x in 0..TILE_DIM {
                if (x, y) != (0, 0) {
                    assert!(coeffs.get(x, y).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn round_trip_restores_ramp_and_checker_tiles() {
        let ramp = Tile::from_fn(|x, y| (y * 31 + x * 7) as f64 - 96.0);
        let checker = Tile::from_fn(|x, y| if (x + y) % 2 == 0 { 200.0 } else { -50.0 });
        for tile in [ramp, checker] {
            let back = Dct.roundtrip(&tile);
            for y in 0..TILE_DIM {
                for x in 0..TILE_DIM {
                    assert!((back.get(x, y) - tile.get(x, y)).abs() < 1e-9);
                }
            }
        }
    }

    #[test]
    fn transform_preserves_energy() {
        let tile = Tile::from_fn(|x, y| ((x * 13 + y * 5) % 17) as f64);
        let coeffs = Dct.forward(&tile);
        let spatial: f64 = tile.samples().iter().map(|v| v * v).sum();
        let frequency: f64 = coeffs.samples().iter().map(|v| v * v).sum();
        assert!((spatial - frequency).abs() < 1e-6);
    }
}
