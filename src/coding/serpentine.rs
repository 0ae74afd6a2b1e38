// src/coding/serpentine.rs

//! Anti-diagonal zig-zag traversal of a raster.
//!
//! Cells are visited diagonal by diagonal, alternating direction: even
//! diagonals run up-and-right, odd diagonals down-and-left, so consecutive
//! output entries are always grid neighbours. The order depends only on
//! the raster shape, never on cell contents, and every cell appears
//! exactly once.

use crate::raster::Raster;

/// Returns the raster's cells in serpentine order, one `Vec` entry per
/// cell. Works for any cell type, so it serves both sample grids and
/// color pixmaps. Empty rasters produce an empty sequence.
pub fn serpentine<T: Copy>(grid: &Raster<T>) -> Vec<T> {
    let (width, height) = grid.dimensions();
    let mut out = Vec::with_capacity((width as usize) * (height as usize));
    if grid.is_empty() {
        return out;
    }
    let (w, h) = (width as i64, height as i64);
    for diagonal in 0..(w + h - 1) {
        if diagonal % 2 == 0 {
            // Even diagonals climb up and to the right.
            let mut y = diagonal.min(h - 1);
            let mut x = diagonal - y;
            while y >= 0 && x < w {
                out.push(grid.get(x as u32, y as u32));
                x += 1;
                y -= 1;
            }
        } else {
            // Odd diagonals descend down and to the left.
            let mut x = diagonal.min(w - 1);
            let mut y = diagonal - x;
            while x >= 0 && y < h {
                out.push(grid.get(x as u32, y as u32));
                x -= 1;
                y += 1;
            }
        }
    }
    out
}
