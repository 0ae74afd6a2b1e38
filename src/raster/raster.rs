// src/raster/raster.rs

//! Owned row-major 2-D buffers for image samples.
//!
//! `Raster<T>` is the one backing type for every grid the coding pipeline
//! touches: `SampleGrid` (`Raster<f64>`) holds real-valued samples for the
//! transform pipeline, `Pixmap` (`Raster<Pixel>`) holds RGB cells so scans
//! can walk color images. Cells are stored row-major; `(x, y)` accessors
//! index column-then-row. No operation in the crate mutates a caller's
//! raster in place; everything returns fresh buffers.

use bytemuck::{Pod, Zeroable};

/// A single RGB pixel with 8-bit components.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

unsafe impl Pod for Pixel {}
unsafe impl Zeroable for Pixel {}

impl Pixel {
    pub fn new(r: u8, g: u8, b: u8) -> Self {
        Pixel { r, g, b }
    }

    pub fn black() -> Self {
        Pixel { r: 0, g: 0, b: 0 }
    }

    pub fn white() -> Self {
        Pixel {
            r: 255,
            g: 255,
            b: 255,
        }
    }
}

impl From<[u8; 3]> for Pixel {
    fn from(arr: [u8; 3]) -> Self {
        Pixel {
            r: arr[0],
            g: arr[1],
            b: arr[2],
        }
    }
}

impl From<Pixel> for [u8; 3] {
    fn from(p: Pixel) -> Self {
        [p.r, p.g, p.b]
    }
}

/// A 2-D buffer of cells in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

/// Real-valued sample grid, the input and output of the coding pipeline.
pub type SampleGrid = Raster<f64>;

/// Color image buffer with RGB cells.
pub type Pixmap = Raster<Pixel>;

impl<T: Copy> Raster<T> {
    /// Creates a raster with every cell set to the type's default value.
    pub fn new(width: u32, height: u32) -> Self
    where
        T: Default,
    {
        Raster {
            width,
            height,
            cells: vec![T::default(); (width as usize) * (height as usize)],
        }
    }

    /// Creates a raster filled with a single cell value.
    pub fn filled(width: u32, height: u32, value: T) -> Self {
        Raster {
            width,
            height,
            cells: vec![value; (width as usize) * (height as usize)],
        }
    }

    /// Creates a raster from a raw vector of cells.
    /// Assumes the vector is already in row-major order.
    pub fn from_vec(width: u32, height: u32, cells: Vec<T>) -> Self {
        assert_eq!(cells.len(), (width as usize) * (height as usize));
        Raster {
            width,
            height,
            cells,
        }
    }

    /// Creates a raster by calling a function for each cell.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Self
    where
        F: FnMut(u32, u32) -> T,
    {
        let mut cells = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Raster {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as a tuple (width, height).
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Checks whether the raster has zero width or height.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    pub fn get(&self, x: u32, y: u32) -> T {
        assert!(x < self.width && y < self.height);
        self.cells[(y * self.width + x) as usize]
    }

    pub fn put(&mut self, x: u32, y: u32, value: T) {
        assert!(x < self.width && y < self.height);
        self.cells[(y * self.width + x) as usize] = value;
    }

    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl SampleGrid {
    /// Builds a sample grid from 8-bit grayscale bytes in row-major order.
    pub fn from_gray_bytes(width: u32, height: u32, bytes: &[u8]) -> Self {
        assert_eq!(bytes.len(), (width as usize) * (height as usize));
        Raster {
            width,
            height,
            cells: bytes.iter().map(|&b| b as f64).collect(),
        }
    }

    /// Exports the grid as 8-bit grayscale bytes, rounding each sample to
    /// the nearest integer and clipping to [0, 255]. This is the form an
    /// image writer persists; callers that want the raw numeric data use
    /// [`Raster::cells`] instead.
    pub fn to_gray_bytes(&self) -> Vec<u8> {
        self.cells
            .iter()
            .map(|&v| v.round().clamp(0.0, 255.0) as u8)
            .collect()
    }
}

impl Pixmap {
    /// Collapses the RGB cells to a grayscale sample grid using the
    /// standard luminance weights.
    pub fn to_luma(&self) -> SampleGrid {
        let cells = self
            .cells
            .iter()
            .map(|p| 0.299 * p.r as f64 + 0.587 * p.g as f64 + 0.114 * p.b as f64)
            .collect();
        Raster {
            width: self.width,
            height: self.height,
            cells,
        }
    }

    /// Returns raw pixel data as a byte slice.
    pub fn as_raw(&self) -> &[u8] {
        bytemuck::cast_slice(&self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_is_row_major() {
        let r = Raster::from_fn(3, 2, |x, y| (y * 3 + x) as f64);
        assert_eq!(r.cells(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(r.get(2, 1), 5.0);
    }

    #[test]
    fn gray_bytes_round_and_clip() {
        let grid = SampleGrid::from_vec(4, 1, vec![-3.7, 127.49, 127.5, 300.0]);
        assert_eq!(grid.to_gray_bytes(), vec![0, 127, 128, 255]);
    }

    #[test]
    fn gray_bytes_round_trip_for_integral_samples() {
        let bytes: Vec<u8> = (0..=255).collect();
        let grid = SampleGrid::from_gray_bytes(16, 16, &bytes);
        assert_eq!(grid.to_gray_bytes(), bytes);
    }

    #[test]
    fn pixmap_raw_bytes_are_interleaved_rgb() {
        let pm = Pixmap::from_vec(2, 1, vec![Pixel::new(1, 2, 3), Pixel::new(4, 5, 6)]);
        assert_eq!(pm.as_raw(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn luma_of_white_is_255() {
        let pm = Pixmap::filled(2, 2, Pixel::white());
        let luma = pm.to_luma();
        for &v in luma.cells() {
            assert!((v - 255.0).abs() < 1e-9);
        }
    }

    #[test]
    #[should_panic]
    fn get_out_of_bounds_panics() {
        let r = SampleGrid::new(2, 2);
        r.get(2, 0);
    }
}
