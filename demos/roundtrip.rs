// demos/roundtrip.rs
// Run a synthetic grayscale image through both transform pipelines and
// report reconstruction accuracy.

use blockcoder::{Dct, Haar, SampleGrid, TILE_DIM, roundtrip_grid, tile_count, transform_grid};
use image::GrayImage;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Block Transform Round Trip ===\n");

    let width = 64u32;
    let height = 48u32;
    let grid = SampleGrid::from_fn(width, height, |x, y| {
        128.0 + 96.0 * (x as f64 / 9.0).sin() * (y as f64 / 7.0).cos()
    });
    println!(
        "Created {}x{} gradient image ({} tiles)",
        width,
        height,
        tile_count(width, height)
    );

    let coeffs = transform_grid(&grid, &Dct);
    if let Some(first) = coeffs.first() {
        let row: Vec<i64> = (0..TILE_DIM).map(|x| first.get(x, 0).round() as i64).collect();
        println!("First tile cosine coefficients, top row (rounded): {:?}", row);
    }

    let dct_back = roundtrip_grid(&grid, &Dct);
    let haar_back = roundtrip_grid(&grid, &Haar);

    println!("\nMax reconstruction error:");
    println!("  cosine:  {:.3e}", max_abs_error(&grid, &dct_back));
    println!("  wavelet: {:.3e}", max_abs_error(&grid, &haar_back));

    let out_dir = std::env::temp_dir();
    let input_path = out_dir.join("blockcoder_input.png");
    let dct_path = out_dir.join("blockcoder_dct_roundtrip.png");
    let haar_path = out_dir.join("blockcoder_haar_roundtrip.png");

    save_gray(&grid, &input_path)?;
    save_gray(&dct_back, &dct_path)?;
    save_gray(&haar_back, &haar_path)?;

    println!("\nSaved:");
    println!("  {}", input_path.display());
    println!("  {}", dct_path.display());
    println!("  {}", haar_path.display());

    Ok(())
}

fn max_abs_error(a: &SampleGrid, b: &SampleGrid) -> f64 {
    a.cells()
        .iter()
        .zip(b.cells())
        .map(|(p, q)| (p - q).abs())
        .fold(0.0, f64::max)
}

fn save_gray(grid: &SampleGrid, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
    let (width, height) = grid.dimensions();
    let img = GrayImage::from_raw(width, height, grid.to_gray_bytes())
        .ok_or("raster size does not match byte buffer")?;
    img.save(path)?;
    Ok(())
}
