// demos/scan_and_rle.rs
// Serpentine-scan a small color image and run-length code a sample sequence.

use blockcoder::{Pixel, Pixmap, decode_zero_runs, encode_zero_runs, serpentine};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    println!("=== Serpentine Scan ===\n");

    let width = 12u32;
    let height = 9u32;
    let pm = Pixmap::from_fn(width, height, |x, y| {
        Pixel::new((x * 20) as u8, (y * 25) as u8, ((x + y) * 10) as u8)
    });
    let scan = serpentine(&pm);
    println!("Scanned {}x{} image into {} pixels", width, height, scan.len());

    println!("First 50 entries:");
    let entries: Vec<(u8, u8, u8)> = scan.iter().take(50).map(|p| (p.r, p.g, p.b)).collect();
    for chunk in entries.chunks(10) {
        println!("  {:?}", chunk);
    }

    println!("\n=== Zero-Run Coding ===\n");

    let data = vec![17, 8, 54, 0, 0, 0, 97, 5, 16, 0, 45, 23, 0, 0, 0, 67, 0, 8];
    let encoded = encode_zero_runs(&data);
    println!("Original: {:?}", data);
    println!("Encoded:  {:?}", encoded);
    println!(
        "Decoded matches original: {}",
        decode_zero_runs(&encoded)? == data
    );

    Ok(())
}
