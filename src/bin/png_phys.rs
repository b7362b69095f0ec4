//! Prints the chunks of each PNG file given, and what its `pHYs` says.
//!
//! Set `RUST_LOG=trace` to see the decoder's own events.

use png_phys::png::{PngDocument, PngRecord};
use tracing_subscriber::EnvFilter;

fn main() {
  tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).init();

  for file_arg in std::env::args().skip(1) {
    let path = std::path::Path::new(&file_arg);
    print!("Reading `{}`... ", path.display());
    let bytes = match std::fs::read(path) {
      Ok(bytes) => {
        println!("got {} bytes.", bytes.len());
        bytes
      }
      Err(e) => {
        println!("{e}");
        continue;
      }
    };
    let doc = match PngDocument::decode(&bytes, false) {
      Ok(doc) => doc,
      Err(e) => {
        println!("  decode failed: {e}");
        continue;
      }
    };
    for (n, record) in doc.records().iter().enumerate() {
      match record {
        PngRecord::Other { chunk_ty, data } => println!("  {n}: {chunk_ty} ({} bytes)", data.len()),
        other => println!("  {n}: {other:?}"),
      }
    }
    match doc.physical() {
      None => println!("  no pHYs, pixel size is unspecified"),
      Some(phys) => match phys.dots_per_inch() {
        Some((x, y)) => println!(
          "  {} x {} pixels per meter ({x} x {y} DPI)",
          phys.x_pixels_per_unit(),
          phys.y_pixels_per_unit()
        ),
        None => println!(
          "  pixel aspect ratio {} : {}",
          phys.x_pixels_per_unit(),
          phys.y_pixels_per_unit()
        ),
      },
    }
  }
}
