#![forbid(unsafe_code)]

//! Module for working with PNG data.
//!
//! * [Portable Network Graphics Specification (Second Edition)][png-spec]
//!
//! [png-spec]: https://www.w3.org/TR/2003/REC-PNG-20031110/
//!
//! A PNG is a signature followed by a series of "chunks". Each chunk is framed
//! as `length | type | data | crc`, and the type says what the data means.
//!
//! ## Working With Bytes Directly
//!
//! Without the `alloc` feature you still get:
//! * [`RawPngChunkIter`], to walk the chunks of a byte slice.
//! * [`write_chunk`], to frame chunk data (with its CRC) into any [`ByteSink`].
//! * [`PhysicalDimensions`] parsing from, and encoding to, its 9 data bytes.
//!
//! ## Documents
//!
//! With `alloc`, a [`PngDocument`] holds the decoded chunks as [`PngRecord`]
//! values. Decoding checks the rules *between* chunks as well: the header has
//! to come first, and `pHYs` needs the header and may only appear once.
//!
//! ```
//! use png_phys::png::*;
//!
//! let export = ExportData {
//!   physical: Some(PhysicalExport {
//!     x_pixel_per_unit: Some(2835),
//!     y_pixel_per_unit: Some(2835),
//!     unit: Some(1),
//!   }),
//! };
//! let header = IHDR::new(16, 16, 8, PngColorType::RGBA).unwrap();
//! let png = PngDocument::from_export(header, &export).unwrap().encode().unwrap();
//!
//! let doc = PngDocument::decode(&png, true).unwrap();
//! assert_eq!(doc.physical().unwrap().dots_per_inch(), Some((72, 72)));
//! ```
//!
//! ## Strictness
//!
//! Decoding takes a `strict` flag. It only controls checks that a lenient
//! reader could reasonably skip (the signature, CRCs, unknown critical
//! chunks). The rules each chunk type has about itself are always checked.

use core::fmt::{Debug, Display, Write};

use bytemuck::{Pod, Zeroable};
#[cfg(feature = "alloc")]
use tracing::{debug, trace, warn};

#[cfg(feature = "alloc")]
use alloc::{vec, vec::Vec};

use crate::{
  cursor::{ByteCursor, ByteSink},
  int_endian::U32BE,
  PngError, PngResult,
};

mod chunk_ty;
pub use chunk_ty::*;

mod crc32;
pub use crc32::*;

mod raw_chunk;
pub use raw_chunk::*;

mod ihdr;
pub use ihdr::*;

mod phys;
pub use phys::*;

#[cfg(feature = "alloc")]
mod record;
#[cfg(feature = "alloc")]
pub use record::*;

#[cfg(feature = "alloc")]
mod document;
#[cfg(feature = "alloc")]
pub use document::*;

mod interchange;
pub use interchange::*;
