#![no_std]
#![cfg_attr(docs_rs, feature(doc_cfg))]
#![warn(missing_debug_implementations)]

//! A crate for the PNG `pHYs` chunk.
//!
//! The `pHYs` chunk gives the physical size of a pixel: either a density in
//! pixels per meter, or just the pixel aspect ratio. This crate decodes,
//! validates, and encodes it, and carries enough of the PNG chunk container to
//! check the rules it has relative to other chunks (see the [`png`] module).
//!
//! ## Features
//! * `alloc` (default): the owned [`png::PngDocument`] container and the
//!   export / import pipeline.
//! * `serde`: `Serialize` and `Deserialize` for the interchange types.
//! * `cli`: the `png_phys` binary.
//!
//! Run the tests with `--all-features`, otherwise the `interchange_serde`
//! test target (the camelCase field names) is skipped.

#[cfg(feature = "alloc")]
extern crate alloc;

#[cfg(target_pointer_width = "16")]
compile_error!("this crate assumes 32-bit or bigger pointers!");

mod error;
pub use error::*;

pub mod cursor;

pub mod int_endian;

pub mod png;
