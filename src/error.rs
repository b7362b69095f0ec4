use thiserror::Error;

use crate::png::PngChunkTy;

/// An error from the `png_phys` crate.
///
/// All variants are plain data, so errors can be made and returned without
/// the `alloc` feature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PngError {
  /// A unit identifier other than "unknown" (0) or "meter" (1).
  #[error("unit identifier {0} is not valid")]
  InvalidUnit(u8),

  /// The chunk can only appear after an `IHDR` chunk.
  #[error("chunk {chunk} requires the IHDR chunk")]
  MissingHeader { chunk: PngChunkTy },

  /// A chunk the container was required to have isn't there.
  #[error("the required chunk {chunk} is missing")]
  MissingChunk { chunk: PngChunkTy },

  /// A chunk that may appear at most once appeared again.
  #[error("only one {chunk} is allowed in the data")]
  DuplicateChunk { chunk: PngChunkTy },

  /// The framing declared a data length this chunk type can't have.
  #[error("the length of chunk {chunk} should be {expected}, but got {actual}")]
  BadChunkLength { chunk: PngChunkTy, expected: u32, actual: u32 },

  /// Input ran out in the middle of a read.
  #[error("unexpected end of input")]
  UnexpectedEnd,

  /// The first eight bytes are not the PNG signature.
  #[error("the data does not start with the PNG signature")]
  BadSignature,

  /// The CRC stored after a chunk doesn't match its type and data.
  #[error("chunk {chunk} declares crc {declared:#010X}, but the actual crc is {actual:#010X}")]
  CrcMismatch { chunk: PngChunkTy, declared: u32, actual: u32 },

  /// A critical chunk that this crate doesn't know how to handle.
  #[error("unknown critical chunk {chunk}")]
  UnknownCriticalChunk { chunk: PngChunkTy },

  /// `IHDR` has to be the first chunk of the datastream.
  #[error("the IHDR chunk must be the first chunk")]
  HeaderNotFirst,

  /// Bytes left over after the `IEND` chunk (strict decoding only).
  #[error("{len} bytes of data after the IEND chunk")]
  DataAfterEnd { len: usize },

  /// The `IHDR` fields don't describe a legal image.
  #[error("the IHDR chunk is not valid")]
  InvalidHeader,

  /// Chunk data may be at most `2^31 - 1` bytes.
  #[error("chunk {chunk} has {len} bytes of data, which is too large")]
  ChunkTooLarge { chunk: PngChunkTy, len: usize },
}

/// Shorthand for results within this crate.
pub type PngResult<T> = Result<T, PngError>;
