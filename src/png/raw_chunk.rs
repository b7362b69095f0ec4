use super::*;

/// The first eight bytes of a PNG datastream should match these bytes.
pub const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Chunk data may not be longer than this.
pub const MAX_CHUNK_LEN: usize = (1 << 31) - 1;

/// An unparsed chunk from a PNG.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct RawPngChunk<'b> {
  pub chunk_ty: PngChunkTy,
  pub data: &'b [u8],
  pub declared_crc: u32,
}
impl RawPngChunk<'_> {
  /// Computes the CRC that the chunk *should* have.
  #[inline]
  #[must_use]
  pub fn actual_crc(&self) -> u32 {
    png_crc(self.chunk_ty.as_bytes(), self.data)
  }
}
impl Debug for RawPngChunk<'_> {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.debug_struct("RawPngChunk")
      .field("chunk_ty", &self.chunk_ty)
      .field("data", &(&self.data[..self.data.len().min(12)], self.data.len()))
      .field("declared_crc", &self.declared_crc)
      .finish()
  }
}

/// An iterator that produces successive raw chunks from PNG bytes.
///
/// Iteration stops at the first chunk that's cut off by the end of the
/// input. Any input at all is fine, it will never panic.
#[derive(Debug, Clone)]
pub struct RawPngChunkIter<'b> {
  cursor: ByteCursor<'b>,
}
impl<'b> RawPngChunkIter<'b> {
  /// Pass the full PNG bytes, the first 8 bytes are skipped whatever they
  /// are. Use [`is_png_signature_correct`] if you want to check them.
  #[inline]
  #[must_use]
  pub const fn new(png: &'b [u8]) -> Self {
    Self::from_chunk_bytes(match png {
      [_, _, _, _, _, _, _, _, rest @ ..] => rest,
      _ => &[],
    })
  }

  /// Iterates over bytes that start directly with a chunk, no signature.
  #[inline]
  #[must_use]
  pub const fn from_chunk_bytes(bytes: &'b [u8]) -> Self {
    Self { cursor: ByteCursor::new(bytes) }
  }

  fn try_next(&mut self) -> PngResult<RawPngChunk<'b>> {
    let len = self.cursor.read_u32_be()? as usize;
    let chunk_ty = PngChunkTy(self.cursor.read_array()?);
    let data = self.cursor.take(len)?;
    let declared_crc = self.cursor.read_u32_be()?;
    Ok(RawPngChunk { chunk_ty, data, declared_crc })
  }
}
impl<'b> Iterator for RawPngChunkIter<'b> {
  type Item = RawPngChunk<'b>;
  #[inline]
  fn next(&mut self) -> Option<Self::Item> {
    match self.try_next() {
      Ok(chunk) => Some(chunk),
      Err(_) => {
        self.cursor = ByteCursor::new(&[]);
        None
      }
    }
  }
}

/// Checks that the bytes begin with [`PNG_SIGNATURE`].
#[inline]
#[must_use]
pub const fn is_png_signature_correct(bytes: &[u8]) -> bool {
  matches!(bytes, [137, 80, 78, 71, 13, 10, 26, 10, ..])
}

/// Writes a whole chunk: length, type, data, and CRC.
pub fn write_chunk<S: ByteSink + ?Sized>(
  sink: &mut S, chunk_ty: PngChunkTy, data: &[u8],
) -> PngResult<()> {
  if data.len() > MAX_CHUNK_LEN {
    return Err(PngError::ChunkTooLarge { chunk: chunk_ty, len: data.len() });
  }
  sink.write_u32_be(data.len() as u32)?;
  sink.write_bytes(chunk_ty.as_bytes())?;
  sink.write_bytes(data)?;
  sink.write_u32_be(png_crc(chunk_ty.as_bytes(), data))
}
