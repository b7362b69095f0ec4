//! Byte level reading and writing.
//!
//! PNG stores every multi-byte integer as big-endian, so that's all these
//! types support.

use crate::{PngError, PngResult};

/// Reads values out of a borrowed byte slice.
///
/// A read that would go past the end of the slice fails with
/// [`PngError::UnexpectedEnd`] and leaves the cursor where it was.
#[derive(Debug, Clone)]
pub struct ByteCursor<'b> {
  bytes: &'b [u8],
  pos: usize,
}
impl<'b> ByteCursor<'b> {
  #[inline]
  #[must_use]
  pub const fn new(bytes: &'b [u8]) -> Self {
    Self { bytes, pos: 0 }
  }

  /// How many bytes have been consumed so far.
  #[inline]
  #[must_use]
  pub const fn position(&self) -> usize {
    self.pos
  }

  /// The bytes not yet consumed.
  #[inline]
  #[must_use]
  pub fn remaining(&self) -> &'b [u8] {
    &self.bytes[self.pos..]
  }

  /// Consumes `n` bytes and gives them back as a slice.
  #[inline]
  pub fn take(&mut self, n: usize) -> PngResult<&'b [u8]> {
    let rest = self.remaining();
    if rest.len() < n {
      return Err(PngError::UnexpectedEnd);
    }
    self.pos += n;
    Ok(&rest[..n])
  }

  #[inline]
  pub fn read_array<const N: usize>(&mut self) -> PngResult<[u8; N]> {
    let head = self.take(N)?;
    let mut a = [0_u8; N];
    a.copy_from_slice(head);
    Ok(a)
  }

  #[inline]
  pub fn read_u8(&mut self) -> PngResult<u8> {
    let [u] = self.read_array::<1>()?;
    Ok(u)
  }

  #[inline]
  pub fn read_u32_be(&mut self) -> PngResult<u32> {
    self.read_array::<4>().map(u32::from_be_bytes)
  }
}

/// An output stream of bytes.
///
/// Writes either fully happen or fail without writing anything.
pub trait ByteSink {
  fn write_bytes(&mut self, bytes: &[u8]) -> PngResult<()>;

  #[inline]
  fn write_u8(&mut self, u: u8) -> PngResult<()> {
    self.write_bytes(&[u])
  }

  #[inline]
  fn write_u32_be(&mut self, u: u32) -> PngResult<()> {
    self.write_bytes(&u.to_be_bytes())
  }
}

#[cfg(feature = "alloc")]
impl ByteSink for alloc::vec::Vec<u8> {
  #[inline]
  fn write_bytes(&mut self, bytes: &[u8]) -> PngResult<()> {
    self.extend_from_slice(bytes);
    Ok(())
  }
}

/// Writes into a caller provided buffer, no allocation required.
#[derive(Debug)]
pub struct SliceSink<'b> {
  buf: &'b mut [u8],
  pos: usize,
}
impl<'b> SliceSink<'b> {
  #[inline]
  #[must_use]
  pub fn new(buf: &'b mut [u8]) -> Self {
    Self { buf, pos: 0 }
  }

  /// The part of the buffer that's been written so far.
  #[inline]
  #[must_use]
  pub fn written(&self) -> &[u8] {
    &self.buf[..self.pos]
  }
}
impl ByteSink for SliceSink<'_> {
  #[inline]
  fn write_bytes(&mut self, bytes: &[u8]) -> PngResult<()> {
    let end = self.pos.checked_add(bytes.len()).ok_or(PngError::UnexpectedEnd)?;
    let dest = self.buf.get_mut(self.pos..end).ok_or(PngError::UnexpectedEnd)?;
    dest.copy_from_slice(bytes);
    self.pos = end;
    Ok(())
  }
}
