//! The CRC-32 that PNG puts after each chunk.
//!
//! The checksum covers the chunk type and the chunk data, but not the length.

const CRC_TABLE: [u32; 256] = {
  let mut table = [0_u32; 256];
  let mut n = 0;
  while n < 256 {
    let mut c = n as u32;
    let mut k = 0;
    while k < 8 {
      c = if (c & 1) != 0 { 0xEDB8_8320_u32 ^ (c >> 1) } else { c >> 1 };
      k += 1;
    }
    table[n] = c;
    n += 1;
  }
  table
};

/// A running CRC, for when the bytes arrive in more than one piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PngCrc(u32);
impl Default for PngCrc {
  #[inline]
  fn default() -> Self {
    Self(u32::MAX)
  }
}
impl PngCrc {
  #[inline]
  #[must_use]
  pub fn new() -> Self {
    Self::default()
  }

  #[inline]
  pub fn update(&mut self, bytes: &[u8]) {
    for &byte in bytes {
      let i = (self.0 ^ u32::from(byte)) as u8 as usize;
      self.0 = CRC_TABLE[i] ^ (self.0 >> 8);
    }
  }

  #[inline]
  #[must_use]
  pub const fn finish(self) -> u32 {
    self.0 ^ u32::MAX
  }
}

/// The CRC of a chunk with the given type and data.
#[inline]
#[must_use]
pub fn png_crc(chunk_ty: &[u8; 4], data: &[u8]) -> u32 {
  let mut crc = PngCrc::new();
  crc.update(chunk_ty);
  crc.update(data);
  crc.finish()
}
