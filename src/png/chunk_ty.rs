use super::*;

/// The four ASCII bytes naming a chunk's type.
///
/// The case of each letter is meaningful. The only one this crate looks at is
/// the first letter: uppercase means the chunk is critical to understanding
/// the image, lowercase means it's ancillary and can be skipped.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct PngChunkTy(pub [u8; 4]);
#[allow(nonstandard_style)]
impl PngChunkTy {
  pub const IHDR: Self = Self(*b"IHDR");
  pub const PLTE: Self = Self(*b"PLTE");
  pub const IDAT: Self = Self(*b"IDAT");
  pub const IEND: Self = Self(*b"IEND");
  pub const pHYs: Self = Self(*b"pHYs");

  /// The type as a single big-endian integer (eg: `pHYs` is `0x70485973`).
  #[inline]
  #[must_use]
  pub const fn to_u32(self) -> u32 {
    u32::from_be_bytes(self.0)
  }

  #[inline]
  #[must_use]
  pub const fn from_u32(u: u32) -> Self {
    Self(u.to_be_bytes())
  }

  /// If the chunk must be understood to display the image.
  #[inline]
  #[must_use]
  pub const fn is_critical(self) -> bool {
    (self.0[0] & 0b0010_0000) == 0
  }

  #[inline]
  #[must_use]
  pub const fn as_bytes(&self) -> &[u8; 4] {
    &self.0
  }
}
impl Debug for PngChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    f.write_char('"')?;
    Display::fmt(self, f)?;
    f.write_char('"')
  }
}
impl Display for PngChunkTy {
  fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
    // non-ascii bytes still print, they just might print as garbage
    for ch in self.0.iter().copied().map(|u| u as char) {
      f.write_char(ch)?;
    }
    Ok(())
  }
}
impl From<[u8; 4]> for PngChunkTy {
  #[inline]
  fn from(array: [u8; 4]) -> Self {
    Self(array)
  }
}
