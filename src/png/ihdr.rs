use super::*;

/// The types of color that PNG supports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PngColorType {
  /// Greyscale
  Y = 0,
  /// Red, Green, Blue
  RGB = 2,
  /// Index into a palette.
  Index = 3,
  /// Greyscale + Alpha
  YA = 4,
  /// Red, Green, Blue, Alpha
  RGBA = 6,
}
impl PngColorType {
  /// If a bit depth is allowed with this color type.
  #[inline]
  #[must_use]
  pub const fn allows_bit_depth(self, bit_depth: u8) -> bool {
    match self {
      Self::Y => matches!(bit_depth, 1 | 2 | 4 | 8 | 16),
      Self::Index => matches!(bit_depth, 1 | 2 | 4 | 8),
      Self::RGB | Self::YA | Self::RGBA => matches!(bit_depth, 8 | 16),
    }
  }
}
impl TryFrom<u8> for PngColorType {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    Ok(match value {
      0 => PngColorType::Y,
      2 => PngColorType::RGB,
      3 => PngColorType::Index,
      4 => PngColorType::YA,
      6 => PngColorType::RGBA,
      _ => return Err(PngError::InvalidHeader),
    })
  }
}

/// `IHDR`: Image header
///
/// Always the first chunk. Other chunks (including `pHYs`) only mean
/// anything once the header has been seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct IHDR {
  /// width in pixels
  pub width: u32,
  /// height in pixels
  pub height: u32,
  /// bits per channel
  pub bit_depth: u8,
  /// pixel color type
  pub color_type: PngColorType,
  /// if the image data is stored interlaced.
  pub is_interlaced: bool,
}
impl IHDR {
  /// The data length of an `IHDR` chunk.
  pub const LEN: u32 = 13;
  /// Width and height can't be larger than this.
  pub const MAX_DIMENSION: u32 = (1 << 31) - 1;

  /// Makes a non-interlaced header, checking that the values are legal.
  pub fn new(
    width: u32, height: u32, bit_depth: u8, color_type: PngColorType,
  ) -> PngResult<Self> {
    let ihdr = Self { width, height, bit_depth, color_type, is_interlaced: false };
    ihdr.validate()?;
    Ok(ihdr)
  }

  fn validate(&self) -> PngResult<()> {
    let dim_ok = |d: u32| (1..=Self::MAX_DIMENSION).contains(&d);
    if dim_ok(self.width)
      && dim_ok(self.height)
      && self.color_type.allows_bit_depth(self.bit_depth)
    {
      Ok(())
    } else {
      Err(PngError::InvalidHeader)
    }
  }
}
impl TryFrom<&[u8]> for IHDR {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    match *data {
      [w0, w1, w2, w3, h0, h1, h2, h3, bit_depth, color_type, 0, 0, interlace_method] => {
        let ihdr = Self {
          width: u32::from_be_bytes([w0, w1, w2, w3]),
          height: u32::from_be_bytes([h0, h1, h2, h3]),
          bit_depth,
          color_type: PngColorType::try_from(color_type)?,
          is_interlaced: match interlace_method {
            0 => false,
            1 => true,
            _ => return Err(PngError::InvalidHeader),
          },
        };
        ihdr.validate()?;
        Ok(ihdr)
      }
      [_, _, _, _, _, _, _, _, _, _, _, _, _] => Err(PngError::InvalidHeader),
      _ => Err(PngError::BadChunkLength {
        chunk: PngChunkTy::IHDR,
        expected: Self::LEN,
        actual: data.len() as u32,
      }),
    }
  }
}

#[cfg(feature = "alloc")]
impl ChunkRecord for IHDR {
  const TYPE: PngChunkTy = PngChunkTy::IHDR;
  const SEQUENCE: u32 = 0;

  fn parse(
    cursor: &mut ByteCursor<'_>, length: u32, _strict: bool, container: &PngDocument,
  ) -> PngResult<Self> {
    if !container.records().is_empty() {
      return Err(PngError::HeaderNotFirst);
    }
    if length != Self::LEN {
      return Err(PngError::BadChunkLength {
        chunk: Self::TYPE,
        expected: Self::LEN,
        actual: length,
      });
    }
    let data = cursor.take(Self::LEN as usize)?;
    Self::try_from(data)
  }

  fn encode<S: ByteSink + ?Sized>(&self, sink: &mut S) -> PngResult<()> {
    sink.write_u32_be(self.width)?;
    sink.write_u32_be(self.height)?;
    sink.write_bytes(&[self.bit_depth, self.color_type as u8, 0, 0, u8::from(self.is_interlaced)])
  }
}
