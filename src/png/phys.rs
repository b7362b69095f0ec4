use super::*;

/// The unit that a [`PhysicalDimensions`] density is measured in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum PhysUnit {
  /// The values only give the pixel aspect ratio.
  #[default]
  Unknown = 0,
  /// The values are pixels per meter.
  Meter = 1,
}
impl TryFrom<u8> for PhysUnit {
  type Error = PngError;
  #[inline]
  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      0 => Ok(Self::Unknown),
      1 => Ok(Self::Meter),
      other => Err(PngError::InvalidUnit(other)),
    }
  }
}
impl From<PhysUnit> for u8 {
  #[inline]
  fn from(unit: PhysUnit) -> Self {
    unit as u8
  }
}

/// The `pHYs` data exactly as it's laid out in the file.
#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct PhysLayout {
  ppu_x: U32BE,
  ppu_y: U32BE,
  unit: u8,
}

/// `pHYs`: Physical pixel dimensions
///
/// Specifies the intended pixel size or aspect ratio for display of the image.
///
/// * When the unit is [`PhysUnit::Meter`] the `x` and `y` values are pixels per
///   meter (2835 is about 72 DPI).
/// * Otherwise they have no unit and only define the pixel aspect ratio.
///
/// Any field that was never set reads back as its default: a density of 1
/// (square pixels) and the unknown unit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PhysicalDimensions {
  x_ppu: Option<u32>,
  y_ppu: Option<u32>,
  unit: Option<PhysUnit>,
}
impl PhysicalDimensions {
  /// The chunk type, `pHYs`.
  pub const TYPE: PngChunkTy = PngChunkTy::pHYs;
  /// The chunk type as an integer.
  pub const TYPE_ID: u32 = 0x7048_5973;
  /// Where `pHYs` goes relative to other chunks when writing a PNG.
  pub const SEQUENCE: u32 = 140;
  /// The data length of a `pHYs` chunk.
  pub const LEN: u32 = 9;

  /// A record with nothing set, so every getter gives its default.
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { x_ppu: None, y_ppu: None, unit: None }
  }

  /// A record in pixels per meter.
  #[inline]
  #[must_use]
  pub const fn meters(x_ppu: u32, y_ppu: u32) -> Self {
    Self { x_ppu: Some(x_ppu), y_ppu: Some(y_ppu), unit: Some(PhysUnit::Meter) }
  }

  #[inline]
  #[must_use]
  pub fn x_pixels_per_unit(&self) -> u32 {
    self.x_ppu.unwrap_or(1)
  }
  #[inline]
  pub fn set_x_pixels_per_unit(&mut self, ppu: u32) {
    self.x_ppu = Some(ppu);
  }

  #[inline]
  #[must_use]
  pub fn y_pixels_per_unit(&self) -> u32 {
    self.y_ppu.unwrap_or(1)
  }
  #[inline]
  pub fn set_y_pixels_per_unit(&mut self, ppu: u32) {
    self.y_ppu = Some(ppu);
  }

  #[inline]
  #[must_use]
  pub fn unit(&self) -> PhysUnit {
    self.unit.unwrap_or_default()
  }
  #[inline]
  pub fn set_unit(&mut self, unit: PhysUnit) {
    self.unit = Some(unit);
  }
  /// Sets the unit from its byte value.
  ///
  /// ## Failure
  /// * Anything other than 0 or 1 is [`PngError::InvalidUnit`], and the
  ///   record is left as it was.
  #[inline]
  pub fn set_unit_code(&mut self, code: u8) -> PngResult<()> {
    self.set_unit(PhysUnit::try_from(code)?);
    Ok(())
  }

  /// Compares the resolved [`unit`](Self::unit), so a record whose unit was
  /// never set counts as unknown.
  #[inline]
  #[must_use]
  pub fn is_unit_unknown(&self) -> bool {
    self.unit() == PhysUnit::Unknown
  }
  /// Compares the resolved [`unit`](Self::unit), so an unset unit is never
  /// meters.
  #[inline]
  #[must_use]
  pub fn is_unit_meter(&self) -> bool {
    self.unit() == PhysUnit::Meter
  }

  /// The `(x, y)` density in dots per inch, rounded to the nearest integer.
  ///
  /// Only available when the unit is meters.
  #[must_use]
  pub fn dots_per_inch(&self) -> Option<(u32, u32)> {
    // one inch is exactly 0.0254 meters
    let dpi = |ppm: u32| ((u64::from(ppm) * 254 + 5_000) / 10_000) as u32;
    self.is_unit_meter().then(|| (dpi(self.x_pixels_per_unit()), dpi(self.y_pixels_per_unit())))
  }

  /// The chunk data, as it would be written by [`encode`](Self::encode).
  #[inline]
  #[must_use]
  pub fn to_bytes(&self) -> [u8; 9] {
    bytemuck::cast(PhysLayout {
      ppu_x: U32BE::from_u32(self.x_pixels_per_unit()),
      ppu_y: U32BE::from_u32(self.y_pixels_per_unit()),
      unit: self.unit().into(),
    })
  }

  /// Writes the 9 data bytes. No length, type, or CRC: that's the framing's
  /// job.
  pub fn encode<S: ByteSink + ?Sized>(&self, sink: &mut S) -> PngResult<()> {
    sink.write_u32_be(self.x_pixels_per_unit())?;
    sink.write_u32_be(self.y_pixels_per_unit())?;
    sink.write_u8(self.unit().into())
  }
}

/// Checks the chunk data alone, without any container rules.
impl TryFrom<&[u8]> for PhysicalDimensions {
  type Error = PngError;
  fn try_from(data: &[u8]) -> Result<Self, Self::Error> {
    let layout: PhysLayout = bytemuck::try_pod_read_unaligned(data).map_err(|_| {
      PngError::BadChunkLength { chunk: Self::TYPE, expected: Self::LEN, actual: data.len() as u32 }
    })?;
    let mut phys = Self::new();
    phys.set_x_pixels_per_unit(layout.ppu_x.to_u32());
    phys.set_y_pixels_per_unit(layout.ppu_y.to_u32());
    phys.set_unit_code(layout.unit)?;
    Ok(phys)
  }
}

#[cfg(feature = "alloc")]
impl PhysicalDimensions {
  /// Makes the `pHYs` record (if any) to write for the exported data.
  ///
  /// Only the fields actually present in `export.physical` are set, the rest
  /// keep their defaults. No `physical` data means no record at all.
  pub fn encode_data(export: &ExportData) -> PngResult<Vec<PngRecord>> {
    let Some(physical) = &export.physical else {
      return Ok(Vec::new());
    };
    let mut phys = Self::new();
    if let Some(x) = physical.x_pixel_per_unit {
      phys.set_x_pixels_per_unit(x);
    }
    if let Some(y) = physical.y_pixel_per_unit {
      phys.set_y_pixels_per_unit(y);
    }
    if let Some(unit) = physical.unit {
      phys.set_unit_code(unit)?;
    }
    trace!(?phys, "exporting pHYs");
    Ok(vec![PngRecord::Physical(phys)])
  }

  /// Copies the decoded `pHYs` record (if any) into `volatile.physical`.
  ///
  /// With no record, `import` is left untouched.
  ///
  /// ## Failure
  /// * More than one `pHYs` record in the container.
  pub fn decode_data(
    container: &PngDocument, import: &mut ImportData, _strict: bool,
  ) -> PngResult<()> {
    let mut it = container.records_of(Self::TYPE).filter_map(PngRecord::as_physical);
    let Some(phys) = it.next() else {
      return Ok(());
    };
    if it.next().is_some() {
      return Err(PngError::DuplicateChunk { chunk: Self::TYPE });
    }
    import.volatile.get_or_insert_with(VolatileData::default).physical = Some(Physical {
      x_pixel_per_unit: phys.x_pixels_per_unit(),
      y_pixel_per_unit: phys.y_pixels_per_unit(),
      unit: phys.unit().into(),
    });
    Ok(())
  }
}

#[cfg(feature = "alloc")]
impl ChunkRecord for PhysicalDimensions {
  const TYPE: PngChunkTy = Self::TYPE;
  const SEQUENCE: u32 = Self::SEQUENCE;

  /// Reads a `pHYs` from the cursor.
  ///
  /// ## Failure
  /// Before anything is read:
  /// * No `IHDR` in the container yet.
  /// * The container already has a `pHYs`.
  /// * `length` isn't 9.
  ///
  /// After reading, an invalid unit byte is also an error.
  fn parse(
    cursor: &mut ByteCursor<'_>, length: u32, _strict: bool, container: &PngDocument,
  ) -> PngResult<Self> {
    if container.first_record(PngChunkTy::IHDR, false)?.is_none() {
      return Err(PngError::MissingHeader { chunk: Self::TYPE });
    }
    if container.first_record(Self::TYPE, false)?.is_some() {
      return Err(PngError::DuplicateChunk { chunk: Self::TYPE });
    }
    if length != Self::LEN {
      return Err(PngError::BadChunkLength {
        chunk: Self::TYPE,
        expected: Self::LEN,
        actual: length,
      });
    }
    let mut data = ByteCursor::new(cursor.take(Self::LEN as usize)?);
    let mut phys = Self::new();
    phys.set_x_pixels_per_unit(data.read_u32_be()?);
    phys.set_y_pixels_per_unit(data.read_u32_be()?);
    phys.set_unit_code(data.read_u8()?)?;
    Ok(phys)
  }

  #[inline]
  fn encode<S: ByteSink + ?Sized>(&self, sink: &mut S) -> PngResult<()> {
    PhysicalDimensions::encode(self, sink)
  }
}
