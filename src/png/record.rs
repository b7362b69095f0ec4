use super::*;

/// The surface every structured chunk type provides to the container.
pub trait ChunkRecord: Sized {
  /// The chunk type this record is stored as.
  const TYPE: PngChunkTy;
  /// The chunk type packed into a big-endian integer.
  const TYPE_ID: u32 = Self::TYPE.to_u32();
  /// Lower values are written earlier in the output.
  const SEQUENCE: u32;

  /// Reads the chunk data out of `cursor`, checking it against the records
  /// already in `container`.
  ///
  /// `length` is the data length declared by the chunk framing.
  fn parse(
    cursor: &mut ByteCursor<'_>, length: u32, strict: bool, container: &PngDocument,
  ) -> PngResult<Self>;

  /// Writes just the chunk data, no framing.
  fn encode<S: ByteSink + ?Sized>(&self, sink: &mut S) -> PngResult<()>;
}

/// `IEND`: Image trailer
///
/// Has no data, it just marks the end of the datastream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct IEND;
impl ChunkRecord for IEND {
  const TYPE: PngChunkTy = PngChunkTy::IEND;
  const SEQUENCE: u32 = 1000;

  fn parse(
    _cursor: &mut ByteCursor<'_>, length: u32, _strict: bool, container: &PngDocument,
  ) -> PngResult<Self> {
    if container.first_record(PngChunkTy::IHDR, false)?.is_none() {
      return Err(PngError::MissingHeader { chunk: Self::TYPE });
    }
    if container.first_record(Self::TYPE, false)?.is_some() {
      return Err(PngError::DuplicateChunk { chunk: Self::TYPE });
    }
    if length != 0 {
      return Err(PngError::BadChunkLength { chunk: Self::TYPE, expected: 0, actual: length });
    }
    Ok(IEND)
  }

  #[inline]
  fn encode<S: ByteSink + ?Sized>(&self, _sink: &mut S) -> PngResult<()> {
    Ok(())
  }
}

/// Where chunks this crate doesn't interpret are placed when writing.
///
/// They all share one value, so they keep the order they were added in.
pub const OTHER_CHUNK_SEQUENCE: u32 = 500;

/// One chunk of a [`PngDocument`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PngRecord {
  /// Image Header
  Header(IHDR),
  /// Physical pixel dimensions
  Physical(PhysicalDimensions),
  /// Image End
  End,
  /// Any other chunk, kept exactly as it was found.
  Other { chunk_ty: PngChunkTy, data: Vec<u8> },
}
impl PngRecord {
  #[must_use]
  pub fn chunk_ty(&self) -> PngChunkTy {
    match self {
      Self::Header(_) => IHDR::TYPE,
      Self::Physical(_) => <PhysicalDimensions as ChunkRecord>::TYPE,
      Self::End => IEND::TYPE,
      Self::Other { chunk_ty, .. } => *chunk_ty,
    }
  }

  /// Sort key for writing, see [`ChunkRecord::SEQUENCE`].
  #[must_use]
  pub fn sequence(&self) -> u32 {
    match self {
      Self::Header(_) => IHDR::SEQUENCE,
      Self::Physical(_) => <PhysicalDimensions as ChunkRecord>::SEQUENCE,
      Self::End => IEND::SEQUENCE,
      Self::Other { .. } => OTHER_CHUNK_SEQUENCE,
    }
  }

  /// Writes the chunk data (no framing).
  pub fn encode_data<S: ByteSink + ?Sized>(&self, sink: &mut S) -> PngResult<()> {
    match self {
      Self::Header(ihdr) => ihdr.encode(sink),
      Self::Physical(phys) => ChunkRecord::encode(phys, sink),
      Self::End => IEND.encode(sink),
      Self::Other { data, .. } => sink.write_bytes(data),
    }
  }

  /// Writes the whole chunk: length, type, data, and CRC.
  pub fn write_chunk<S: ByteSink + ?Sized>(&self, sink: &mut S) -> PngResult<()> {
    let mut data = Vec::new();
    self.encode_data(&mut data)?;
    write_chunk(sink, self.chunk_ty(), &data)
  }

  #[inline]
  #[must_use]
  pub fn as_header(&self) -> Option<&IHDR> {
    match self {
      Self::Header(ihdr) => Some(ihdr),
      _ => None,
    }
  }

  #[inline]
  #[must_use]
  pub fn as_physical(&self) -> Option<&PhysicalDimensions> {
    match self {
      Self::Physical(phys) => Some(phys),
      _ => None,
    }
  }
}
