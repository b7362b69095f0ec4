use super::*;

/// A decoded PNG datastream: the list of its chunks, in file order.
///
/// Decoding hands each chunk to the parser for its type along with the
/// document built so far, which is how the ordering and uniqueness rules
/// between chunks get checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PngDocument {
  records: Vec<PngRecord>,
}
impl PngDocument {
  #[inline]
  #[must_use]
  pub const fn new() -> Self {
    Self { records: Vec::new() }
  }

  #[inline]
  #[must_use]
  pub fn records(&self) -> &[PngRecord] {
    &self.records
  }

  #[inline]
  pub fn push(&mut self, record: PngRecord) {
    self.records.push(record);
  }

  /// The first record of the given type.
  ///
  /// ## Failure
  /// * When `required` is set and there's no such record.
  pub fn first_record(&self, chunk_ty: PngChunkTy, required: bool) -> PngResult<Option<&PngRecord>> {
    match self.records_of(chunk_ty).next() {
      None if required => Err(PngError::MissingChunk { chunk: chunk_ty }),
      found => Ok(found),
    }
  }

  /// All records of the given type, in order.
  #[inline]
  pub fn records_of(&self, chunk_ty: PngChunkTy) -> impl Iterator<Item = &PngRecord> + '_ {
    self.records.iter().filter(move |r| r.chunk_ty() == chunk_ty)
  }

  /// The image header, if there is one.
  #[inline]
  #[must_use]
  pub fn header(&self) -> Option<&IHDR> {
    self.records.iter().find_map(PngRecord::as_header)
  }

  /// The `pHYs` data, if there is any.
  #[inline]
  #[must_use]
  pub fn physical(&self) -> Option<&PhysicalDimensions> {
    self.records.iter().find_map(PngRecord::as_physical)
  }

  /// Decodes full PNG bytes, signature included.
  ///
  /// With `strict` set, these are also errors (otherwise they're just logged):
  /// * A wrong signature.
  /// * A chunk whose CRC doesn't match.
  /// * A critical chunk type other than `IHDR`, `IDAT`, `PLTE`, or `IEND`.
  /// * Any bytes after the `IEND` chunk.
  ///
  /// Decoding always stops at `IEND`, so chunks after it are never read.
  ///
  /// The chunk rules checked by each record's parser (such as `pHYs` needing
  /// the header first) always apply.
  pub fn decode(png: &[u8], strict: bool) -> PngResult<Self> {
    if !is_png_signature_correct(png) {
      if strict {
        return Err(PngError::BadSignature);
      }
      warn!("PNG signature is not correct");
    }
    let mut cursor = ByteCursor::new(png.get(PNG_SIGNATURE.len()..).unwrap_or_default());
    let mut doc = Self::new();
    while !cursor.remaining().is_empty() {
      doc.decode_chunk(&mut cursor, strict)?;
      if doc.records.last() == Some(&PngRecord::End) {
        break;
      }
    }
    let trailing = cursor.remaining().len();
    if trailing != 0 {
      if strict {
        return Err(PngError::DataAfterEnd { len: trailing });
      }
      warn!(trailing, "ignoring bytes after IEND");
    }
    if doc.first_record(PngChunkTy::IEND, false)?.is_none() {
      warn!("datastream has no IEND chunk");
    }
    debug!(chunks = doc.records.len(), "decoded PNG");
    Ok(doc)
  }

  fn decode_chunk(&mut self, cursor: &mut ByteCursor<'_>, strict: bool) -> PngResult<()> {
    let length = cursor.read_u32_be()?;
    let chunk_ty = PngChunkTy(cursor.read_array()?);
    let crc_start = cursor.clone();
    trace!(%chunk_ty, length, "decoding chunk");

    let record = match chunk_ty {
      PngChunkTy::IHDR => PngRecord::Header(IHDR::parse(cursor, length, strict, self)?),
      PngChunkTy::pHYs => {
        PngRecord::Physical(PhysicalDimensions::parse(cursor, length, strict, self)?)
      }
      PngChunkTy::IEND => {
        IEND::parse(cursor, length, strict, self)?;
        PngRecord::End
      }
      other => {
        if strict && other.is_critical() && !KNOWN_CRITICAL.contains(&other) {
          return Err(PngError::UnknownCriticalChunk { chunk: other });
        }
        if self.header().is_none() {
          return Err(PngError::HeaderNotFirst);
        }
        PngRecord::Other { chunk_ty: other, data: cursor.take(length as usize)?.to_vec() }
      }
    };

    let data = &crc_start.remaining()[..(cursor.position() - crc_start.position())];
    let declared = cursor.read_u32_be()?;
    let actual = png_crc(chunk_ty.as_bytes(), data);
    if declared != actual {
      if strict {
        return Err(PngError::CrcMismatch { chunk: chunk_ty, declared, actual });
      }
      warn!(%chunk_ty, declared, actual, "chunk crc mismatch");
    }
    self.records.push(record);
    Ok(())
  }

  /// Builds a document from an image header plus the exported data.
  ///
  /// Records are put in writing order, and there's always an `IEND` at the
  /// end.
  pub fn from_export(header: IHDR, export: &ExportData) -> PngResult<Self> {
    let mut doc = Self::new();
    doc.push(PngRecord::Header(header));
    doc.records.extend(PhysicalDimensions::encode_data(export)?);
    doc.push(PngRecord::End);
    doc.records.sort_by_key(PngRecord::sequence);
    Ok(doc)
  }

  /// Gathers the data of every record type into an [`ImportData`].
  pub fn to_import(&self, strict: bool) -> PngResult<ImportData> {
    let mut import = ImportData::default();
    PhysicalDimensions::decode_data(self, &mut import, strict)?;
    Ok(import)
  }

  /// Writes the signature then every record, ordered by
  /// [`sequence`](PngRecord::sequence). Records with equal sequence keep their
  /// current order.
  pub fn encode_to<S: ByteSink + ?Sized>(&self, sink: &mut S) -> PngResult<()> {
    let mut ordered: Vec<&PngRecord> = self.records.iter().collect();
    ordered.sort_by_key(|r| r.sequence());
    sink.write_bytes(&PNG_SIGNATURE)?;
    for record in ordered {
      trace!(chunk_ty = %record.chunk_ty(), "encoding chunk");
      record.write_chunk(sink)?;
    }
    Ok(())
  }

  /// Encodes the document into a new `Vec`.
  pub fn encode(&self) -> PngResult<Vec<u8>> {
    let mut out = Vec::new();
    self.encode_to(&mut out)?;
    Ok(out)
  }
}

/// The critical chunk types allowed in a strict decode.
const KNOWN_CRITICAL: [PngChunkTy; 4] =
  [PngChunkTy::IHDR, PngChunkTy::PLTE, PngChunkTy::IDAT, PngChunkTy::IEND];
