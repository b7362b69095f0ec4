use png_phys::{png::*, PngError};

const PHYS_72_DPI_X: [u8; 9] = [0x00, 0x00, 0x0B, 0x13, 0x00, 0x00, 0x00, 0x01, 0x01];

fn header_bytes() -> Vec<u8> {
  let mut v = Vec::new();
  ChunkRecord::encode(&IHDR::new(2, 3, 8, PngColorType::RGBA).unwrap(), &mut v).unwrap();
  v
}

/// Builds a PNG by framing each `(type, data)` pair in order.
fn png_from_chunks(chunks: &[(PngChunkTy, &[u8])]) -> Vec<u8> {
  let mut png = PNG_SIGNATURE.to_vec();
  for (ty, data) in chunks {
    write_chunk(&mut png, *ty, data).unwrap();
  }
  png
}

fn export_of(x: Option<u32>, y: Option<u32>, unit: Option<u8>) -> ExportData {
  ExportData {
    physical: Some(PhysicalExport { x_pixel_per_unit: x, y_pixel_per_unit: y, unit }),
  }
}

#[test]
fn test_RawPngChunkIter_no_panics() {
  // even totally random data should never panic the iterator!
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    for _ in RawPngChunkIter::new(&v) {
      //
    }
  }
}

#[test]
fn test_PngDocument_decode_no_panics() {
  for _ in 0..10 {
    let v = super::rand_bytes(1024);
    let _ = PngDocument::decode(&v, false);
    let _ = PngDocument::decode(&v, true);
  }
  // random data that starts out looking like a real PNG
  for _ in 0..10 {
    let mut v = png_from_chunks(&[(PngChunkTy::IHDR, &header_bytes()[..])]);
    v.extend(super::rand_bytes(64));
    let _ = PngDocument::decode(&v, false);
  }
}

#[test]
fn test_export_example_bytes() {
  let export = export_of(Some(2835), None, Some(1));
  let header = IHDR::new(2, 3, 8, PngColorType::RGBA).unwrap();
  let doc = PngDocument::from_export(header, &export).unwrap();
  let records = doc.records();
  assert_eq!(records.len(), 3);
  assert_eq!(records[0].chunk_ty(), PngChunkTy::IHDR);
  assert_eq!(records[1].chunk_ty(), PngChunkTy::pHYs);
  assert_eq!(records[2].chunk_ty(), PngChunkTy::IEND);

  let png = doc.encode().unwrap();
  let chunks: Vec<_> = RawPngChunkIter::new(&png).collect();
  assert_eq!(chunks.len(), 3);
  assert_eq!(chunks[1].chunk_ty, PngChunkTy::pHYs);
  assert_eq!(chunks[1].data, &PHYS_72_DPI_X[..]);
  assert!(chunks.iter().all(|c| c.declared_crc == c.actual_crc()));

  let decoded = PngDocument::decode(&png, true).unwrap();
  let phys = decoded.physical().unwrap();
  assert_eq!(phys.x_pixels_per_unit(), 2835);
  assert_eq!(phys.y_pixels_per_unit(), 1);
  assert_eq!(phys.unit(), PhysUnit::Meter);
  assert_eq!(decoded.header(), doc.header());
}

#[test]
fn test_round_trip_through_import() {
  let header = IHDR::new(2, 3, 8, PngColorType::RGBA).unwrap();
  for (x, y, unit) in [(1, 1, 0), (2835, 2835, 1), (0, u32::MAX, 1), (3, 4, 0)] {
    let export = export_of(Some(x), Some(y), Some(unit));
    let png = PngDocument::from_export(header, &export).unwrap().encode().unwrap();
    let import = PngDocument::decode(&png, true).unwrap().to_import(true).unwrap();
    assert_eq!(
      import.volatile.and_then(|v| v.physical),
      Some(Physical { x_pixel_per_unit: x, y_pixel_per_unit: y, unit })
    );
  }
}

#[test]
fn test_no_physical_means_no_chunk() {
  let header = IHDR::new(2, 3, 8, PngColorType::RGBA).unwrap();
  let doc = PngDocument::from_export(header, &ExportData::default()).unwrap();
  let png = doc.encode().unwrap();
  assert!(RawPngChunkIter::new(&png).all(|c| c.chunk_ty != PngChunkTy::pHYs));
  let import = PngDocument::decode(&png, true).unwrap().to_import(true).unwrap();
  assert_eq!(import, ImportData::default());
}

#[test]
fn test_phys_before_header() {
  let png = png_from_chunks(&[
    (PngChunkTy::pHYs, &PHYS_72_DPI_X[..]),
    (PngChunkTy::IHDR, &header_bytes()[..]),
    (PngChunkTy::IEND, &[]),
  ]);
  for strict in [false, true] {
    assert_eq!(
      PngDocument::decode(&png, strict),
      Err(PngError::MissingHeader { chunk: PngChunkTy::pHYs })
    );
  }
}

#[test]
fn test_duplicate_phys() {
  let png = png_from_chunks(&[
    (PngChunkTy::IHDR, &header_bytes()[..]),
    (PngChunkTy::pHYs, &PHYS_72_DPI_X[..]),
    (PngChunkTy::pHYs, &PHYS_72_DPI_X[..]),
    (PngChunkTy::IEND, &[]),
  ]);
  assert_eq!(
    PngDocument::decode(&png, false),
    Err(PngError::DuplicateChunk { chunk: PngChunkTy::pHYs })
  );
}

#[test]
fn test_phys_wrong_length_in_file() {
  for data in [&PHYS_72_DPI_X[..8], &[0, 0, 0, 1, 0, 0, 0, 1, 0, 0][..]] {
    let png = png_from_chunks(&[
      (PngChunkTy::IHDR, &header_bytes()[..]),
      (PngChunkTy::pHYs, data),
      (PngChunkTy::IEND, &[]),
    ]);
    assert_eq!(
      PngDocument::decode(&png, false),
      Err(PngError::BadChunkLength {
        chunk: PngChunkTy::pHYs,
        expected: 9,
        actual: data.len() as u32
      })
    );
  }
}

#[test]
fn test_crc_strictness() {
  let mut png = png_from_chunks(&[
    (PngChunkTy::IHDR, &header_bytes()[..]),
    (PngChunkTy::pHYs, &PHYS_72_DPI_X[..]),
    (PngChunkTy::IEND, &[]),
  ]);
  // signature (8) + IHDR chunk (12 + 13) + pHYs length and type (8)
  let phys_data_start = 8 + 25 + 8;
  png[phys_data_start + 7] = 2; // y = 2, CRC is now stale
  assert!(matches!(
    PngDocument::decode(&png, true),
    Err(PngError::CrcMismatch { chunk: PngChunkTy::pHYs, .. })
  ));
  let doc = PngDocument::decode(&png, false).unwrap();
  assert_eq!(doc.physical().unwrap().y_pixels_per_unit(), 2);
}

#[test]
fn test_signature_strictness() {
  let mut png = png_from_chunks(&[(PngChunkTy::IHDR, &header_bytes()[..]), (PngChunkTy::IEND, &[])]);
  png[0] = 0;
  assert_eq!(PngDocument::decode(&png, true), Err(PngError::BadSignature));
  assert!(PngDocument::decode(&png, false).is_ok());
}

#[test]
fn test_other_chunks_are_kept() {
  let text: &[u8] = b"Comment\0hello";
  let png = png_from_chunks(&[
    (PngChunkTy::IHDR, &header_bytes()[..]),
    (PngChunkTy(*b"tEXt"), text),
    (PngChunkTy::pHYs, &PHYS_72_DPI_X[..]),
    (PngChunkTy::IDAT, &[1, 2, 3]),
    (PngChunkTy::IEND, &[]),
  ]);
  let doc = PngDocument::decode(&png, true).unwrap();
  assert_eq!(doc.records().len(), 5);
  assert_eq!(
    doc.records()[1],
    PngRecord::Other { chunk_ty: PngChunkTy(*b"tEXt"), data: text.to_vec() }
  );
  // re-encoding moves pHYs ahead of the chunks it doesn't know about
  let again = doc.encode().unwrap();
  let order: Vec<PngChunkTy> = RawPngChunkIter::new(&again).map(|c| c.chunk_ty).collect();
  assert_eq!(
    order,
    [PngChunkTy::IHDR, PngChunkTy::pHYs, PngChunkTy(*b"tEXt"), PngChunkTy::IDAT, PngChunkTy::IEND]
  );
}

#[test]
fn test_unknown_critical_chunk() {
  let png = png_from_chunks(&[
    (PngChunkTy::IHDR, &header_bytes()[..]),
    (PngChunkTy(*b"XYZW"), &[0]),
    (PngChunkTy::IEND, &[]),
  ]);
  assert_eq!(
    PngDocument::decode(&png, true),
    Err(PngError::UnknownCriticalChunk { chunk: PngChunkTy(*b"XYZW") })
  );
  assert!(PngDocument::decode(&png, false).is_ok());
}

#[test]
fn test_header_must_be_first() {
  let png = png_from_chunks(&[(PngChunkTy::IDAT, &[0]), (PngChunkTy::IHDR, &header_bytes()[..])]);
  assert_eq!(PngDocument::decode(&png, false), Err(PngError::HeaderNotFirst));
}

#[test]
fn test_trailing_bytes_after_iend() {
  let mut png = png_from_chunks(&[(PngChunkTy::IHDR, &header_bytes()[..]), (PngChunkTy::IEND, &[])]);
  png.extend([1, 2, 3]);
  let doc = PngDocument::decode(&png, false).unwrap();
  assert_eq!(doc.records().len(), 2);
  assert_eq!(doc.records()[1], PngRecord::End);
  assert_eq!(PngDocument::decode(&png, true), Err(PngError::DataAfterEnd { len: 3 }));
}

#[test]
fn test_phys_after_iend_is_not_read() {
  let png = png_from_chunks(&[
    (PngChunkTy::IHDR, &header_bytes()[..]),
    (PngChunkTy::IEND, &[]),
    (PngChunkTy::pHYs, &PHYS_72_DPI_X[..]),
  ]);
  // the whole pHYs chunk: length, type, 9 data bytes, crc
  assert_eq!(PngDocument::decode(&png, true), Err(PngError::DataAfterEnd { len: 21 }));

  let doc = PngDocument::decode(&png, false).unwrap();
  assert_eq!(doc.physical(), None);
  assert_eq!(doc.to_import(false).unwrap(), ImportData::default());
}
