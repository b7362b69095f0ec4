//! Plain data structures for moving chunk data in and out of this crate.
//!
//! The application fills an [`ExportData`] to say what should be written, and
//! gets an [`ImportData`] back describing what was read. With the `serde`
//! feature both (de)serialize with camelCase field names, such as
//! `{"physical": {"xPixelPerUnit": 2835, "unit": 1}}`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Data to be written into a PNG.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ExportData {
  /// When present a `pHYs` chunk is written, otherwise it's left out.
  #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
  pub physical: Option<PhysicalExport>,
}

/// Physical dimensions to export. Unset fields use the `pHYs` defaults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PhysicalExport {
  #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
  pub x_pixel_per_unit: Option<u32>,
  #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
  pub y_pixel_per_unit: Option<u32>,
  /// 0 for unknown, 1 for meters. Other values fail the export.
  #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
  pub unit: Option<u8>,
}

/// Data that was read out of a PNG.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct ImportData {
  #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
  pub volatile: Option<VolatileData>,
}

/// Metadata describing the image, as opposed to the pixels themselves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct VolatileData {
  #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
  pub physical: Option<Physical>,
}

/// Physical dimensions as read, with every field filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Physical {
  pub x_pixel_per_unit: u32,
  pub y_pixel_per_unit: u32,
  pub unit: u8,
}
