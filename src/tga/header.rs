//! TGA header: 18 fixed bytes followed by the image ID field.
//!
//! ```text
//!  0  id length          8  x origin (u16)
//!  1  color map type    10  y origin (u16)
//!  2  image type        12  width (u16)
//!  3  first entry (u16) 14  height (u16)
//!  5  map length (u16)  16  pixel depth
//!  7  entry size        17  descriptor
//! ```

use crate::error::TgaError;
use crate::info::{ImageType, Origin};

pub(crate) const HEADER_LEN: usize = 18;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ColorMapSpec {
    pub first_entry_index: u16,
    pub length: u16,
    /// Bits per entry.
    pub entry_size: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ImageSpec {
    pub origin_x: u16,
    pub origin_y: u16,
    pub width: u16,
    pub height: u16,
    pub pixel_depth: u8,
    pub descriptor: u8,
}

impl ImageSpec {
    pub(crate) fn origin(&self) -> Origin {
        Origin::from_descriptor(self.descriptor)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct TgaHeader {
    pub id_length: u8,
    pub color_map_type: u8,
    pub image_type: ImageType,
    pub color_map: ColorMapSpec,
    pub image: ImageSpec,
    /// Offset of the first byte after the image ID (color map or pixels).
    pub data_offset: usize,
}

impl TgaHeader {
    pub(crate) fn has_color_map(&self) -> bool {
        self.color_map_type == 1
    }
}

/// Whole bytes needed for `bits` bits.
pub(crate) fn byte_size(bits: u8) -> usize {
    usize::from(bits).div_ceil(8)
}

pub(crate) fn parse_header(data: &[u8]) -> Result<TgaHeader, TgaError> {
    let truncated = |needed| TgaError::TruncatedHeader {
        needed,
        actual: data.len(),
    };

    let fixed: &[u8; HEADER_LEN] = data
        .get(..HEADER_LEN)
        .and_then(|b| b.try_into().ok())
        .ok_or(truncated(HEADER_LEN))?;

    let le = |at: usize| u16::from_le_bytes([fixed[at], fixed[at + 1]]);
    let [id_length, color_map_type, image_type_raw] = [fixed[0], fixed[1], fixed[2]];
    let color_map = ColorMapSpec {
        first_entry_index: le(3),
        length: le(5),
        entry_size: fixed[7],
    };
    let image = ImageSpec {
        origin_x: le(8),
        origin_y: le(10),
        width: le(12),
        height: le(14),
        pixel_depth: fixed[16],
        descriptor: fixed[17],
    };

    // Image ID is skipped, not retained.
    let data_offset = HEADER_LEN + usize::from(id_length);
    if data.len() < data_offset {
        return Err(truncated(data_offset));
    }

    let image_type =
        ImageType::from_u8(image_type_raw).ok_or(TgaError::UnsupportedImageType(image_type_raw))?;
    if color_map_type > 1 {
        return Err(TgaError::UnsupportedColorMapType(color_map_type));
    }

    Ok(TgaHeader {
        id_length,
        color_map_type,
        image_type,
        color_map,
        image,
        data_offset,
    })
}
