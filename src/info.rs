use crate::error::TgaError;
use crate::tga::header;

/// TGA image type field (header byte 2).
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageType {
    /// Type 0: header only, no pixel data.
    NoData,
    /// Type 1: uncompressed indices into a color map.
    ColorMapped,
    /// Type 2: uncompressed BGR(A) pixels.
    TrueColor,
    /// Type 3: uncompressed 8-bit intensity.
    Grayscale,
    /// Type 9: run-length encoded color-mapped.
    RleColorMapped,
    /// Type 10: run-length encoded true-color.
    RleTrueColor,
    /// Type 11: run-length encoded grayscale.
    RleGrayscale,
}

impl ImageType {
    pub(crate) fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::NoData),
            1 => Some(Self::ColorMapped),
            2 => Some(Self::TrueColor),
            3 => Some(Self::Grayscale),
            9 => Some(Self::RleColorMapped),
            10 => Some(Self::RleTrueColor),
            11 => Some(Self::RleGrayscale),
            _ => None,
        }
    }

    /// Raw header value.
    pub fn to_u8(self) -> u8 {
        match self {
            Self::NoData => 0,
            Self::ColorMapped => 1,
            Self::TrueColor => 2,
            Self::Grayscale => 3,
            Self::RleColorMapped => 9,
            Self::RleTrueColor => 10,
            Self::RleGrayscale => 11,
        }
    }

    /// Whether pixel data is run-length encoded (bit 3 of the type value).
    pub fn is_rle(self) -> bool {
        self.to_u8() & 0x08 != 0
    }

    /// Whether pixels are indices into a color map.
    pub fn is_color_mapped(self) -> bool {
        matches!(self, Self::ColorMapped | Self::RleColorMapped)
    }

    pub fn is_grayscale(self) -> bool {
        matches!(self, Self::Grayscale | Self::RleGrayscale)
    }
}

/// Corner of the image where the first stored pixel lives.
///
/// Decoded output is always top-left; this only describes storage order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    BottomLeft,
    BottomRight,
    TopLeft,
    TopRight,
}

impl Origin {
    /// From descriptor bits 4 (right) and 5 (top).
    pub(crate) fn from_descriptor(descriptor: u8) -> Self {
        match (descriptor & 0x20 != 0, descriptor & 0x10 != 0) {
            (false, false) => Self::BottomLeft,
            (false, true) => Self::BottomRight,
            (true, false) => Self::TopLeft,
            (true, true) => Self::TopRight,
        }
    }

    pub fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    pub fn is_right(self) -> bool {
        matches!(self, Self::BottomRight | Self::TopRight)
    }
}

/// Image metadata obtained from the header alone.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    pub image_type: ImageType,
    /// Bits per stored pixel (or per index for color-mapped images).
    pub pixel_depth: u8,
    /// Whether a color map table follows the header.
    pub has_color_map: bool,
    /// Number of color map entries declared by the header.
    pub color_map_length: u16,
    pub origin: Origin,
    /// Screen position of the lower-left corner, as stored. Not applied.
    pub x_origin: u16,
    pub y_origin: u16,
    /// Length of the (skipped) image ID field.
    pub image_id_len: u8,
    /// Attribute (alpha) bits per pixel, descriptor bits 0-3.
    pub alpha_bits: u8,
}

impl ImageInfo {
    /// Probe a TGA header without decoding pixel data.
    ///
    /// Only the header is validated. A file that probes successfully can
    /// still fail to decode: type 0 gives [`TgaError::NoImageData`] and a
    /// zero width or height gives [`TgaError::InvalidDimensions`].
    pub fn from_bytes(data: &[u8]) -> Result<Self, TgaError> {
        let header = header::parse_header(data)?;
        Ok(Self {
            width: u32::from(header.image.width),
            height: u32::from(header.image.height),
            image_type: header.image_type,
            pixel_depth: header.image.pixel_depth,
            has_color_map: header.has_color_map(),
            color_map_length: header.color_map.length,
            origin: header.image.origin(),
            x_origin: header.image.origin_x,
            y_origin: header.image.origin_y,
            image_id_len: header.id_length,
            alpha_bits: header.image.descriptor & 0x0F,
        })
    }
}
