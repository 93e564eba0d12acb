use alloc::string::String;
use enough::StopReason;

use crate::info::ImageType;

/// Errors from TGA decoding and byte acquisition.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    #[error("truncated header: need {needed} bytes, got {actual}")]
    TruncatedHeader { needed: usize, actual: usize },

    #[error("unsupported image type: {0}")]
    UnsupportedImageType(u8),

    #[error("unsupported color map type: {0}")]
    UnsupportedColorMapType(u8),

    #[error("file contains no image data")]
    NoImageData,

    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("color-mapped image has no color map")]
    MissingColorMap,

    #[error("truncated color map: need {needed} bytes, {available} available")]
    TruncatedColorMap { needed: usize, available: usize },

    #[error("unsupported color map entry size: {0} bits")]
    UnsupportedColorMapDepth(u8),

    #[error("unsupported pixel depth {depth} for {image_type:?}")]
    UnsupportedPixelDepth { image_type: ImageType, depth: u8 },

    #[error("color index {index} out of range for color map of {len} entries")]
    ColorIndexOutOfRange { index: u16, len: usize },

    #[error("corrupt RLE stream: {0}")]
    CorruptRleStream(&'static str),

    #[error("truncated pixel data: need {needed} bytes, {available} available")]
    TruncatedPixelData { needed: usize, available: usize },

    #[error("right-to-left pixel order is not accepted")]
    UnsupportedOrientation,

    #[error("source {id:?} unavailable: {reason}")]
    SourceUnavailable { id: String, reason: String },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl TgaError {
    /// The input violates the format (truncated, corrupt, inconsistent).
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::TruncatedHeader { .. }
                | Self::InvalidDimensions { .. }
                | Self::MissingColorMap
                | Self::TruncatedColorMap { .. }
                | Self::ColorIndexOutOfRange { .. }
                | Self::CorruptRleStream(_)
                | Self::TruncatedPixelData { .. }
        )
    }

    /// The input is well-formed but uses a variant this decoder does not handle.
    pub fn is_unsupported(&self) -> bool {
        matches!(
            self,
            Self::UnsupportedImageType(_)
                | Self::UnsupportedColorMapType(_)
                | Self::NoImageData
                | Self::UnsupportedColorMapDepth(_)
                | Self::UnsupportedPixelDepth { .. }
                | Self::UnsupportedOrientation
        )
    }

    /// The bytes could not be acquired in the first place.
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::SourceUnavailable { .. })
    }
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}
