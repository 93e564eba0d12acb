use crate::error::TgaError;

/// Resource limits for decode operations.
///
/// All fields default to `None` (no limit). TGA dimensions are 16-bit, so
/// an unlimited decode tops out around 16 GiB of RGBA output; services
/// decoding untrusted files should set at least `max_memory_bytes`.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes for the RGBA output buffer.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Limits with only a pixel-count cap.
    pub const fn max_pixels(pixels: u64) -> Self {
        Self {
            max_width: None,
            max_height: None,
            max_pixels: Some(pixels),
            max_memory_bytes: None,
        }
    }

    /// Limits with only an allocation cap.
    pub const fn max_memory(bytes: u64) -> Self {
        Self {
            max_width: None,
            max_height: None,
            max_pixels: None,
            max_memory_bytes: Some(bytes),
        }
    }

    pub(crate) fn check_dimensions(&self, width: u32, height: u32) -> Result<(), TgaError> {
        exceeds("width", u64::from(width), self.max_width)?;
        exceeds("height", u64::from(height), self.max_height)?;
        exceeds(
            "pixel count",
            u64::from(width) * u64::from(height),
            self.max_pixels,
        )
    }

    /// `what` names the buffer in the error message.
    pub(crate) fn check_alloc(&self, what: &str, bytes: usize) -> Result<(), TgaError> {
        exceeds(what, bytes as u64, self.max_memory_bytes)
    }
}

fn exceeds(what: &str, value: u64, limit: Option<u64>) -> Result<(), TgaError> {
    match limit {
        Some(max) if value > max => Err(TgaError::LimitExceeded(alloc::format!(
            "{what} {value} exceeds limit {max}"
        ))),
        _ => Ok(()),
    }
}
