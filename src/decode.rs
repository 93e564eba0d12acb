use alloc::vec::Vec;

use enough::Stop;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::error::TgaError;
use crate::limits::Limits;

/// What to do with images stored right-to-left (descriptor bit 4).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrientationPolicy {
    /// Mirror columns so the output is always left-to-right.
    #[default]
    Normalize,
    /// Fail with [`TgaError::UnsupportedOrientation`].
    Reject,
}

/// Decoded image: RGBA8, row-major, top-left origin.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecodeOutput {
    pixels: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl DecodeOutput {
    pub(crate) fn new(pixels: Vec<u8>, width: u32, height: u32) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 4);
        Self {
            pixels,
            width,
            height,
        }
    }

    /// RGBA8 bytes, `width * height * 4` long.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Take ownership of the pixel data.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes per output row.
    pub fn stride(&self) -> usize {
        self.width as usize * 4
    }

    /// One output row, top first. `None` past the last row.
    pub fn row(&self, y: u32) -> Option<&[u8]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.stride();
        self.pixels.get(start..start + self.stride())
    }

    /// Reinterpret pixel data as typed RGBA pixels.
    #[cfg(feature = "rgb")]
    pub fn as_pixels(&self) -> &[rgb::RGBA8] {
        self.pixels[..].as_pixels()
    }

    /// Zero-copy view as an [`imgref::ImgRef`].
    #[cfg(feature = "imgref")]
    pub fn as_imgref(&self) -> imgref::ImgRef<'_, rgb::RGBA8> {
        imgref::ImgRef::new(
            self.as_pixels(),
            self.width as usize,
            self.height as usize,
        )
    }

    /// Convert to an owned [`imgref::ImgVec`].
    #[cfg(feature = "imgref")]
    pub fn to_imgvec(&self) -> imgref::ImgVec<rgb::RGBA8> {
        imgref::ImgVec::new(
            self.as_pixels().to_vec(),
            self.width as usize,
            self.height as usize,
        )
    }
}

/// Builder for a single decode.
///
/// ```no_run
/// use zentga::{DecodeRequest, Limits, OrientationPolicy, Unstoppable};
///
/// let data: &[u8] = &[]; // your TGA bytes
/// let limits = Limits::max_pixels(16_000_000);
/// let decoded = DecodeRequest::new(data)
///     .with_limits(&limits)
///     .with_orientation_policy(OrientationPolicy::Reject)
///     .decode(Unstoppable)?;
/// # Ok::<(), zentga::TgaError>(())
/// ```
#[derive(Clone, Debug)]
pub struct DecodeRequest<'a> {
    data: &'a [u8],
    limits: Option<&'a Limits>,
    orientation: OrientationPolicy,
}

impl<'a> DecodeRequest<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            limits: None,
            orientation: OrientationPolicy::default(),
        }
    }

    pub fn with_limits(mut self, limits: &'a Limits) -> Self {
        self.limits = Some(limits);
        self
    }

    pub fn with_orientation_policy(mut self, policy: OrientationPolicy) -> Self {
        self.orientation = policy;
        self
    }

    /// Run the decode. Either the whole image is returned or an error;
    /// there is no partial output.
    pub fn decode(self, stop: impl Stop) -> Result<DecodeOutput, TgaError> {
        crate::tga::decode(self.data, self.limits, self.orientation, &stop)
    }
}
