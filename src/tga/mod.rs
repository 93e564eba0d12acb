//! TGA (Targa) decoder.
//!
//! Pipeline: header → color map (if present) → pixel groups, either
//! borrowed from the input or expanded from RLE packets → RGBA8 raster.

pub(crate) mod color_map;
mod cursor;
pub(crate) mod header;
mod raster;
mod rle;

use alloc::borrow::Cow;

use enough::Stop;

use self::cursor::Cursor;
use self::header::byte_size;
use crate::decode::{DecodeOutput, OrientationPolicy};
use crate::error::TgaError;
use crate::info::ImageType;
use crate::limits::Limits;
use crate::pixel::ColorResolver;

/// Decode a complete TGA file to RGBA8.
pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    policy: OrientationPolicy,
    stop: &dyn Stop,
) -> Result<DecodeOutput, TgaError> {
    let header = header::parse_header(data)?;
    if header.image_type == ImageType::NoData {
        return Err(TgaError::NoImageData);
    }

    let width = u32::from(header.image.width);
    let height = u32::from(header.image.height);
    if width == 0 || height == 0 {
        return Err(TgaError::InvalidDimensions { width, height });
    }
    if let Some(limits) = limits {
        limits.check_dimensions(width, height)?;
    }

    let origin = header.image.origin();
    if origin.is_right() && policy == OrientationPolicy::Reject {
        return Err(TgaError::UnsupportedOrientation);
    }

    log::debug!(
        "tga: {width}x{height} {:?} depth={} origin={origin:?} color_map={}",
        header.image_type,
        header.image.pixel_depth,
        header.has_color_map(),
    );

    let mut cursor = Cursor::at(data, header.data_offset).ok_or(TgaError::TruncatedHeader {
        needed: header.data_offset,
        actual: data.len(),
    })?;
    let table = if header.has_color_map() {
        Some(color_map::read_color_map(&mut cursor, &header.color_map)?)
    } else {
        None
    };
    log::trace!("tga: pixel data at offset {}", cursor.position());
    let resolver =
        ColorResolver::for_image(header.image_type, header.image.pixel_depth, table.as_ref())?;

    let too_large = || TgaError::DimensionsTooLarge { width, height };
    let pixel_count = (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(too_large)?;
    let group_bytes = byte_size(header.image.pixel_depth);
    let stream_bytes = pixel_count
        .checked_mul(group_bytes)
        .ok_or_else(too_large)?;
    let out_bytes = pixel_count.checked_mul(4).ok_or_else(too_large)?;
    // An expanded RLE stream is never larger than the RGBA output.
    if let Some(limits) = limits {
        limits.check_alloc("output buffer", out_bytes)?;
    }

    stop.check()?;

    let groups: Cow<'_, [u8]> = if header.image_type.is_rle() {
        Cow::Owned(rle::decompress(&mut cursor, pixel_count, group_bytes, stop)?)
    } else {
        let available = cursor.remaining();
        Cow::Borrowed(cursor.take(stream_bytes).ok_or(TgaError::TruncatedPixelData {
            needed: stream_bytes,
            available,
        })?)
    };

    let pixels = raster::assemble(
        &groups,
        width as usize,
        height as usize,
        origin,
        &resolver,
        group_bytes,
        stop,
    )?;
    Ok(DecodeOutput::new(pixels, width, height))
}
