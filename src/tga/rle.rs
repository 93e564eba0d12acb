//! TGA run-length decoding.
//!
//! Each packet starts with a control byte. The low 7 bits hold the run
//! length minus one. With the high bit set, a single pixel group follows
//! and is repeated; otherwise `run` groups follow verbatim. Packets may
//! cross scanlines.

use alloc::vec::Vec;

use enough::Stop;

use super::cursor::Cursor;
use crate::error::TgaError;

/// Expand packets from `cursor` until `pixel_count` groups of
/// `group_bytes` bytes have been produced.
pub(crate) fn decompress(
    cursor: &mut Cursor<'_>,
    pixel_count: usize,
    group_bytes: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    let total = pixel_count
        .checked_mul(group_bytes)
        .ok_or(TgaError::CorruptRleStream("pixel stream size overflows"))?;
    // Expansion is at most 128x the remaining input.
    let mut out = Vec::with_capacity(total.min(cursor.remaining().saturating_mul(128)));
    let mut packets = 0u32;

    while out.len() < total {
        packets = packets.wrapping_add(1);
        if packets % 1024 == 0 {
            stop.check()?;
        }

        let control = cursor
            .read_u8()
            .ok_or(TgaError::CorruptRleStream("input ended before the last pixel"))?;
        let run = usize::from(control & 0x7F) + 1;
        let run_bytes = run * group_bytes;
        if run_bytes > total - out.len() {
            return Err(TgaError::CorruptRleStream("packet runs past the last pixel"));
        }

        if control & 0x80 != 0 {
            let group = cursor
                .take(group_bytes)
                .ok_or(TgaError::CorruptRleStream("run packet overruns input"))?;
            for _ in 0..run {
                out.extend_from_slice(group);
            }
        } else {
            let groups = cursor
                .take(run_bytes)
                .ok_or(TgaError::CorruptRleStream("raw packet overruns input"))?;
            out.extend_from_slice(groups);
        }
    }

    log::trace!(
        "rle: {packets} packets expanded to {pixel_count} pixels, {} input bytes left",
        cursor.remaining()
    );
    Ok(out)
}
