//! Pixel groups in storage order → top-left RGBA8 raster.

use alloc::vec;
use alloc::vec::Vec;

use enough::Stop;

use crate::error::TgaError;
use crate::info::Origin;
use crate::pixel::ColorResolver;

/// Resolve `groups` (exactly `width * height` groups, rows in storage
/// order) into a row-major top-left RGBA8 buffer.
///
/// Bottom-origin rows are reversed; right-origin columns are mirrored.
pub(crate) fn assemble(
    groups: &[u8],
    width: usize,
    height: usize,
    origin: Origin,
    resolver: &ColorResolver<'_>,
    group_bytes: usize,
    stop: &dyn Stop,
) -> Result<Vec<u8>, TgaError> {
    let out_stride = width * 4;
    let mut out = vec![0u8; out_stride * height];

    for (src_y, src_row) in groups.chunks_exact(width * group_bytes).enumerate() {
        if src_y % 16 == 0 {
            stop.check()?;
        }
        let dst_y = if origin.is_top() {
            src_y
        } else {
            height - 1 - src_y
        };
        let dst_row = &mut out[dst_y * out_stride..][..out_stride];

        for (src_x, raw) in src_row.chunks_exact(group_bytes).enumerate() {
            let dst_x = if origin.is_right() {
                width - 1 - src_x
            } else {
                src_x
            };
            dst_row[dst_x * 4..dst_x * 4 + 4].copy_from_slice(&resolver.resolve(raw)?);
        }
    }

    Ok(out)
}
