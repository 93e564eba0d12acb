//! Color map (palette) table decoding.

use alloc::vec::Vec;

use super::cursor::Cursor;
use super::header::{ColorMapSpec, byte_size};
use crate::error::TgaError;
use crate::pixel::{ColorResolver, Rgba};

/// Resolved palette, indexed from 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct ColorMapTable {
    entries: Vec<Rgba>,
}

impl ColorMapTable {
    pub(crate) fn from_entries(entries: Vec<Rgba>) -> Self {
        Self { entries }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    pub(crate) fn get(&self, index: u16) -> Result<Rgba, TgaError> {
        self.entries
            .get(usize::from(index))
            .copied()
            .ok_or(TgaError::ColorIndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }
}

/// Read the color map starting at the cursor, leaving the cursor on the
/// first byte of pixel data.
///
/// `first_entry_index` entries' worth of bytes are skipped before the
/// `length` stored entries are read.
pub(crate) fn read_color_map(
    cursor: &mut Cursor<'_>,
    spec: &ColorMapSpec,
) -> Result<ColorMapTable, TgaError> {
    let resolver = ColorResolver::direct(spec.entry_size)
        .ok_or(TgaError::UnsupportedColorMapDepth(spec.entry_size))?;
    let entry_bytes = byte_size(spec.entry_size);

    let skip = usize::from(spec.first_entry_index) * entry_bytes;
    let needed = skip + usize::from(spec.length) * entry_bytes;
    let available = cursor.remaining();
    let raw = cursor
        .take(needed)
        .ok_or(TgaError::TruncatedColorMap { needed, available })?;

    let entries = raw[skip..]
        .chunks_exact(entry_bytes)
        .map(|entry| resolver.resolve(entry))
        .collect::<Result<Vec<_>, _>>()?;

    let table = ColorMapTable::from_entries(entries);
    log::trace!(
        "color map: {} entries of {} bits, skipped {skip} bytes",
        table.len(),
        spec.entry_size
    );
    Ok(table)
}
