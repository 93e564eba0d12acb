//! Byte acquisition boundary.
//!
//! The decoder never does I/O itself. A [`ByteSource`] turns an
//! identifier into the complete file contents; [`decode_from_source`]
//! fetches once and hands the bytes to the decoder.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use enough::Stop;

use crate::decode::{DecodeOutput, DecodeRequest};
use crate::error::TgaError;

/// Yields whole files by identifier.
///
/// Failures must be reported as [`TgaError::SourceUnavailable`]. Retries,
/// if any, belong in the implementation; the decoder does not retry.
pub trait ByteSource {
    fn fetch(&self, id: &str) -> Result<Vec<u8>, TgaError>;
}

impl<S: ByteSource + ?Sized> ByteSource for &S {
    fn fetch(&self, id: &str) -> Result<Vec<u8>, TgaError> {
        (**self).fetch(id)
    }
}

/// In-memory files keyed by name.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: BTreeMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(id.into(), bytes);
    }

    pub fn with(mut self, id: impl Into<String>, bytes: Vec<u8>) -> Self {
        self.insert(id, bytes);
        self
    }
}

impl ByteSource for MemorySource {
    fn fetch(&self, id: &str) -> Result<Vec<u8>, TgaError> {
        self.files
            .get(id)
            .cloned()
            .ok_or_else(|| TgaError::SourceUnavailable {
                id: id.to_string(),
                reason: "not found".into(),
            })
    }
}

/// Files under a root directory; the identifier is a relative path.
#[cfg(feature = "std")]
#[derive(Clone, Debug)]
pub struct FileSource {
    root: std::path::PathBuf,
}

#[cfg(feature = "std")]
impl FileSource {
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[cfg(feature = "std")]
impl ByteSource for FileSource {
    fn fetch(&self, id: &str) -> Result<Vec<u8>, TgaError> {
        let path = self.root.join(id);
        std::fs::read(&path).map_err(|e| {
            log::warn!("failed to read {}: {e}", path.display());
            TgaError::SourceUnavailable {
                id: id.to_string(),
                reason: e.to_string(),
            }
        })
    }
}

/// Fetch `id` from `source` and decode it with default settings.
pub fn decode_from_source(
    source: &impl ByteSource,
    id: &str,
    stop: impl Stop,
) -> Result<DecodeOutput, TgaError> {
    let bytes = source.fetch(id)?;
    DecodeRequest::new(&bytes).decode(stop)
}
