//! # zentga
//!
//! TGA (Truevision Targa) image decoder. Every supported variant decodes
//! to RGBA8, row-major, top-left origin, whatever the file's storage order.
//!
//! ## Supported Variants
//!
//! - **True-color** (types 2, 10): 15, 16 (1-bit alpha), 24 and 32-bit
//! - **Color-mapped** (types 1, 9): 1-byte indices at depth 8, 2-byte
//!   little-endian indices in wider groups, into a 15/16/24/32-bit palette
//! - **Grayscale** (types 3, 11): intensity in the first byte, 8-bit or
//!   wider groups with attribute bytes
//! - Run-length encoded and uncompressed pixel data
//! - All four origin corners (right-to-left files are mirrored, or
//!   rejected with [`OrientationPolicy::Reject`])
//!
//! ## Non-Goals
//!
//! - Encoding
//! - TGA 2.0 footer and extension area (ignored)
//! - Color management and gamma; channel values are passed through
//!
//! ## Usage
//!
//! ```no_run
//! use zentga::{DecodeRequest, ImageInfo};
//! use enough::Unstoppable;
//!
//! let data: &[u8] = &[]; // your TGA bytes
//!
//! // Probe without decoding
//! let info = ImageInfo::from_bytes(data)?;
//! println!("{}x{} {:?}", info.width, info.height, info.image_type);
//!
//! let decoded = DecodeRequest::new(data).decode(Unstoppable)?;
//! assert_eq!(decoded.pixels().len(), decoded.width as usize * decoded.height as usize * 4);
//! # Ok::<(), zentga::TgaError>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod error;
mod info;
mod limits;
mod pixel;
mod source;
mod tga;

mod decode;

// Re-exports
pub use decode::{DecodeOutput, DecodeRequest, OrientationPolicy};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::TgaError;
pub use info::{ImageInfo, ImageType, Origin};
pub use limits::Limits;
#[cfg(feature = "std")]
pub use source::FileSource;
pub use source::{ByteSource, MemorySource, decode_from_source};

/// Decode TGA bytes with default settings.
pub fn decode(data: &[u8], stop: impl Stop) -> Result<DecodeOutput, TgaError> {
    DecodeRequest::new(data).decode(stop)
}
