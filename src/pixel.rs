//! Raw pixel group → RGBA8 conversion.

use crate::error::TgaError;
use crate::info::ImageType;
use crate::tga::color_map::ColorMapTable;

/// One resolved pixel, R,G,B,A.
pub(crate) type Rgba = [u8; 4];

/// How to turn one stored pixel group into RGBA.
///
/// Chosen once per decode from the header, then matched per pixel.
#[derive(Clone, Copy, Debug)]
pub(crate) enum ColorResolver<'m> {
    /// 5-5-5 packed, opaque.
    Depth15,
    /// 5-5-5 packed with a 1-bit alpha in bit 15.
    Depth16,
    /// B,G,R.
    Depth24,
    /// B,G,R,A.
    Depth32,
    /// Little-endian index into a color map, 1 or 2 bytes wide. Wider
    /// groups carry padding after the index.
    Indexed {
        wide: bool,
        table: &'m ColorMapTable,
    },
    /// Intensity in the first byte; any further bytes are ignored.
    Grayscale,
}

impl<'m> ColorResolver<'m> {
    /// Direct-color resolver for `bits` per pixel, if that depth exists.
    pub(crate) fn direct(bits: u8) -> Option<Self> {
        match bits {
            15 => Some(Self::Depth15),
            16 => Some(Self::Depth16),
            24 => Some(Self::Depth24),
            32 => Some(Self::Depth32),
            _ => None,
        }
    }

    /// Resolver for the pixel data of an image.
    ///
    /// `table` is the decoded color map, when the file has one.
    pub(crate) fn for_image(
        image_type: ImageType,
        depth: u8,
        table: Option<&'m ColorMapTable>,
    ) -> Result<Self, TgaError> {
        let unsupported = TgaError::UnsupportedPixelDepth { image_type, depth };
        let known_depth = matches!(depth, 8 | 15 | 16 | 24 | 32);
        if image_type.is_color_mapped() {
            if !known_depth {
                return Err(unsupported);
            }
            let table = table.ok_or(TgaError::MissingColorMap)?;
            Ok(Self::Indexed {
                wide: depth > 8,
                table,
            })
        } else if image_type.is_grayscale() {
            if !known_depth {
                return Err(unsupported);
            }
            Ok(Self::Grayscale)
        } else if image_type == ImageType::NoData {
            Err(TgaError::NoImageData)
        } else {
            Self::direct(depth).ok_or(unsupported)
        }
    }

    /// Resolve one pixel group. `raw` holds exactly the group's bytes.
    #[inline]
    pub(crate) fn resolve(&self, raw: &[u8]) -> Result<Rgba, TgaError> {
        Ok(match *self {
            Self::Depth15 => {
                let [r, g, b] = unpack_555(raw[0], raw[1]);
                [r, g, b, 255]
            }
            Self::Depth16 => {
                let [r, g, b] = unpack_555(raw[0], raw[1]);
                let a = if raw[1] & 0x80 != 0 { 255 } else { 0 };
                [r, g, b, a]
            }
            Self::Depth24 => [raw[2], raw[1], raw[0], 255],
            Self::Depth32 => [raw[2], raw[1], raw[0], raw[3]],
            Self::Indexed { wide, table } => {
                let index = if wide {
                    u16::from_le_bytes([raw[0], raw[1]])
                } else {
                    u16::from(raw[0])
                };
                table.get(index)?
            }
            Self::Grayscale => [raw[0], raw[0], raw[0], 255],
        })
    }
}

/// Split a little-endian 5-5-5 pair into 8-bit R,G,B.
///
/// byte1: `.RRRRRGG`, byte0: `GGGBBBBB`.
#[inline]
fn unpack_555(byte0: u8, byte1: u8) -> [u8; 3] {
    let r = (byte1 >> 2) & 0x1F;
    let g = ((byte1 & 0x03) << 3) | (byte0 >> 5);
    let b = byte0 & 0x1F;
    [expand5(r), expand5(g), expand5(b)]
}

/// Widen 5 bits to 8 by replicating the top bits into the low ones.
#[inline]
fn expand5(v: u8) -> u8 {
    (v << 3) | (v >> 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn depth24_is_bgr() {
        let px = ColorResolver::Depth24.resolve(&[10, 20, 30]).unwrap();
        assert_eq!(px, [30, 20, 10, 255]);
    }

    #[test]
    fn depth32_keeps_alpha() {
        let px = ColorResolver::Depth32.resolve(&[1, 2, 3, 77]).unwrap();
        assert_eq!(px, [3, 2, 1, 77]);
    }

    #[test]
    fn depth15_channel_layout() {
        // R=31, G=0, B=0 → byte1 = 0b0111_1100
        let red = ColorResolver::Depth15.resolve(&[0x00, 0x7C]).unwrap();
        assert_eq!(red, [255, 0, 0, 255]);
        // G=31 → byte1 low two bits set, byte0 top three bits set
        let green = ColorResolver::Depth15.resolve(&[0xE0, 0x03]).unwrap();
        assert_eq!(green, [0, 255, 0, 255]);
        let blue = ColorResolver::Depth15.resolve(&[0x1F, 0x00]).unwrap();
        assert_eq!(blue, [0, 0, 255, 255]);
        // Bit 15 is ignored at depth 15.
        let still_opaque = ColorResolver::Depth15.resolve(&[0x00, 0x80]).unwrap();
        assert_eq!(still_opaque, [0, 0, 0, 255]);
    }

    #[test]
    fn five_bit_expansion_replicates() {
        assert_eq!(expand5(0), 0);
        assert_eq!(expand5(1), 0b0000_1000);
        assert_eq!(expand5(16), 0b1000_0100);
        assert_eq!(expand5(31), 255);
    }

    #[test]
    fn depth16_alpha_bit() {
        let opaque = ColorResolver::Depth16.resolve(&[0x1F, 0x80]).unwrap();
        assert_eq!(opaque, [0, 0, 255, 255]);
        let clear = ColorResolver::Depth16.resolve(&[0x1F, 0x00]).unwrap();
        assert_eq!(clear, [0, 0, 255, 0]);
    }

    #[test]
    fn grayscale_replicates_intensity() {
        let px = ColorResolver::Grayscale.resolve(&[99]).unwrap();
        assert_eq!(px, [99, 99, 99, 255]);
    }

    #[test]
    fn grayscale_ignores_attribute_byte() {
        let px = ColorResolver::Grayscale.resolve(&[77, 255]).unwrap();
        assert_eq!(px, [77, 77, 77, 255]);
    }

    #[test]
    fn wide_index_skips_padding() {
        let table = ColorMapTable::from_entries(vec![[0; 4], [9, 8, 7, 255]]);
        let wide = ColorResolver::Indexed {
            wide: true,
            table: &table,
        };
        assert_eq!(wide.resolve(&[1, 0, 0]).unwrap(), [9, 8, 7, 255]);
        assert_eq!(wide.resolve(&[1, 0, 0xAB, 0xCD]).unwrap(), [9, 8, 7, 255]);
    }

    #[test]
    fn indexed_lookup_and_range() {
        let table = ColorMapTable::from_entries(vec![[1, 2, 3, 4]; 4]);
        let narrow = ColorResolver::Indexed {
            wide: false,
            table: &table,
        };
        assert_eq!(narrow.resolve(&[3]).unwrap(), [1, 2, 3, 4]);
        assert!(matches!(
            narrow.resolve(&[5]),
            Err(TgaError::ColorIndexOutOfRange { index: 5, len: 4 })
        ));

        let wide = ColorResolver::Indexed {
            wide: true,
            table: &table,
        };
        assert_eq!(wide.resolve(&[2, 0]).unwrap(), [1, 2, 3, 4]);
        assert!(matches!(
            wide.resolve(&[0, 1]),
            Err(TgaError::ColorIndexOutOfRange { index: 256, .. })
        ));
    }

    #[test]
    fn selection_by_type_and_depth() {
        let table = ColorMapTable::from_entries(vec![[0; 4]]);
        assert!(matches!(
            ColorResolver::for_image(ImageType::RleTrueColor, 24, None),
            Ok(ColorResolver::Depth24)
        ));
        assert!(matches!(
            ColorResolver::for_image(ImageType::ColorMapped, 16, Some(&table)),
            Ok(ColorResolver::Indexed { wide: true, .. })
        ));
        assert!(matches!(
            ColorResolver::for_image(ImageType::ColorMapped, 8, None),
            Err(TgaError::MissingColorMap)
        ));
        assert!(matches!(
            ColorResolver::for_image(ImageType::TrueColor, 8, None),
            Err(TgaError::UnsupportedPixelDepth { depth: 8, .. })
        ));
        assert!(matches!(
            ColorResolver::for_image(ImageType::RleGrayscale, 16, None),
            Ok(ColorResolver::Grayscale)
        ));
        assert!(matches!(
            ColorResolver::for_image(ImageType::Grayscale, 12, None),
            Err(TgaError::UnsupportedPixelDepth { depth: 12, .. })
        ));
        assert!(matches!(
            ColorResolver::for_image(ImageType::ColorMapped, 24, Some(&table)),
            Ok(ColorResolver::Indexed { wide: true, .. })
        ));
        assert!(matches!(
            ColorResolver::for_image(ImageType::RleColorMapped, 7, Some(&table)),
            Err(TgaError::UnsupportedPixelDepth { depth: 7, .. })
        ));
        assert!(matches!(
            ColorResolver::for_image(ImageType::NoData, 0, None),
            Err(TgaError::NoImageData)
        ));
    }
}
