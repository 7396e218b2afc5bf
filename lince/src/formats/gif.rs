use lince_common::bytes::le_u16;
use lince_common::read::ByteSource;

use crate::{DetectOptions, Error, ImageFormat, ImageMetadata};

const MAGIC_87A: &[u8] = b"F87a";
const MAGIC_89A: &[u8] = b"F89a";

/// Label of the comment extension
const COMMENT_EXTENSION: u8 = 0xFE;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Block {
    ImageDescriptor,
    Extension,
    Trailer,
    Unknown(u8),
}

impl From<u8> for Block {
    fn from(label: u8) -> Self {
        match label {
            0x2C => Self::ImageDescriptor,
            0x21 => Self::Extension,
            0x3B => Self::Trailer,
            other => Self::Unknown(other),
        }
    }
}

pub(crate) fn check(
    source: &mut impl ByteSource,
    options: DetectOptions,
) -> Result<ImageMetadata, Error> {
    // Remaining 4 signature bytes plus the logical screen descriptor
    let a: [u8; 11] = source.read_array()?;
    if &a[0..4] != MAGIC_89A && &a[0..4] != MAGIC_87A {
        return Err(Error::MalformedHeader);
    }

    let width = u32::from(le_u16(&a, 4));
    let height = u32::from(le_u16(&a, 6));
    if width < 1 || height < 1 {
        return Err(Error::MalformedHeader);
    }

    let flags = a[8];
    let bits_per_pixel = u32::from((flags >> 4) & 0x07) + 1;

    let mut metadata = ImageMetadata::new(ImageFormat::Gif, width, height, bits_per_pixel);
    if !options.count_images {
        return Ok(metadata);
    }

    // Global color table sits between the descriptor and the first block
    if flags & 0x80 != 0 {
        source.skip((1u64 << ((flags & 0x07) + 1)) * 3)?;
    }

    metadata.number_of_images = 0;
    loop {
        match Block::from(source.read_byte()?) {
            Block::ImageDescriptor => {
                let d: [u8; 9] = source.read_array()?;
                let local_flags = d[8];
                metadata.progressive = local_flags & 0x40 != 0;

                // A local color table can be deeper than the global one
                let local_bits = u32::from(local_flags & 0x07) + 1;
                if local_bits > metadata.bits_per_pixel {
                    metadata.bits_per_pixel = local_bits;
                }
                if local_flags & 0x80 != 0 {
                    source.skip((1u64 << local_bits) * 3)?;
                }

                // LZW minimum code size, then the compressed data blocks
                source.skip(1)?;
                skip_sub_blocks(source)?;
                metadata.number_of_images += 1;
            }
            Block::Extension => {
                let extension_type = source.read_byte()?;
                if options.collect_comments && extension_type == COMMENT_EXTENSION {
                    let mut comment = String::new();
                    loop {
                        let len = source.read_byte()?;
                        if len == 0 {
                            break;
                        }
                        for _ in 0..len {
                            comment.push(char::from(source.read_byte()?));
                        }
                    }
                    metadata.comments.push(comment);
                } else {
                    skip_sub_blocks(source)?;
                }
            }
            Block::Trailer => break,
            Block::Unknown(label) => {
                tracing::debug!("Unexpected GIF block label {label:#04x}");
                return Err(Error::MalformedHeader);
            }
        }
    }

    Ok(metadata)
}

/// Skip length-prefixed sub-blocks up to the zero-length terminator
fn skip_sub_blocks(source: &mut impl ByteSource) -> Result<(), Error> {
    loop {
        let len = source.read_byte()?;
        if len == 0 {
            return Ok(());
        }
        source.skip(len.into())?;
    }
}
