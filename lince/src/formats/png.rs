use lince_common::bytes::be_i32;
use lince_common::read::ByteSource;

use crate::{Error, ImageFormat, ImageMetadata};

const MAGIC_TAIL: &[u8] = &[0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];

pub(crate) fn check(source: &mut impl ByteSource) -> Result<ImageMetadata, Error> {
    // Signature tail, IHDR chunk header, and the IHDR payload
    let a: [u8; 27] = source.read_array()?;
    if &a[0..6] != MAGIC_TAIL {
        return Err(Error::MalformedHeader);
    }

    let width = be_i32(&a, 14);
    let height = be_i32(&a, 18);
    if width < 1 || height < 1 {
        return Err(Error::MalformedHeader);
    }

    // Truecolor types carry three samples per pixel
    let mut bits_per_pixel = u32::from(a[22]);
    let color_type = a[23];
    if color_type == 2 || color_type == 6 {
        bits_per_pixel *= 3;
    }
    if bits_per_pixel < 1 {
        return Err(Error::MalformedHeader);
    }

    let mut metadata =
        ImageMetadata::new(ImageFormat::Png, width as u32, height as u32, bits_per_pixel);
    metadata.progressive = a[26] != 0;

    Ok(metadata)
}
