use lince_common::bytes::{be_i32, be_u16};
use lince_common::read::ByteSource;

use crate::{Error, ImageFormat, ImageMetadata};

pub(crate) fn check(source: &mut impl ByteSource) -> Result<ImageMetadata, Error> {
    // Rest of the "8BPS" signature through the depth and mode fields
    let a: [u8; 24] = source.read_array()?;
    if &a[0..2] != b"PS" {
        return Err(Error::MalformedHeader);
    }

    // Height precedes width in the file header
    let height = be_i32(&a, 12);
    let width = be_i32(&a, 16);
    let channels = be_u16(&a, 10);
    let depth = be_u16(&a, 20);

    let bits_per_pixel = u32::from(channels) * u32::from(depth);
    if width < 1 || height < 1 || !(1..=64).contains(&bits_per_pixel) {
        return Err(Error::MalformedHeader);
    }

    Ok(ImageMetadata::new(
        ImageFormat::Psd,
        width as u32,
        height as u32,
        bits_per_pixel,
    ))
}
