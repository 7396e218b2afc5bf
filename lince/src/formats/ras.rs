use lince_common::bytes::be_i32;
use lince_common::read::ByteSource;

use crate::{Error, ImageFormat, ImageMetadata};

pub(crate) fn check(source: &mut impl ByteSource) -> Result<ImageMetadata, Error> {
    let a: [u8; 14] = source.read_array()?;

    // Second half of the magic number
    if a[0..2] != [0x6A, 0x95] {
        return Err(Error::MalformedHeader);
    }

    let width = be_i32(&a, 2);
    let height = be_i32(&a, 6);
    let depth = be_i32(&a, 10);
    if width < 1 || height < 1 || !(1..=24).contains(&depth) {
        return Err(Error::MalformedHeader);
    }

    Ok(ImageMetadata::new(
        ImageFormat::Ras,
        width as u32,
        height as u32,
        depth as u32,
    ))
}
