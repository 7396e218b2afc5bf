use lince_common::bytes::{le_i32, le_u16};
use lince_common::read::ByteSource;

use crate::{Error, ImageFormat, ImageMetadata};

pub(crate) fn check(source: &mut impl ByteSource) -> Result<ImageMetadata, Error> {
    // File header continuation plus the BITMAPINFOHEADER fields we need
    let a: [u8; 44] = source.read_array()?;

    // Dimension fields are signed; top-down bitmaps with negative
    // height are rejected like any other invalid dimension.
    let width = le_i32(&a, 16);
    let height = le_i32(&a, 20);
    if width < 1 || height < 1 {
        return Err(Error::MalformedHeader);
    }

    let bits_per_pixel = le_u16(&a, 26);
    if !matches!(bits_per_pixel, 1 | 4 | 8 | 16 | 24 | 32) {
        return Err(Error::MalformedHeader);
    }

    let mut metadata = ImageMetadata::new(
        ImageFormat::Bmp,
        width as u32,
        height as u32,
        bits_per_pixel.into(),
    );

    // Resolution is stored as pixels per meter
    let x = (f64::from(le_i32(&a, 36)) * 0.0254) as i32;
    if x > 0 {
        metadata.physical_width_dpi = Some(x as u32);
    }
    let y = (f64::from(le_i32(&a, 40)) * 0.0254) as i32;
    if y > 0 {
        metadata.physical_height_dpi = Some(y as u32);
    }

    Ok(metadata)
}
