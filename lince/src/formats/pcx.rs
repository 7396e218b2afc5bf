use lince_common::bytes::le_u16;
use lince_common::read::ByteSource;

use crate::{Error, ImageFormat, ImageMetadata};

pub(crate) fn check(source: &mut impl ByteSource) -> Result<ImageMetadata, Error> {
    let a: [u8; 64] = source.read_array()?;

    // Only RLE encoding was ever defined
    if a[0] != 1 {
        return Err(Error::MalformedHeader);
    }

    // Dimensions come as a bounding box
    let x1 = le_u16(&a, 2);
    let y1 = le_u16(&a, 4);
    let x2 = le_u16(&a, 6);
    let y2 = le_u16(&a, 8);
    if x2 < x1 || y2 < y1 {
        return Err(Error::MalformedHeader);
    }
    let width = u32::from(x2 - x1) + 1;
    let height = u32::from(y2 - y1) + 1;

    let bits = a[1];
    let planes = a[63];
    let bits_per_pixel = match (planes, bits) {
        // Paletted
        (1, 1 | 2 | 4 | 8) => u32::from(bits),
        // RGB truecolor
        (3, 8) => 24,
        _ => return Err(Error::MalformedHeader),
    };

    let mut metadata = ImageMetadata::new(ImageFormat::Pcx, width, height, bits_per_pixel);

    // Inherited quirk: both axes are sourced from the horizontal DPI
    // field at offset 10, matching what existing consumers of this
    // format's metadata have always been given.
    let dpi = le_u16(&a, 10);
    if dpi > 0 {
        metadata.physical_width_dpi = Some(dpi.into());
        metadata.physical_height_dpi = Some(dpi.into());
    }

    Ok(metadata)
}
