use lince_common::bytes::{be_u16, be_u32};
use lince_common::read::ByteSource;

use crate::{Error, ImageFormat, ImageMetadata};

const TYPE_ILBM: u32 = u32::from_be_bytes(*b"ILBM");
const TYPE_PBM: u32 = u32::from_be_bytes(*b"PBM ");
const CHUNK_BMHD: u32 = u32::from_be_bytes(*b"BMHD");

pub(crate) fn check(source: &mut impl ByteSource) -> Result<ImageMetadata, Error> {
    // Remaining 2 bytes of "FORM", 4 bytes file size, 4 bytes subtype
    let a: [u8; 10] = source.read_array()?;
    if &a[0..2] != b"RM" {
        return Err(Error::MalformedHeader);
    }
    let subtype = be_u32(&a, 6);
    if subtype != TYPE_ILBM && subtype != TYPE_PBM {
        return Err(Error::MalformedHeader);
    }

    // Walk chunks until the bitmap header turns up
    loop {
        let h: [u8; 8] = source.read_array()?;
        let chunk_id = be_u32(&h, 0);
        let size = u64::from(be_u32(&h, 4));
        // Chunks are padded to even sizes
        let size = size + size % 2;

        if chunk_id == CHUNK_BMHD {
            let body: [u8; 9] = source.read_array()?;
            let width = u32::from(be_u16(&body, 0));
            let height = u32::from(be_u16(&body, 2));
            let bits_per_pixel = u32::from(body[8]);
            if width < 1 || height < 1 || !(1..33).contains(&bits_per_pixel) {
                return Err(Error::MalformedHeader);
            }
            return Ok(ImageMetadata::new(
                ImageFormat::Iff,
                width,
                height,
                bits_per_pixel,
            ));
        }

        tracing::debug!("Skipping IFF chunk {chunk_id:#010x} of {size} bytes");
        source.skip(size)?;
    }
}
