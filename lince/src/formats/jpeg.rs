use lince_common::bytes::be_u16;
use lince_common::read::ByteSource;

use crate::{DetectOptions, Error, ImageFormat, ImageMetadata};

const JFIF_ID: &[u8] = b"JFIF\0";

const MARKER_APP0: u16 = 0xFFE0;
const MARKER_COM: u16 = 0xFFFE;

pub(crate) fn check(
    source: &mut impl ByteSource,
    options: DetectOptions,
) -> Result<ImageMetadata, Error> {
    let mut physical_width_dpi = None;
    let mut physical_height_dpi = None;
    let mut comments = Vec::new();

    loop {
        let a: [u8; 4] = source.read_array()?;
        let marker = be_u16(&a, 0);
        let size = be_u16(&a, 2);
        if marker & 0xFF00 != 0xFF00 {
            return Err(Error::MalformedHeader);
        }
        tracing::debug!("JPEG marker {marker:#06x}, segment length {size}");

        if marker == MARKER_APP0 {
            if size < 14 {
                // Not a JFIF application header as we know it
                source.skip(u64::from(size).saturating_sub(2))?;
                continue;
            }
            let d: [u8; 12] = source.read_array()?;
            if d.starts_with(JFIF_ID) {
                let x = be_u16(&d, 8);
                let y = be_u16(&d, 10);
                // Density units: 1 = dots per inch, 2 = dots per
                // centimeter, anything else leaves the resolution unset
                let (x, y) = match d[7] {
                    1 => (u32::from(x), u32::from(y)),
                    2 => (
                        (f64::from(x) * 2.54) as u32,
                        (f64::from(y) * 2.54) as u32,
                    ),
                    _ => (0, 0),
                };
                if x > 0 {
                    physical_width_dpi = Some(x);
                }
                if y > 0 {
                    physical_height_dpi = Some(y);
                }
            }
            // Whatever is left of the segment, usually a thumbnail
            source.skip(u64::from(size - 14))?;
        } else if options.collect_comments && size > 2 && marker == MARKER_COM {
            let mut payload = vec![0; usize::from(size - 2)];
            source.read_exact(&mut payload)?;
            let comment = encoding_rs::mem::decode_latin1(&payload);
            comments.push(comment.trim().to_string());
        } else if (0xFFC0..=0xFFCF).contains(&marker) && marker != 0xFFC4 && marker != 0xFFC8 {
            // Start of frame terminates the scan
            let d: [u8; 6] = source.read_array()?;
            let bits_per_pixel = u32::from(d[0]) * u32::from(d[5]);

            // Field order in the frame header is height before width
            let height = u32::from(be_u16(&d, 1));
            let width = u32::from(be_u16(&d, 3));
            if width < 1 || height < 1 || bits_per_pixel < 1 {
                return Err(Error::MalformedHeader);
            }

            let mut metadata =
                ImageMetadata::new(ImageFormat::Jpeg, width, height, bits_per_pixel);
            metadata.progressive = matches!(marker, 0xFFC2 | 0xFFC6 | 0xFFCA | 0xFFCE);
            metadata.physical_width_dpi = physical_width_dpi;
            metadata.physical_height_dpi = physical_height_dpi;
            metadata.comments = comments;
            return Ok(metadata);
        } else {
            source.skip(u64::from(size).saturating_sub(2))?;
        }
    }
}
