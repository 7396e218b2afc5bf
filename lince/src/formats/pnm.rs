use lince_common::read::ByteSource;

use crate::{DetectOptions, Error, ImageFormat, ImageMetadata};

/// Checker for the portable anymap family
///
/// `second_magic` is the digit after the `P`, `1` through `6`; plain
/// and raw variants of the same format share a grammar for the header
/// lines we care about.
pub(crate) fn check(
    source: &mut impl ByteSource,
    second_magic: u8,
    options: DetectOptions,
) -> Result<ImageMetadata, Error> {
    let format = match (second_magic - b'1') % 3 {
        0 => ImageFormat::Pbm,
        1 => ImageFormat::Pgm,
        _ => ImageFormat::Ppm,
    };

    let mut comments = Vec::new();
    let mut dimensions = None;

    loop {
        let line = source.read_line()?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            if options.collect_comments && !comment.is_empty() {
                comments.push(comment.to_string());
            }
            continue;
        }

        match dimensions {
            None => {
                // Split "343 966" on the first and last space so extra
                // whitespace between the tokens is tolerated
                let first_space = line.find(' ').ok_or(Error::MalformedHeader)?;
                let last_space = line.rfind(' ').ok_or(Error::MalformedHeader)?;
                let width: u32 = line[..first_space]
                    .parse()
                    .map_err(|_| Error::MalformedHeader)?;
                let height: u32 = line[last_space + 1..]
                    .parse()
                    .map_err(|_| Error::MalformedHeader)?;
                if width < 1 || height < 1 {
                    return Err(Error::MalformedHeader);
                }

                // Bitmaps have no sample depth line
                if format == ImageFormat::Pbm {
                    let mut metadata = ImageMetadata::new(format, width, height, 1);
                    metadata.comments = comments;
                    return Ok(metadata);
                }
                dimensions = Some((width, height));
            }
            Some((width, height)) => {
                let max_sample: u32 = line.parse().map_err(|_| Error::MalformedHeader)?;

                // Smallest depth whose value range covers the maximum
                // sample
                let Some(bits) = (1u32..=25).find(|&i| u64::from(max_sample) < 1u64 << i) else {
                    return Err(Error::MalformedHeader);
                };
                let mut bits_per_pixel = bits;
                if format == ImageFormat::Ppm {
                    bits_per_pixel *= 3;
                }

                let mut metadata = ImageMetadata::new(format, width, height, bits_per_pixel);
                metadata.comments = comments;
                return Ok(metadata);
            }
        }
    }
}
