use lince_common::read::ByteSource;

use crate::formats;
use crate::{DetectOptions, Error, ImageMetadata};

/// Identify the format of `source` and extract its header metadata
///
/// Reads the first two magic bytes and commits to the matching format;
/// since consumed bytes cannot be rewound, there is no backtracking
/// across formats. `source` is left positioned wherever the chosen
/// checker stopped and owns nothing beyond the call.
///
/// ```
/// # use lince::*;
/// let mut source = SliceSource::new(&[0x00, 0x00, 0x13, 0x37]);
/// assert_eq!(
///     detect(&mut source, DetectOptions::new()),
///     Err(Error::UnrecognizedFormat)
/// );
/// ```
pub fn detect(
    source: &mut impl ByteSource,
    options: DetectOptions,
) -> Result<ImageMetadata, Error> {
    let [b1, b2] = source.read_array()?;
    tracing::debug!("Dispatching on magic bytes {b1:#04x} {b2:#04x}");

    match (b1, b2) {
        (0x47, 0x49) => formats::gif::check(source, options),
        (0x89, 0x50) => formats::png::check(source),
        (0xFF, 0xD8) => formats::jpeg::check(source, options),
        (0x42, 0x4D) => formats::bmp::check(source),
        (0x0A, 0x00..=0x05) => formats::pcx::check(source),
        (0x46, 0x4F) => formats::iff::check(source),
        (0x59, 0xA6) => formats::ras::check(source),
        (0x50, b'1'..=b'6') => formats::pnm::check(source, b2, options),
        (0x38, 0x42) => formats::psd::check(source),
        _ => Err(Error::UnrecognizedFormat),
    }
}
