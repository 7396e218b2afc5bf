#![doc = include_str!("../README.md")]

mod error;
mod format;
mod formats;
mod metadata;
mod probe;

pub use error::Error;
pub use format::ImageFormat;
pub use lince_common::read::{ByteSource, SliceSource, StreamSource};
pub use metadata::ImageMetadata;
pub use probe::detect;

/// Per-call switches for the optional, read-heavy extractions
///
/// Both default to off since honoring them costs extra reads over the
/// source.
///
/// ```
/// # use lince::DetectOptions;
/// let options = DetectOptions::new().collect_comments(true).count_images(true);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct DetectOptions {
    pub(crate) collect_comments: bool,
    pub(crate) count_images: bool,
}

impl DetectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Gather textual comments from formats that can carry them
    /// (GIF comment extensions, JPEG COM segments, PNM `#` lines)
    pub fn collect_comments(mut self, value: bool) -> Self {
        self.collect_comments = value;
        self
    }

    /// Walk all GIF blocks to count the embedded images
    ///
    /// Without this, detection stops after the logical screen
    /// descriptor and reports one image.
    pub fn count_images(mut self, value: bool) -> Self {
        self.count_images = value;
        self
    }
}
