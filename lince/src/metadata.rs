use crate::format::ImageFormat;

/// Structural metadata extracted from an image header
///
/// Built fresh by exactly one format checker per detection call and
/// immutable afterwards. Width, height and bits per pixel are always
/// positive; a header that would violate this fails detection instead.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ImageMetadata {
    pub(crate) format: ImageFormat,
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) bits_per_pixel: u32,
    pub(crate) progressive: bool,
    pub(crate) number_of_images: u32,
    pub(crate) physical_width_dpi: Option<u32>,
    pub(crate) physical_height_dpi: Option<u32>,
    pub(crate) comments: Vec<String>,
}

impl ImageMetadata {
    pub(crate) fn new(format: ImageFormat, width: u32, height: u32, bits_per_pixel: u32) -> Self {
        Self {
            format,
            width,
            height,
            bits_per_pixel,
            progressive: false,
            number_of_images: 1,
            physical_width_dpi: None,
            physical_height_dpi: None,
            comments: Vec::new(),
        }
    }

    pub fn format(&self) -> ImageFormat {
        self.format
    }

    /// Image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Color depth over all channels of one pixel
    pub fn bits_per_pixel(&self) -> u32 {
        self.bits_per_pixel
    }

    /// Whether the stream is stored for incremental rendering
    ///
    /// Interlaced for GIF and PNG, progressive scan for JPEG. Always
    /// `false` for formats without such a concept.
    pub fn progressive(&self) -> bool {
        self.progressive
    }

    /// Number of images in the stream
    ///
    /// Only GIF files hold more than one image. Reported as 1 unless
    /// counting was requested via
    /// [`DetectOptions::count_images`](crate::DetectOptions::count_images).
    pub fn number_of_images(&self) -> u32 {
        self.number_of_images
    }

    /// Horizontal resolution in dots per inch, if the header carries one
    pub fn physical_width_dpi(&self) -> Option<u32> {
        self.physical_width_dpi
    }

    /// Vertical resolution in dots per inch, if the header carries one
    pub fn physical_height_dpi(&self) -> Option<u32> {
        self.physical_height_dpi
    }

    /// Physical width in inches, if the horizontal resolution is known
    pub fn physical_width_inch(&self) -> Option<f32> {
        self.physical_width_dpi
            .map(|dpi| self.width as f32 / dpi as f32)
    }

    /// Physical height in inches, if the vertical resolution is known
    pub fn physical_height_inch(&self) -> Option<f32> {
        self.physical_height_dpi
            .map(|dpi| self.height as f32 / dpi as f32)
    }

    /// Textual comments in the order they appear in the stream
    ///
    /// Empty unless
    /// [`DetectOptions::collect_comments`](crate::DetectOptions::collect_comments)
    /// was set.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// MIME type, accounting for the progressive JPEG special case
    pub fn mime_type(&self) -> &'static str {
        if self.format == ImageFormat::Jpeg && self.progressive {
            "image/pjpeg"
        } else {
            self.format.media_type()
        }
    }
}
