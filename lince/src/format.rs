/// File formats the probe can recognize
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ImageFormat {
    Jpeg,
    Gif,
    Png,
    Bmp,
    Pcx,
    Iff,
    Ras,
    Pbm,
    Pgm,
    Ppm,
    Psd,
    Unknown,
}

impl ImageFormat {
    /// Canonical upper-case format name
    pub fn name(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::Png => "PNG",
            Self::Bmp => "BMP",
            Self::Pcx => "PCX",
            Self::Iff => "IFF",
            Self::Ras => "RAS",
            Self::Pbm => "PBM",
            Self::Pgm => "PGM",
            Self::Ppm => "PPM",
            Self::Psd => "PSD",
            Self::Unknown => "?",
        }
    }

    /// MIME type of the format
    ///
    /// Progressive JPEG streams map to a distinct MIME type; see
    /// [`ImageMetadata::mime_type`](crate::ImageMetadata::mime_type).
    pub fn media_type(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Png => "image/png",
            Self::Bmp => "image/bmp",
            Self::Pcx => "image/pcx",
            Self::Iff => "image/iff",
            Self::Ras => "image/ras",
            Self::Pbm => "image/x-portable-bitmap",
            Self::Pgm => "image/x-portable-graymap",
            Self::Ppm => "image/x-portable-pixmap",
            Self::Psd => "image/psd",
            Self::Unknown => "application/octet-stream",
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
