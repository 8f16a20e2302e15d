/// Source image format, selected by file extension.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// AOL Art (.art) — bitmap, AOL-signature, and PFS First Publisher variants.
    Art,
    /// MacPaint (.mac), including the PNTG container variant.
    Mac,
    /// PICtor (.pic), including the PNTG container variant.
    Pic,
    /// PC Paintbrush (.pcx).
    Pcx,
    /// Tagged Image File Format (.tif/.tiff), delegated to the `tiff` crate.
    Tiff,
}

impl ImageFormat {
    /// Map a filename extension to a format, case-insensitively.
    ///
    /// Accepts the extension with or without its leading dot. Returns
    /// `None` for anything that isn't one of the five supported formats.
    pub fn from_extension(ext: &str) -> Option<ImageFormat> {
        let ext = ext.strip_prefix('.').unwrap_or(ext);
        if ext.eq_ignore_ascii_case("art") {
            Some(ImageFormat::Art)
        } else if ext.eq_ignore_ascii_case("mac") {
            Some(ImageFormat::Mac)
        } else if ext.eq_ignore_ascii_case("pic") {
            Some(ImageFormat::Pic)
        } else if ext.eq_ignore_ascii_case("pcx") {
            Some(ImageFormat::Pcx)
        } else if ext.eq_ignore_ascii_case("tif") || ext.eq_ignore_ascii_case("tiff") {
            Some(ImageFormat::Tiff)
        } else {
            None
        }
    }
}

/// Pixel memory layout of a decoded raster.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelLayout {
    /// Single channel, 8-bit grayscale. 255 = white, 0 = black.
    Gray8,
    /// 3 channels, 8-bit RGB.
    Rgb8,
}

impl PixelLayout {
    /// Bytes per pixel for this layout.
    pub fn bytes_per_pixel(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 => 3,
        }
    }

    /// Number of channels.
    pub fn channels(&self) -> usize {
        match self {
            Self::Gray8 => 1,
            Self::Rgb8 => 3,
        }
    }
}
