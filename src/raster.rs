use alloc::borrow::Cow;
use alloc::vec::Vec;

#[cfg(feature = "rgb")]
use rgb::AsPixels as _;

use crate::pixel::PixelLayout;

/// Decoded raster output. Pixels may be borrowed (zero-copy) or owned.
///
/// Row-major, top-to-bottom, left-to-right, 8 bits per channel;
/// `pixels().len() == width * height * layout.channels()` always holds.
#[derive(Clone, Debug)]
pub struct Raster<'a> {
    pixels: Cow<'a, [u8]>,
    pub width: u32,
    pub height: u32,
    pub layout: PixelLayout,
}

impl<'a> Raster<'a> {
    /// Access the pixel data.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Number of channels (1 for grayscale, 3 for RGB).
    pub fn channels(&self) -> usize {
        self.layout.channels()
    }

    /// Take ownership of the pixel data (copies if borrowed).
    pub fn into_owned(self) -> Raster<'static> {
        Raster {
            pixels: Cow::Owned(self.pixels.into_owned()),
            width: self.width,
            height: self.height,
            layout: self.layout,
        }
    }

    /// Whether the pixel data is borrowed (zero-copy from input).
    pub fn is_borrowed(&self) -> bool {
        matches!(self.pixels, Cow::Borrowed(_))
    }

    pub(crate) fn borrowed(data: &'a [u8], width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels: Cow::Borrowed(data),
            width,
            height,
            layout,
        }
    }

    pub(crate) fn owned(data: Vec<u8>, width: u32, height: u32, layout: PixelLayout) -> Self {
        Self {
            pixels: Cow::Owned(data),
            width,
            height,
            layout,
        }
    }

    /// Reinterpret the pixel data as a typed RGB slice.
    ///
    /// Returns [`crate::RasterError::LayoutMismatch`] for grayscale rasters.
    #[cfg(feature = "rgb")]
    pub fn as_rgb(&self) -> Result<&[rgb::RGB8], crate::RasterError> {
        if self.layout != PixelLayout::Rgb8 {
            return Err(crate::RasterError::LayoutMismatch {
                expected: PixelLayout::Rgb8,
                actual: self.layout,
            });
        }
        Ok(self.pixels().as_pixels())
    }

    /// Zero-copy view as an [`imgref::ImgRef`] of RGB pixels.
    ///
    /// No allocation or copy — the returned `ImgRef` borrows directly from
    /// this raster's pixel buffer.
    ///
    /// Returns [`crate::RasterError::LayoutMismatch`] for grayscale rasters.
    #[cfg(feature = "imgref")]
    pub fn as_imgref_rgb(&self) -> Result<imgref::ImgRef<'_, rgb::RGB8>, crate::RasterError> {
        let pixels = self.as_rgb()?;
        Ok(imgref::ImgRef::new(
            pixels,
            self.width as usize,
            self.height as usize,
        ))
    }
}
