//! # retrobitmaps
//!
//! Decoders for five raster image formats of the 1980s-90s
//! personal-computer era: AOL Art (`.art`), MacPaint (`.mac`), PICtor
//! (`.pic`), PC Paintbrush (`.pcx`), and TIFF (`.tif`/`.tiff`, delegated to
//! the `tiff` crate).
//!
//! Every decoder is a pure function from file bytes to a [`Raster`]: 8 bits
//! per channel, row-major, 1 (grayscale) or 3 (RGB) channels. Files of this
//! era lie. Magic numbers are ambiguous, several incompatible layouts share
//! each extension, and headers misreport their own dimensions, so each
//! decoder dispatches across sub-variants with a magic-byte cascade,
//! degrades gracefully on truncated or malformed payloads (zero-padded
//! regions, fallback dimensions), and errors only when no variant yields
//! plausible dimensions.
//!
//! ## Usage
//!
//! ```no_run
//! use retrobitmaps::{decode, ImageFormat, Unstoppable};
//!
//! let bytes = std::fs::read("painting.mac")?;
//! let format = ImageFormat::from_extension("mac").unwrap();
//! let raster = decode(format, &bytes, Unstoppable)?;
//! assert_eq!(
//!     raster.pixels().len(),
//!     raster.width as usize * raster.height as usize * raster.channels()
//! );
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Formats
//!
//! - **ART** — standard word-aligned bitmap, AOL-signature container
//!   (AOL-RLE), PFS First Publisher, plus a raw-bitmap fallback.
//! - **MAC** — MacPaint and PNTG containers; always 576x720 monochrome.
//! - **PIC** — PICtor (1/4/8 bpp, PICtor-RLE, 6-bit palettes) and PNTG.
//! - **PCX** — monochrome, planar EGA/RGB, nibble-packed, and 256-colour
//!   indexed modes over PCX-RLE.
//! - **TIFF** — thin adapter over the `tiff` crate (`tiff` feature).
//!
//! The four run-length codecs are public in [`rle`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

mod art;
mod assemble;
mod bytes;
mod error;
mod limits;
mod mac;
mod palette;
mod pcx;
mod pic;
mod pixel;
mod raster;
pub mod rle;

#[cfg(feature = "tiff")]
mod tif;

pub use enough::{Stop, Unstoppable};
pub use error::RasterError;
pub use limits::Limits;
pub use pixel::{ImageFormat, PixelLayout};
pub use raster::Raster;

/// Decode `data` as `format`.
///
/// The format hint normally comes from the filename extension via
/// [`ImageFormat::from_extension`]; all further sub-variant detection
/// happens inside the chosen decoder.
pub fn decode(
    format: ImageFormat,
    data: &[u8],
    stop: impl Stop,
) -> Result<Raster<'_>, RasterError> {
    decode_dispatch(format, data, None, &stop)
}

/// Decode with resource limits.
pub fn decode_with_limits<'a>(
    format: ImageFormat,
    data: &'a [u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Raster<'a>, RasterError> {
    decode_dispatch(format, data, Some(limits), &stop)
}

fn decode_dispatch<'a>(
    format: ImageFormat,
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'a>, RasterError> {
    match format {
        ImageFormat::Art => art::decode(data, limits, stop),
        ImageFormat::Mac => mac::decode(data, limits, stop),
        ImageFormat::Pic => pic::decode(data, limits, stop),
        ImageFormat::Pcx => pcx::decode(data, limits, stop),
        ImageFormat::Tiff => {
            #[cfg(feature = "tiff")]
            return tif::decode(data, limits, stop);
            #[cfg(not(feature = "tiff"))]
            return Err(RasterError::UnsupportedVariant(
                "TIFF support requires the 'tiff' feature".into(),
            ));
        }
    }
}

/// Decode AOL Art data.
pub fn decode_art(data: &[u8], stop: impl Stop) -> Result<Raster<'_>, RasterError> {
    art::decode(data, None, &stop)
}

/// Decode AOL Art data with resource limits.
pub fn decode_art_with_limits<'a>(
    data: &'a [u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Raster<'a>, RasterError> {
    art::decode(data, Some(limits), &stop)
}

/// Decode MacPaint data. The output is always 576x720 grayscale.
pub fn decode_mac(data: &[u8], stop: impl Stop) -> Result<Raster<'static>, RasterError> {
    mac::decode(data, None, &stop)
}

/// Decode MacPaint data with resource limits.
pub fn decode_mac_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Raster<'static>, RasterError> {
    mac::decode(data, Some(limits), &stop)
}

/// Decode PICtor data.
pub fn decode_pic(data: &[u8], stop: impl Stop) -> Result<Raster<'static>, RasterError> {
    pic::decode(data, None, &stop)
}

/// Decode PICtor data with resource limits.
pub fn decode_pic_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Raster<'static>, RasterError> {
    pic::decode(data, Some(limits), &stop)
}

/// Decode PC Paintbrush data.
pub fn decode_pcx(data: &[u8], stop: impl Stop) -> Result<Raster<'static>, RasterError> {
    pcx::decode(data, None, &stop)
}

/// Decode PC Paintbrush data with resource limits.
pub fn decode_pcx_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Raster<'static>, RasterError> {
    pcx::decode(data, Some(limits), &stop)
}

/// Decode TIFF data via the delegated `tiff` crate.
#[cfg(feature = "tiff")]
pub fn decode_tiff(data: &[u8], stop: impl Stop) -> Result<Raster<'static>, RasterError> {
    tif::decode(data, None, &stop)
}

/// Decode TIFF data with resource limits.
#[cfg(feature = "tiff")]
pub fn decode_tiff_with_limits(
    data: &[u8],
    limits: &Limits,
    stop: impl Stop,
) -> Result<Raster<'static>, RasterError> {
    tif::decode(data, Some(limits), &stop)
}
