//! AOL Art (.art) image decoder.
//!
//! Several unrelated programs shipped ".art" files. The decoder dispatches
//! on magic bytes across three known layouts (word-aligned 1-bit bitmap,
//! AOL-signature RLE container, PFS First Publisher) and keeps a raw-bitmap
//! fallback for everything else. A failed variant attempt falls through to
//! the fallback rather than erroring.

mod decode;

use enough::Stop;

use crate::error::RasterError;
use crate::limits::Limits;
use crate::raster::Raster;

/// Which .art sub-parser handles a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ArtVariant {
    Bitmap,
    Aol,
    Pfs,
    Generic,
}

fn detect(data: &[u8]) -> ArtVariant {
    if data.starts_with(&[0x00, 0x00]) {
        ArtVariant::Bitmap
    } else if data.starts_with(b"ART\0") {
        ArtVariant::Aol
    } else if data.starts_with(&[0x01, 0x00]) {
        ArtVariant::Pfs
    } else {
        ArtVariant::Generic
    }
}

pub(crate) fn decode<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'a>, RasterError> {
    if data.len() < decode::MIN_HEADER {
        return Err(RasterError::Truncated {
            needed: decode::MIN_HEADER,
            got: data.len(),
        });
    }

    stop.check()?;

    let attempt = match detect(data) {
        ArtVariant::Bitmap => decode::decode_bitmap(data, limits, stop)?,
        ArtVariant::Aol => decode::decode_aol(data, limits, stop)?,
        ArtVariant::Pfs => decode::decode_pfs(data, limits, stop)?,
        ArtVariant::Generic => None,
    };

    match attempt {
        Some(raster) => Ok(raster),
        None => decode::decode_generic(data, limits, stop),
    }
}
