//! MacPaint (.mac) image decoder.
//!
//! Every MacPaint image is 576x720 1-bit monochrome; only the container
//! differs. Standard files carry a 512-byte header, PNTG files bury the
//! same bitmap behind a filename block, extra header, and a 512-byte
//! pattern table. PNTG headers record dimensions, but they are wrong in
//! the wild and are ignored.

pub(crate) mod decode;

use enough::Stop;

use crate::bytes;
use crate::error::RasterError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::raster::Raster;

const MIN_LEN: usize = 512;

/// Which .mac container holds the bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MacVariant {
    Standard,
    Pntg,
}

fn detect(data: &[u8]) -> MacVariant {
    if bytes::contains_in_prefix(data, b"PNTG", 100) {
        MacVariant::Pntg
    } else {
        MacVariant::Standard
    }
}

pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'static>, RasterError> {
    if data.len() < MIN_LEN {
        return Err(RasterError::Truncated {
            needed: MIN_LEN,
            got: data.len(),
        });
    }

    if let Some(limits) = limits {
        limits.check(decode::WIDTH, decode::HEIGHT)?;
        limits.check_memory(decode::PIXEL_COUNT)?;
    }
    stop.check()?;

    let payload_offset = match detect(data) {
        MacVariant::Standard => 512,
        MacVariant::Pntg => decode::PNTG_PAYLOAD_OFFSET,
    };
    let payload = data.get(payload_offset..).unwrap_or(&[]);

    let bitmap = decode::unpack_bitmap(payload);
    Ok(Raster::owned(
        decode::expand(&bitmap),
        decode::WIDTH,
        decode::HEIGHT,
        PixelLayout::Gray8,
    ))
}
