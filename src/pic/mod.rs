//! PICtor (.pic) image decoder.
//!
//! Three populations share the extension: Macintosh PNTG/PICT containers
//! (decoded exactly like MacPaint PNTG), PICtor proper (0x1234 magic,
//! PICtor-RLE payload at 1/4/8 bpp), and unlabelled raw bitmaps. A PICtor
//! attempt that fails validation falls through to the raw-bitmap path.

mod decode;

use enough::Stop;

use crate::bytes;
use crate::error::RasterError;
use crate::limits::Limits;
use crate::raster::Raster;

const MIN_LEN: usize = 17;

/// Which .pic sub-parser handles a file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PicVariant {
    Pntg,
    Pictor,
    Generic,
}

fn detect(data: &[u8]) -> PicVariant {
    if bytes::contains_in_prefix(data, b"PNTG", 100) || bytes::contains_in_prefix(data, b"PICT", 100)
    {
        PicVariant::Pntg
    } else if data.starts_with(&[0x34, 0x12]) {
        PicVariant::Pictor
    } else {
        PicVariant::Generic
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

    stop.check()?;

    match detect(data) {
        PicVariant::Pntg => decode::decode_pntg(data, limits, stop),
        PicVariant::Pictor => match decode::decode_pictor(data, limits, stop)? {
            Some(raster) => Ok(raster),
            None => decode::decode_generic(data, limits, stop),
        },
        PicVariant::Generic => decode::decode_generic(data, limits, stop),
    }
}
