//! PC Paintbrush (.pcx) image decoder.
//!
//! One header layout, five pixel organisations: 1-bit monochrome, 1-bit
//! planar RGB, 4-plane EGA, nibble-packed 16-colour, 256-colour indexed
//! (with optional trailer palette), and 3-plane 24-bit RGB. The run-length
//! payload is decompressed as a single stream, so runs may cross scanline
//! boundaries; each row then yields exactly `width` pixels and stride
//! padding is discarded.

mod decode;

use enough::Stop;

use crate::error::RasterError;
use crate::limits::Limits;
use crate::raster::Raster;

pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'static>, RasterError> {
    let header = decode::parse_header(data)?;

    if let Some(limits) = limits {
        limits.check(header.width, header.height)?;
    }

    let mode = decode::PcxMode::from_header(&header).ok_or_else(|| {
        RasterError::UnsupportedVariant(alloc::format!(
            "PCX with {} bpp and {} planes",
            header.bits_per_pixel,
            header.planes
        ))
    })?;

    stop.check()?;
    decode::decode_pixels(data, &header, mode, limits, stop)
}
