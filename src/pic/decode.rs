//! The .pic sub-parsers: PNTG, PICtor, and the raw-bitmap fallback.

use enough::Stop;

use crate::assemble::{self, BitPolarity, ScanlineLayout};
use crate::bytes;
use crate::error::RasterError;
use crate::limits::Limits;
use crate::mac::decode as mac_bitmap;
use crate::palette;
use crate::pixel::PixelLayout;
use crate::raster::Raster;
use crate::rle;

const HEADER_LEN: usize = 17;
const MAX_DIM: u16 = 4096;

/// Resolutions probed by the raw-bitmap fallback, in priority order.
const FALLBACK_RESOLUTIONS: [(usize, usize); 5] =
    [(640, 480), (320, 200), (640, 400), (800, 600), (512, 384)];

/// PNTG/PICT container: the bitmap is MacPaint's, 576x720.
///
/// The payload normally starts past the 512-byte pattern table at 0x280;
/// files too short for a pattern table store it right after the header
/// block at 0x80.
pub(super) fn decode_pntg(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'static>, RasterError> {
    if let Some(limits) = limits {
        limits.check(mac_bitmap::WIDTH, mac_bitmap::HEIGHT)?;
        limits.check_memory(mac_bitmap::PIXEL_COUNT)?;
    }
    stop.check()?;

    let offset = if data.len() >= mac_bitmap::PNTG_PAYLOAD_OFFSET {
        mac_bitmap::PNTG_PAYLOAD_OFFSET
    } else {
        0x80
    };
    let payload = data.get(offset..).unwrap_or(&[]);

    let bitmap = mac_bitmap::unpack_bitmap(payload);
    Ok(Raster::owned(
        mac_bitmap::expand(&bitmap),
        mac_bitmap::WIDTH,
        mac_bitmap::HEIGHT,
        PixelLayout::Gray8,
    ))
}

/// Standard PICtor: 0x1234 magic, width LE16 at offset 2, height at 4,
/// bits-per-pixel at 6, payload after the 17-byte header.
///
/// 8 bpp files may carry a 768-byte palette of 6-bit RGB components right
/// after the header; components scale as `c * 255 / 63`. Returns `Ok(None)`
/// when dimensions or depth fail validation so the caller can fall through.
pub(super) fn decode_pictor(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Option<Raster<'static>>, RasterError> {
    let (width, height) = match (bytes::u16_le(data, 2), bytes::u16_le(data, 4)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Ok(None),
    };
    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Ok(None);
    }

    let bpp = data[6];
    if !matches!(bpp, 1 | 4 | 8) {
        return Ok(None);
    }

    let (w, h) = (usize::from(width), usize::from(height));
    let row_bytes = (w * usize::from(bpp)).div_ceil(8);
    let expected = row_bytes * h;

    let raster = match bpp {
        1 => {
            check_limits(limits, width, height, w * h)?;
            stop.check()?;
            let packed = rle::unpack_pictor_rle(&data[HEADER_LEN..], expected);
            let pixels = assemble::expand_mono_rows(
                &packed,
                w,
                h,
                &ScanlineLayout::packed(row_bytes, 1),
                BitPolarity::OneIsBlack,
            );
            Raster::owned(pixels, width.into(), height.into(), PixelLayout::Gray8)
        }
        4 => {
            check_limits(limits, width, height, w * h * 3)?;
            stop.check()?;
            let packed = rle::unpack_pictor_rle(&data[HEADER_LEN..], expected);
            let pixels = assemble::expand_nibbles(&packed, w, h, row_bytes, &palette::EGA);
            Raster::owned(pixels, width.into(), height.into(), PixelLayout::Rgb8)
        }
        _ => {
            // 8 bpp: palette-indexed when the 768-byte table is present,
            // otherwise the decoded bytes are the grayscale raster.
            if data.len() >= HEADER_LEN + 768 {
                check_limits(limits, width, height, w * h * 3)?;
                stop.check()?;
                let pal = palette::from_6bit_triplets(&data[HEADER_LEN..HEADER_LEN + 768]);
                let packed = rle::unpack_pictor_rle(&data[HEADER_LEN + 768..], expected);
                let pixels = assemble::expand_indexed(&packed, w, h, row_bytes, &pal);
                Raster::owned(pixels, width.into(), height.into(), PixelLayout::Rgb8)
            } else {
                check_limits(limits, width, height, w * h)?;
                stop.check()?;
                let pixels = rle::unpack_pictor_rle(&data[HEADER_LEN..], expected);
                Raster::owned(pixels, width.into(), height.into(), PixelLayout::Gray8)
            }
        }
    };

    Ok(Some(raster))
}

/// Unknown container: probe common resolutions and treat the bytes past a
/// 256-byte header as an uncompressed 1-bit frame, bits flowing across row
/// boundaries, set bits white.
pub(super) fn decode_generic(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'static>, RasterError> {
    stop.check()?;
    let body = data.get(256..).unwrap_or(&[]);

    for (w, h) in FALLBACK_RESOLUTIONS {
        if data.len() >= w * h + 256 {
            check_limits(limits, w as u16, h as u16, w * h)?;
            let pixels = assemble::expand_mono_continuous(body, w * h, BitPolarity::OneIsWhite);
            return Ok(Raster::owned(
                pixels,
                w as u32,
                h as u32,
                PixelLayout::Gray8,
            ));
        }
    }

    check_limits(limits, 320, 200, 320 * 200)?;
    let pixels = assemble::expand_mono_continuous(body, 320 * 200, BitPolarity::OneIsWhite);
    Ok(Raster::owned(pixels, 320, 200, PixelLayout::Gray8))
}

fn check_limits(
    limits: Option<&Limits>,
    width: u16,
    height: u16,
    out_bytes: usize,
) -> Result<(), RasterError> {
    if let Some(limits) = limits {
        limits.check(u32::from(width), u32::from(height))?;
        limits.check_memory(out_bytes)?;
    }
    Ok(())
}
