//! The four .art sub-parsers.
//!
//! Variant attempts return `Ok(None)` when their validation fails so the
//! caller can fall through the cascade; hard errors are reserved for
//! limits and cancellation.

use enough::Stop;

use crate::assemble::{self, BitPolarity, ScanlineLayout};
use crate::bytes;
use crate::error::RasterError;
use crate::limits::Limits;
use crate::pixel::PixelLayout;
use crate::raster::Raster;
use crate::rle;

pub(super) const MIN_HEADER: usize = 16;
const MAX_DIM: u16 = 4096;

/// Resolutions probed by the raw-bitmap fallback, in priority order.
const FALLBACK_RESOLUTIONS: [(usize, usize); 4] = [(320, 200), (640, 480), (640, 400), (800, 600)];

fn dims_ok(width: u16, height: u16) -> bool {
    (1..=MAX_DIM).contains(&width) && (1..=MAX_DIM).contains(&height)
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

/// Standard bitmap: width LE16 at offset 2, height LE16 at offset 6,
/// 1-bit pixel data from offset 16 in word-aligned scanlines.
///
/// Image data sits in the last 8 bytes' reach of each scanline, so
/// `row_bytes - 8` leading bytes are skipped per row. Set bits are white.
pub(super) fn decode_bitmap(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Option<Raster<'static>>, RasterError> {
    let (width, height) = match (bytes::u16_le(data, 2), bytes::u16_le(data, 6)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Ok(None),
    };
    if !dims_ok(width, height) {
        return Ok(None);
    }

    let (w, h) = (usize::from(width), usize::from(height));

    // Era writers often under-fill the final scanline; tolerate a short tail.
    let bytes_needed = (w * h).div_ceil(8);
    if data.len() + 100 < MIN_HEADER + bytes_needed {
        return Ok(None);
    }

    check_limits(limits, width, height, w * h)?;
    stop.check()?;

    let row_bytes = w.div_ceil(8).div_ceil(2) * 2;
    let layout = ScanlineLayout {
        bytes_per_plane: row_bytes,
        planes: 1,
        bits_per_pixel: 1,
        pre_skip: row_bytes.saturating_sub(8),
    };
    let pixels = assemble::expand_mono_rows(
        &data[MIN_HEADER..],
        w,
        h,
        &layout,
        BitPolarity::OneIsWhite,
    );
    Ok(Some(Raster::owned(
        pixels,
        width.into(),
        height.into(),
        PixelLayout::Gray8,
    )))
}

/// AOL-signature container: `"ART\0"` magic, width LE16 at offset 4,
/// height at offset 6, AOL-RLE payload of grayscale bytes from offset 16.
pub(super) fn decode_aol(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Option<Raster<'static>>, RasterError> {
    let (width, height) = match (bytes::u16_le(data, 4), bytes::u16_le(data, 6)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Ok(None),
    };
    if !dims_ok(width, height) {
        return Ok(None);
    }

    let (w, h) = (usize::from(width), usize::from(height));
    check_limits(limits, width, height, w * h)?;
    stop.check()?;

    let payload = data.get(16..).unwrap_or(&[]);
    let pixels = rle::unpack_aol_rle(payload, w * h);
    Ok(Some(Raster::owned(
        pixels,
        width.into(),
        height.into(),
        PixelLayout::Gray8,
    )))
}

/// PFS First Publisher: width LE16 at offset 2, height at offset 4,
/// uncompressed 1-bit data from offset 10 with bits flowing across row
/// boundaries.
pub(super) fn decode_pfs(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Option<Raster<'static>>, RasterError> {
    let (width, height) = match (bytes::u16_le(data, 2), bytes::u16_le(data, 4)) {
        (Some(w), Some(h)) => (w, h),
        _ => return Ok(None),
    };
    if !dims_ok(width, height) {
        return Ok(None);
    }

    let (w, h) = (usize::from(width), usize::from(height));
    check_limits(limits, width, height, w * h)?;
    stop.check()?;

    let payload = data.get(10..).unwrap_or(&[]);
    let pixels = assemble::expand_mono_continuous(payload, w * h, BitPolarity::OneIsWhite);
    Ok(Some(Raster::owned(
        pixels,
        width.into(),
        height.into(),
        PixelLayout::Gray8,
    )))
}

/// Raw-bitmap fallback: the first candidate resolution whose byte count
/// fits takes the leading `w * h` input bytes as a grayscale frame,
/// zero-copy. Small files clamp to however many 320-wide rows exist.
pub(super) fn decode_generic<'a>(
    data: &'a [u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'a>, RasterError> {
    stop.check()?;

    for (w, h) in FALLBACK_RESOLUTIONS {
        if data.len() >= w * h {
            check_limits(limits, w as u16, h as u16, w * h)?;
            return Ok(Raster::borrowed(
                &data[..w * h],
                w as u32,
                h as u32,
                PixelLayout::Gray8,
            ));
        }
    }

    let h = (data.len() / 320).min(200);
    if h == 0 {
        return Err(RasterError::UnrecognizedFormat);
    }
    check_limits(limits, 320, h as u16, 320 * h)?;
    Ok(Raster::borrowed(
        &data[..320 * h],
        320,
        h as u32,
        PixelLayout::Gray8,
    ))
}
