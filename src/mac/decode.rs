//! MacPaint bitmap unpacking, shared with the PNTG path of the PIC decoder.

use alloc::vec::Vec;

use crate::assemble::{self, BitPolarity, ScanlineLayout};
use crate::rle;

pub(crate) const WIDTH: u32 = 576;
pub(crate) const HEIGHT: u32 = 720;
pub(crate) const PIXEL_COUNT: usize = 576 * 720;

/// Bytes per 1-bit scanline.
const ROW_BYTES: usize = 72;
/// Size of the fully unpacked bitmap: 72 bytes x 720 rows.
pub(crate) const BITMAP_BYTES: usize = ROW_BYTES * 720;

/// PNTG payload offset: past the 64-byte filename, 64 bytes of additional
/// header, and the 512-byte pattern table.
pub(crate) const PNTG_PAYLOAD_OFFSET: usize = 0x280;

/// Unpack the 51 840-byte bitmap from `payload`.
///
/// A first byte above 128 can only start a PackBits repeat run, so it marks
/// compressed data. Otherwise an exactly bitmap-sized payload is taken as
/// stored raw; anything else still goes through PackBits, the dominant case.
pub(crate) fn unpack_bitmap(payload: &[u8]) -> Vec<u8> {
    let compressed = match payload.first() {
        Some(&b) if b > 128 => true,
        _ => payload.len() != BITMAP_BYTES,
    };

    if compressed {
        rle::unpack_packbits(payload, BITMAP_BYTES)
    } else {
        payload.to_vec()
    }
}

/// Expand an unpacked bitmap to the fixed 576x720 grayscale raster.
/// Set bits are ink: 1 = black, 0 = white.
pub(crate) fn expand(bitmap: &[u8]) -> Vec<u8> {
    assemble::expand_mono_rows(
        bitmap,
        WIDTH as usize,
        HEIGHT as usize,
        &ScanlineLayout::packed(ROW_BYTES, 1),
        BitPolarity::OneIsBlack,
    )
}
