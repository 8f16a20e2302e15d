//! Pixel assembly: turning decompressed byte streams into 8-bit rasters.
//!
//! Every function here is total. Indexing past the end of the input reads
//! as zero and out-of-range palette indices resolve to black, so a
//! truncated payload yields a partially blank raster instead of an error.
//! All bit expansion is MSB-first.

use alloc::vec::Vec;

use crate::palette::Rgb;

/// Bit-to-pixel polarity for 1-bit expansion.
///
/// MacPaint and PICtor treat a set bit as ink on white paper; AOL Art and
/// PCX monochrome treat it as light on a black screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum BitPolarity {
    OneIsWhite,
    OneIsBlack,
}

impl BitPolarity {
    fn expand(self, bit: u8) -> u8 {
        match self {
            BitPolarity::OneIsWhite => {
                if bit != 0 {
                    255
                } else {
                    0
                }
            }
            BitPolarity::OneIsBlack => {
                if bit != 0 {
                    0
                } else {
                    255
                }
            }
        }
    }
}

/// How a decompressed byte stream maps to pixels for one source row.
#[derive(Clone, Copy, Debug)]
pub(crate) struct ScanlineLayout {
    /// Padded stride per colour plane.
    pub bytes_per_plane: usize,
    /// Colour plane count (1, 3, or 4).
    pub planes: usize,
    /// Bits per pixel within a plane (1, 4, or 8).
    pub bits_per_pixel: usize,
    /// Leading bytes of each scanline to discard before pixel extraction.
    pub pre_skip: usize,
}

impl ScanlineLayout {
    /// Single-plane layout with no leading skip.
    pub(crate) fn packed(bytes_per_plane: usize, bits_per_pixel: usize) -> Self {
        Self {
            bytes_per_plane,
            planes: 1,
            bits_per_pixel,
            pre_skip: 0,
        }
    }

    /// Total decompressed bytes per scanline across all planes.
    pub(crate) fn row_bytes(&self) -> usize {
        self.bytes_per_plane * self.planes
    }
}

fn byte_at(data: &[u8], idx: usize) -> u8 {
    data.get(idx).copied().unwrap_or(0)
}

fn lookup(palette: &[Rgb], idx: usize) -> Rgb {
    palette.get(idx).copied().unwrap_or([0, 0, 0])
}

/// Expand a 1-bit stream row by row, honouring stride and pre-skip.
pub(crate) fn expand_mono_rows(
    data: &[u8],
    width: usize,
    height: usize,
    layout: &ScanlineLayout,
    polarity: BitPolarity,
) -> Vec<u8> {
    debug_assert_eq!(layout.bits_per_pixel, 1);
    let mut out = Vec::with_capacity(width * height);
    for row in 0..height {
        let row_start = row * layout.row_bytes() + layout.pre_skip;
        for col in 0..width {
            let byte = byte_at(data, row_start + col / 8);
            let bit = (byte >> (7 - col % 8)) & 1;
            out.push(polarity.expand(bit));
        }
    }
    out
}

/// Expand the first `count` bits of a continuous 1-bit stream.
///
/// Unlike [`expand_mono_rows`] the bits flow across row boundaries with no
/// per-row alignment; used by formats that store the frame as one bit run.
pub(crate) fn expand_mono_continuous(data: &[u8], count: usize, polarity: BitPolarity) -> Vec<u8> {
    let mut out = Vec::with_capacity(count);
    for i in 0..count {
        let byte = byte_at(data, i / 8);
        let bit = (byte >> (7 - i % 8)) & 1;
        out.push(polarity.expand(bit));
    }
    out
}

/// Copy `width` bytes per row out of a strided stream, dropping padding.
pub(crate) fn extract_rows(data: &[u8], width: usize, height: usize, stride: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height);
    for row in 0..height {
        let row_start = row * stride;
        for col in 0..width {
            out.push(byte_at(data, row_start + col));
        }
    }
    out
}

/// Expand palette-indexed bytes (one pixel per byte) to RGB.
pub(crate) fn expand_indexed(
    data: &[u8],
    width: usize,
    height: usize,
    stride: usize,
    palette: &[Rgb],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        let row_start = row * stride;
        for col in 0..width {
            let idx = usize::from(byte_at(data, row_start + col));
            out.extend_from_slice(&lookup(palette, idx));
        }
    }
    out
}

/// Expand nibble-packed palette indices (upper nibble first) to RGB.
pub(crate) fn expand_nibbles(
    data: &[u8],
    width: usize,
    height: usize,
    stride: usize,
    palette: &[Rgb],
) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        let row_start = row * stride;
        for col in 0..width {
            let byte = byte_at(data, row_start + col / 2);
            let idx = if col % 2 == 0 { byte >> 4 } else { byte & 0x0F };
            out.extend_from_slice(&lookup(palette, usize::from(idx)));
        }
    }
    out
}

/// Combine four 1-bit planes into palette indices, then RGB.
///
/// For pixel column `x`, bit `7 - (x % 8)` of byte `x / 8` in plane `p`
/// contributes bit `p` of the index.
pub(crate) fn assemble_ega_planar(
    data: &[u8],
    width: usize,
    height: usize,
    layout: &ScanlineLayout,
    palette: &[Rgb],
) -> Vec<u8> {
    debug_assert_eq!(layout.bits_per_pixel, 1);
    let mut out = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        let row_start = row * layout.row_bytes();
        for col in 0..width {
            let byte_idx = col / 8;
            let shift = 7 - col % 8;
            let mut idx = 0usize;
            for plane in 0..layout.planes {
                let byte = byte_at(data, row_start + plane * layout.bytes_per_plane + byte_idx);
                idx |= usize::from((byte >> shift) & 1) << plane;
            }
            out.extend_from_slice(&lookup(palette, idx));
        }
    }
    out
}

/// Combine up to three 1-bit planes into full-on/full-off RGB channels.
pub(crate) fn assemble_bit_planes_rgb(
    data: &[u8],
    width: usize,
    height: usize,
    layout: &ScanlineLayout,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        let row_start = row * layout.row_bytes();
        for col in 0..width {
            let byte_idx = col / 8;
            let shift = 7 - col % 8;
            for channel in 0..3 {
                let bit = if channel < layout.planes {
                    let byte =
                        byte_at(data, row_start + channel * layout.bytes_per_plane + byte_idx);
                    (byte >> shift) & 1
                } else {
                    0
                };
                out.push(if bit != 0 { 255 } else { 0 });
            }
        }
    }
    out
}

/// Interleave three 8-bit planes (R, then G, then B) per scanline.
pub(crate) fn assemble_rgb_planes(
    data: &[u8],
    width: usize,
    height: usize,
    layout: &ScanlineLayout,
) -> Vec<u8> {
    let mut out = Vec::with_capacity(width * height * 3);
    for row in 0..height {
        let row_start = row * layout.row_bytes();
        for col in 0..width {
            for plane in 0..3 {
                out.push(byte_at(data, row_start + plane * layout.bytes_per_plane + col));
            }
        }
    }
    out
}
