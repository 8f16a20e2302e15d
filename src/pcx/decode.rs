//! PCX header parsing and pixel-mode decoding.

use enough::Stop;

use crate::assemble::{self, BitPolarity, ScanlineLayout};
use crate::error::RasterError;
use crate::limits::Limits;
use crate::palette::{self, Rgb};
use crate::pixel::PixelLayout;
use crate::raster::Raster;
use crate::rle;

const HEADER_LEN: usize = 128;
const MAX_DIM: i32 = 4096;
/// Widest plausible plane stride: 4096 px at 8 bpp, doubled for slack.
/// Anything larger is a corrupt header trying to force a huge allocation.
const MAX_BYTES_PER_LINE: usize = 8192;

pub(super) struct PcxHeader {
    pub bits_per_pixel: u8,
    pub width: u32,
    pub height: u32,
    pub planes: u8,
    pub bytes_per_line: usize,
    /// 16-colour palette embedded at header bytes 16..64.
    pub header_palette: [Rgb; 16],
}

/// Parse the fixed 128-byte header.
///
/// The image window is inclusive: `width = x_max - x_min + 1`. An empty or
/// oversized window is a hard error; 4096 px per side is the rejection
/// threshold for untrusted headers.
pub(super) fn parse_header(data: &[u8]) -> Result<PcxHeader, RasterError> {
    if data.len() < HEADER_LEN {
        return Err(RasterError::Truncated {
            needed: HEADER_LEN,
            got: data.len(),
        });
    }
    if data[0] != 0x0A {
        return Err(RasterError::UnrecognizedFormat);
    }

    let bits_per_pixel = data[3];
    let x_min = i32::from(u16::from_le_bytes([data[4], data[5]]));
    let y_min = i32::from(u16::from_le_bytes([data[6], data[7]]));
    let x_max = i32::from(u16::from_le_bytes([data[8], data[9]]));
    let y_max = i32::from(u16::from_le_bytes([data[10], data[11]]));

    let width = x_max - x_min + 1;
    let height = y_max - y_min + 1;
    if width < 1 || height < 1 {
        return Err(RasterError::InvalidHeader(alloc::format!(
            "empty PCX image window: {width}x{height}"
        )));
    }
    if width > MAX_DIM || height > MAX_DIM {
        return Err(RasterError::DimensionsTooLarge {
            width: width as u32,
            height: height as u32,
        });
    }

    let planes = data[65];
    let bytes_per_line = usize::from(u16::from_le_bytes([data[66], data[67]]));
    if bytes_per_line > MAX_BYTES_PER_LINE {
        return Err(RasterError::InvalidHeader(alloc::format!(
            "implausible PCX scanline stride: {bytes_per_line}"
        )));
    }

    let mut header_palette = [[0u8; 3]; 16];
    for (entry, triplet) in header_palette.iter_mut().zip(data[16..64].chunks_exact(3)) {
        entry.copy_from_slice(triplet);
    }

    Ok(PcxHeader {
        bits_per_pixel,
        width: width as u32,
        height: height as u32,
        planes,
        bytes_per_line,
        header_palette,
    })
}

/// Pixel organisation, selected by the bpp/plane pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum PcxMode {
    /// 1 bpp x 1 plane: monochrome, set bits white.
    Mono,
    /// 1 bpp x 3 planes: each plane bit drives a full-on/off channel.
    BitPlanarRgb,
    /// 1 bpp x 4 planes: bits combine into a 0-15 header-palette index.
    EgaPlanar,
    /// 4 bpp x 1 plane: nibble-packed header-palette indices.
    Nibble,
    /// 8 bpp x 1 plane: byte indices, palette in the file trailer.
    Indexed,
    /// 8 bpp x 3 planes: planar R, G, B samples.
    RgbPlanar,
}

impl PcxMode {
    pub(super) fn from_header(header: &PcxHeader) -> Option<Self> {
        match (header.bits_per_pixel, header.planes) {
            (1, 1) => Some(Self::Mono),
            (1, 3) => Some(Self::BitPlanarRgb),
            (1, 4) => Some(Self::EgaPlanar),
            (4, 1) => Some(Self::Nibble),
            (8, 1) => Some(Self::Indexed),
            (8, 3) => Some(Self::RgbPlanar),
            _ => None,
        }
    }
}

/// Locate the 256-colour trailer palette: the last 769 bytes start with
/// 0x0C when present.
fn trailer_palette(data: &[u8]) -> Option<alloc::vec::Vec<Rgb>> {
    if data.len() >= 769 && data[data.len() - 769] == 0x0C {
        Some(palette::from_triplets(&data[data.len() - 768..]))
    } else {
        None
    }
}

pub(super) fn decode_pixels(
    data: &[u8],
    header: &PcxHeader,
    mode: PcxMode,
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'static>, RasterError> {
    let w = header.width as usize;
    let h = header.height as usize;
    let layout = ScanlineLayout {
        bytes_per_plane: header.bytes_per_line,
        planes: usize::from(header.planes),
        bits_per_pixel: usize::from(header.bits_per_pixel),
        pre_skip: 0,
    };

    let packed_bytes = layout.row_bytes() * h;
    if let Some(limits) = limits {
        limits.check_memory(packed_bytes)?;
    }

    // One decompression pass for the whole payload; RLE runs are free to
    // cross scanline boundaries and output length terminates the scan.
    let payload = data.get(HEADER_LEN..).unwrap_or(&[]);
    let packed = rle::unpack_pcx_rle(payload, packed_bytes);
    stop.check()?;

    let (pixels, out_layout) = match mode {
        PcxMode::Mono => {
            check_out(limits, w * h)?;
            (
                assemble::expand_mono_rows(&packed, w, h, &layout, BitPolarity::OneIsWhite),
                PixelLayout::Gray8,
            )
        }
        PcxMode::BitPlanarRgb => {
            check_out(limits, w * h * 3)?;
            (
                assemble::assemble_bit_planes_rgb(&packed, w, h, &layout),
                PixelLayout::Rgb8,
            )
        }
        PcxMode::EgaPlanar => {
            check_out(limits, w * h * 3)?;
            (
                assemble::assemble_ega_planar(&packed, w, h, &layout, &header.header_palette),
                PixelLayout::Rgb8,
            )
        }
        PcxMode::Nibble => {
            check_out(limits, w * h * 3)?;
            (
                assemble::expand_nibbles(
                    &packed,
                    w,
                    h,
                    header.bytes_per_line,
                    &header.header_palette,
                ),
                PixelLayout::Rgb8,
            )
        }
        PcxMode::Indexed => match trailer_palette(data) {
            Some(pal) => {
                check_out(limits, w * h * 3)?;
                (
                    assemble::expand_indexed(&packed, w, h, header.bytes_per_line, &pal),
                    PixelLayout::Rgb8,
                )
            }
            // No trailer: the indices already are the grayscale ramp.
            None => {
                check_out(limits, w * h)?;
                (
                    assemble::extract_rows(&packed, w, h, header.bytes_per_line),
                    PixelLayout::Gray8,
                )
            }
        },
        PcxMode::RgbPlanar => {
            check_out(limits, w * h * 3)?;
            (
                assemble::assemble_rgb_planes(&packed, w, h, &layout),
                PixelLayout::Rgb8,
            )
        }
    };

    Ok(Raster::owned(pixels, header.width, header.height, out_layout))
}

fn check_out(limits: Option<&Limits>, out_bytes: usize) -> Result<(), RasterError> {
    if let Some(limits) = limits {
        limits.check_memory(out_bytes)?;
    }
    Ok(())
}
