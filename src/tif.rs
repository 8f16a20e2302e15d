//! TIFF adapter: parsing is delegated to the `tiff` crate; this module only
//! converts its output to the canonical 8-bit raster.

use std::io::Cursor;

use enough::Stop;
use tiff::decoder::{Decoder, DecodingResult};
use tiff::tags::Tag;
use tiff::ColorType;

use crate::assemble;
use crate::error::RasterError;
use crate::limits::Limits;
use crate::palette::Rgb;
use crate::pixel::PixelLayout;
use crate::raster::Raster;

const MAX_DIM: u32 = 4096;

fn delegated(err: tiff::TiffError) -> RasterError {
    RasterError::Delegated(err.to_string())
}

pub(crate) fn decode(
    data: &[u8],
    limits: Option<&Limits>,
    stop: &dyn Stop,
) -> Result<Raster<'static>, RasterError> {
    let mut decoder = Decoder::new(Cursor::new(data)).map_err(delegated)?;
    let (width, height) = decoder.dimensions().map_err(delegated)?;

    if width == 0 || height == 0 || width > MAX_DIM || height > MAX_DIM {
        return Err(RasterError::DimensionsTooLarge { width, height });
    }
    if let Some(limits) = limits {
        limits.check(width, height)?;
        limits.check_memory(width as usize * height as usize * 3)?;
    }

    let color = decoder.colortype().map_err(delegated)?;
    stop.check()?;

    let (pixels, layout) = match color {
        ColorType::Palette(_) => {
            let colormap = decoder.get_tag_u16_vec(Tag::ColorMap).map_err(delegated)?;
            let image = decoder.read_image().map_err(delegated)?;
            convert_palette(&colormap, image, width, height)?
        }
        _ => {
            let image = decoder.read_image().map_err(delegated)?;
            convert(color, image)?
        }
    };
    let expected = width as usize * height as usize * layout.bytes_per_pixel();
    if pixels.len() != expected {
        return Err(RasterError::Delegated(format!(
            "unexpected buffer size: {} bytes for {width}x{height}",
            pixels.len()
        )));
    }

    Ok(Raster::owned(pixels, width, height, layout))
}

/// Map the library's sample buffer to Gray8 or Rgb8.
///
/// Sub-byte grayscale depths are scaled to the full 0-255 range, 16-bit
/// samples keep their high byte, and alpha channels are dropped.
fn convert(
    color: ColorType,
    image: DecodingResult,
) -> Result<(Vec<u8>, PixelLayout), RasterError> {
    match (color, image) {
        (ColorType::Gray(depth @ (1 | 2 | 4 | 8)), DecodingResult::U8(samples)) => {
            let pixels = if depth == 8 {
                samples
            } else {
                let max = (1u16 << depth) - 1;
                samples
                    .iter()
                    .map(|&s| ((u16::from(s).min(max) * 255) / max) as u8)
                    .collect()
            };
            Ok((pixels, PixelLayout::Gray8))
        }
        (ColorType::Gray(16), DecodingResult::U16(samples)) => Ok((
            samples.iter().map(|&s| (s >> 8) as u8).collect(),
            PixelLayout::Gray8,
        )),
        (ColorType::GrayA(8), DecodingResult::U8(samples)) => Ok((
            samples.chunks_exact(2).map(|px| px[0]).collect(),
            PixelLayout::Gray8,
        )),
        (ColorType::GrayA(16), DecodingResult::U16(samples)) => Ok((
            samples.chunks_exact(2).map(|px| (px[0] >> 8) as u8).collect(),
            PixelLayout::Gray8,
        )),
        (ColorType::RGB(8), DecodingResult::U8(samples)) => Ok((samples, PixelLayout::Rgb8)),
        (ColorType::RGB(16), DecodingResult::U16(samples)) => Ok((
            samples.iter().map(|&s| (s >> 8) as u8).collect(),
            PixelLayout::Rgb8,
        )),
        (ColorType::RGBA(8), DecodingResult::U8(samples)) => Ok((
            samples
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect(),
            PixelLayout::Rgb8,
        )),
        (ColorType::RGBA(16), DecodingResult::U16(samples)) => Ok((
            samples
                .chunks_exact(4)
                .flat_map(|px| [(px[0] >> 8) as u8, (px[1] >> 8) as u8, (px[2] >> 8) as u8])
                .collect(),
            PixelLayout::Rgb8,
        )),
        (color, _) => Err(RasterError::UnsupportedVariant(format!(
            "TIFF colour type {color:?}"
        ))),
    }
}

/// Expand palette indices to Rgb8 through the file's ColorMap tag.
///
/// The tag stores all red entries, then all greens, then all blues, each a
/// 16-bit component that keeps its high byte here. Index lookup mirrors the
/// indexed-palette assembly of the PCX decoder.
fn convert_palette(
    colormap: &[u16],
    image: DecodingResult,
    width: u32,
    height: u32,
) -> Result<(Vec<u8>, PixelLayout), RasterError> {
    let entries = colormap.len() / 3;
    if entries == 0 {
        return Err(RasterError::Delegated("empty TIFF colormap".into()));
    }
    let (reds, rest) = colormap.split_at(entries);
    let (greens, blues) = rest.split_at(entries);
    let palette: Vec<Rgb> = (0..entries)
        .map(|i| {
            [
                (reds[i] >> 8) as u8,
                (greens[i] >> 8) as u8,
                (blues[i] >> 8) as u8,
            ]
        })
        .collect();

    let indices = match image {
        DecodingResult::U8(samples) => samples,
        _ => {
            return Err(RasterError::UnsupportedVariant(
                "TIFF palette with non-8-bit indices".into(),
            ));
        }
    };

    let w = width as usize;
    let pixels = assemble::expand_indexed(&indices, w, height as usize, w, &palette);
    Ok((pixels, PixelLayout::Rgb8))
}
