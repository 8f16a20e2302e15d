//! Synthetic-file decode tests for every format and variant.

use retrobitmaps::*;

/// The invariants every successful decode must satisfy.
fn assert_invariants(raster: &Raster) {
    assert!((1..=4096).contains(&raster.width));
    assert!((1..=4096).contains(&raster.height));
    assert_eq!(
        raster.pixels().len(),
        raster.width as usize * raster.height as usize * raster.channels()
    );
}

// ── PCX ──────────────────────────────────────────────────────────────

fn pcx_header(bpp: u8, planes: u8, width: u16, height: u16, bytes_per_line: u16) -> Vec<u8> {
    let mut header = vec![0u8; 128];
    header[0] = 0x0A; // manufacturer
    header[1] = 5; // version
    header[2] = 1; // RLE encoding
    header[3] = bpp;
    header[8..10].copy_from_slice(&(width - 1).to_le_bytes()); // x_max
    header[10..12].copy_from_slice(&(height - 1).to_le_bytes()); // y_max
    header[65] = planes;
    header[66..68].copy_from_slice(&bytes_per_line.to_le_bytes());
    header
}

#[test]
fn pcx_monochrome() {
    let mut file = pcx_header(1, 1, 8, 2, 2);
    // 0xAA = alternating bits; stride pads each row with one unused byte
    file.extend_from_slice(&[0xAA, 0x00, 0xAA, 0x00]);

    let raster = decode_pcx(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (8, 2));
    assert_eq!(raster.layout, PixelLayout::Gray8);
    assert_eq!(raster.pixels()[..8], [255, 0, 255, 0, 255, 0, 255, 0]);
}

#[test]
fn pcx_window_offsets_define_size() {
    let mut header = pcx_header(8, 1, 1, 1, 640);
    header[4..6].copy_from_slice(&100u16.to_le_bytes()); // x_min
    header[6..8].copy_from_slice(&50u16.to_le_bytes()); // y_min
    header[8..10].copy_from_slice(&739u16.to_le_bytes()); // x_max
    header[10..12].copy_from_slice(&549u16.to_le_bytes()); // y_max

    // No payload at all: everything zero-pads
    let raster = decode_pcx(&header, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (640, 500));
    assert!(raster.pixels().iter().all(|&p| p == 0));
}

#[test]
fn pcx_ega_planar() {
    let width = 640u16;
    let height = 350u16;
    let bpl = 80u16;
    let mut file = pcx_header(1, 4, width, height, bpl);

    // EGA palette in the header at bytes 16..64
    let ega: [[u8; 3]; 16] = [
        [0, 0, 0],
        [0, 0, 170],
        [0, 170, 0],
        [0, 170, 170],
        [170, 0, 0],
        [170, 0, 170],
        [170, 85, 0],
        [170, 170, 170],
        [85, 85, 85],
        [85, 85, 255],
        [85, 255, 85],
        [85, 255, 255],
        [255, 85, 85],
        [255, 85, 255],
        [255, 255, 85],
        [255, 255, 255],
    ];
    for (i, rgb) in ega.iter().enumerate() {
        file[16 + i * 3..16 + i * 3 + 3].copy_from_slice(rgb);
    }

    // First scanline: pixel 0 sets bits in planes 0 and 1 -> index 3.
    // 0x80 and 0x00 are safe literals for the RLE stream.
    let mut row = vec![0u8; usize::from(bpl) * 4];
    row[0] = 0x80; // plane 0, pixel 0
    row[usize::from(bpl)] = 0x80; // plane 1, pixel 0
    file.extend_from_slice(&row);

    let raster = decode_pcx(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (640, 350));
    assert_eq!(raster.layout, PixelLayout::Rgb8);
    assert_eq!(raster.pixels()[..3], [0, 170, 170]); // palette[3]
    assert_eq!(raster.pixels()[3..6], [0, 0, 0]); // pixel 1: index 0
}

#[test]
fn pcx_indexed_with_trailer_palette() {
    let mut file = pcx_header(8, 1, 4, 1, 4);
    file.extend_from_slice(&[0, 1, 2, 3]);

    file.push(0x0C);
    for i in 0..256usize {
        file.extend_from_slice(&[i as u8, 255 - i as u8, (i / 2) as u8]);
    }

    let raster = decode_pcx(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!(raster.layout, PixelLayout::Rgb8);
    assert_eq!(
        raster.pixels(),
        [0, 255, 0, 1, 254, 0, 2, 253, 1, 3, 252, 1]
    );
}

#[test]
fn pcx_indexed_without_trailer_is_grayscale() {
    let mut file = pcx_header(8, 1, 4, 1, 4);
    file.extend_from_slice(&[10, 20, 30, 40]);

    let raster = decode_pcx(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!(raster.layout, PixelLayout::Gray8);
    assert_eq!(raster.pixels(), [10, 20, 30, 40]);
}

#[test]
fn pcx_nibble_packed() {
    let mut file = pcx_header(4, 1, 4, 1, 2);
    file[16..19].copy_from_slice(&[1, 2, 3]); // palette[0]
    file[19..22].copy_from_slice(&[4, 5, 6]); // palette[1]
    file[22..25].copy_from_slice(&[7, 8, 9]); // palette[2]
    file[25..28].copy_from_slice(&[10, 11, 12]); // palette[3]
    file.extend_from_slice(&[0x01, 0x23]); // indices 0, 1, 2, 3

    let raster = decode_pcx(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!(raster.pixels(), [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
}

#[test]
fn pcx_rgb_planar() {
    let mut file = pcx_header(8, 3, 2, 1, 2);
    file.extend_from_slice(&[10, 11, 20, 21, 30, 31]); // R R G G B B

    let raster = decode_pcx(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!(raster.layout, PixelLayout::Rgb8);
    assert_eq!(raster.pixels(), [10, 20, 30, 11, 21, 31]);
}

#[test]
fn pcx_bit_planar_rgb() {
    let mut file = pcx_header(1, 3, 8, 1, 1);
    // plane 0 (red) all set, plane 1 (green) pixel 0 only, plane 2 empty
    file.extend_from_slice(&[0xFF, 0x80, 0x00]);

    let raster = decode_pcx(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!(raster.pixels()[..6], [255, 255, 0, 255, 0, 0]);
}

#[test]
fn pcx_run_crosses_scanline_boundary() {
    let mut file = pcx_header(8, 1, 4, 2, 4);
    // A single run of eight covers both scanlines
    file.extend_from_slice(&[0xC8, 0x55]);

    let raster = decode_pcx(&file, Unstoppable).unwrap();
    assert_eq!(raster.pixels(), [0x55; 8]);
}

#[test]
fn pcx_rejects_bad_magic() {
    let mut file = pcx_header(8, 1, 4, 1, 4);
    file[0] = 0x0B;
    assert!(matches!(
        decode_pcx(&file, Unstoppable),
        Err(RasterError::UnrecognizedFormat)
    ));
}

#[test]
fn pcx_rejects_short_file() {
    assert!(matches!(
        decode_pcx(&[0x0A; 40], Unstoppable),
        Err(RasterError::Truncated { .. })
    ));
}

#[test]
fn pcx_rejects_two_bit_pixels() {
    let file = pcx_header(2, 1, 4, 1, 2);
    assert!(matches!(
        decode_pcx(&file, Unstoppable),
        Err(RasterError::UnsupportedVariant(_))
    ));
}

#[test]
fn pcx_rejects_oversized_window() {
    let mut file = pcx_header(8, 1, 1, 1, 8);
    file[8..10].copy_from_slice(&4999u16.to_le_bytes());
    assert!(matches!(
        decode_pcx(&file, Unstoppable),
        Err(RasterError::DimensionsTooLarge { .. })
    ));
}

// ── ART ──────────────────────────────────────────────────────────────

#[test]
fn art_standard_bitmap() {
    // 80x1: row stride is 10 bytes, so 2 bytes are skipped per scanline
    let mut file = vec![0u8; 16];
    file[2..4].copy_from_slice(&80u16.to_le_bytes());
    file[6..8].copy_from_slice(&1u16.to_le_bytes());
    file.extend_from_slice(&[0x00, 0x00, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF]);

    let raster = decode_art(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (80, 1));
    // 64 pixels of data, then reads past EOF as black
    assert!(raster.pixels()[..64].iter().all(|&p| p == 255));
    assert!(raster.pixels()[64..].iter().all(|&p| p == 0));
}

#[test]
fn art_all_zero_body_is_black() {
    let mut file = vec![0u8; 16];
    file[2..4].copy_from_slice(&64u16.to_le_bytes());
    file[6..8].copy_from_slice(&2u16.to_le_bytes());
    file.extend_from_slice(&[0u8; 16]);

    let raster = decode_art(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert!(raster.pixels().iter().all(|&p| p == 0));
}

#[test]
fn art_oversized_dimensions_rejected() {
    let mut file = vec![0u8; 64];
    file[2..4].copy_from_slice(&5000u16.to_le_bytes());
    file[6..8].copy_from_slice(&5000u16.to_le_bytes());

    // The bitmap attempt aborts and no fallback resolution fits 64 bytes.
    assert!(matches!(
        decode_art(&file, Unstoppable),
        Err(RasterError::UnrecognizedFormat)
    ));
}

#[test]
fn art_aol_signature() {
    let mut file = Vec::new();
    file.extend_from_slice(b"ART\0");
    file.extend_from_slice(&4u16.to_le_bytes());
    file.extend_from_slice(&2u16.to_le_bytes());
    file.resize(16, 0);
    // run of eight 0x7F grayscale bytes
    file.extend_from_slice(&[0x88, 0x7F]);

    let raster = decode_art(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (4, 2));
    assert_eq!(raster.pixels(), [0x7F; 8]);
}

#[test]
fn art_pfs_first_publisher() {
    let mut file = vec![0u8; 10];
    file[0] = 0x01;
    file[1] = 0x00;
    file[2..4].copy_from_slice(&8u16.to_le_bytes());
    file[4..6].copy_from_slice(&2u16.to_le_bytes());
    file.extend_from_slice(&[0xF0, 0x0F]);
    file.resize(18, 0);

    let raster = decode_art(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (8, 2));
    assert_eq!(raster.pixels()[..8], [255, 255, 255, 255, 0, 0, 0, 0]);
    assert_eq!(raster.pixels()[8..], [0, 0, 0, 0, 255, 255, 255, 255]);
}

#[test]
fn art_generic_fallback_is_zero_copy() {
    let mut file = vec![0x42u8; 320 * 200];
    file[0] = 0x42; // no magic matches
    let raster = decode_art(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (320, 200));
    assert!(raster.is_borrowed());
    assert_eq!(raster.pixels(), &file[..320 * 200]);
}

#[test]
fn art_generic_prefers_larger_fit() {
    let mut file = vec![0x42u8; 640 * 480];
    file[0] = 0x42;
    let raster = decode_art(&file, Unstoppable).unwrap();
    // 320x200 fits too, but it is probed first and wins
    assert_eq!((raster.width, raster.height), (320, 200));
}

#[test]
fn art_rejects_tiny_file() {
    assert!(matches!(
        decode_art(&[0u8; 8], Unstoppable),
        Err(RasterError::Truncated { .. })
    ));
}

// ── MAC ──────────────────────────────────────────────────────────────

const MAC_BITMAP_BYTES: usize = 72 * 720;

#[test]
fn mac_standard_packbits() {
    let mut file = vec![0u8; 512];
    // 405 repeat runs of 128 bytes = exactly 51,840 bitmap bytes
    for _ in 0..405 {
        file.extend_from_slice(&[0x81, 0xAA]);
    }

    let raster = decode_mac(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (576, 720));
    assert_eq!(raster.layout, PixelLayout::Gray8);
    // 0xAA: bit pattern 10101010, 1 = black
    assert_eq!(raster.pixels()[..4], [0, 255, 0, 255]);
}

#[test]
fn mac_standard_uncompressed() {
    let mut file = vec![0u8; 512];
    file.extend_from_slice(&vec![0u8; MAC_BITMAP_BYTES]);

    let raster = decode_mac(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert!(raster.pixels().iter().all(|&p| p == 255));
}

#[test]
fn mac_pntg_ignores_header_dimensions() {
    let mut file = vec![0u8; 0x280];
    file[64..68].copy_from_slice(b"PNTG");
    // Bogus recorded dimensions: 128x30
    file[0x50..0x52].copy_from_slice(&128u16.to_le_bytes());
    file[0x54..0x56].copy_from_slice(&30u16.to_le_bytes());
    for _ in 0..405 {
        file.extend_from_slice(&[0x81, 0x00]);
    }

    let raster = decode_mac(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (576, 720));
    assert!(raster.pixels().iter().all(|&p| p == 255));
}

#[test]
fn mac_truncated_payload_pads_white() {
    let mut file = vec![0u8; 512];
    file.extend_from_slice(&[0x81, 0xFF]); // 128 black bytes, then nothing

    let raster = decode_mac(&file, Unstoppable).unwrap();
    assert_eq!(raster.pixels()[..128 * 8], [0u8; 1024]);
    assert!(raster.pixels()[128 * 8..].iter().all(|&p| p == 255));
}

#[test]
fn mac_rejects_short_file() {
    assert!(matches!(
        decode_mac(&[0u8; 511], Unstoppable),
        Err(RasterError::Truncated { .. })
    ));
}

// ── PIC ──────────────────────────────────────────────────────────────

fn pictor_header(width: u16, height: u16, bpp: u8) -> Vec<u8> {
    let mut header = vec![0u8; 17];
    header[0] = 0x34;
    header[1] = 0x12;
    header[2..4].copy_from_slice(&width.to_le_bytes());
    header[4..6].copy_from_slice(&height.to_le_bytes());
    header[6] = bpp;
    header
}

#[test]
fn pic_pictor_8bpp_with_palette() {
    let mut file = pictor_header(2, 2, 8);
    let mut palette = vec![0u8; 768];
    palette[3..6].copy_from_slice(&[63, 0, 0]); // entry 1: full red
    palette[6..9].copy_from_slice(&[32, 63, 0]); // entry 2
    file.extend_from_slice(&palette);
    file.extend_from_slice(&[1, 2, 1, 0]);

    let raster = decode_pic(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!(raster.layout, PixelLayout::Rgb8);
    // 6-bit components scale as c * 255 / 63
    assert_eq!(raster.pixels()[..3], [255, 0, 0]);
    assert_eq!(raster.pixels()[3..6], [129, 255, 0]);
    assert_eq!(raster.pixels()[6..9], [255, 0, 0]);
    assert_eq!(raster.pixels()[9..12], [0, 0, 0]);
}

#[test]
fn pic_pictor_8bpp_without_palette_is_grayscale() {
    let mut file = pictor_header(3, 1, 8);
    file.extend_from_slice(&[10, 20, 30]);

    let raster = decode_pic(&file, Unstoppable).unwrap();
    assert_eq!(raster.layout, PixelLayout::Gray8);
    assert_eq!(raster.pixels(), [10, 20, 30]);
}

#[test]
fn pic_pictor_1bpp_set_bits_are_black() {
    let mut file = pictor_header(8, 1, 1);
    file.push(0xB0); // 10110000, safe literal below 0xC0

    let raster = decode_pic(&file, Unstoppable).unwrap();
    assert_eq!(raster.layout, PixelLayout::Gray8);
    assert_eq!(raster.pixels(), [0, 255, 0, 0, 255, 255, 255, 255]);
}

#[test]
fn pic_pictor_4bpp_uses_ega_palette() {
    let mut file = pictor_header(2, 1, 4);
    file.push(0x1F); // indices 1 and 15

    let raster = decode_pic(&file, Unstoppable).unwrap();
    assert_eq!(raster.layout, PixelLayout::Rgb8);
    assert_eq!(raster.pixels(), [0, 0, 170, 255, 255, 255]);
}

#[test]
fn pic_pictor_rle_compressed() {
    let mut file = pictor_header(4, 1, 8);
    file.extend_from_slice(&[0xC4, 0x99]);

    let raster = decode_pic(&file, Unstoppable).unwrap();
    assert_eq!(raster.pixels(), [0x99; 4]);
}

#[test]
fn pic_pntg_decodes_like_macpaint() {
    let mut file = vec![0u8; 0x280];
    file[64..68].copy_from_slice(b"PNTG");
    for _ in 0..405 {
        file.extend_from_slice(&[0x81, 0x00]);
    }

    let raster = decode_pic(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (576, 720));
    assert!(raster.pixels().iter().all(|&p| p == 255));
}

#[test]
fn pic_pictor_bad_dimensions_fall_to_generic() {
    let mut file = pictor_header(0, 0, 8);
    file.resize(64, 0x55);

    // The PICtor attempt aborts; the raw-bitmap fallback clamps to 320x200.
    let raster = decode_pic(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (320, 200));
}

#[test]
fn pic_generic_fallback() {
    let mut file = vec![0xFFu8; 640 * 480 + 256];
    file[0] = 0x55; // no magic
    let raster = decode_pic(&file, Unstoppable).unwrap();
    assert_invariants(&raster);
    assert_eq!((raster.width, raster.height), (640, 480));
    // set bits are white on the generic path
    assert!(raster.pixels().iter().all(|&p| p == 255));
}

#[test]
fn pic_rejects_tiny_file() {
    assert!(matches!(
        decode_pic(&[0u8; 10], Unstoppable),
        Err(RasterError::Truncated { .. })
    ));
}

// ── TIFF ─────────────────────────────────────────────────────────────

#[cfg(feature = "tiff")]
mod tiff_adapter {
    use super::*;
    use tiff::encoder::{colortype, TiffEncoder};

    #[test]
    fn tiff_rgb8() {
        let pixels: Vec<u8> = (0..18).collect();
        let mut file = std::io::Cursor::new(Vec::new());
        TiffEncoder::new(&mut file)
            .unwrap()
            .write_image::<colortype::RGB8>(3, 2, &pixels)
            .unwrap();
        let data = file.into_inner();

        let raster = decode_tiff(&data, Unstoppable).unwrap();
        assert_invariants(&raster);
        assert_eq!((raster.width, raster.height), (3, 2));
        assert_eq!(raster.layout, PixelLayout::Rgb8);
        assert_eq!(raster.pixels(), &pixels[..]);
    }

    #[test]
    fn tiff_gray8() {
        let pixels = vec![0u8, 64, 128, 255];
        let mut file = std::io::Cursor::new(Vec::new());
        TiffEncoder::new(&mut file)
            .unwrap()
            .write_image::<colortype::Gray8>(2, 2, &pixels)
            .unwrap();
        let data = file.into_inner();

        let raster = decode_tiff(&data, Unstoppable).unwrap();
        assert_eq!(raster.layout, PixelLayout::Gray8);
        assert_eq!(raster.pixels(), &pixels[..]);
    }

    #[test]
    fn tiff_rgba_drops_alpha() {
        let pixels = vec![10u8, 20, 30, 255, 40, 50, 60, 128];
        let mut file = std::io::Cursor::new(Vec::new());
        TiffEncoder::new(&mut file)
            .unwrap()
            .write_image::<colortype::RGBA8>(2, 1, &pixels)
            .unwrap();
        let data = file.into_inner();

        let raster = decode_tiff(&data, Unstoppable).unwrap();
        assert_eq!(raster.layout, PixelLayout::Rgb8);
        assert_eq!(raster.pixels(), [10, 20, 30, 40, 50, 60]);
    }

    #[test]
    fn tiff_garbage_is_delegated_failure() {
        assert!(matches!(
            decode_tiff(b"not a tiff at all", Unstoppable),
            Err(RasterError::Delegated(_))
        ));
    }

    /// Minimal hand-built palette TIFF: 4x1, 8-bit indices, uncompressed.
    /// The encoder has no palette colortype, so the IFD is laid out by hand:
    /// header at 0, IFD at 8, strip data at 134, ColorMap at 138.
    #[test]
    fn tiff_palette_expands_to_rgb() {
        let mut file = Vec::new();
        file.extend_from_slice(b"II");
        file.extend_from_slice(&42u16.to_le_bytes());
        file.extend_from_slice(&8u32.to_le_bytes()); // first IFD offset

        let entries: [(u16, u16, u32, u32); 10] = [
            (256, 3, 1, 4),     // ImageWidth
            (257, 3, 1, 1),     // ImageLength
            (258, 3, 1, 8),     // BitsPerSample
            (259, 3, 1, 1),     // Compression: none
            (262, 3, 1, 3),     // PhotometricInterpretation: palette
            (273, 4, 1, 134),   // StripOffsets
            (277, 3, 1, 1),     // SamplesPerPixel
            (278, 3, 1, 1),     // RowsPerStrip
            (279, 4, 1, 4),     // StripByteCounts
            (320, 3, 768, 138), // ColorMap
        ];
        file.extend_from_slice(&(entries.len() as u16).to_le_bytes());
        for (tag, typ, count, value) in entries {
            file.extend_from_slice(&tag.to_le_bytes());
            file.extend_from_slice(&typ.to_le_bytes());
            file.extend_from_slice(&count.to_le_bytes());
            file.extend_from_slice(&value.to_le_bytes());
        }
        file.extend_from_slice(&0u32.to_le_bytes()); // no next IFD

        assert_eq!(file.len(), 134);
        file.extend_from_slice(&[0, 1, 2, 255]); // palette indices

        // ColorMap: all reds, then greens, then blues, 16-bit components
        assert_eq!(file.len(), 138);
        for channel in 0..3u16 {
            for i in 0..256u16 {
                let component = match channel {
                    0 => i,
                    1 => 255 - i,
                    _ => i / 2,
                };
                file.extend_from_slice(&(component * 257).to_le_bytes());
            }
        }

        let raster = decode_tiff(&file, Unstoppable).unwrap();
        assert_invariants(&raster);
        assert_eq!((raster.width, raster.height), (4, 1));
        assert_eq!(raster.layout, PixelLayout::Rgb8);
        assert_eq!(
            raster.pixels(),
            [0, 255, 0, 1, 254, 0, 2, 253, 1, 255, 0, 127]
        );
    }
}

// ── Dispatcher ───────────────────────────────────────────────────────

#[test]
fn extension_dispatch_is_case_insensitive() {
    assert_eq!(ImageFormat::from_extension("art"), Some(ImageFormat::Art));
    assert_eq!(ImageFormat::from_extension(".PCX"), Some(ImageFormat::Pcx));
    assert_eq!(ImageFormat::from_extension("Mac"), Some(ImageFormat::Mac));
    assert_eq!(ImageFormat::from_extension("pic"), Some(ImageFormat::Pic));
    assert_eq!(ImageFormat::from_extension("tif"), Some(ImageFormat::Tiff));
    assert_eq!(ImageFormat::from_extension(".TIFF"), Some(ImageFormat::Tiff));
    assert_eq!(ImageFormat::from_extension("png"), None);
    assert_eq!(ImageFormat::from_extension(""), None);
}

#[test]
fn decode_routes_by_format() {
    let mut file = pcx_header(8, 1, 4, 1, 4);
    file.extend_from_slice(&[1, 2, 3, 4]);

    let raster = decode(ImageFormat::Pcx, &file, Unstoppable).unwrap();
    assert_eq!(raster.pixels(), [1, 2, 3, 4]);

    // The same bytes under a different hint take a different path entirely
    assert!(matches!(
        decode(ImageFormat::Mac, &file, Unstoppable),
        Err(RasterError::Truncated { .. })
    ));
}

// ── Limits ───────────────────────────────────────────────────────────

#[test]
fn limits_reject_large_pcx() {
    let mut file = pcx_header(8, 1, 4, 1, 4);
    file.extend_from_slice(&[1, 2, 3, 4]);
    let limits = Limits {
        max_pixels: Some(2),
        ..Default::default()
    };
    assert!(matches!(
        decode_pcx_with_limits(&file, &limits, Unstoppable),
        Err(RasterError::LimitExceeded(_))
    ));
}

#[test]
fn limits_reject_mac_memory() {
    let file = vec![0u8; 600];
    let limits = Limits {
        max_memory_bytes: Some(1024),
        ..Default::default()
    };
    assert!(matches!(
        decode_mac_with_limits(&file, &limits, Unstoppable),
        Err(RasterError::LimitExceeded(_))
    ));
}

#[test]
fn limits_allow_small_decodes() {
    let mut file = pcx_header(8, 1, 4, 1, 4);
    file.extend_from_slice(&[1, 2, 3, 4]);
    let limits = Limits {
        max_width: Some(64),
        max_height: Some(64),
        ..Default::default()
    };
    assert!(decode_pcx_with_limits(&file, &limits, Unstoppable).is_ok());
}
