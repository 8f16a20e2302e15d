#![no_main]
use libfuzzer_sys::fuzz_target;
use retrobitmaps::ImageFormat;

fuzz_target!(|data: &[u8]| {
    // Every decoder must survive arbitrary bytes without panicking.
    for format in [
        ImageFormat::Art,
        ImageFormat::Mac,
        ImageFormat::Pic,
        ImageFormat::Pcx,
        ImageFormat::Tiff,
    ] {
        if let Ok(raster) = retrobitmaps::decode(format, data, enough::Unstoppable) {
            assert_eq!(
                raster.pixels().len(),
                raster.width as usize * raster.height as usize * raster.channels()
            );
        }
    }
});
