//! Colour tables and palette construction.

use alloc::vec::Vec;

pub(crate) type Rgb = [u8; 3];

/// The fixed 16-colour table of IBM's Enhanced Graphics Adapter.
pub(crate) const EGA: [Rgb; 16] = [
    [0, 0, 0],       // black
    [0, 0, 170],     // blue
    [0, 170, 0],     // green
    [0, 170, 170],   // cyan
    [170, 0, 0],     // red
    [170, 0, 170],   // magenta
    [170, 85, 0],    // brown
    [170, 170, 170], // light gray
    [85, 85, 85],    // dark gray
    [85, 85, 255],   // light blue
    [85, 255, 85],   // light green
    [85, 255, 255],  // light cyan
    [255, 85, 85],   // light red
    [255, 85, 255],  // light magenta
    [255, 255, 85],  // yellow
    [255, 255, 255], // white
];

/// Scale a 6-bit DAC component to the 8-bit range.
pub(crate) fn scale_6bit(c: u8) -> u8 {
    ((u16::from(c.min(63)) * 255) / 63) as u8
}

/// Build a palette from packed RGB triplets with 6-bit components.
pub(crate) fn from_6bit_triplets(data: &[u8]) -> Vec<Rgb> {
    data.chunks_exact(3)
        .map(|t| [scale_6bit(t[0]), scale_6bit(t[1]), scale_6bit(t[2])])
        .collect()
}

/// Build a palette from packed RGB triplets with 8-bit components.
pub(crate) fn from_triplets(data: &[u8]) -> Vec<Rgb> {
    data.chunks_exact(3).map(|t| [t[0], t[1], t[2]]).collect()
}
