//! Byte-oriented run-length codecs.
//!
//! Four incompatible RLE dialects show up across the supported formats:
//! Apple PackBits (MacPaint, PNTG), ZSoft's PCX scheme, the simpler PICtor
//! scheme, and AOL's variant. They are deliberately kept as four separate
//! functions; the control-byte boundaries differ in ways that a unified
//! parameterised decoder would bury.
//!
//! All decoders are total: malformed or truncated input terminates the scan
//! cleanly, output is capped at `expected_len`, and any shortfall is
//! zero-padded, so the returned buffer is always exactly `expected_len`
//! bytes. Callers size `expected_len` from the image geometry.

use alloc::vec::Vec;

/// Emit `count` copies of `value`, stopping at the output cap.
fn push_run(out: &mut Vec<u8>, value: u8, count: usize, cap: usize) {
    let take = count.min(cap.saturating_sub(out.len()));
    out.resize(out.len() + take, value);
}

/// Emit literal bytes, stopping at the output cap.
fn push_literal(out: &mut Vec<u8>, bytes: &[u8], cap: usize) {
    let take = bytes.len().min(cap.saturating_sub(out.len()));
    out.extend_from_slice(&bytes[..take]);
}

/// Decompress Apple PackBits data.
///
/// Flag byte `f`: `0..=127` copies the next `f + 1` bytes verbatim,
/// `129..=255` repeats the next byte `257 - f` times (2–128), and `128`
/// is a no-op.
pub fn unpack_packbits(input: &[u8], expected_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(expected_len);
    let mut i = 0;

    while i < input.len() && out.len() < expected_len {
        let flag = input[i];
        i += 1;

        if flag < 128 {
            let count = usize::from(flag) + 1;
            let end = (i + count).min(input.len());
            push_literal(&mut out, &input[i..end], expected_len);
            i = end;
        } else if flag > 128 {
            let count = 257 - usize::from(flag);
            if let Some(&value) = input.get(i) {
                push_run(&mut out, value, count, expected_len);
                i += 1;
            }
        }
        // flag == 128: no-op
    }

    out.resize(expected_len, 0);
    out
}

/// Decompress ZSoft PCX run-length data.
///
/// A byte with both top bits set encodes a run: the low six bits are the
/// count (0–63, zero emits nothing but still consumes the value byte) and
/// the following byte is the value. Anything else is a single literal.
///
/// Run state is positional, not per-scanline: callers that need several
/// rows decompress them in one call so runs may cross row boundaries.
pub fn unpack_pcx_rle(input: &[u8], expected_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(expected_len);
    let mut i = 0;

    while i < input.len() && out.len() < expected_len {
        let b = input[i];
        i += 1;

        if b & 0xC0 == 0xC0 {
            let count = usize::from(b & 0x3F);
            if let Some(&value) = input.get(i) {
                push_run(&mut out, value, count, expected_len);
                i += 1;
            }
        } else {
            out.push(b);
        }
    }

    out.resize(expected_len, 0);
    out
}

/// Decompress PICtor run-length data.
///
/// Unlike the PCX scheme there is no mask: a byte `b >= 0xC0` encodes a run
/// of `b - 0xC0` copies of the next byte, and everything below `0xC0` is a
/// literal. Values `0xC0..=0xFF` therefore cannot appear as literals.
pub fn unpack_pictor_rle(input: &[u8], expected_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(expected_len);
    let mut i = 0;

    while i < input.len() && out.len() < expected_len {
        let b = input[i];
        i += 1;

        if b >= 0xC0 {
            let count = usize::from(b - 0xC0);
            if let Some(&value) = input.get(i) {
                push_run(&mut out, value, count, expected_len);
                i += 1;
            }
        } else {
            out.push(b);
        }
    }

    out.resize(expected_len, 0);
    out
}

/// Decompress AOL run-length data.
///
/// Control byte `b`: above 128 repeats the next byte `b - 128` times,
/// `1..=128` copies the next `b` bytes verbatim, and zero is padding.
pub fn unpack_aol_rle(input: &[u8], expected_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(expected_len);
    let mut i = 0;

    while i < input.len() && out.len() < expected_len {
        let b = input[i];
        i += 1;

        if b > 128 {
            let count = usize::from(b - 128);
            if let Some(&value) = input.get(i) {
                push_run(&mut out, value, count, expected_len);
                i += 1;
            }
        } else if b > 0 {
            let count = usize::from(b);
            let end = (i + count).min(input.len());
            push_literal(&mut out, &input[i..end], expected_len);
            i = end;
        }
        // b == 0: padding, skip
    }

    out.resize(expected_len, 0);
    out
}
