//! Bounded reads from fixed-layout headers.

/// Read a little-endian u16 at `offset`, or `None` past the end.
pub(crate) fn u16_le(data: &[u8], offset: usize) -> Option<u16> {
    let bytes = data.get(offset..offset + 2)?;
    Some(u16::from_le_bytes([bytes[0], bytes[1]]))
}

/// Whether `needle` occurs anywhere in the first `limit` bytes of `data`.
pub(crate) fn contains_in_prefix(data: &[u8], needle: &[u8], limit: usize) -> bool {
    let prefix = &data[..limit.min(data.len())];
    prefix.windows(needle.len()).any(|w| w == needle)
}
