use crate::RasterError;

/// Resource limits applied before a decode allocates its output.
///
/// Decoders already reject anything above 4096 px per side; these limits
/// let a caller tighten that further, e.g. for thumbnailing untrusted
/// files. Every field defaults to `None`, meaning unlimited.
#[derive(Clone, Debug, Default)]
pub struct Limits {
    pub max_width: Option<u64>,
    pub max_height: Option<u64>,
    /// Maximum pixel count (width * height).
    pub max_pixels: Option<u64>,
    /// Maximum bytes any single decode buffer may allocate.
    pub max_memory_bytes: Option<u64>,
}

impl Limits {
    /// Check decoded dimensions, as soon as they are known.
    pub(crate) fn check(&self, width: u32, height: u32) -> Result<(), RasterError> {
        let checks = [
            (u64::from(width), self.max_width, "width"),
            (u64::from(height), self.max_height, "height"),
            (
                u64::from(width) * u64::from(height),
                self.max_pixels,
                "pixel count",
            ),
        ];
        for (value, limit, what) in checks {
            if let Some(limit) = limit {
                if value > limit {
                    return Err(RasterError::LimitExceeded(alloc::format!(
                        "{what} {value} exceeds limit {limit}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Check a buffer allocation against the memory limit.
    pub(crate) fn check_memory(&self, bytes: usize) -> Result<(), RasterError> {
        match self.max_memory_bytes {
            Some(limit) if bytes as u64 > limit => Err(RasterError::LimitExceeded(
                alloc::format!("allocation of {bytes} bytes exceeds memory limit {limit}"),
            )),
            _ => Ok(()),
        }
    }
}
