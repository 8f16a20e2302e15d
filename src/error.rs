use alloc::string::String;
use enough::StopReason;

/// Errors from vintage raster decoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum RasterError {
    #[error("no format variant matched the file contents")]
    UnrecognizedFormat,

    #[error("file truncated: need at least {needed} bytes, got {got}")]
    Truncated { needed: usize, got: usize },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("unsupported format variant: {0}")]
    UnsupportedVariant(String),

    #[error("dimensions out of range: {width}x{height}")]
    DimensionsTooLarge { width: u32, height: u32 },

    #[error("delegated TIFF decoder rejected input: {0}")]
    Delegated(String),

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[cfg(feature = "rgb")]
    #[error("pixel layout mismatch: expected {expected:?}, got {actual:?}")]
    LayoutMismatch {
        expected: crate::PixelLayout,
        actual: crate::PixelLayout,
    },

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for RasterError {
    fn from(r: StopReason) -> Self {
        RasterError::Cancelled(r)
    }
}
