use thiserror::Error;

/// Error type for icon generation and packaging.
///
/// Every variant aborts only the request that raised it.
#[derive(Debug, Error)]
pub enum IconError {
    /// The source bytes could not be interpreted as an image.
    #[error("failed to decode source image: {0}")]
    Decode(#[source] image::ImageError),

    /// No drawable surface could be produced for a target size.
    #[error("raster surface unavailable at {size}x{size}: {reason}")]
    RasterContext { size: u32, reason: String },

    /// The archive could not be written or finalized.
    #[error("archive write failed: {reason}")]
    ArchiveWrite { reason: String },

    /// Packaging was requested for an icon set with no icons.
    #[error("icon set is empty, nothing to package")]
    EmptySet,
}

impl IconError {
    pub(crate) fn raster(size: u32, reason: impl ToString) -> Self {
        IconError::RasterContext {
            size,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn archive(reason: impl ToString) -> Self {
        IconError::ArchiveWrite {
            reason: reason.to_string(),
        }
    }
}
