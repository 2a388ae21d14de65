//! Resampling of a source image into square PNG icons.

use image::ImageFormat;
use image::imageops::{self, FilterType};
use std::io::Cursor;

use crate::config::ResizeFilter;
use crate::error::IconError;
use crate::manifest::MAX_PIXEL_SIZE;
use crate::source::SourceImage;

/// Produces an encoded square icon from a source image.
///
/// Implementations are shared across worker threads during a parallel run,
/// so they must be `Send + Sync`.
pub trait Rasterizer: Send + Sync {
    /// Scale the whole of `source` onto a fresh `size x size` canvas and
    /// return it as PNG bytes.
    fn resize(&self, source: &SourceImage, size: u32) -> Result<Vec<u8>, IconError>;
}

/// [`Rasterizer`] backed by the `image` crate.
#[derive(Debug, Clone, Copy)]
pub struct ImageRasterizer {
    filter: FilterType,
}

impl ImageRasterizer {
    pub fn new(filter: ResizeFilter) -> Self {
        ImageRasterizer {
            filter: filter.filter_type(),
        }
    }
}

impl Default for ImageRasterizer {
    fn default() -> Self {
        Self::new(ResizeFilter::default())
    }
}

impl Rasterizer for ImageRasterizer {
    fn resize(&self, source: &SourceImage, size: u32) -> Result<Vec<u8>, IconError> {
        if size == 0 || size > MAX_PIXEL_SIZE {
            return Err(IconError::raster(
                size,
                format!("size must be between 1 and {}", MAX_PIXEL_SIZE),
            ));
        }

        // Non-square sources are stretched, not cropped.
        let canvas = imageops::resize(source.pixels(), size, size, self.filter);

        let mut buf = Cursor::new(Vec::new());
        canvas
            .write_to(&mut buf, ImageFormat::Png)
            .map_err(|e| IconError::raster(size, e))?;

        Ok(buf.into_inner())
    }
}
