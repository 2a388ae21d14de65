use image::{DynamicImage, ImageDecoder, ImageError, ImageReader, RgbaImage};
use std::io::Cursor;

use crate::error::IconError;

/// Smallest width and height that count as high resolution for icon work.
pub const RECOMMENDED_MIN_SIZE: u32 = 512;

/// A decoded source image, held as RGBA8 so transparency survives resizing.
///
/// Sources with 16 bits per channel are reduced to 8 bits on conversion.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pixels: RgbaImage,
}

/// Non-blocking quality hints about a source image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    pub is_square: bool,
    pub is_high_res: bool,
}

impl Advisory {
    pub fn for_dimensions(width: u32, height: u32) -> Self {
        Advisory {
            is_square: width == height,
            is_high_res: width >= RECOMMENDED_MIN_SIZE && height >= RECOMMENDED_MIN_SIZE,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.is_square && self.is_high_res
    }
}

impl SourceImage {
    /// Decode raw PNG or JPEG bytes, turning the pixels upright according to
    /// any EXIF orientation tag.
    pub fn decode(bytes: &[u8]) -> Result<Self, IconError> {
        let mut decoder = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| IconError::Decode(ImageError::IoError(e)))?
            .into_decoder()
            .map_err(IconError::Decode)?;
        let orientation = decoder.orientation().map_err(IconError::Decode)?;

        let mut image = DynamicImage::from_decoder(decoder).map_err(IconError::Decode)?;
        image.apply_orientation(orientation);
        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        SourceImage {
            pixels: image.into_rgba8(),
        }
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    pub fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// Square and high-resolution checks. Generation does not depend on them.
    pub fn advisory(&self) -> Advisory {
        Advisory::for_dimensions(self.width(), self.height())
    }
}
