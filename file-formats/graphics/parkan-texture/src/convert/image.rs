use super::{Error, Result};
use crate::types::PixelGrid;
use ::image::{DynamicImage, ImageBuffer, ImageFormat};
use log::*;
use std::path::Path;

impl PixelGrid {
    /// Convert into an image with one of the 8 bit color types.
    ///
    /// 1 channel becomes `Luma8`, 2 `LumaA8`, 3 `Rgb8` and 4 `Rgba8`. The
    /// values are copied as they are, the palette is responsible for the
    /// channel order.
    pub fn to_image(&self) -> Result<DynamicImage> {
        let (width, height) = (self.width(), self.height());
        let data = self.as_raw().to_vec();
        let image = match self.channels() {
            1 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLuma8),
            2 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageLumaA8),
            3 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgb8),
            4 => ImageBuffer::from_raw(width, height, data).map(DynamicImage::ImageRgba8),
            n => return Err(Error::UnsupportedChannelCount(n)),
        };
        image.ok_or_else(|| Error::ShapeMismatch {
            expected: width as usize * height as usize * self.channels(),
            actual: self.as_raw().len(),
        })
    }

    /// Write the grid to `path`, the format is picked from the extension
    pub fn save<Q>(&self, path: Q) -> Result<()>
    where
        Q: AsRef<Path>,
    {
        debug!(
            "Saving {}x{} image to {}",
            self.width(),
            self.height(),
            path.as_ref().display()
        );
        self.to_image()?.save(path)?;
        Ok(())
    }

    /// Write the grid to `path` in an explicit format
    pub fn save_with_format<Q>(&self, path: Q, format: ImageFormat) -> Result<()>
    where
        Q: AsRef<Path>,
    {
        self.to_image()?.save_with_format(path, format)?;
        Ok(())
    }
}
