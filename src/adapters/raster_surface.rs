use std::convert::Infallible;

use crate::controllers::interactive::ports::draw_surface::DrawSurface;
use crate::core::data::colour::Colour;
use crate::core::data::raster_image::RasterImage;

/// Off-screen draw surface backed by a [`RasterImage`].
///
/// Rectangles reaching past the edge are clipped. `present` only counts
/// frames; the image always holds the latest drawing.
#[derive(Debug, Clone)]
pub struct RasterSurface {
    image: RasterImage,
    frames_presented: u64,
}

impl RasterSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            image: RasterImage::new(width, height),
            frames_presented: 0,
        }
    }

    #[must_use]
    pub fn image(&self) -> &RasterImage {
        &self.image
    }

    #[must_use]
    pub fn frames_presented(&self) -> u64 {
        self.frames_presented
    }

    pub fn into_image(self) -> RasterImage {
        self.image
    }
}

impl DrawSurface for RasterSurface {
    type Error = Infallible;

    fn fill_rect(
        &mut self,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        colour: Colour,
    ) -> Result<(), Self::Error> {
        self.image.fill_rect(x, y, width, height, colour);
        Ok(())
    }

    fn present(&mut self) -> Result<(), Self::Error> {
        self.frames_presented += 1;
        Ok(())
    }
}
