use crate::core::data::colour::Colour;
use std::error::Error;
use std::fmt;

const BYTES_PER_PIXEL: usize = 3;

fn raster_size_in_bytes(width: u32, height: u32) -> usize {
    width as usize * height as usize * BYTES_PER_PIXEL
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterImageError {
    PixelOutsideBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    BoundsMismatch {
        expected_size: usize,
        buffer_size: usize,
    },
    PasteOutsideBounds {
        x: u32,
        y: u32,
        source_width: u32,
        source_height: u32,
        width: u32,
        height: u32,
    },
}

impl fmt::Display for RasterImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PixelOutsideBounds {
                x,
                y,
                width,
                height,
            } => write!(
                f,
                "pixel at x:{}, y:{} outside of {}x{} raster",
                x, y, width, height
            ),
            Self::BoundsMismatch {
                expected_size,
                buffer_size,
            } => write!(
                f,
                "raster size {} does not match buffer size {}",
                expected_size, buffer_size
            ),
            Self::PasteOutsideBounds {
                x,
                y,
                source_width,
                source_height,
                width,
                height,
            } => write!(
                f,
                "{}x{} image pasted at x:{}, y:{} does not fit inside {}x{} raster",
                source_width, source_height, x, y, width, height
            ),
        }
    }
}

impl Error for RasterImageError {}

/// Row-major grid of RGB triples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Creates an all-black raster.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; raster_size_in_bytes(width, height)],
        }
    }

    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RasterImageError> {
        let expected_size = raster_size_in_bytes(width, height);

        if expected_size != data.len() {
            return Err(RasterImageError::BoundsMismatch {
                expected_size,
                buffer_size: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGB bytes, three per pixel, row-major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.width || y >= self.height {
            return None;
        }

        let index = self.index(x, y);

        Some(Colour {
            r: self.data[index],
            g: self.data[index + 1],
            b: self.data[index + 2],
        })
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, colour: Colour) -> Result<(), RasterImageError> {
        if x >= self.width || y >= self.height {
            return Err(RasterImageError::PixelOutsideBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }

        let index = self.index(x, y);

        self.data[index] = colour.r;
        self.data[index + 1] = colour.g;
        self.data[index + 2] = colour.b;

        Ok(())
    }

    /// Fills a rectangle, clipping whatever falls outside the raster.
    pub fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, colour: Colour) {
        let right = x.saturating_add(width).min(self.width);
        let bottom = y.saturating_add(height).min(self.height);

        for row in y..bottom {
            for column in x..right {
                let index = self.index(column, row);
                self.data[index] = colour.r;
                self.data[index + 1] = colour.g;
                self.data[index + 2] = colour.b;
            }
        }
    }

    /// Copies `source` into this raster with its top-left corner at `(x, y)`.
    ///
    /// The whole source must fit; nothing is copied otherwise.
    pub fn paste(&mut self, source: &RasterImage, x: u32, y: u32) -> Result<(), RasterImageError> {
        let fits_horizontally = x
            .checked_add(source.width)
            .is_some_and(|right| right <= self.width);
        let fits_vertically = y
            .checked_add(source.height)
            .is_some_and(|bottom| bottom <= self.height);

        if !fits_horizontally || !fits_vertically {
            return Err(RasterImageError::PasteOutsideBounds {
                x,
                y,
                source_width: source.width,
                source_height: source.height,
                width: self.width,
                height: self.height,
            });
        }

        let row_bytes = source.width as usize * BYTES_PER_PIXEL;

        for row in 0..source.height {
            let src_start = source.index(0, row);
            let dest_start = self.index(x, y + row);

            self.data[dest_start..dest_start + row_bytes]
                .copy_from_slice(&source.data[src_start..src_start + row_bytes]);
        }

        Ok(())
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * BYTES_PER_PIXEL
    }
}
