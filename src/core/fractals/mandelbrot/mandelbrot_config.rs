use crate::core::fractals::mandelbrot::escape_score::DEFAULT_MAX_ITERATIONS;
use std::error::Error;
use std::fmt;

const DEFAULT_WIDTH: u32 = 600;
const DEFAULT_HEIGHT: u32 = 450;
const DEFAULT_DIVIDER: u32 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StillRenderConfigError {
    EmptyRaster { width: u32, height: u32 },
    OddDimensions { width: u32, height: u32 },
    ZeroDivider,
    NotDivisible { width: u32, height: u32, divider: u32 },
    ZeroMaxIterations,
    ZeroThreads,
}

impl fmt::Display for StillRenderConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRaster { width, height } => {
                write!(f, "raster size must be non-zero: {}x{}", width, height)
            }
            Self::OddDimensions { width, height } => {
                write!(f, "width or height not divisible by two: {}x{}", width, height)
            }
            Self::ZeroDivider => write!(f, "tile divider must be at least 1"),
            Self::NotDivisible {
                width,
                height,
                divider,
            } => write!(
                f,
                "{}x{} raster cannot be split evenly into {} tiles per axis",
                width, height, divider
            ),
            Self::ZeroMaxIterations => write!(f, "Maximum iterations must be greater than zero"),
            Self::ZeroThreads => write!(f, "worker thread count must be greater than zero"),
        }
    }
}

impl Error for StillRenderConfigError {}

/// Parameters of a tiled still render.
///
/// `divider` is the number of tiles per axis, so a render is split into
/// `divider × divider` tiles. `threads` pins the worker pool size; `None`
/// uses rayon's global pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StillRenderConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    pub divider: u32,
    pub threads: Option<usize>,
}

impl Default for StillRenderConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            divider: DEFAULT_DIVIDER,
            threads: None,
        }
    }
}

impl StillRenderConfig {
    pub fn validate(&self) -> Result<(), StillRenderConfigError> {
        let (width, height) = (self.width, self.height);

        if width == 0 || height == 0 {
            return Err(StillRenderConfigError::EmptyRaster { width, height });
        }

        if width % 2 != 0 || height % 2 != 0 {
            return Err(StillRenderConfigError::OddDimensions { width, height });
        }

        if self.divider == 0 {
            return Err(StillRenderConfigError::ZeroDivider);
        }

        if width % self.divider != 0 || height % self.divider != 0 {
            return Err(StillRenderConfigError::NotDivisible {
                width,
                height,
                divider: self.divider,
            });
        }

        if self.max_iterations == 0 {
            return Err(StillRenderConfigError::ZeroMaxIterations);
        }

        if self.threads == Some(0) {
            return Err(StillRenderConfigError::ZeroThreads);
        }

        Ok(())
    }

    #[must_use]
    pub fn tile_count(&self) -> u32 {
        self.divider * self.divider
    }
}
