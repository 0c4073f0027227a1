use crate::core::data::raster_image::RasterImageError;
use crate::core::fractals::mandelbrot::mandelbrot_config::StillRenderConfigError;
use rayon::ThreadPoolBuildError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum RenderTilesError {
    Config(StillRenderConfigError),
    ThreadPool(ThreadPoolBuildError),
    /// A tile worker panicked; the render is abandoned.
    WorkerPanicked {
        column: u32,
        row: u32,
        message: String,
    },
    /// A tile worker failed to fill its own raster.
    Worker {
        column: u32,
        row: u32,
        source: RasterImageError,
    },
    Merge(RasterImageError),
}

impl fmt::Display for RenderTilesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid render configuration: {}", err),
            Self::ThreadPool(err) => write!(f, "failed to build worker pool: {}", err),
            Self::WorkerPanicked {
                column,
                row,
                message,
            } => write!(f, "worker for tile ({}, {}) panicked: {}", column, row, message),
            Self::Worker {
                column,
                row,
                source,
            } => write!(f, "worker for tile ({}, {}) failed: {}", column, row, source),
            Self::Merge(err) => write!(f, "failed to merge tile: {}", err),
        }
    }
}

impl Error for RenderTilesError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::ThreadPool(err) => Some(err),
            Self::WorkerPanicked { .. } => None,
            Self::Worker { source, .. } => Some(source),
            Self::Merge(err) => Some(err),
        }
    }
}

impl From<StillRenderConfigError> for RenderTilesError {
    fn from(err: StillRenderConfigError) -> Self {
        Self::Config(err)
    }
}

impl From<ThreadPoolBuildError> for RenderTilesError {
    fn from(err: ThreadPoolBuildError) -> Self {
        Self::ThreadPool(err)
    }
}
