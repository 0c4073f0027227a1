use crate::core::fractals::mandelbrot::escape_score::DEFAULT_MAX_ITERATIONS;
use std::error::Error;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerConfigError {
    EmptyScreen { width: u32, height: u32 },
    ZeroScaleFactor,
    NotDivisible {
        width: u32,
        height: u32,
        down_scale_factor: u32,
    },
    ZeroMaxIterations,
}

impl fmt::Display for ViewerConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyScreen { width, height } => {
                write!(f, "screen size must be non-zero: {}x{}", width, height)
            }
            Self::ZeroScaleFactor => write!(f, "down-scale factor must be at least 1"),
            Self::NotDivisible {
                width,
                height,
                down_scale_factor,
            } => write!(
                f,
                "{}x{} screen is not divisible by down-scale factor {}",
                width, height, down_scale_factor
            ),
            Self::ZeroMaxIterations => write!(f, "Maximum iterations must be greater than zero"),
        }
    }
}

impl Error for ViewerConfigError {}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerConfig {
    pub width: u32,
    pub height: u32,
    pub max_iterations: u32,
    /// Screen pixels per logical pixel along each axis.
    pub down_scale_factor: u32,
    /// Velocity set while a zoom or pan key is held.
    pub speed: f64,
    /// Multiplier applied to the zoom velocity every frame.
    pub zoom_rate: f64,
    pub frame_hz: u32,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 450,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            down_scale_factor: 6,
            speed: 3.0,
            zoom_rate: 3.0,
            frame_hz: 60,
        }
    }
}

impl ViewerConfig {
    pub fn validate(&self) -> Result<(), ViewerConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ViewerConfigError::EmptyScreen {
                width: self.width,
                height: self.height,
            });
        }

        if self.down_scale_factor == 0 {
            return Err(ViewerConfigError::ZeroScaleFactor);
        }

        if self.width % self.down_scale_factor != 0 || self.height % self.down_scale_factor != 0 {
            return Err(ViewerConfigError::NotDivisible {
                width: self.width,
                height: self.height,
                down_scale_factor: self.down_scale_factor,
            });
        }

        if self.max_iterations == 0 {
            return Err(ViewerConfigError::ZeroMaxIterations);
        }

        Ok(())
    }

    #[must_use]
    pub fn virtual_width(&self) -> u32 {
        self.width / self.down_scale_factor.max(1)
    }

    #[must_use]
    pub fn virtual_height(&self) -> u32 {
        self.height / self.down_scale_factor.max(1)
    }

    /// Zoom a session starts at, derived from the screen width rather than the
    /// down-scaled one.
    #[must_use]
    pub fn initial_zoom(&self) -> f64 {
        f64::from(self.width) / 5.0
    }

    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        if self.frame_hz == 0 {
            Duration::ZERO
        } else {
            Duration::from_secs_f64(1.0 / f64::from(self.frame_hz))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_matches_classic_session() {
        let config = ViewerConfig::default();

        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.virtual_width(), 100);
        assert_eq!(config.virtual_height(), 75);
        assert_eq!(config.initial_zoom(), 120.0);
        assert_eq!(config.speed, 3.0);
        assert_eq!(config.zoom_rate, 3.0);
    }

    #[test]
    fn test_frame_duration_matches_frame_rate() {
        let config = ViewerConfig::default();

        assert!((config.frame_duration().as_secs_f64() - (1.0 / 60.0)).abs() < 1e-9);
    }

    #[test]
    fn test_zero_frame_rate_means_unpaced() {
        let config = ViewerConfig {
            frame_hz: 0,
            ..ViewerConfig::default()
        };

        assert_eq!(config.frame_duration(), Duration::ZERO);
    }

    #[test]
    fn test_indivisible_screen_is_rejected() {
        let config = ViewerConfig {
            width: 601,
            ..ViewerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ViewerConfigError::NotDivisible {
                width: 601,
                height: 450,
                down_scale_factor: 6
            })
        );
    }

    #[test]
    fn test_zero_scale_factor_is_rejected() {
        let config = ViewerConfig {
            down_scale_factor: 0,
            ..ViewerConfig::default()
        };

        assert_eq!(config.validate(), Err(ViewerConfigError::ZeroScaleFactor));
        assert_eq!(config.virtual_width(), 600);
    }

    #[test]
    fn test_empty_screen_is_rejected() {
        let config = ViewerConfig {
            height: 0,
            ..ViewerConfig::default()
        };

        assert_eq!(
            config.validate(),
            Err(ViewerConfigError::EmptyScreen {
                width: 600,
                height: 0
            })
        );
    }

    #[test]
    fn test_zero_iterations_is_rejected() {
        let config = ViewerConfig {
            max_iterations: 0,
            ..ViewerConfig::default()
        };

        assert_eq!(config.validate(), Err(ViewerConfigError::ZeroMaxIterations));
    }
}
