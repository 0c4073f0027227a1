use crate::core::view::settings::ViewerConfigError;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ViewerError {
    Config(ViewerConfigError),
    Surface(Box<dyn Error>),
}

impl fmt::Display for ViewerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid viewer configuration: {}", err),
            Self::Surface(err) => write!(f, "draw surface error: {}", err),
        }
    }
}

impl Error for ViewerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Surface(err) => Some(err.as_ref()),
        }
    }
}

impl From<ViewerConfigError> for ViewerError {
    fn from(err: ViewerConfigError) -> Self {
        Self::Config(err)
    }
}
