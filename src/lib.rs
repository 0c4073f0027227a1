pub mod adapters;
pub mod controllers;
pub mod core;

pub use adapters::fixed_rate_pacer::FixedRatePacer;
pub use adapters::raster_surface::RasterSurface;
pub use adapters::scripted_events::ScriptedEventSource;
pub use controllers::interactive::ports::draw_surface::DrawSurface;
pub use controllers::interactive::ports::event_source::EventSource;
pub use controllers::interactive::ports::frame_pacer::FramePacer;
pub use controllers::interactive::{ViewerController, ViewerError};
pub use controllers::still::StillImageController;
pub use crate::core::actions::ports::colour_map::ColourMap;
pub use crate::core::actions::render_tiles::errors::RenderTilesError;
pub use crate::core::actions::render_tiles::render_tiles::{render_mandelbrot, render_tiles};
pub use crate::core::actions::shade_view::shade_view::shade_view;
pub use crate::core::data::colour::Colour;
pub use crate::core::data::raster_image::{RasterImage, RasterImageError};
pub use crate::core::fractals::mandelbrot::colour_map::EmberColourMap;
pub use crate::core::fractals::mandelbrot::escape_score::{DEFAULT_MAX_ITERATIONS, escape_score};
pub use crate::core::fractals::mandelbrot::mandelbrot_config::{
    StillRenderConfig, StillRenderConfigError,
};
pub use crate::core::view::{
    InputEvent, LoopState, ViewKey, ViewState, ViewerConfig, ViewerConfigError,
};
