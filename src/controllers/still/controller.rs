use std::time::Instant;

use log::info;

use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::actions::render_tiles::errors::RenderTilesError;
use crate::core::actions::render_tiles::render_tiles::render_tiles;
use crate::core::data::raster_image::RasterImage;
use crate::core::fractals::mandelbrot::colour_map::EmberColourMap;
use crate::core::fractals::mandelbrot::mandelbrot_config::StillRenderConfig;

pub struct StillImageController<CMap = EmberColourMap> {
    config: StillRenderConfig,
    colour_map: CMap,
    image: Option<RasterImage>,
}

impl StillImageController<EmberColourMap> {
    pub fn new(config: StillRenderConfig) -> Self {
        Self::with_colour_map(config, EmberColourMap)
    }
}

impl<CMap> StillImageController<CMap>
where
    CMap: ColourMap<f64> + Sync,
{
    pub fn with_colour_map(config: StillRenderConfig, colour_map: CMap) -> Self {
        Self {
            config,
            colour_map,
            image: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &StillRenderConfig {
        &self.config
    }

    /// Renders the configured still and keeps it for [`Self::image`].
    pub fn generate(&mut self) -> Result<&RasterImage, RenderTilesError> {
        info!(
            "Rendering {}x{} still, {} tiles",
            self.config.width,
            self.config.height,
            self.config.tile_count()
        );

        let start = Instant::now();
        let image = render_tiles(&self.config, &self.colour_map)?;

        info!("Duration: {:?}", start.elapsed());

        Ok(self.image.insert(image))
    }

    #[must_use]
    pub fn image(&self) -> Option<&RasterImage> {
        self.image.as_ref()
    }

    pub fn take_image(&mut self) -> Option<RasterImage> {
        self.image.take()
    }
}
