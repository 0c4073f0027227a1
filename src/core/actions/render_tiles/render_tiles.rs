use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::Instant;

use log::{debug, info};
use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::core::actions::ports::colour_map::ColourMap;
use crate::core::actions::render_tiles::errors::RenderTilesError;
use crate::core::data::raster_image::{RasterImage, RasterImageError};
use crate::core::data::tile::Tile;
use crate::core::fractals::mandelbrot::colour_map::EmberColourMap;
use crate::core::fractals::mandelbrot::escape_score::escape_score;
use crate::core::fractals::mandelbrot::mandelbrot_config::StillRenderConfig;

/// Renders a `width × height` still split into `divider × divider` tiles,
/// coloured with the standard ember ramp.
pub fn render_mandelbrot(
    width: u32,
    height: u32,
    max_iterations: u32,
    divider: u32,
) -> Result<RasterImage, RenderTilesError> {
    let config = StillRenderConfig {
        width,
        height,
        max_iterations,
        divider,
        threads: None,
    };

    render_tiles(&config, &EmberColourMap)
}

/// Computes every tile of `config` in parallel and assembles them.
///
/// The configuration is validated before any tile is dispatched. The paste
/// position of each tile depends only on its grid cell, never on the order
/// in which workers finish. Any worker failure aborts the whole render.
pub fn render_tiles<CMap>(
    config: &StillRenderConfig,
    colour_map: &CMap,
) -> Result<RasterImage, RenderTilesError>
where
    CMap: ColourMap<f64> + Sync,
{
    config.validate()?;

    let tiles = Tile::grid(config.width, config.height, config.divider);

    info!(
        "Starting {} tiles for {}x{} render ({} iterations, colour map {})",
        tiles.len(),
        config.width,
        config.height,
        config.max_iterations,
        colour_map.display_name()
    );

    let start = Instant::now();

    let rendered = match config.threads {
        Some(threads) => {
            let pool = ThreadPoolBuilder::new().num_threads(threads).build()?;
            pool.install(|| compute_tiles(tiles, config.max_iterations, colour_map))
        }
        None => compute_tiles(tiles, config.max_iterations, colour_map),
    }?;

    info!("Computed tiles in {:?}, merging", start.elapsed());

    let mut image = RasterImage::new(config.width, config.height);

    for (tile, tile_image) in &rendered {
        let (x, y) = tile.origin();
        image
            .paste(tile_image, x, y)
            .map_err(RenderTilesError::Merge)?;
        debug!("Merged tile ({}, {}) at x:{}, y:{}", tile.column(), tile.row(), x, y);
    }

    info!("Render finished in {:?}", start.elapsed());

    Ok(image)
}

fn compute_tiles<CMap>(
    tiles: Vec<Tile>,
    max_iterations: u32,
    colour_map: &CMap,
) -> Result<Vec<(Tile, RasterImage)>, RenderTilesError>
where
    CMap: ColourMap<f64> + Sync,
{
    tiles
        .into_par_iter()
        .map(|tile| -> Result<(Tile, RasterImage), RenderTilesError> {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                compute_tile(&tile, max_iterations, colour_map)
            }))
            .map_err(|payload| RenderTilesError::WorkerPanicked {
                column: tile.column(),
                row: tile.row(),
                message: panic_message(payload.as_ref()),
            })?;

            let tile_image = outcome.map_err(|source| RenderTilesError::Worker {
                column: tile.column(),
                row: tile.row(),
                source,
            })?;

            Ok((tile, tile_image))
        })
        .collect()
}

/// Fills one tile's own raster, pixel by pixel.
pub fn compute_tile<CMap>(
    tile: &Tile,
    max_iterations: u32,
    colour_map: &CMap,
) -> Result<RasterImage, RasterImageError>
where
    CMap: ColourMap<f64>,
{
    let mut image = RasterImage::new(tile.width(), tile.height());

    for y in 0..tile.height() {
        for x in 0..tile.width() {
            let c = tile.plane_coordinate(x, y);
            let score = escape_score(c.real, c.imag, max_iterations);
            image.set_pixel(x, y, colour_map.map(score))?;
        }
    }

    Ok(image)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}
