pub mod colour;
pub mod complex;
pub mod raster_image;
pub mod tile;
