pub mod fixed_rate_pacer;
pub mod raster_surface;
pub mod scripted_events;
