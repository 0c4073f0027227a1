pub mod colour_map;
pub mod escape_score;
pub mod mandelbrot_config;
