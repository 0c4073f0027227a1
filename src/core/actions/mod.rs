pub mod ports;
pub mod render_tiles;
pub mod shade_view;
