pub mod draw_surface;
pub mod event_source;
pub mod frame_pacer;
