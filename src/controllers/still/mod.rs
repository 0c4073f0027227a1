pub mod controller;

pub use controller::StillImageController;
