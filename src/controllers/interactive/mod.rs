pub mod controller;
pub mod errors;
pub mod ports;

pub use controller::ViewerController;
pub use errors::ViewerError;
