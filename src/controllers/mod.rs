pub mod interactive;
pub mod still;
