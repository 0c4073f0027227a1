pub mod controls;
pub mod settings;
pub mod state;

pub use controls::{InputEvent, ViewKey};
pub use settings::{ViewerConfig, ViewerConfigError};
pub use state::{LoopState, ViewState};
