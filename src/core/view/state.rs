use crate::core::data::complex::Complex;
use crate::core::view::controls::{InputEvent, ViewKey};
use crate::core::view::settings::ViewerConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Running,
    Terminating,
}

/// Where the viewer looks and how that is changing.
///
/// `center_x`/`center_y` are offsets in logical pixels; `zoom` is logical
/// pixels per plane unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewState {
    pub center_x: f64,
    pub center_y: f64,
    pub zoom: f64,
    pub zoom_velocity: f64,
    pub pan_velocity_x: f64,
    pub pan_velocity_y: f64,
}

impl ViewState {
    #[must_use]
    pub fn initial(config: &ViewerConfig) -> Self {
        Self {
            center_x: 0.0,
            center_y: 0.0,
            zoom: config.initial_zoom(),
            zoom_velocity: 0.0,
            pan_velocity_x: 0.0,
            pan_velocity_y: 0.0,
        }
    }

    pub fn apply_event(&mut self, event: InputEvent, speed: f64) -> LoopState {
        match event {
            InputEvent::Quit | InputEvent::KeyDown(ViewKey::Escape) => {
                return LoopState::Terminating;
            }
            InputEvent::KeyDown(key) => match key {
                ViewKey::ZoomIn => self.zoom_velocity = speed,
                ViewKey::ZoomOut => self.zoom_velocity = -speed,
                ViewKey::PanLeft => self.pan_velocity_x = -speed,
                ViewKey::PanRight => self.pan_velocity_x = speed,
                ViewKey::PanUp => self.pan_velocity_y = -speed,
                ViewKey::PanDown => self.pan_velocity_y = speed,
                ViewKey::Escape => {}
            },
            InputEvent::KeyUp(key) => match key {
                ViewKey::ZoomIn | ViewKey::ZoomOut => self.zoom_velocity = 0.0,
                ViewKey::PanLeft | ViewKey::PanRight => self.pan_velocity_x = 0.0,
                ViewKey::PanUp | ViewKey::PanDown => self.pan_velocity_y = 0.0,
                ViewKey::Escape => {}
            },
        }

        LoopState::Running
    }

    /// Advances one frame. The centre drifts in proportion to the zoom
    /// velocity, so zooming closes in on a fixed point of the picture instead
    /// of the plane origin. The drift uses the zoom after this frame's update.
    pub fn integrate(&mut self, zoom_rate: f64) {
        let zoom_step = self.zoom_velocity * zoom_rate;

        self.zoom += zoom_step;
        self.center_x += self.pan_velocity_x + (self.center_x / self.zoom) * zoom_step;
        self.center_y += self.pan_velocity_y + (self.center_y / self.zoom) * zoom_step;
    }

    /// Plane coordinate of logical pixel `(x, y)` in a
    /// `virtual_width × virtual_height` view.
    #[must_use]
    pub fn plane_coordinate(&self, x: u32, y: u32, virtual_width: u32, virtual_height: u32) -> Complex {
        Complex {
            real: (f64::from(x) + self.center_x - f64::from(virtual_width) / 2.0) / self.zoom,
            imag: (f64::from(y) + self.center_y - f64::from(virtual_height) / 2.0) / self.zoom,
        }
    }
}
