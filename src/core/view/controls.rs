/// Keys the viewer reacts to. The windowing layer decides which physical
/// key produces which variant (the classic binding is E/Q for zoom, WASD
/// for panning and Esc to leave).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKey {
    ZoomIn,
    ZoomOut,
    PanLeft,
    PanRight,
    PanUp,
    PanDown,
    Escape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    KeyDown(ViewKey),
    KeyUp(ViewKey),
}
