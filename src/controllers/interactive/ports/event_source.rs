use crate::core::view::controls::InputEvent;

pub trait EventSource {
    /// Events that arrived since the previous call, oldest first.
    fn poll_events(&mut self) -> Vec<InputEvent>;
}
