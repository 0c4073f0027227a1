use std::collections::VecDeque;

use crate::controllers::interactive::ports::event_source::EventSource;
use crate::core::view::controls::InputEvent;

/// Replays a fixed list of per-frame event batches, then asks to quit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedEventSource {
    frames: VecDeque<Vec<InputEvent>>,
}

impl ScriptedEventSource {
    pub fn new(frames: impl IntoIterator<Item = Vec<InputEvent>>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
        }
    }

    /// Appends `count` frames with no input.
    pub fn idle(mut self, count: usize) -> Self {
        self.frames.extend((0..count).map(|_| Vec::new()));
        self
    }

    /// Appends a single frame carrying `events`.
    pub fn then(mut self, events: Vec<InputEvent>) -> Self {
        self.frames.push_back(events);
        self
    }

    #[must_use]
    pub fn remaining_frames(&self) -> usize {
        self.frames.len()
    }
}

impl EventSource for ScriptedEventSource {
    fn poll_events(&mut self) -> Vec<InputEvent> {
        self.frames
            .pop_front()
            .unwrap_or_else(|| vec![InputEvent::Quit])
    }
}
