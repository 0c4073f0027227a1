use std::thread;
use std::time::{Duration, Instant};

use log::trace;

use crate::controllers::interactive::ports::frame_pacer::FramePacer;
use crate::core::view::settings::ViewerConfig;

/// Holds frames to a fixed rate by sleeping away whatever is left of each
/// frame period. A frame that overran its period is not waited on.
#[derive(Debug, Clone)]
pub struct FixedRatePacer {
    frame_duration: Duration,
    last_frame: Option<Instant>,
}

impl FixedRatePacer {
    pub fn new(frame_duration: Duration) -> Self {
        Self {
            frame_duration,
            last_frame: None,
        }
    }

    pub fn from_config(config: &ViewerConfig) -> Self {
        Self::new(config.frame_duration())
    }

    #[must_use]
    pub fn frame_duration(&self) -> Duration {
        self.frame_duration
    }

    fn remaining(&self, now: Instant) -> Duration {
        match self.last_frame {
            Some(last) => self
                .frame_duration
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}

impl FramePacer for FixedRatePacer {
    fn wait_for_next_frame(&mut self) {
        let remaining = self.remaining(Instant::now());

        if !remaining.is_zero() {
            trace!("Sleeping {:?} until next frame", remaining);
            thread::sleep(remaining);
        }

        self.last_frame = Some(Instant::now());
    }
}
