//! Wall-clock timer for the elapsed-time display.
//!
//! Display only: the rotation step itself never consults the clock.

use web_time::{Duration, Instant};

#[derive(Debug, Default, Clone)]
pub(crate) struct SolveTimer {
    started: Option<Instant>,
}

impl SolveTimer {
    pub fn start(&mut self) {
        self.started = Some(Instant::now());
    }

    pub fn stop(&mut self) {
        self.started = None;
    }

    pub fn elapsed(&self) -> Option<Duration> {
        Some(self.started?.elapsed())
    }
}
