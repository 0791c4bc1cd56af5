use std::time::{Duration, Instant};

/// Shared, read-only state handed to every handler.
/// Holds the instant the process started serving so `/health` can report uptime.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    started_at: Instant,
}

impl AppState {
    /// Capture the start instant. Call once at startup.
    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(started_at: Instant) -> Self {
        Self { started_at }
    }

    /// Monotonic time elapsed since start
    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
