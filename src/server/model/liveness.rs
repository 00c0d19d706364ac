use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

/// Tracks when the client last pinged the server.
///
/// Nothing is recorded until the first ping arrives.
#[derive(Clone)]
pub struct Liveness {
    last_ping: Arc<Mutex<Option<Instant>>>,
}

impl Liveness {
    pub fn new() -> Self {
        Self {
            last_ping: Arc::new(Mutex::new(None)),
        }
    }

    /// Records a ping at the current instant
    pub fn touch(&self) {
        let mut last_ping = self.last_ping.lock().unwrap_or_else(|e| e.into_inner());
        *last_ping = Some(Instant::now());
    }

    /// Time elapsed since the last ping, `None` before the first one
    pub fn idle_for(&self) -> Option<Duration> {
        self.last_ping
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .map(|instant| instant.elapsed())
    }
}

impl Default for Liveness {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_idle_time_before_first_ping() {
        let liveness = Liveness::new();

        assert_eq!(liveness.idle_for(), None);
    }

    #[test]
    fn touch_resets_idle_time() {
        let liveness = Liveness::new();
        liveness.touch();
        std::thread::sleep(Duration::from_millis(20));
        assert!(liveness.idle_for() >= Some(Duration::from_millis(20)));

        liveness.touch();

        assert!(liveness.idle_for() < Some(Duration::from_millis(20)));
    }
}
