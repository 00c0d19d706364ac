use std::time::Duration;

use dioxus_logger::tracing;
use tokio::task::JoinHandle;

use crate::server::model::liveness::Liveness;

/// How often the idle monitor checks for client pings.
pub const CHECK_INTERVAL: Duration = Duration::from_secs(5);

/// Delay between answering a shutdown request and exiting.
pub const SHUTDOWN_DELAY: Duration = Duration::from_millis(200);

/// Whether the client has been silent for at least `timeout` since its last ping.
///
/// Never idle before the first ping, so the server waits for the page to be opened.
pub fn is_idle(liveness: &Liveness, timeout: Duration) -> bool {
    liveness.idle_for().is_some_and(|idle| idle >= timeout)
}

/// Exits the process once the client stops pinging.
///
/// Checks every [`CHECK_INTERVAL`] and exits with status 0 once `timeout` has passed since the
/// last ping. The monitor is armed by the first ping.
pub fn spawn_idle_shutdown(liveness: Liveness, timeout: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CHECK_INTERVAL);

        loop {
            interval.tick().await;

            if is_idle(&liveness, timeout) {
                tracing::info!(
                    idle_secs = liveness.idle_for().unwrap_or_default().as_secs(),
                    "No client ping received, shutting down"
                );
                std::process::exit(0);
            }
        }
    })
}

/// Exits the process shortly after a shutdown request so its response can still be sent
pub fn schedule_shutdown() -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(SHUTDOWN_DELAY).await;

        tracing::info!("Shutting down on client request");
        std::process::exit(0);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_after_timeout() {
        let liveness = Liveness::new();
        liveness.touch();

        assert!(!is_idle(&liveness, Duration::from_secs(30)));
        assert!(is_idle(&liveness, Duration::ZERO));
    }

    /// Expect the server to keep waiting until the page first pings
    #[test]
    fn not_idle_before_first_ping() {
        let liveness = Liveness::new();

        assert!(!is_idle(&liveness, Duration::ZERO));

        liveness.touch();

        assert!(is_idle(&liveness, Duration::ZERO));
    }
}
