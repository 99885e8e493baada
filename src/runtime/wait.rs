// ABOUTME: Bounded polling loop behind wait-until-running.
// ABOUTME: Probes at a fixed interval until the probe says yes or the deadline passes.

use std::future::Future;
use std::time::Duration;
use tokio::time::{self, Instant, MissedTickBehavior};

/// Shortest interval accepted; `tokio::time::interval` rejects zero.
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Stand-in deadline for timeouts too large to add to the current instant.
const FAR_FUTURE: Duration = Duration::from_secs(86400 * 365 * 30);

/// States of the wait protocol. `Succeeded` and `TimedOut` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitState {
    Polling,
    Succeeded,
    TimedOut,
}

/// Call `probe` every `interval` until it returns `true` or `timeout` elapses.
///
/// The first probe runs immediately. A `true` answer ends the wait at once,
/// without waiting for the next tick. The deadline takes priority over a tick
/// that becomes due at the same instant, and a probe still running when the
/// deadline passes is dropped, so the wait never ends later than `timeout`
/// plus the time the runtime takes to notice.
///
/// Time comes from tokio's clock, so tests can run this under
/// `tokio::time::pause` without waiting real seconds.
pub async fn poll_until<F, Fut>(timeout: Duration, interval: Duration, mut probe: F) -> WaitState
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let now = Instant::now();
    let deadline = now.checked_add(timeout).unwrap_or(now + FAR_FUTURE);
    let mut ticker = time::interval(interval.max(MIN_POLL_INTERVAL));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    let mut state = WaitState::Polling;
    while state == WaitState::Polling {
        state = tokio::select! {
            biased;
            _ = time::sleep_until(deadline) => WaitState::TimedOut,
            _ = ticker.tick() => match time::timeout_at(deadline, probe()).await {
                Ok(true) => WaitState::Succeeded,
                Ok(false) => WaitState::Polling,
                Err(_) => WaitState::TimedOut,
            },
        };
    }
    state
}
