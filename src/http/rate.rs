//! Sliding-window rate gate for outbound requests.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use async_lock::Mutex;

/// Rate limit configuration: at most `max_requests` admitted per rolling
/// `window`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimit {
    pub max_requests: usize,
    pub window: Duration,
}

impl Default for RateLimit {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window: Duration::from_secs(1),
        }
    }
}

/// Admission control shared by every in-flight request.
///
/// Tracks the admission timestamps inside the current window. Requests over
/// the cap wait until the oldest timestamp ages out; they are delayed, never
/// dropped.
pub struct RateGate {
    limit: RateLimit,
    admitted: Mutex<VecDeque<Instant>>,
}

impl RateGate {
    pub fn new(limit: RateLimit) -> Self {
        Self {
            limit,
            admitted: Mutex::new(VecDeque::with_capacity(limit.max_requests)),
        }
    }

    /// Wait until the window has capacity, then record this admission.
    pub async fn admit(&self) {
        loop {
            let wait = {
                let mut admitted = self.admitted.lock().await;
                let now = Instant::now();
                while admitted
                    .front()
                    .is_some_and(|t| now.duration_since(*t) >= self.limit.window)
                {
                    admitted.pop_front();
                }

                if admitted.len() < self.limit.max_requests {
                    admitted.push_back(now);
                    return;
                }

                // Window full. Wait for the oldest admission to age out,
                // then re-check (another waiter may claim the slot first).
                let oldest = *admitted.front().expect("window full but empty");
                self.limit.window - now.duration_since(oldest)
            };

            tracing::debug!(wait_ms = wait.as_millis() as u64, "rate gate full, delaying");
            futures_timer::Delay::new(wait).await;
        }
    }
}
