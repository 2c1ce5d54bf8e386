use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use crate::config::RateLimitConfig;

#[derive(Debug)]
struct WindowState {
    queues: HashMap<String, VecDeque<Instant>>,
    last_sweep: Instant,
}

/// Sliding-window limiter keyed by client address. Keys whose requests
/// have all left the window are evicted at most one window after going idle.
#[derive(Debug, Clone)]
pub struct IpRateLimiter {
    inner: Arc<Mutex<WindowState>>,
    window: Duration,
    max_requests: usize,
}

impl IpRateLimiter {
    pub fn new(config: RateLimitConfig) -> Self {
        Self {
            inner: Arc::new(Mutex::new(WindowState {
                queues: HashMap::new(),
                last_sweep: Instant::now(),
            })),
            window: config.window,
            max_requests: config.max_requests,
        }
    }

    /// `Err` carries how long until the oldest request leaves the window.
    pub fn check(&self, key: &str) -> Result<(), Duration> {
        self.check_at(key, Instant::now())
    }

    fn check_at(&self, key: &str, now: Instant) -> Result<(), Duration> {
        let mut guard = self.inner.lock();

        if now.saturating_duration_since(guard.last_sweep) >= self.window {
            let window = self.window;
            guard.queues.retain(|_, queue| {
                queue
                    .back()
                    .is_some_and(|latest| now.saturating_duration_since(*latest) < window)
            });
            guard.last_sweep = now;
        }

        let queue = guard.queues.entry(key.to_string()).or_default();

        while let Some(front) = queue.front() {
            if now.saturating_duration_since(*front) >= self.window {
                queue.pop_front();
            } else {
                break;
            }
        }

        if queue.len() >= self.max_requests {
            let retry_after = queue
                .front()
                .map(|oldest| self.window.saturating_sub(now.saturating_duration_since(*oldest)))
                .unwrap_or(self.window);
            return Err(retry_after);
        }

        queue.push_back(now);
        Ok(())
    }

    #[cfg(test)]
    fn tracked_keys(&self) -> usize {
        self.inner.lock().queues.len()
    }
}
