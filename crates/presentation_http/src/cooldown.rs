//! Per-user command cooldowns

use std::{
    collections::HashMap,
    time::{Duration, Instant},
};

use parking_lot::Mutex;

/// Entries kept before stale ones are swept
const SWEEP_THRESHOLD: usize = 1024;

/// Allows one use per user within a sliding window
#[derive(Debug)]
pub struct CooldownTracker {
    window: Duration,
    last_use: Mutex<HashMap<String, Instant>>,
}

impl CooldownTracker {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_use: Mutex::new(HashMap::new()),
        }
    }

    /// Record a use for `user_id`
    ///
    /// Returns the remaining wait when the user is still cooling down; the
    /// rejected attempt does not extend the window.
    pub fn try_acquire(&self, user_id: &str) -> Result<(), Duration> {
        self.try_acquire_at(user_id, Instant::now())
    }

    fn try_acquire_at(&self, user_id: &str, now: Instant) -> Result<(), Duration> {
        if self.window.is_zero() {
            return Ok(());
        }

        let mut last_use = self.last_use.lock();
        if let Some(previous) = last_use.get(user_id) {
            let elapsed = now.saturating_duration_since(*previous);
            if elapsed < self.window {
                return Err(self.window - elapsed);
            }
        }

        if last_use.len() >= SWEEP_THRESHOLD {
            let window = self.window;
            last_use.retain(|_, at| now.saturating_duration_since(*at) < window);
        }
        last_use.insert(user_id.to_string(), now);
        Ok(())
    }
}

/// Whole seconds to wait, rounded up
pub fn remaining_secs(remaining: Duration) -> u64 {
    remaining.as_secs() + u64::from(remaining.subsec_nanos() > 0)
}
