use std::collections::HashMap;
use std::time::{SystemTime, UNIX_EPOCH};

use parking_lot::Mutex;
use uuid::Uuid;

/// Last successful invocation per player, epoch milliseconds.
///
/// Entries are never evicted: the process serves a small, bounded population
/// of distinct players for its lifetime.
pub struct Cooldowns {
    window_ms: u64,
    last_used: Mutex<HashMap<Uuid, u64>>,
}

impl Cooldowns {
    pub fn new(window_secs: u64) -> Self {
        Self {
            window_ms: window_secs * 1000,
            last_used: Mutex::new(HashMap::new()),
        }
    }

    /// Whole seconds (floored) until `player` may invoke again at `now_ms`,
    /// or `None` once the window has elapsed.
    pub fn remaining_secs(&self, player: Uuid, now_ms: u64) -> Option<u64> {
        let last = *self.last_used.lock().get(&player)?;
        let elapsed = now_ms.saturating_sub(last);
        if elapsed < self.window_ms {
            Some(self.window_ms / 1000 - elapsed / 1000)
        } else {
            None
        }
    }

    /// Overwrites the player's timestamp. Callers always pass a current
    /// clock reading, so timestamps never move backwards.
    pub fn record(&self, player: Uuid, now_ms: u64) {
        self.last_used.lock().insert(player, now_ms);
    }

    pub fn len(&self) -> usize {
        self.last_used.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_used.lock().is_empty()
    }
}

pub fn epoch_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
