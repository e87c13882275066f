use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::{Duration, Instant};

/// Per-address rate limit for QR resends. Clones share the same map.
#[derive(Debug, Clone)]
pub struct ResendCooldown {
    window: Duration,
    last_sent: Arc<RwLock<HashMap<String, Instant>>>,
}

impl ResendCooldown {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_sent: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    /// Claim a send slot for `key`. False while the previous claim is younger
    /// than the window. Keys are compared case-insensitively.
    pub fn try_acquire(&self, key: &str) -> bool {
        let key = key.to_lowercase();
        let mut last_sent = self.last_sent.write().unwrap_or_else(PoisonError::into_inner);
        let now = Instant::now();
        last_sent.retain(|_, last| now.duration_since(*last) < self.window);
        if last_sent.contains_key(&key) {
            return false;
        }
        last_sent.insert(key, now);
        true
    }

    /// Give back a slot whose send failed, so the user can retry at once.
    pub fn release(&self, key: &str) {
        self.last_sent
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&key.to_lowercase());
    }

    /// Addresses currently cooling down.
    pub fn tracked(&self) -> usize {
        self.last_sent.read().unwrap_or_else(PoisonError::into_inner).len()
    }
}
