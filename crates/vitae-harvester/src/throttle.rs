//! Randomized pause between knowledge-base writes

use crate::HarvestConfig;
use rand::Rng;
use std::time::Duration;
use tracing::debug;

/// Picks a uniformly random delay in `[min, max]` seconds after every write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    min_secs: u64,
    max_secs: u64,
}

impl Throttle {
    /// Create a throttle; bounds are swapped if given in the wrong order
    pub fn new(min_secs: u64, max_secs: u64) -> Self {
        Self {
            min_secs: min_secs.min(max_secs),
            max_secs: min_secs.max(max_secs),
        }
    }

    /// Throttle matching a harvest configuration
    pub fn from_config(config: &HarvestConfig) -> Self {
        Self::new(config.min_delay_secs, config.max_delay_secs)
    }

    /// Draw the next delay
    pub fn next_delay(&self) -> Duration {
        let secs = rand::thread_rng().gen_range(self.min_secs..=self.max_secs);
        Duration::from_secs(secs)
    }

    /// Sleep for a freshly drawn delay
    pub async fn pause(&self) {
        let delay = self.next_delay();
        if delay.is_zero() {
            return;
        }
        debug!("pausing {:?} before the next write", delay);
        tokio::time::sleep(delay).await;
    }
}
