use std::ops::Range;
use std::time::Duration;

use rand::Rng;

const SUGGESTION_DELAY_MS: Range<u64> = 1000..2000;
const ANALYSIS_DELAY_MS: Range<u64> = 3000..5000;

/// Artificial "thinking" delay before AI endpoints answer.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedLatency {
    enabled: bool,
}

impl SimulatedLatency {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn disabled() -> Self {
        Self::new(false)
    }

    pub async fn suggestion(&self) {
        self.sleep(SUGGESTION_DELAY_MS).await;
    }

    pub async fn analysis(&self) {
        self.sleep(ANALYSIS_DELAY_MS).await;
    }

    async fn sleep(&self, range: Range<u64>) {
        if !self.enabled {
            return;
        }
        let ms = rand::rng().random_range(range);
        tokio::time::sleep(Duration::from_millis(ms)).await;
    }
}
