use async_trait::async_trait;
use std::{sync::Arc, time::Duration};

pub type DynClock = Arc<dyn Clock + Send + Sync>;

/// Seam for the generator's fixed delays, so tests run cycles without
/// wall-clock waiting.
#[async_trait]
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioClock;

#[async_trait]
impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
