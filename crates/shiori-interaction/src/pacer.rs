//! Stage pacing.
//!
//! The dispatcher never sleeps by itself; it asks a [`Pacer`] to wait at
//! every stage boundary. Production uses [`TokioPacer`], tests use
//! [`NoDelay`] or a pacer that holds a stage until released.

use std::time::Duration;

use async_trait::async_trait;
use shiori_core::session::Stage;

/// Waits out the simulated latency of a processing stage.
#[async_trait]
pub trait Pacer: Send + Sync {
    /// Called once per stage, after the stage became visible.
    async fn pause(&self, stage: Stage, delay: Duration);
}

/// Sleeps for the configured delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

#[async_trait]
impl Pacer for TokioPacer {
    async fn pause(&self, stage: Stage, delay: Duration) {
        if delay.is_zero() {
            return;
        }
        tracing::trace!("[Pacer] {} for {:?}", stage, delay);
        tokio::time::sleep(delay).await;
    }
}

/// Returns immediately.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl Pacer for NoDelay {
    async fn pause(&self, _stage: Stage, _delay: Duration) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[tokio::test]
    async fn test_tokio_pacer_sleeps() {
        let started = Instant::now();
        TokioPacer
            .pause(Stage::Loading, Duration::from_millis(20))
            .await;
        assert!(started.elapsed() >= Duration::from_millis(20));
    }

    #[tokio::test]
    async fn test_zero_delay_returns_immediately() {
        let started = Instant::now();
        TokioPacer.pause(Stage::Searching, Duration::ZERO).await;
        NoDelay.pause(Stage::Searching, Duration::from_secs(60)).await;
        assert!(started.elapsed() < Duration::from_secs(1));
    }
}
