use std::time::Duration;
use tracing::trace;

/// Callback run once a scheduled delay elapses.
pub type TimerCallback = Box<dyn FnOnce() + Send + 'static>;

/// A schedule-after-delay primitive.
pub trait Timer: Send + Sync {
    /// Runs `callback` once, no earlier than `delay` from now.
    ///
    /// The callback must never run synchronously inside this call.
    fn set_timeout(&self, delay: Duration, callback: TimerCallback);
}

/// [`Timer`] backed by `tokio::time::sleep` on a spawned task.
///
/// Must be used from within a Tokio runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

impl Timer for TokioTimer {
    fn set_timeout(&self, delay: Duration, callback: TimerCallback) {
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            trace!(delay_ms = delay.as_millis() as u64, "Timer fired");
            callback();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;

    #[tokio::test]
    async fn test_tokio_timer_fires_after_delay() {
        let (tx, rx) = oneshot::channel();
        let started = tokio::time::Instant::now();

        TokioTimer.set_timeout(
            Duration::from_millis(20),
            Box::new(move || {
                let _ = tx.send(tokio::time::Instant::now());
            }),
        );

        let fired_at = rx.await.unwrap();
        assert!(fired_at.duration_since(started) >= Duration::from_millis(20));
    }
}
