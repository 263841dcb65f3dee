//! Shutdown coordination for the listeners.

use tokio::sync::broadcast::{self, error::RecvError};

/// Coordinator for shutdown.
///
/// Provides a broadcast channel that every listener subscribes to.
/// There is no drain phase: listeners stop accepting and in-flight
/// requests end with the process.
pub struct Shutdown {
    /// Broadcast channel sender.
    tx: broadcast::Sender<()>,
}

impl Shutdown {
    /// Create a new shutdown coordinator.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Subscribe to the shutdown signal.
    pub fn subscribe(&self) -> broadcast::Receiver<()> {
        self.tx.subscribe()
    }

    /// Trigger the shutdown signal.
    pub fn trigger(&self) {
        let _ = self.tx.send(());
    }

    /// Get the number of active subscribers (listeners still running).
    pub fn receiver_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve once shutdown is triggered.
///
/// If the coordinator is dropped without triggering, nobody can stop the
/// listener anymore and this never resolves.
pub async fn wait_for_trigger(mut rx: broadcast::Receiver<()>) {
    match rx.recv().await {
        Ok(()) | Err(RecvError::Lagged(_)) => {}
        Err(RecvError::Closed) => std::future::pending::<()>().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn trigger_reaches_every_subscriber() {
        let shutdown = Shutdown::new();
        let first = tokio::spawn(wait_for_trigger(shutdown.subscribe()));
        let second = tokio::spawn(wait_for_trigger(shutdown.subscribe()));
        assert_eq!(shutdown.receiver_count(), 2);

        shutdown.trigger();
        first.await.unwrap();
        second.await.unwrap();
    }

    #[tokio::test]
    async fn dropped_coordinator_does_not_stop_listeners() {
        let shutdown = Shutdown::new();
        let rx = shutdown.subscribe();
        drop(shutdown);

        let waited = tokio::time::timeout(Duration::from_millis(50), wait_for_trigger(rx)).await;
        assert!(waited.is_err());
    }
}
