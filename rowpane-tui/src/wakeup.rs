//! Wakeup channel for passive rendering.
//!
//! The event loop blocks on input when idle. Background tasks (the data
//! loader) send a wakeup signal after mutating shared state so the loop
//! re-renders without polling.

use tokio::sync::mpsc;

/// Sender half. Clone-able, can be moved into async tasks.
#[derive(Clone)]
pub struct WakeupSender {
    tx: mpsc::Sender<()>,
}

impl WakeupSender {
    /// Send a wakeup signal.
    ///
    /// Non-blocking. Errors are ignored (receiver dropped = shutting down).
    pub fn send(&self) {
        let _ = self.tx.try_send(());
    }
}

/// Receiver half, owned by the event loop.
pub struct WakeupReceiver {
    rx: mpsc::Receiver<()>,
}

impl WakeupReceiver {
    /// Wait for a wakeup signal.
    pub async fn recv(&mut self) -> Option<()> {
        self.rx.recv().await
    }
}

/// Create a wakeup channel pair.
pub fn channel() -> (WakeupSender, WakeupReceiver) {
    // Small buffer - we just need to wake up, not queue many signals
    let (tx, rx) = mpsc::channel(16);
    (WakeupSender { tx }, WakeupReceiver { rx })
}
