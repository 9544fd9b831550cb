//! One-way notification channel from the engine to the surrounding UI.
//!
//! Replaces the original console side-channel with an explicit sink passed
//! into the engine. Delivery never blocks: the channel is unbounded and a
//! dropped receiver simply discards messages.

use crossbeam_channel as xch;

/// Create a connected notifier/receiver pair.
pub fn notification_channel() -> (Notifier, xch::Receiver<String>) {
    let (tx, rx) = xch::unbounded();
    (Notifier { tx: Some(tx) }, rx)
}

/// Sending half of the notification channel.
#[derive(Debug, Clone)]
pub struct Notifier {
    tx: Option<xch::Sender<String>>,
}

impl Notifier {
    /// A notifier with no receiver, for callers that only want the log.
    pub fn disconnected() -> Self {
        Self { tx: None }
    }

    pub fn push(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(%message, "notification");
        if let Some(tx) = &self.tx {
            // Unbounded send cannot block; a hung-up receiver is not an error.
            let _ = tx.send(message);
        }
    }
}
