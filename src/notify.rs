use std::sync::mpsc::{self, Sender};
use std::thread;

/// Message attached to every completed-transfer notification.
pub const TRANSFER_COMPLETED: &str = "Transfer is completed!";

/// Collaborator told about every committed transfer. The engine calls this
/// after releasing the pair locks and never looks at any outcome, so
/// implementations must not block.
pub trait TransferNotifier: Send + Sync {
    fn transfer_completed(&self, account_id: &str, message: &str);
}

/// Hands notifications to a dedicated consumer thread over a channel, so a
/// slow consumer never stalls a transfer.
pub struct ChannelNotifier {
    sender: Sender<(String, String)>,
}

impl ChannelNotifier {
    /// Spawns the consumer thread. It exits once every sender is dropped.
    pub fn spawn() -> Self {
        let (sender, receiver) = mpsc::channel::<(String, String)>();
        thread::spawn(move || {
            for (account_id, message) in receiver {
                tracing::info!(account = %account_id, "{message}");
            }
        });
        Self { sender }
    }
}

impl TransferNotifier for ChannelNotifier {
    fn transfer_completed(&self, account_id: &str, message: &str) {
        // a gone consumer is not the transfer's problem
        let _ = self
            .sender
            .send((account_id.to_owned(), message.to_owned()));
    }
}
