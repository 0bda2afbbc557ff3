//! Deferred send completion.
//!
//! Sending is simulated: a task sleeps for the configured delay and then
//! posts [`AppMessage::SendCompleted`]. The ticket's cancellation token is
//! owned by the composer, so dropping the shell stops the task.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::AppMessage;
use crate::state::SendTicket;

/// Spawn the task that completes `ticket` after `delay` on `runtime`.
pub(crate) fn spawn_send_completion(
    runtime: &Handle,
    ticket: SendTicket,
    delay: Duration,
    message_tx: mpsc::UnboundedSender<AppMessage>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        let send_id = ticket.id;
        tokio::select! {
            _ = ticket.token.cancelled() => {
                tracing::debug!(send_id, "send cancelled before completion");
            }
            _ = tokio::time::sleep(delay) => {
                if message_tx.send(AppMessage::SendCompleted { send_id }).is_err() {
                    tracing::debug!(send_id, "shell gone before send completed");
                }
            }
        }
    })
}
