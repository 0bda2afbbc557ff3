//! AppMessage enum for async communication within the application.

/// Messages received from async tasks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The simulated send delay for `send_id` elapsed
    SendCompleted { send_id: u64 },
}
