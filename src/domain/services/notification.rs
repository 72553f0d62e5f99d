//! Outbound notification contract.

/// Notification delivery failure.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("Notification delivery failed: {0}")]
    Delivery(String),
}

/// Fire-and-forget notification sink.
///
/// Implementations must return promptly: anything slow (network delivery)
/// is handed off, not awaited. Callers log failures and carry on.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError>;
}
