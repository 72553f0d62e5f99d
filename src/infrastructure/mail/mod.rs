//! Mail Notifications
//!
//! Local mail notifier: instead of delivering mail it writes the message to
//! the log, addressed with the configured sender and recipient.

use crate::config::MailSettings;
use crate::domain::services::{Notifier, NotifyError};

/// Notifier that "sends" mail by logging it.
#[derive(Debug, Clone)]
pub struct LocalMailNotifier {
    mail_to: String,
    mail_from: String,
}

impl LocalMailNotifier {
    pub fn new(settings: &MailSettings) -> Self {
        Self {
            mail_to: settings.to.clone(),
            mail_from: settings.from.clone(),
        }
    }
}

impl Notifier for LocalMailNotifier {
    fn notify(&self, subject: &str, body: &str) -> Result<(), NotifyError> {
        tracing::info!(
            mail_from = %self.mail_from,
            mail_to = %self.mail_to,
            subject,
            body,
            "Mail sent with LocalMailNotifier"
        );
        Ok(())
    }
}
