use crate::domain::account::AccountId;
use crate::domain::ports::Notifier;
use crate::error::Result;
use async_trait::async_trait;
use tracing::info;

/// Notifier that records every message as a structured log event.
///
/// Stands in for a real delivery channel (mail, push) which lives outside the
/// ledger.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LoggingNotifier {
    async fn notify(&self, account: &AccountId, message: &str) -> Result<()> {
        info!(%account, body = message, "sending notification");
        Ok(())
    }
}
