use async_trait::async_trait;

use userhub_core::Result;

use super::bus::{EventSink, UserEvent};

/// Writes one audit line per committed mutation.
#[derive(Debug, Default)]
pub struct AuditLog;

impl AuditLog {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventSink for AuditLog {
    fn name(&self) -> &'static str {
        "audit"
    }

    async fn record(&self, event: UserEvent) -> Result<()> {
        tracing::info!(target: "audit", action = event.action.as_str(), user_id = event.user_id);
        Ok(())
    }
}

/// Stand-in for an outbound notification channel; logs the event.
#[derive(Debug, Default)]
pub struct Notifier;

impl Notifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventSink for Notifier {
    fn name(&self) -> &'static str {
        "notify"
    }

    async fn record(&self, event: UserEvent) -> Result<()> {
        tracing::info!(target: "notify", user_id = event.user_id, event = event.action.past_tense());
        Ok(())
    }
}
