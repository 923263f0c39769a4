use std::sync::Arc;

use async_trait::async_trait;

use userhub_core::{Result, UserId};

/// Kind of committed mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserAction {
    Create,
    Update,
    Delete,
}

impl UserAction {
    /// Audit action name.
    pub fn as_str(self) -> &'static str {
        match self {
            UserAction::Create => "CREATE",
            UserAction::Update => "UPDATE",
            UserAction::Delete => "DELETE",
        }
    }

    /// Notification event name.
    pub fn past_tense(self) -> &'static str {
        match self {
            UserAction::Create => "created",
            UserAction::Update => "updated",
            UserAction::Delete => "deleted",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserEvent {
    pub action: UserAction,
    pub user_id: UserId,
}

impl UserEvent {
    pub fn new(action: UserAction, user_id: UserId) -> Self {
        Self { action, user_id }
    }
}

/// Observer of committed user mutations.
#[async_trait]
pub trait EventSink: Send + Sync {
    fn name(&self) -> &'static str;
    async fn record(&self, event: UserEvent) -> Result<()>;
}

/// Fan-out of user events to every registered sink.
#[derive(Clone, Default)]
pub struct EventBus {
    sinks: Vec<Arc<dyn EventSink>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sink(mut self, sink: Arc<dyn EventSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    pub fn sink_names(&self) -> Vec<&'static str> {
        self.sinks.iter().map(|s| s.name()).collect()
    }

    /// Dispatch `event` to every sink on its own detached task and return
    /// immediately. Must be called from within a tokio runtime.
    pub fn emit(&self, event: UserEvent) {
        for sink in &self.sinks {
            let sink = Arc::clone(sink);
            tokio::spawn(async move {
                if let Err(e) = sink.record(event).await {
                    tracing::warn!(
                        sink = sink.name(),
                        action = event.action.as_str(),
                        user_id = event.user_id,
                        error = %e,
                        "event sink failed"
                    );
                }
            });
        }
    }
}
