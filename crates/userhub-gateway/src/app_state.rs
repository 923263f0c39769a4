//! Shared application state for the userhub gateway.
//!
//! Owns the single `UserStore` and `AdmissionLimiter` for the process, the
//! metrics registry, and the event bus. Cloning is cheap (all `Arc`s).

use std::sync::Arc;

use userhub_core::{AdmissionLimiter, UserStore};

use crate::config::GatewayConfig;
use crate::events::{AuditLog, EventBus, Notifier};
use crate::obs::GatewayMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    cfg: GatewayConfig,
    store: UserStore,
    limiter: AdmissionLimiter,
    metrics: GatewayMetrics,
    events: EventBus,
}

impl AppState {
    /// Build state with the built-in audit and notification sinks.
    pub fn new(cfg: GatewayConfig) -> Self {
        let events = EventBus::new()
            .with_sink(Arc::new(AuditLog::new()))
            .with_sink(Arc::new(Notifier::new()));
        Self::with_events(cfg, events)
    }

    pub fn with_events(cfg: GatewayConfig, events: EventBus) -> Self {
        let limiter = AdmissionLimiter::new(cfg.limiter.capacity, cfg.limiter.refill_per_sec);
        tracing::debug!(
            capacity = cfg.limiter.capacity,
            refill_per_sec = cfg.limiter.refill_per_sec,
            sinks = ?events.sink_names(),
            "app state ready"
        );

        Self {
            inner: Arc::new(AppStateInner {
                cfg,
                store: UserStore::new(),
                limiter,
                metrics: GatewayMetrics::default(),
                events,
            }),
        }
    }

    pub fn cfg(&self) -> &GatewayConfig {
        &self.inner.cfg
    }

    pub fn store(&self) -> &UserStore {
        &self.inner.store
    }

    pub fn limiter(&self) -> &AdmissionLimiter {
        &self.inner.limiter
    }

    pub fn metrics(&self) -> &GatewayMetrics {
        &self.inner.metrics
    }

    pub fn events(&self) -> &EventBus {
        &self.inner.events
    }

    pub fn set_draining(&self) {
        self.inner.metrics.set_draining();
    }

    pub fn is_draining(&self) -> bool {
        self.inner.metrics.is_draining()
    }

    /// Gauge lines computed at scrape time.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![("userhub_users", self.inner.store.len() as u64)]
    }
}
