//! Shared application state for the hitcount server.
//!
//! Holds the greeting and the hit counter registry. Cloning is cheap; every
//! clone points at the same registry.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::obs::HitMetrics;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    greeting: String,
    metrics: Arc<HitMetrics>,
}

impl AppState {
    pub fn new(cfg: ServerConfig) -> Self {
        Self::with_metrics(cfg, Arc::new(HitMetrics::default()))
    }

    /// Build state around an existing registry.
    pub fn with_metrics(cfg: ServerConfig, metrics: Arc<HitMetrics>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                greeting: cfg.service.greeting,
                metrics,
            }),
        }
    }

    pub fn greeting(&self) -> &str {
        &self.inner.greeting
    }

    pub fn metrics(&self) -> &HitMetrics {
        &self.inner.metrics
    }
}
