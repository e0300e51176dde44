//! Lightweight in-process metrics.
//!
//! Hit counters are stored as atomics and rendered by the `/metrics` handler
//! in Prometheus text format.

pub mod metrics;

pub use metrics::{CounterVec, HitMetrics, CONTENT_TYPE_TEXT};
