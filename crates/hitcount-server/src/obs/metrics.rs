//! In-process hit counter registry.
//!
//! Counters with dynamic labels backed by `DashMap`. Label sets are flattened
//! into sorted key vectors, and rendering sorts samples so the exposition
//! output is deterministic.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Content type for the Prometheus text exposition format.
pub const CONTENT_TYPE_TEXT: &str = "text/plain; version=0.0.4; charset=utf-8";

type LabelKey = Vec<(String, String)>;

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> LabelKey {
    let mut key: LabelKey = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

/// Monotonic counter family. Values only go up.
#[derive(Default)]
pub struct CounterVec {
    map: DashMap<LabelKey, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Current value for a label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, help: &str, out: &mut String) {
        let _ = writeln!(out, "# HELP {} {}", name, help);
        let _ = writeln!(out, "# TYPE {} counter", name);

        let mut samples: Vec<(LabelKey, u64)> = self
            .map
            .iter()
            .map(|r| (r.key().clone(), r.value().load(Ordering::Relaxed)))
            .collect();
        samples.sort();

        for (key, val) in samples {
            let label_str = key
                .iter()
                .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                .collect::<Vec<_>>()
                .join(",");
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

/// Registry shared by every handler through `AppState`.
#[derive(Default)]
pub struct HitMetrics {
    hits: CounterVec,
}

impl HitMetrics {
    pub const HITS_NAME: &'static str = "hits_total";
    pub const HITS_HELP: &'static str = "Total HTTP hits";

    /// Record one hit for an endpoint.
    pub fn hit(&self, endpoint: &str) {
        self.hits.inc(&[("endpoint", endpoint)]);
        tracing::debug!(endpoint, "hit recorded");
    }

    /// Hits recorded so far for an endpoint.
    pub fn hits(&self, endpoint: &str) -> u64 {
        self.hits.get(&[("endpoint", endpoint)])
    }

    /// Render all registered metrics.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.hits.render(Self::HITS_NAME, Self::HITS_HELP, &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_endpoint_reads_zero() {
        let m = HitMetrics::default();
        assert_eq!(m.hits("/"), 0);
    }

    #[test]
    fn render_sorts_samples_and_includes_help() {
        let m = HitMetrics::default();
        m.hit("/metrics");
        m.hit("/");
        m.hit("/");

        let text = m.render();
        let expected = "# HELP hits_total Total HTTP hits\n\
                        # TYPE hits_total counter\n\
                        hits_total{endpoint=\"/\"} 2\n\
                        hits_total{endpoint=\"/metrics\"} 1\n";
        assert_eq!(text, expected);
    }

    #[test]
    fn label_values_are_escaped() {
        let c = CounterVec::default();
        c.inc(&[("endpoint", "a\"b")]);
        let mut out = String::new();
        c.render("x_total", "x", &mut out);
        assert!(out.contains(r#"x_total{endpoint="a\"b"} 1"#));
    }

    #[test]
    fn label_order_does_not_split_series() {
        let c = CounterVec::default();
        c.inc(&[("a", "1"), ("b", "2")]);
        c.inc(&[("b", "2"), ("a", "1")]);
        assert_eq!(c.get(&[("a", "1"), ("b", "2")]), 2);
    }

    #[test]
    fn concurrent_hits_are_not_lost() {
        let m = HitMetrics::default();
        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..1_000 {
                        m.hit("/");
                    }
                });
            }
        });
        assert_eq!(m.hits("/"), 8_000);
    }
}
