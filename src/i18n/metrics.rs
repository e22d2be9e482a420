//! Translation fallback counters.
//!
//! Counts how often rendering had to leave the requested locale's table.
//! Exposed on the health endpoint.

use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global fallback metrics singleton.
pub struct FallbackMetrics {
    /// Lookups answered by the default locale's table
    default_fallbacks: AtomicUsize,

    /// Lookups for keys no table knows (rendered as the key itself)
    unknown_keys: AtomicUsize,
}

static METRICS: OnceLock<FallbackMetrics> = OnceLock::new();

impl FallbackMetrics {
    pub fn global() -> &'static FallbackMetrics {
        METRICS.get_or_init(|| FallbackMetrics {
            default_fallbacks: AtomicUsize::new(0),
            unknown_keys: AtomicUsize::new(0),
        })
    }

    pub fn record_default_fallback(&self) {
        self.default_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_unknown_key(&self) {
        self.unknown_keys.fetch_add(1, Ordering::Relaxed);
    }

    pub fn default_fallbacks(&self) -> usize {
        self.default_fallbacks.load(Ordering::Relaxed)
    }

    pub fn unknown_keys(&self) -> usize {
        self.unknown_keys.load(Ordering::Relaxed)
    }

    pub fn report(&self) -> MetricsReport {
        MetricsReport {
            default_fallbacks: self.default_fallbacks(),
            unknown_keys: self.unknown_keys(),
        }
    }
}

/// Snapshot of the fallback counters.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsReport {
    pub default_fallbacks: usize,
    pub unknown_keys: usize,
}
