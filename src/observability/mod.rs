//! Observability module for session metrics.

pub mod metrics;

pub use metrics::{MetricsTracker, Timer};
