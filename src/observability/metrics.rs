//! Session metrics.
//!
//! Counters for one interactive session, logged as a summary when the
//! session ends.

use std::time::Instant;

/// Counters for commands evaluated during a session.
#[derive(Debug, Clone, Default)]
pub struct MetricsTracker {
    commands_total: u64,
    command_errors_total: u64,
    confirmations_total: u64,
    command_time_us_total: u128,
}

impl MetricsTracker {
    /// Create a new metrics tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Track a finished command.
    pub fn track_command(&mut self, duration_us: u128, error_kind: Option<&str>) {
        self.commands_total += 1;
        self.command_time_us_total += duration_us;

        match error_kind {
            Some(kind) => {
                self.command_errors_total += 1;
                tracing::debug!(duration_us = duration_us, kind = %kind, "Command failed");
            }
            None => {
                tracing::debug!(duration_us = duration_us, "Command completed");
            }
        }
    }

    /// Track an answered delete confirmation.
    pub fn track_confirmation(&mut self) {
        self.confirmations_total += 1;
    }

    /// Get the total number of commands.
    pub fn commands_total(&self) -> u64 {
        self.commands_total
    }

    /// Get the number of commands that produced an error.
    pub fn command_errors_total(&self) -> u64 {
        self.command_errors_total
    }

    /// Get the number of confirmation prompts answered.
    pub fn confirmations_total(&self) -> u64 {
        self.confirmations_total
    }

    /// Total time spent evaluating commands, in microseconds.
    pub fn command_time_us_total(&self) -> u128 {
        self.command_time_us_total
    }

    /// Get the command error rate (0.0 to 1.0).
    pub fn error_rate(&self) -> f64 {
        if self.commands_total == 0 {
            0.0
        } else {
            self.command_errors_total as f64 / self.commands_total as f64
        }
    }

    /// Summary of all counters.
    pub fn summary(&self) -> String {
        format!(
            "Session Summary:\n\
             Commands: {}\n\
             Errors: {} ({:.2}% error rate)\n\
             Confirmations: {}",
            self.commands_total,
            self.command_errors_total,
            self.error_rate() * 100.0,
            self.confirmations_total,
        )
    }
}

/// A timer for tracking command duration.
pub struct Timer {
    start: Instant,
}

impl Timer {
    /// Start a new timer.
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Elapsed time in microseconds.
    pub fn elapsed_us(&self) -> u128 {
        self.start.elapsed().as_micros()
    }
}
