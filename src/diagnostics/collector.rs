// SPDX-License-Identifier: MPL-2.0
//! Session event collector.
//!
//! Keeps the most recent events of the session in memory and mirrors
//! problems to stderr. Nothing is persisted or sent anywhere.

use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind};
use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct DiagnosticsCollector {
    events: CircularBuffer<DiagnosticEvent>,
    echo_to_stderr: bool,
    started_at: Instant,
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            events: CircularBuffer::new(capacity),
            echo_to_stderr: true,
            started_at: Instant::now(),
        }
    }

    /// Collector that never writes to stderr (tests, benchmarks).
    #[must_use]
    pub fn silent(capacity: BufferCapacity) -> Self {
        Self {
            echo_to_stderr: false,
            ..Self::new(capacity)
        }
    }

    pub fn record(&mut self, kind: DiagnosticEventKind) {
        if self.echo_to_stderr && kind.is_problem() {
            eprintln!("[WARN] {kind}");
        }
        self.events.push(DiagnosticEvent::new(kind));
    }

    /// Events in chronological order (oldest first), paired with their
    /// offset from the start of the session.
    pub fn timeline(&self) -> impl Iterator<Item = (Duration, &DiagnosticEventKind)> {
        self.events
            .iter()
            .map(|event| (event.at.saturating_duration_since(self.started_at), &event.kind))
    }

    /// Time since the collector was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }

    #[must_use]
    pub fn last(&self) -> Option<&DiagnosticEventKind> {
        self.events.last().map(|event| &event.kind)
    }

    #[must_use]
    pub fn problem_count(&self) -> usize {
        self.events.iter().filter(|event| event.kind.is_problem()).count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
