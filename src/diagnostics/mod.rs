// SPDX-License-Identifier: MPL-2.0
//! Diagnostics module for in-memory session activity logging.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Generic ring buffer with configurable capacity
//! - [`DiagnosticEvent`]: Timestamped event of the current session
//! - [`DiagnosticsCollector`]: Records events and mirrors problems to stderr

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, DiagnosticEventKind};
