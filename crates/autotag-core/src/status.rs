//! One-way status reporting.
//!
//! Progress and error messages produced while a file is resolved are pushed
//! into a [`StatusSink`]. Sinks are purely observational: they return
//! nothing and must not block the pipeline.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity attached to a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Information,
    Error,
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Information => write!(f, "info"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Receiver for human-readable progress messages.
pub trait StatusSink: Send + Sync {
    fn report(&self, message: &str, kind: MessageType);

    fn info(&self, message: &str) {
        self.report(message, MessageType::Information);
    }

    fn error(&self, message: &str) {
        self.report(message, MessageType::Error);
    }
}

/// Forwards status messages to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingStatus;

impl StatusSink for TracingStatus {
    fn report(&self, message: &str, kind: MessageType) {
        match kind {
            MessageType::Information => tracing::info!("{message}"),
            MessageType::Error => tracing::error!("{message}"),
        }
    }
}
