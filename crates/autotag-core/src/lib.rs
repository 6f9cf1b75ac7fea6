//! autotag-core: shared types, errors, and status reporting.
//!
//! This crate is the foundational dependency for the parser and the
//! resolver, providing the media-domain records produced by a resolution,
//! a unified error type, and the status sink that progress messages flow
//! through.

pub mod error;
pub mod media;
pub mod status;

// Re-export the most commonly used items at the crate root.
pub use error::{Error, Result};
pub use media::*;
pub use status::{MessageType, StatusSink, TracingStatus};
