//! Autotag - resolve media filenames into authoritative metadata
//!
//! This library crate exposes the core functionality for integration testing.

pub mod config;
pub mod metadata;
pub mod processor;
pub mod resolver;
pub mod selector;
pub mod writer;

pub use autotag_core::{
    CoverArt, Error, MediaKind, MessageType, ResolvedMetadata, Result, StatusSink, TracingStatus,
};
pub use autotag_parser::{ParsedKey, Parser};
pub use processor::{process_file, MediaProcessor, MovieProcessor};
pub use resolver::MetadataResolver;
pub use selector::{CandidateOption, ConsoleSelector, InteractiveSelector};
pub use writer::{ReportFormat, ReportWriter, TagWriter};
