//! Per-file orchestration.
//!
//! A [`MediaProcessor`] turns a bare filename into a [`ResolvedMetadata`]
//! (parse, search, disambiguate). [`process_file`] drives one processor for
//! one path, reports failures to the status sink and hands the record to a
//! [`TagWriter`].

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use autotag_core::{Error, MediaKind, ResolvedMetadata, Result, StatusSink};
use autotag_parser::Parser;
use tracing::debug;

use crate::config::ResolutionConfig;
use crate::metadata::MetadataProvider;
use crate::resolver::MetadataResolver;
use crate::selector::InteractiveSelector;
use crate::writer::TagWriter;

/// Resolves filenames of one media kind.
#[async_trait]
pub trait MediaProcessor: Send + Sync {
    fn kind(&self) -> MediaKind;

    /// Parse `file_name` and resolve it to a single metadata record.
    async fn resolve(
        &self,
        file_name: &str,
        selector: &dyn InteractiveSelector,
        status: &dyn StatusSink,
    ) -> Result<ResolvedMetadata>;
}

/// Processor for movie files.
pub struct MovieProcessor {
    parser: Parser,
    resolver: MetadataResolver,
}

impl MovieProcessor {
    pub fn new(provider: Arc<dyn MetadataProvider>, config: ResolutionConfig) -> Self {
        Self {
            parser: Parser::new(),
            resolver: MetadataResolver::new(provider, MediaKind::Movie, config),
        }
    }

    /// Replace the filename parser (e.g. to pin the accepted year range).
    pub fn with_parser(mut self, parser: Parser) -> Self {
        self.parser = parser;
        self
    }
}

#[async_trait]
impl MediaProcessor for MovieProcessor {
    fn kind(&self) -> MediaKind {
        MediaKind::Movie
    }

    async fn resolve(
        &self,
        file_name: &str,
        selector: &dyn InteractiveSelector,
        status: &dyn StatusSink,
    ) -> Result<ResolvedMetadata> {
        let key = self.parser.parse(file_name)?;
        status.info(&format!("Parsed file as {}", key.title));
        self.resolver.resolve(key, selector, status).await
    }
}

/// Resolve and write metadata for the file at `path`.
///
/// Returns `true` only when the writer succeeded and the record is complete
/// (found, with artwork). Fatal errors are reported to `status` with their
/// severity and yield `false`.
pub async fn process_file(
    processor: &dyn MediaProcessor,
    path: &Path,
    selector: &dyn InteractiveSelector,
    status: &dyn StatusSink,
    writer: &dyn TagWriter,
) -> bool {
    let Some(file_name) = path.file_name().map(|name| name.to_string_lossy()) else {
        report(status, &Error::unparsable(path.display().to_string()));
        return false;
    };
    debug!(path = %path.display(), kind = %processor.kind(), "processing file");

    let metadata = match processor.resolve(&file_name, selector, status).await {
        Ok(metadata) => metadata,
        Err(e) => {
            report(status, &e);
            return false;
        }
    };

    let written = writer.write(path, &metadata, status);
    written && metadata.is_complete()
}

fn report(status: &dyn StatusSink, err: &Error) {
    status.report(&format!("Error: {err}"), err.severity());
}
