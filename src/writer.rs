//! Tag-writer contract.
//!
//! Applying metadata to a media file is outside this crate; a [`TagWriter`]
//! receives the final record and reports whether it succeeded.

use std::io::Write;
use std::path::Path;

use autotag_core::{ResolvedMetadata, StatusSink};

/// Consumes a resolved record for the file at `path`.
pub trait TagWriter: Send + Sync {
    fn write(&self, path: &Path, metadata: &ResolvedMetadata, status: &dyn StatusSink) -> bool;
}

/// Output format of [`ReportWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Writer that prints the record to stdout instead of tagging the file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportWriter {
    format: ReportFormat,
}

impl ReportWriter {
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    fn render(&self, path: &Path, metadata: &ResolvedMetadata) -> serde_json::Result<String> {
        match self.format {
            ReportFormat::Json => serde_json::to_string(&serde_json::json!({
                "file": path.display().to_string(),
                "metadata": metadata,
            })),
            ReportFormat::Text => {
                let mut text = format!("{}\n  {}", path.display(), metadata);
                text.push_str(&format!("\n  released: {}", metadata.release_date));
                match &metadata.cover {
                    Some(cover) => text.push_str(&format!("\n  cover: {}", cover.url)),
                    None => text.push_str("\n  cover: none"),
                }
                if !metadata.overview.is_empty() {
                    text.push_str(&format!("\n  {}", metadata.overview));
                }
                Ok(text)
            }
        }
    }
}

impl TagWriter for ReportWriter {
    fn write(&self, path: &Path, metadata: &ResolvedMetadata, status: &dyn StatusSink) -> bool {
        let rendered = match self.render(path, metadata) {
            Ok(rendered) => rendered,
            Err(e) => {
                status.error(&format!("Error: failed to render metadata: {e}"));
                return false;
            }
        };

        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{rendered}") {
            status.error(&format!("Error: failed to write metadata: {e}"));
            return false;
        }
        true
    }
}
