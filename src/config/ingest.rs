//! Document ingestion limits.

use std::time::Duration;

use serde::Serialize;

use crate::config::source::{EnvReader, EnvSource};
use crate::error::FieldProblem;

/// Chunking and upload limits for document processing.
///
/// - `CHUNK_SIZE` — tokens per chunk (default: 500)
/// - `CHUNK_OVERLAP` — tokens shared between adjacent chunks (default: 50)
/// - `MAX_FILE_SIZE` — upload cap in bytes (default: 10485760, 10 MiB)
/// - `SUPPORTED_FILE_TYPES` — comma-separated MIME types
///   (default: "application/pdf")
/// - `PROCESSING_TIMEOUT` — seconds before an ingest is abandoned
///   (default: 300)
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentSettings {
    pub chunk_size: usize,
    pub chunk_overlap: usize,
    pub max_file_size: u64,
    pub supported_file_types: Vec<String>,
    pub processing_timeout: u64,
}

impl DocumentSettings {
    pub(crate) fn read(env: &mut EnvReader) -> Self {
        Self {
            chunk_size: env.number("CHUNK_SIZE", 500),
            chunk_overlap: env.number("CHUNK_OVERLAP", 50),
            max_file_size: env.number("MAX_FILE_SIZE", 10 * 1024 * 1024),
            supported_file_types: env.list("SUPPORTED_FILE_TYPES", &["application/pdf"]),
            processing_timeout: env.number("PROCESSING_TIMEOUT", 300),
        }
    }

    pub(crate) fn validate(&self, problems: &mut Vec<FieldProblem>) {
        if self.chunk_size == 0 {
            problems.push(FieldProblem::new("CHUNK_SIZE", "must be at least 1"));
        } else if self.chunk_overlap >= self.chunk_size {
            problems.push(FieldProblem::new(
                "CHUNK_OVERLAP",
                format!(
                    "must be smaller than CHUNK_SIZE ({} >= {})",
                    self.chunk_overlap, self.chunk_size
                ),
            ));
        }
        if self.max_file_size == 0 {
            problems.push(FieldProblem::new("MAX_FILE_SIZE", "must be at least 1 byte"));
        }
        if self.processing_timeout == 0 {
            problems.push(FieldProblem::new(
                "PROCESSING_TIMEOUT",
                "must be at least 1 second",
            ));
        }
    }

    #[must_use]
    pub const fn processing_timeout(&self) -> Duration {
        Duration::from_secs(self.processing_timeout)
    }

    /// Whether a MIME type is accepted for upload.
    #[must_use]
    pub fn accepts(&self, mime_type: &str) -> bool {
        self.supported_file_types.iter().any(|t| t == mime_type)
    }
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self::read(&mut EnvReader::new(&EnvSource::empty()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let docs = DocumentSettings::default();
        assert_eq!(docs.chunk_size, 500);
        assert_eq!(docs.max_file_size, 10_485_760);
        assert!(docs.accepts("application/pdf"));
        assert!(!docs.accepts("text/html"));
    }

    #[test]
    fn overlap_must_stay_below_chunk_size() {
        let mut docs = DocumentSettings::default();
        docs.chunk_overlap = 500;

        let mut problems = Vec::new();
        docs.validate(&mut problems);
        assert_eq!(problems[0].field, "CHUNK_OVERLAP");
    }
}
