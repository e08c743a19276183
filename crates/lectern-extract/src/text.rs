//! Text content extractor.

use async_trait::async_trait;
use lectern_core::{ContentExtractor, Document, ExtractError};
use std::path::Path;
use tokio::fs;

/// Extractor for plain text course documents.
///
/// Covers lecture notes, transcripts, and slide decks exported to text
/// (where exporters conventionally mark page breaks with form feeds).
pub struct TextExtractor;

impl TextExtractor {
    /// Create a new text extractor.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentExtractor for TextExtractor {
    fn supported_types(&self) -> &[&str] {
        &[
            "text/plain",
            "text/markdown",
            "text/x-markdown",
            "text/csv",
            "text/x-tex",
            "application/x-tex",
            "text/html",
            "application/json",
            "text/xml",
            "application/xml",
        ]
    }

    fn can_extract_by_extension(&self, path: &Path) -> bool {
        let extensions = [
            "txt", "md", "markdown", "tex", "csv", "tsv", "html", "htm", "json", "xml", "rst",
            "org", "srt", "vtt",
        ];

        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| extensions.contains(&ext.to_lowercase().as_str()))
    }

    async fn extract(&self, path: &Path) -> Result<Document, ExtractError> {
        let bytes = fs::read(path).await?;
        let text = String::from_utf8(bytes)
            .map_err(|_| ExtractError::NotUtf8(path.display().to_string()))?;

        let id = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("unnamed")
            .to_string();

        Ok(Document::new(id, text))
    }
}
