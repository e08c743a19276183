//! Extractor registry for managing content extractors.

use lectern_core::{ContentExtractor, Document, ExtractError};
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

/// Registry of content extractors.
pub struct ExtractorRegistry {
    /// Named extractors
    extractors: HashMap<String, Arc<dyn ContentExtractor>>,
    /// MIME type to extractor name mapping
    mime_mapping: HashMap<String, String>,
}

impl ExtractorRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extractors: HashMap::new(),
            mime_mapping: HashMap::new(),
        }
    }

    /// Registry preloaded with the standard extractors.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("text", crate::TextExtractor::new());
        registry
    }

    /// Register an extractor.
    pub fn register<E: ContentExtractor + 'static>(&mut self, name: &str, extractor: E) {
        let extractor = Arc::new(extractor);
        for mime in extractor.supported_types() {
            self.mime_mapping
                .insert((*mime).to_string(), name.to_string());
        }
        self.extractors.insert(name.to_string(), extractor);
    }

    /// Get an extractor for a MIME type.
    #[must_use]
    pub fn get_for_mime(&self, mime_type: &str) -> Option<Arc<dyn ContentExtractor>> {
        self.mime_mapping
            .get(mime_type)
            .and_then(|name| self.extractors.get(name))
            .cloned()
    }

    /// Get an extractor that can handle a file.
    #[must_use]
    pub fn get_for_file(&self, path: &Path, mime_type: &str) -> Option<Arc<dyn ContentExtractor>> {
        // First try by MIME type
        if let Some(extractor) = self.get_for_mime(mime_type) {
            return Some(extractor);
        }

        // Then try by extension
        for extractor in self.extractors.values() {
            if extractor.can_extract(path, mime_type) {
                return Some(extractor.clone());
            }
        }

        None
    }

    /// Extract a document from a file, guessing its MIME type from the path.
    pub async fn extract_path(&self, path: &Path) -> Result<Document, ExtractError> {
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream");
        self.extract(path, mime_type).await
    }

    /// Extract a document from a file.
    pub async fn extract(&self, path: &Path, mime_type: &str) -> Result<Document, ExtractError> {
        let extractor = self
            .get_for_file(path, mime_type)
            .ok_or_else(|| ExtractError::UnsupportedType(mime_type.to_string()))?;

        extractor.extract(path).await
    }
}

impl Default for ExtractorRegistry {
    fn default() -> Self {
        Self::new()
    }
}
