//! Page-aware fixed-window chunking strategy.

use lectern_core::{ChunkConfig, ChunkError, Chunker, DocChunk, Document};

/// Splits documents into pages on form feeds, then into fixed-size
/// character windows.
///
/// Page numbers are positional: the Nth form-feed-delimited segment is page
/// N (1-indexed), and segments that turn out to be empty still consume a
/// page number so citations line up with the source layout.
pub struct PageChunker;

impl PageChunker {
    /// Create a new page chunker.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for PageChunker {
    fn default() -> Self {
        Self::new()
    }
}

impl Chunker for PageChunker {
    fn name(&self) -> &str {
        "page_window"
    }

    fn chunk(
        &self,
        document: &Document,
        config: &ChunkConfig,
    ) -> Result<Vec<DocChunk>, ChunkError> {
        if config.chunk_size == 0 {
            return Err(ChunkError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }

        let mut chunks = Vec::new();

        for (idx, page_text) in document.text.split('\x0c').enumerate() {
            let page = (idx + 1) as u32;
            let trimmed = page_text.trim();
            if trimmed.is_empty() {
                continue;
            }

            // Windows are measured in characters, not bytes, so multi-byte
            // text never splits mid-codepoint.
            let chars: Vec<char> = trimmed.chars().collect();
            for window in chars.chunks(config.chunk_size) {
                // A window can land entirely inside a run of whitespace;
                // such windows are dropped after trimming.
                let text: String = window.iter().collect();
                let text = text.trim();
                if text.is_empty() {
                    continue;
                }
                chunks.push(DocChunk::new(document.id.clone(), page, text));
            }
        }

        Ok(chunks)
    }
}
