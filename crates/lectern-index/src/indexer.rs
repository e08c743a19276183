//! Main indexing service.

use chrono::Utc;
use lectern_core::{ChunkConfig, Chunker, DocChunk, Error, IndexStats, Result, ScoredChunk};
use lectern_extract::ExtractorRegistry;
use lectern_retriever::TfIdfRetriever;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info, warn};

/// Index update events, broadcast while a rebuild is running.
#[derive(Debug, Clone)]
pub enum IndexUpdate {
    RebuildStarted,
    DocumentIndexed { path: PathBuf, chunk_count: u32 },
    DocumentError { path: PathBuf, error: String },
    RebuildCompleted { stats: IndexStats },
}

/// One immutable built index: the retriever plus the statistics of the pass
/// that produced it.
pub struct IndexSnapshot {
    retriever: TfIdfRetriever,
    stats: IndexStats,
}

impl IndexSnapshot {
    fn empty() -> Self {
        Self {
            retriever: TfIdfRetriever::index(vec![]),
            stats: IndexStats::default(),
        }
    }

    /// The retriever over this snapshot's corpus.
    #[must_use]
    pub fn retriever(&self) -> &TfIdfRetriever {
        &self.retriever
    }

    /// Statistics of the pass that built this snapshot.
    #[must_use]
    pub fn stats(&self) -> &IndexStats {
        &self.stats
    }
}

/// Main indexing service.
///
/// Owns the current [`IndexSnapshot`] behind a lock. A rebuild extracts and
/// chunks every document under the registered folders, builds a fresh
/// retriever off the async runtime, and swaps it in whole; queries either
/// see the old corpus or the new one, never a half-built mix. There is no
/// incremental update path: any source change means rebuilding.
pub struct IndexerService {
    extractors: Arc<ExtractorRegistry>,
    chunker: Arc<dyn Chunker>,
    chunk_config: ChunkConfig,
    snapshot: RwLock<Arc<IndexSnapshot>>,
    update_tx: broadcast::Sender<IndexUpdate>,
}

impl IndexerService {
    /// Create a new indexer service with an empty index.
    pub fn new(
        extractors: Arc<ExtractorRegistry>,
        chunker: Arc<dyn Chunker>,
        chunk_config: ChunkConfig,
    ) -> Self {
        let (update_tx, _) = broadcast::channel(256);

        Self {
            extractors,
            chunker,
            chunk_config,
            snapshot: RwLock::new(Arc::new(IndexSnapshot::empty())),
            update_tx,
        }
    }

    /// Subscribe to index updates.
    pub fn subscribe(&self) -> broadcast::Receiver<IndexUpdate> {
        self.update_tx.subscribe()
    }

    /// The current snapshot.
    pub async fn snapshot(&self) -> Arc<IndexSnapshot> {
        Arc::clone(&*self.snapshot.read().await)
    }

    /// Statistics of the current snapshot.
    pub async fn stats(&self) -> IndexStats {
        self.snapshot.read().await.stats.clone()
    }

    /// Rank the current corpus against `query` and return the top `k`.
    pub async fn retrieve(&self, query: &str, k: usize) -> Vec<ScoredChunk> {
        let snapshot = self.snapshot().await;
        snapshot.retriever.retrieve(query, k)
    }

    /// Rebuild the index from every document under the given folders.
    ///
    /// Documents that fail extraction are skipped and counted, never fatal.
    /// The finished snapshot replaces the current one atomically.
    pub async fn rebuild(&self, folders: &[PathBuf]) -> Result<IndexStats> {
        info!(folders = folders.len(), "rebuilding index");
        let _ = self.update_tx.send(IndexUpdate::RebuildStarted);

        let files = {
            let folders = folders.to_vec();
            tokio::task::spawn_blocking(move || collect_files(&folders))
                .await
                .map_err(|e| Error::Other(format!("scan task failed: {e}")))?
        };

        let mut stats = IndexStats {
            total_documents: files.len() as u64,
            ..IndexStats::default()
        };
        let mut chunks: Vec<DocChunk> = Vec::new();

        for path in &files {
            match self.process_file(path).await {
                Ok(file_chunks) => {
                    let chunk_count = file_chunks.len() as u32;
                    debug!(?path, chunk_count, "indexed document");
                    chunks.extend(file_chunks);
                    stats.indexed_documents += 1;
                    let _ = self.update_tx.send(IndexUpdate::DocumentIndexed {
                        path: path.clone(),
                        chunk_count,
                    });
                }
                Err(e) => {
                    warn!(?path, error = %e, "skipping document");
                    stats.error_documents += 1;
                    let _ = self.update_tx.send(IndexUpdate::DocumentError {
                        path: path.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        stats.total_chunks = chunks.len() as u64;
        stats.built_at = Some(Utc::now());

        // Vector building is pure CPU; keep it off the async runtime
        let retriever = tokio::task::spawn_blocking(move || TfIdfRetriever::index(chunks))
            .await
            .map_err(|e| Error::Other(format!("index build task failed: {e}")))?;

        let snapshot = Arc::new(IndexSnapshot {
            retriever,
            stats: stats.clone(),
        });

        {
            let mut current = self.snapshot.write().await;
            *current = snapshot;
        }

        info!(
            indexed = stats.indexed_documents,
            errors = stats.error_documents,
            chunks = stats.total_chunks,
            "index rebuilt"
        );
        let _ = self.update_tx.send(IndexUpdate::RebuildCompleted {
            stats: stats.clone(),
        });

        Ok(stats)
    }

    /// Extract and chunk one file.
    async fn process_file(&self, path: &Path) -> Result<Vec<DocChunk>> {
        let document = self.extractors.extract_path(path).await?;
        let chunks = self.chunker.chunk(&document, &self.chunk_config)?;
        Ok(chunks)
    }
}

/// Collect every regular file under the given folders, depth first.
///
/// Entries are visited in sorted order and hidden files are skipped, so the
/// resulting corpus order is stable across rebuilds.
fn collect_files(folders: &[PathBuf]) -> Vec<PathBuf> {
    fn visit(dir: &Path, out: &mut Vec<PathBuf>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(?dir, error = %e, "cannot read directory");
                return;
            }
        };

        let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
        paths.sort();

        for path in paths {
            let hidden = path
                .file_name()
                .and_then(|name| name.to_str())
                .is_some_and(|name| name.starts_with('.'));
            if hidden {
                continue;
            }

            // symlink_metadata does not follow links, so symlinked
            // directories (and with them, link cycles) are never entered
            let file_type = match std::fs::symlink_metadata(&path) {
                Ok(meta) => meta.file_type(),
                Err(e) => {
                    warn!(?path, error = %e, "cannot stat entry");
                    continue;
                }
            };
            if file_type.is_symlink() {
                continue;
            }

            if file_type.is_dir() {
                visit(&path, out);
            } else if file_type.is_file() {
                out.push(path);
            }
        }
    }

    let mut files = Vec::new();
    for folder in folders {
        visit(folder, &mut files);
    }
    files
}
