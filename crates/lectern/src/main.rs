//! # Lectern CLI
//!
//! Command-line interface for Lectern, a retrieval engine over course
//! documents (lecture notes, slides exported to text, transcripts).
//!
//! ## Commands
//!
//! - `lectern folders add <PATH>` - Register a course folder
//! - `lectern folders remove <PATH>` - Unregister a course folder
//! - `lectern folders list` - Show registered folders
//! - `lectern index` - Rebuild the index and report statistics
//! - `lectern query <QUERY>` - Rank the corpus against a query
//! - `lectern status` - Show corpus statistics
//! - `lectern config` - Manage configuration
//!
//! ## Examples
//!
//! ```bash
//! # Register lecture material
//! lectern folders add ~/courses/algorithms
//!
//! # Ask a question
//! lectern query "how does dijkstra handle negative weights"
//!
//! # Dense engine, JSON output
//! lectern query "halting problem" --engine dense --format json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use lectern_chunker::PageChunker;
use lectern_core::{ChunkConfig, ScoredChunk, Vectorizer};
use lectern_extract::ExtractorRegistry;
use lectern_index::{FolderList, IndexUpdate, IndexerService};
use lectern_store::{CharFrequencyEmbedder, MemoryVectorStore, CHAR_FREQ_DIMENSION};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;

use config::{data_dir, Config};

#[derive(Parser)]
#[command(name = "lectern")]
#[command(about = "A retrieval engine for course documents")]
#[command(version)]
struct Cli {
    /// Path to config file (default: ~/.config/lectern/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
enum Engine {
    /// Lexical TF-IDF ranking
    #[default]
    Tfidf,
    /// Dense character-frequency ranking
    Dense,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage the registered course folders
    Folders {
        #[command(subcommand)]
        action: FolderAction,
    },

    /// Rebuild the index from the registered folders
    Index,

    /// Query the corpus
    Query {
        /// Query string
        query: String,

        /// Maximum results (default from config)
        #[arg(short, long)]
        limit: Option<usize>,

        /// Retrieval engine
        #[arg(short, long, default_value = "tfidf")]
        engine: Engine,
    },

    /// Show corpus status
    Status,

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum FolderAction {
    /// Register a folder
    Add {
        /// Folder containing course documents
        path: PathBuf,
    },
    /// Unregister a folder
    Remove {
        /// Previously registered folder
        path: PathBuf,
    },
    /// List registered folders
    List,
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Print sample configuration file
    Init,
    /// Show config file path
    Path,
}

/// Output structure for query results.
#[derive(Serialize)]
struct QueryOutput {
    query: String,
    engine: String,
    results: Vec<ResultItem>,
}

#[derive(Serialize)]
struct ResultItem {
    citation: String,
    source: String,
    page: u32,
    score: f64,
    text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl ResultItem {
    fn from_scored(result: &ScoredChunk) -> Self {
        Self {
            citation: result.chunk.citation(),
            source: result.chunk.source_id.clone(),
            page: result.chunk.page,
            score: result.score,
            text: truncate(&result.chunk.text, 200),
            id: result.id.map(|id| id.to_string()),
        }
    }
}

/// Output structure for status.
#[derive(Serialize)]
struct StatusOutput {
    folders: Vec<String>,
    total_documents: u64,
    indexed_documents: u64,
    error_documents: u64,
    total_chunks: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    built_at: Option<String>,
}

/// Path of the persisted folder list.
fn folders_path() -> Result<PathBuf> {
    let data = data_dir().context("Failed to get data directory")?;
    Ok(data.join("folders.json"))
}

/// Create the standard component stack.
fn create_indexer(config: &Config) -> IndexerService {
    IndexerService::new(
        Arc::new(ExtractorRegistry::with_defaults()),
        Arc::new(PageChunker::new()),
        ChunkConfig {
            chunk_size: config.index.chunk_size,
        },
    )
}

/// Rebuild the index from the persisted folder list, logging progress.
async fn rebuild_index(
    indexer: &IndexerService,
    folders: &FolderList,
) -> Result<lectern_core::IndexStats> {
    let mut updates = indexer.subscribe();
    let progress = tokio::spawn(async move {
        while let Ok(update) = updates.recv().await {
            match update {
                IndexUpdate::DocumentIndexed { path, chunk_count } => {
                    info!("Indexed: {:?} ({} chunks)", path, chunk_count);
                }
                IndexUpdate::DocumentError { path, error } => {
                    warn!("Skipped: {:?}: {}", path, error);
                }
                IndexUpdate::RebuildStarted | IndexUpdate::RebuildCompleted { .. } => {}
            }
        }
    });

    let stats = indexer
        .rebuild(folders.folders())
        .await
        .context("Failed to rebuild index")?;

    progress.abort();
    Ok(stats)
}

/// Rank the snapshot with the dense character-frequency engine.
async fn dense_retrieve(indexer: &IndexerService, query: &str, limit: usize) -> Result<Vec<ScoredChunk>> {
    let snapshot = indexer.snapshot().await;
    let embedder = CharFrequencyEmbedder::new();

    let mut store = MemoryVectorStore::new(CHAR_FREQ_DIMENSION);
    for chunk in snapshot.retriever().chunks() {
        store
            .add(chunk.clone(), embedder.vectorize(&chunk.text))
            .context("Failed to store chunk embedding")?;
    }

    let results = store
        .search(&embedder.vectorize(query), limit)
        .context("Dense search failed")?;
    Ok(results)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load config from file or CLI-specified path
    let config = if let Some(ref path) = cli.config {
        Config::load_from(Some(path.clone()))
            .with_context(|| format!("Failed to load config from {}", path.display()))?
    } else {
        Config::load().context("Failed to load config")?
    };

    // Setup logging
    let filter = if cli.verbose {
        "debug".to_string()
    } else {
        config.logging.level.clone()
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .with_target(false)
        .init();

    match cli.command {
        Commands::Folders { action } => {
            let path = folders_path()?;
            let mut folders = FolderList::load(&path).context("Failed to load folder list")?;

            match action {
                FolderAction::Add { path: folder } => {
                    if !folder.is_dir() {
                        anyhow::bail!("Not a directory: {}", folder.display());
                    }
                    let folder = folder.canonicalize()?;
                    if folders.add(folder.clone()) {
                        folders.save(&path).context("Failed to save folder list")?;
                        println!("Added {}", folder.display());
                    } else {
                        println!("Already registered: {}", folder.display());
                    }
                }
                FolderAction::Remove { path: folder } => {
                    // Match against the canonical form when the path still
                    // exists, the literal form otherwise
                    let folder = folder.canonicalize().unwrap_or(folder);
                    if folders.remove(&folder) {
                        folders.save(&path).context("Failed to save folder list")?;
                        println!("Removed {}", folder.display());
                    } else {
                        println!("Not registered: {}", folder.display());
                    }
                }
                FolderAction::List => match cli.format {
                    OutputFormat::Json => {
                        let listed: Vec<String> = folders
                            .folders()
                            .iter()
                            .map(|f| f.to_string_lossy().to_string())
                            .collect();
                        println!("{}", serde_json::to_string_pretty(&listed)?);
                    }
                    OutputFormat::Text => {
                        if folders.is_empty() {
                            println!("No folders registered.");
                            println!("Run 'lectern folders add <PATH>' to register one.");
                        } else {
                            for folder in folders.folders() {
                                println!("{}", folder.display());
                            }
                        }
                    }
                },
            }
        }

        Commands::Index => {
            let folders = FolderList::load(&folders_path()?)?;
            if folders.is_empty() {
                anyhow::bail!("No folders registered. Run 'lectern folders add <PATH>' first.");
            }

            let indexer = create_indexer(&config);
            let stats = rebuild_index(&indexer, &folders).await?;

            match cli.format {
                OutputFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(&stats)?);
                }
                OutputFormat::Text => {
                    println!(
                        "Indexed {} of {} documents ({} errors), {} chunks",
                        stats.indexed_documents,
                        stats.total_documents,
                        stats.error_documents,
                        stats.total_chunks
                    );
                }
            }
        }

        Commands::Query {
            query,
            limit,
            engine,
        } => {
            let folders = FolderList::load(&folders_path()?)?;
            if folders.is_empty() {
                anyhow::bail!("No folders registered. Run 'lectern folders add <PATH>' first.");
            }

            let limit = limit.unwrap_or(config.query.default_limit);
            let indexer = create_indexer(&config);
            rebuild_index(&indexer, &folders).await?;

            let results = match engine {
                Engine::Tfidf => indexer.retrieve(&query, limit).await,
                Engine::Dense => dense_retrieve(&indexer, &query, limit).await?,
            };

            match cli.format {
                OutputFormat::Json => {
                    let output = QueryOutput {
                        query: query.clone(),
                        engine: format!("{engine:?}").to_lowercase(),
                        results: results.iter().map(ResultItem::from_scored).collect(),
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    println!("Query: {query}\n");
                    if results.is_empty() {
                        println!("No results found.");
                    } else {
                        for (i, result) in results.iter().enumerate() {
                            println!(
                                "{}. {} (score: {:.3})",
                                i + 1,
                                result.chunk.citation(),
                                result.score
                            );
                            println!("   {}", truncate(&result.chunk.text, 100));
                            println!();
                        }
                    }
                }
            }
        }

        Commands::Status => {
            let folders = FolderList::load(&folders_path()?)?;

            if folders.is_empty() {
                match cli.format {
                    OutputFormat::Json => {
                        println!(r#"{{"error": "No folders registered"}}"#);
                    }
                    OutputFormat::Text => {
                        println!("No folders registered.");
                        println!("Run 'lectern folders add <PATH>' to register one.");
                    }
                }
                return Ok(());
            }

            let indexer = create_indexer(&config);
            let stats = rebuild_index(&indexer, &folders).await?;

            match cli.format {
                OutputFormat::Json => {
                    let output = StatusOutput {
                        folders: folders
                            .folders()
                            .iter()
                            .map(|f| f.to_string_lossy().to_string())
                            .collect(),
                        total_documents: stats.total_documents,
                        indexed_documents: stats.indexed_documents,
                        error_documents: stats.error_documents,
                        total_chunks: stats.total_chunks,
                        built_at: stats.built_at.map(|t| t.to_rfc3339()),
                    };
                    println!("{}", serde_json::to_string_pretty(&output)?);
                }
                OutputFormat::Text => {
                    println!("Corpus status");
                    println!("  Folders:   {}", folders.folders().len());
                    println!("  Documents: {}", stats.indexed_documents);
                    println!("  Errors:    {}", stats.error_documents);
                    println!("  Chunks:    {}", stats.total_chunks);
                    if let Some(built) = stats.built_at {
                        println!("  Built:     {}", built.format("%Y-%m-%d %H:%M:%S"));
                    }
                }
            }
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => match cli.format {
                OutputFormat::Json => {
                    println!(
                        "{}",
                        serde_json::to_string_pretty(&config)
                            .context("Failed to serialize config")?
                    );
                }
                OutputFormat::Text => {
                    println!(
                        "{}",
                        toml::to_string_pretty(&config).context("Failed to serialize config")?
                    );
                }
            },
            ConfigAction::Init => {
                println!("{}", Config::sample_toml());
            }
            ConfigAction::Path => {
                if let Some(path) = Config::config_path() {
                    println!("{}", path.display());
                } else {
                    println!("Could not determine config directory");
                }
            }
        },
    }

    Ok(())
}

/// Truncate a string to max chars, adding ellipsis if needed.
fn truncate(s: &str, max_chars: usize) -> String {
    let s = s.replace(['\n', '\r'], " ");
    if s.chars().count() <= max_chars {
        s
    } else {
        let cut: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{cut}...")
    }
}
