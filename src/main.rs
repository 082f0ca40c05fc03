use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use scoutx_embed::{Embedder, GeminiClient, HashEmbedder, OpenAiEmbedder, TextGenerator};
use scoutx_engine::{EngineConfig, RetrievalService};

/// Semantic founder discovery with explainable matches
#[derive(Parser, Debug)]
#[command(name = "scoutx")]
#[command(about = "Search founder profiles by meaning, not keywords", long_about = None)]
struct Args {
    /// Path to the founders dataset (overrides the default candidates)
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Use the deterministic offline embedder and skip all external models
    #[arg(long)]
    offline: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the corpus and explain every hit
    Search {
        /// Free-text query
        query: String,

        /// Maximum number of results (clamped to 1..=20)
        #[arg(short, long, default_value_t = 5)]
        limit: usize,
    },
    /// Show one founder record by id
    Founder {
        /// Record id
        id: String,
    },
    /// Corpus-wide statistics and diversity metrics
    Stats {
        /// How many entries per frequency table
        #[arg(long, default_value_t = 15)]
        top: usize,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting scoutX v{}", env!("CARGO_PKG_VERSION"));

    let mut config = EngineConfig::default();
    if let Some(dataset) = args.dataset {
        config = config.with_dataset(dataset);
    }
    if let Command::Stats { top } = &args.command {
        config.stats_top_n = *top;
    }

    let embedder = build_embedder(args.offline);
    let generator = build_generator(args.offline);

    let service = RetrievalService::initialize(config, embedder, generator).await;
    if !service.is_ready() {
        // Stats still works when only the index failed; everything else does not
        warn!("service is not ready, queries will be rejected");
    }

    match args.command {
        Command::Search { query, limit } => {
            let results = service.search(&query, limit).await?;
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        Command::Founder { id } => match service.get_founder(&id) {
            Some(founder) => println!("{}", serde_json::to_string_pretty(founder)?),
            None => anyhow::bail!("founder not found: {}", id),
        },
        Command::Stats { .. } => {
            let stats = service.stats()?;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}

/// Pick the embedding provider: the OpenAI client when a key is configured,
/// the deterministic offline embedder otherwise.
fn build_embedder(offline: bool) -> Arc<dyn Embedder> {
    if !offline {
        match OpenAiEmbedder::from_env() {
            Ok(embedder) => {
                info!(model = embedder.model_name(), "using OpenAI embeddings");
                return Arc::new(embedder);
            }
            Err(err) => warn!(error = %err, "falling back to the offline hash embedder"),
        }
    }
    info!("using the deterministic offline embedder");
    Arc::new(HashEmbedder::new())
}

/// Generative explanations are optional; without a key every explanation
/// comes from the deterministic fallback.
fn build_generator(offline: bool) -> Option<Arc<dyn TextGenerator>> {
    if offline {
        return None;
    }
    match GeminiClient::from_env() {
        Ok(client) => {
            info!(model = client.model_name(), "generative explanations enabled");
            Some(Arc::new(client))
        }
        Err(err) => {
            warn!(error = %err, "generative explanations disabled, using deterministic fallback");
            None
        }
    }
}
