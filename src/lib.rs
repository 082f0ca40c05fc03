//! # scoutX
//!
//! A semantic founder discovery engine with explainable matches.
//!
//! scoutX matches free-text queries against a corpus of founder profiles
//! using dense-vector similarity rather than keyword matching, attributes
//! each hit to the record fields that plausibly caused it, and justifies the
//! match in one or two sentences - generated by an external model when one
//! is configured, deterministic otherwise.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use scoutx::prelude::*;
//!
//! # async fn run() {
//! // Offline: the deterministic hashing embedder needs no API key
//! let service = RetrievalService::initialize(
//!     EngineConfig::default(),
//!     Arc::new(HashEmbedder::new()),
//!     None,
//! )
//! .await;
//!
//! if service.is_ready() {
//!     let results = service.search("fintech founders in Berlin", 5).await.unwrap();
//!     for r in &results {
//!         println!("{:.3}  {}  {}", r.score, r.name, r.explanation);
//!     }
//! }
//! # }
//! ```
//!
//! ## Crate Structure
//!
//! - [`scoutx_core`](https://docs.rs/scoutx-core) - records, corpus store, vectors, field matching
//! - [`scoutx_embed`](https://docs.rs/scoutx-embed) - embedding and generative model clients
//! - [`scoutx_engine`](https://docs.rs/scoutx-engine) - index, explanations, statistics, service

// Re-export core types
pub use scoutx_core::{
    matched_fields, Corpus, Error, Founder, Result, Vector, DEFAULT_DATASET_PATHS,
};

// Re-export model clients
pub use scoutx_embed::{
    EmbedError, Embedder, GeminiClient, HashEmbedder, OpenAiEmbedder, TextGenerator,
};

// Re-export engine
pub use scoutx_engine::{
    compute_stats, fallback_explanation, EmbeddingIndex, EngineConfig, ExplanationGenerator,
    RetrievalService, SearchResult, StatsSnapshot,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        matched_fields, Corpus, EmbeddingIndex, Embedder, EngineConfig, Error, ExplanationGenerator,
        Founder, GeminiClient, HashEmbedder, OpenAiEmbedder, Result, RetrievalService, SearchResult,
        StatsSnapshot, TextGenerator, Vector,
    };
}
