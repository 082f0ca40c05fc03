//! # scoutX Engine
//!
//! Retrieval engine for the scoutX founder discovery system.
//!
//! This crate wires the core data structures and the external model clients
//! into the query-time machinery:
//!
//! - [`EmbeddingIndex`] - exact top-K nearest-neighbor search over normalized
//!   record embeddings
//! - [`ExplanationGenerator`] - generative match explanations with a
//!   deterministic fallback
//! - [`compute_stats`] - corpus-wide distributions and text-mined diversity
//!   metrics
//! - [`RetrievalService`] - the single entry point external callers use
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use scoutx_engine::{EngineConfig, RetrievalService};
//! use scoutx_embed::HashEmbedder;
//!
//! # async fn run() {
//! let service = RetrievalService::initialize(
//!     EngineConfig::default(),
//!     Arc::new(HashEmbedder::new()),
//!     None,
//! )
//! .await;
//!
//! if service.is_ready() {
//!     let results = service.search("fintech founders in Berlin", 5).await.unwrap();
//!     for result in results {
//!         println!("{} ({:.3}): {}", result.name, result.score, result.explanation);
//!     }
//! }
//! # }
//! ```

pub mod config;
pub mod explain;
pub mod index;
pub mod service;
pub mod stats;

pub use config::EngineConfig;
pub use explain::{fallback_explanation, ExplanationGenerator};
pub use index::EmbeddingIndex;
pub use service::{RetrievalService, SearchResult};
pub use stats::{compute_stats, CountedValue, DiversityScore, StatsSnapshot, DEFAULT_TOP_N};
