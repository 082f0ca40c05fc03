//! Retrieval service orchestration.
//!
//! The only component external callers touch. Initialization runs once at
//! startup; after that the corpus and index are read-only and shared across
//! concurrent queries without locking.

use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};

use scoutx_core::{matched_fields, Corpus, Error, Founder, Result};
use scoutx_embed::{Embedder, TextGenerator};

use crate::config::EngineConfig;
use crate::explain::ExplanationGenerator;
use crate::index::EmbeddingIndex;
use crate::stats::{compute_stats, StatsSnapshot};

/// Lower bound for the per-query result count
const MIN_LIMIT: usize = 1;

/// One scored, explained search hit
#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub location: String,
    pub explanation: String,
    pub score: f32,
    pub matched_fields: Vec<String>,
    pub row_index: usize,
}

/// The retrieval-and-explanation engine.
///
/// Holds the loaded corpus and built index behind `Option`: if either
/// initialization step failed the service stays not-ready for the process
/// lifetime and every query gets a stable "not ready" answer instead of a
/// crash.
pub struct RetrievalService {
    corpus: Option<Arc<Corpus>>,
    index: Option<EmbeddingIndex>,
    explainer: ExplanationGenerator,
    config: EngineConfig,
}

impl RetrievalService {
    /// One-time startup sequence: load the dataset, then build the index.
    ///
    /// Failures are logged and leave the service permanently not-ready; the
    /// constructor itself never errors.
    pub async fn initialize(
        config: EngineConfig,
        embedder: Arc<dyn Embedder>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        let corpus = match Corpus::load(&config.dataset_paths) {
            Ok(corpus) => Some(corpus),
            Err(err) => {
                error!(error = %err, "failed to load founder dataset");
                None
            }
        };
        Self::from_corpus(corpus, config, embedder, generator).await
    }

    /// Initialize over an already-materialized corpus (embedded datasets,
    /// tests). An empty corpus is treated the same as a failed load.
    pub async fn from_corpus(
        corpus: Option<Corpus>,
        config: EngineConfig,
        embedder: Arc<dyn Embedder>,
        generator: Option<Arc<dyn TextGenerator>>,
    ) -> Self {
        let corpus = match corpus {
            Some(corpus) if corpus.is_empty() => {
                warn!("founder dataset is empty, service will stay unavailable");
                None
            }
            other => other.map(Arc::new),
        };

        let index = match &corpus {
            Some(corpus) => match EmbeddingIndex::build(corpus, embedder).await {
                Ok(index) => Some(index),
                Err(err) => {
                    error!(error = %err, "failed to build embedding index");
                    None
                }
            },
            None => None,
        };

        if corpus.is_some() && index.is_some() {
            info!("retrieval service ready");
        }

        Self {
            corpus,
            index,
            explainer: ExplanationGenerator::new(generator, config.explain_timeout),
            config,
        }
    }

    /// True only once corpus load and index build both succeeded
    pub fn is_ready(&self) -> bool {
        self.corpus.is_some() && self.index.is_some()
    }

    /// Whether explanations can use the generative path
    pub fn is_generative(&self) -> bool {
        self.explainer.is_generative()
    }

    /// Search the corpus and explain every hit.
    ///
    /// The limit is defensively clamped to `[1, max_limit]`; an empty query
    /// is rejected. A failed query embedding degrades to an empty result
    /// list rather than an error.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchResult>> {
        if query.trim().is_empty() {
            return Err(Error::EmptyQuery);
        }
        let (corpus, index) = match (&self.corpus, &self.index) {
            (Some(corpus), Some(index)) => (corpus, index),
            _ => return Err(Error::NotReady),
        };

        let limit = limit.clamp(MIN_LIMIT, self.config.max_limit);
        let hits = match index.search(query, limit).await {
            Ok(hits) => hits,
            Err(err) => {
                warn!(error = %err, "query embedding failed, returning no results");
                return Ok(Vec::new());
            }
        };

        let mut results = Vec::with_capacity(hits.len());
        for (row_index, score) in hits {
            let Some(founder) = corpus.get_row(row_index) else {
                continue;
            };
            let explanation = self.explainer.explain(query, founder, row_index).await;
            results.push(SearchResult {
                id: founder.id.clone(),
                name: founder.name.clone(),
                role: founder.role.clone(),
                company: founder.company.clone(),
                location: founder.location.clone(),
                explanation,
                score,
                matched_fields: matched_fields(query, founder)
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                row_index,
            });
        }
        Ok(results)
    }

    /// Full record by id, or `None` - never a partial record
    pub fn get_founder(&self, id: &str) -> Option<&Founder> {
        self.corpus.as_ref().and_then(|corpus| corpus.get(id))
    }

    /// Fresh statistics snapshot, or an explicit "not loaded" error when the
    /// dataset never loaded
    pub fn stats(&self) -> Result<StatsSnapshot> {
        match &self.corpus {
            Some(corpus) => Ok(compute_stats(corpus, self.config.stats_top_n)),
            None => Err(Error::DatasetNotLoaded),
        }
    }

    /// Number of loaded records, zero when not loaded
    pub fn corpus_size(&self) -> usize {
        self.corpus.as_ref().map(|c| c.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoutx_embed::HashEmbedder;

    fn founder(id: &str, keywords: &str, idea: &str) -> Founder {
        Founder {
            id: id.to_string(),
            name: format!("Founder {}", id),
            email: format!("{}@example.com", id),
            role: "Founder".to_string(),
            company: format!("Company {}", id),
            location: "Berlin, Germany".to_string(),
            idea: idea.to_string(),
            about: "Serial entrepreneur with expertise in team building.".to_string(),
            keywords: keywords.to_string(),
            stage: "seed".to_string(),
            linkedin: "https://linkedin.com/in/x".to_string(),
            notes: None,
        }
    }

    fn records() -> Vec<Founder> {
        vec![
            founder("a", "fintech, lending", "Peer-to-peer lending platform"),
            founder("b", "healthtech, AI", "AI diagnostics for hospitals"),
            founder("c", "gaming, VR", "Multiplayer VR worlds"),
        ]
    }

    async fn ready_service() -> RetrievalService {
        RetrievalService::from_corpus(
            Some(Corpus::from_records(records())),
            EngineConfig::default(),
            Arc::new(HashEmbedder::new()),
            None,
        )
        .await
    }

    #[tokio::test]
    async fn test_ready_after_successful_init() {
        let service = ready_service().await;
        assert!(service.is_ready());
        assert!(!service.is_generative());
        assert_eq!(service.corpus_size(), 3);
    }

    #[tokio::test]
    async fn test_search_returns_explained_results() {
        let service = ready_service().await;
        let results = service.search("fintech lending app", 2).await.unwrap();

        assert!(!results.is_empty());
        assert!(results.len() <= 2);
        let top = &results[0];
        assert_eq!(top.id, "a");
        assert!(top.matched_fields.contains(&"keywords".to_string()));
        assert!(top.explanation.contains("keywords: fintech"));
        assert!(top.explanation.starts_with("Matched on "));
        assert!(results.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[tokio::test]
    async fn test_search_rejects_empty_query() {
        let service = ready_service().await;
        assert!(matches!(
            service.search("   ", 5).await,
            Err(Error::EmptyQuery)
        ));
    }

    #[tokio::test]
    async fn test_limit_is_clamped() {
        let service = ready_service().await;

        let zero = service.search("fintech", 0).await.unwrap();
        assert_eq!(zero.len(), 1);

        let large = service.search("fintech", 10_000).await.unwrap();
        assert!(large.len() <= EngineConfig::default().max_limit);
    }

    #[tokio::test]
    async fn test_not_ready_without_corpus() {
        let service = RetrievalService::from_corpus(
            None,
            EngineConfig::default(),
            Arc::new(HashEmbedder::new()),
            None,
        )
        .await;

        assert!(!service.is_ready());
        assert!(matches!(
            service.search("fintech", 5).await,
            Err(Error::NotReady)
        ));
        assert!(matches!(service.stats(), Err(Error::DatasetNotLoaded)));
        assert!(service.get_founder("a").is_none());
    }

    #[tokio::test]
    async fn test_empty_corpus_is_not_ready() {
        let service = RetrievalService::from_corpus(
            Some(Corpus::from_records(Vec::new())),
            EngineConfig::default(),
            Arc::new(HashEmbedder::new()),
            None,
        )
        .await;

        assert!(!service.is_ready());
        assert!(matches!(service.stats(), Err(Error::DatasetNotLoaded)));
    }

    #[tokio::test]
    async fn test_get_founder_round_trip() {
        let service = ready_service().await;
        for id in ["a", "b", "c"] {
            assert_eq!(service.get_founder(id).unwrap().id, id);
        }
        assert!(service.get_founder("zz").is_none());
    }

    #[tokio::test]
    async fn test_stats_over_loaded_corpus() {
        let service = ready_service().await;
        let stats = service.stats().unwrap();
        assert_eq!(stats.total_founders, 3);
        assert_eq!(stats.roles.get("Founder"), Some(&3));
    }
}
