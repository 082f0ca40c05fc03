//! Dense embedding index with exact top-K search.
//!
//! One unit-length vector per corpus row, in corpus order. Search is an
//! exact full scan by maximum inner product; on normalized vectors that is
//! cosine similarity. No approximation, no filtering.

use std::cmp::Ordering;
use std::sync::Arc;
use tracing::info;

use scoutx_core::{Corpus, Error, Result, Vector};
use scoutx_embed::Embedder;

/// The searchable vector space over a corpus.
///
/// An `EmbeddingIndex` only exists if [`EmbeddingIndex::build`] fully
/// succeeded; there is no partially-built state. It owns the embedder so
/// queries are guaranteed to go through the same model the corpus did.
pub struct EmbeddingIndex {
    embedder: Arc<dyn Embedder>,
    vectors: Vec<Vector>,
    dimension: usize,
}

impl EmbeddingIndex {
    /// Embed every record's canonical document text and build the index.
    ///
    /// Fails on an empty corpus or any embedding error; never partially
    /// indexes.
    pub async fn build(corpus: &Corpus, embedder: Arc<dyn Embedder>) -> Result<Self> {
        if corpus.is_empty() {
            return Err(Error::EmptyCorpus);
        }

        let documents: Vec<String> = corpus.iter().map(|(_, f)| f.document()).collect();
        let texts: Vec<&str> = documents.iter().map(String::as_str).collect();

        let raw = embedder
            .embed_batch(&texts)
            .await
            .map_err(|e| Error::Embedding(e.to_string()))?;

        if raw.len() != corpus.len() {
            return Err(Error::Embedding(format!(
                "expected {} vectors, got {}",
                corpus.len(),
                raw.len()
            )));
        }

        let mut vectors = Vec::with_capacity(raw.len());
        for data in raw {
            let mut vector = Vector::new(data);
            vector.normalize();
            vectors.push(vector);
        }

        let dimension = vectors[0].dim();
        if vectors.iter().any(|v| v.dim() != dimension) {
            return Err(Error::Embedding(
                "inconsistent embedding dimensions across records".to_string(),
            ));
        }

        info!(
            vectors = vectors.len(),
            dimension,
            model = embedder.model_name(),
            "embedding index built"
        );
        Ok(Self {
            embedder,
            vectors,
            dimension,
        })
    }

    /// Exact top-K search by inner product.
    ///
    /// Returns at most `min(k, corpus size)` results ordered by descending
    /// score; exact ties break by ascending row index so repeated queries are
    /// deterministic. `k == 0` yields an empty result rather than a panic.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<(usize, f32)>> {
        if k == 0 {
            return Ok(Vec::new());
        }

        let raw = self
            .embedder
            .embed(query)
            .await
            .map_err(|e| Error::Embedding(e.to_string()))?;
        let query_vector = Vector::new(raw).normalized();

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(row, vector)| (row, vector.dot(&query_vector)))
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });
        scored.truncate(k);
        Ok(scored)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// The stored vectors, in corpus row order
    pub fn vectors(&self) -> &[Vector] {
        &self.vectors
    }
}
