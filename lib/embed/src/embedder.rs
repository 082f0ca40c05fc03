//! Text embedding providers.
//!
//! The embedding model is an opaque external capability behind the
//! [`Embedder`] trait. Production uses an OpenAI-compatible HTTP endpoint;
//! tests, benchmarks, and offline runs use the deterministic hashing
//! implementation.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{EmbedError, Result};

/// Default OpenAI embedding model and its dimensionality.
pub const DEFAULT_OPENAI_MODEL: &str = "text-embedding-3-small";
pub const DEFAULT_OPENAI_DIMENSION: usize = 1536;

/// Dimensionality of the offline hashing embedder.
pub const HASH_DIMENSION: usize = 384;

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Trait for text embedding services
#[async_trait]
pub trait Embedder: Send + Sync {
    /// Generate an embedding for one text
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;

    /// Batch embed multiple texts, preserving input order
    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>>;

    /// Model identifier
    fn model_name(&self) -> &str;

    /// Embedding dimension
    fn dimension(&self) -> usize;
}

/// OpenAI embeddings client
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
    model: String,
    dimension: usize,
}

impl OpenAiEmbedder {
    /// Create an embedder with the default model
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_model(
            api_key,
            DEFAULT_OPENAI_MODEL.to_string(),
            DEFAULT_OPENAI_DIMENSION,
        )
    }

    /// Create an embedder with a specific model
    pub fn with_model(api_key: String, model: String, dimension: usize) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;
        Ok(Self {
            client,
            api_key,
            base_url: OPENAI_BASE_URL.to_string(),
            model,
            dimension,
        })
    }

    /// Create from the `OPENAI_API_KEY` environment variable
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| EmbedError::MissingApiKey("OPENAI_API_KEY"))?;
        Self::new(api_key)
    }

    /// Override the API base URL (self-hosted OpenAI-compatible endpoints)
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    async fn request(&self, input: serde_json::Value) -> Result<EmbeddingResponse> {
        let response = self
            .client
            .post(format!("{}/embeddings", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&serde_json::json!({
                "model": self.model,
                "input": input
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmbedError::Api(format!("{}: {}", status, body)));
        }
        Ok(response.json::<EmbeddingResponse>().await?)
    }
}

#[async_trait]
impl Embedder for OpenAiEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        let response = self.request(serde_json::json!(text)).await?;
        response
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or(EmbedError::EmptyResponse)
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        debug!(count = texts.len(), model = %self.model, "requesting batch embeddings");
        let response = self.request(serde_json::json!(texts)).await?;

        // Sort by index to maintain input order
        let mut data = response.data;
        data.sort_by_key(|d| d.index);
        Ok(data.into_iter().map(|d| d.embedding).collect())
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
    #[serde(default)]
    index: usize,
}

/// Deterministic hash-based embedder for offline operation and tests.
///
/// Hashes character trigrams and words to fixed vector positions. Texts that
/// share vocabulary land close in the vector space, which is enough for
/// search to rank overlapping profiles above unrelated ones. Not a semantic
/// model.
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    pub fn new() -> Self {
        Self {
            dimension: HASH_DIMENSION,
        }
    }

    pub fn with_dimension(dimension: usize) -> Self {
        Self { dimension }
    }

    fn hash_to_vector(&self, text: &str) -> Vec<f32> {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        let mut vector = vec![0.0f32; self.dimension];
        let normalized = text.to_lowercase();

        for trigram in trigrams(&normalized) {
            let mut hasher = DefaultHasher::new();
            trigram.hash(&mut hasher);
            let pos = (hasher.finish() as usize) % self.dimension;
            vector[pos] += 1.0;
        }

        // Words carry more signal than character trigrams
        for word in normalized.split_whitespace() {
            let mut hasher = DefaultHasher::new();
            word.hash(&mut hasher);
            let pos = (hasher.finish() as usize) % self.dimension;
            vector[pos] += 2.0;
        }

        vector
    }
}

impl Default for HashEmbedder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Embedder for HashEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        Ok(self.hash_to_vector(text))
    }

    async fn embed_batch(&self, texts: &[&str]) -> Result<Vec<Vec<f32>>> {
        Ok(texts.iter().map(|t| self.hash_to_vector(t)).collect())
    }

    fn model_name(&self) -> &str {
        "hash-trigram"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

fn trigrams(text: &str) -> Vec<String> {
    let padded = format!("  {}  ", text);
    let chars: Vec<char> = padded.chars().collect();

    if chars.len() < 3 {
        return Vec::new();
    }

    chars
        .windows(3)
        .map(|w| w.iter().collect::<String>())
        .collect()
}
