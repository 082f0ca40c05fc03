//! # scoutX Embed
//!
//! External model clients for the scoutX founder discovery engine.
//!
//! The engine treats both models as opaque capabilities behind traits:
//!
//! - [`Embedder`] - text to dense vector; [`OpenAiEmbedder`] over HTTP or the
//!   deterministic offline [`HashEmbedder`]
//! - [`TextGenerator`] - prompt to short completion; [`GeminiClient`] over HTTP
//!
//! Both HTTP clients carry their own request timeout and surface failures as
//! [`EmbedError`]; callers decide how to degrade.

pub mod embedder;
pub mod error;
pub mod generative;

pub use embedder::{
    Embedder, HashEmbedder, OpenAiEmbedder, DEFAULT_OPENAI_DIMENSION, DEFAULT_OPENAI_MODEL,
    HASH_DIMENSION,
};
pub use error::{EmbedError, Result};
pub use generative::{GeminiClient, TextGenerator, DEFAULT_GEMINI_MODEL};
