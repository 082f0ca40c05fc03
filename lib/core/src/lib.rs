//! # scoutX Core
//!
//! Core library for the scoutX founder discovery engine.
//!
//! This crate provides the fundamental data structures and pure logic:
//!
//! - [`Vector`] - Dense vector representation with normalization and inner product
//! - [`Founder`] - One founder profile record
//! - [`Corpus`] - The immutable, loaded record set with id and row lookup
//! - [`matched_fields`] - Match-field attribution for (query, record) pairs
//!
//! ## Example
//!
//! ```rust
//! use scoutx_core::{Corpus, Founder, matched_fields};
//!
//! let corpus = Corpus::from_records(vec![Founder {
//!     id: "f-1".to_string(),
//!     name: "Ada Chen".to_string(),
//!     email: "ada@finlend.io".to_string(),
//!     role: "Founder".to_string(),
//!     company: "FinLend".to_string(),
//!     location: "Berlin, Germany".to_string(),
//!     idea: "Peer-to-peer lending".to_string(),
//!     about: "Former Google engineer.".to_string(),
//!     keywords: "fintech, AI".to_string(),
//!     stage: "seed".to_string(),
//!     linkedin: "https://linkedin.com/in/ada".to_string(),
//!     notes: None,
//! }]);
//!
//! let founder = corpus.get("f-1").unwrap();
//! let fields = matched_fields("fintech lending app", founder);
//! assert!(fields.contains(&"keywords"));
//! ```

pub mod corpus;
pub mod error;
pub mod matcher;
pub mod record;
pub mod vector;

pub use corpus::{Corpus, DEFAULT_DATASET_PATHS};
pub use error::{Error, Result};
pub use matcher::{matched_fields, DEFAULT_FIELDS};
pub use record::Founder;
pub use vector::Vector;
