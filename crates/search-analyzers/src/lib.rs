//! Relevance and link analysis for the toy search engine.
//!
//! Given a crawled corpus of [`Webpage`]s, precomputes TF-IDF document
//! vectors for cosine-similarity relevance and PageRank scores over the
//! in-corpus link graph, then blends both into a ranked result list. All
//! derived state lives in the hand-built containers of `search-containers`.

pub mod config;
pub mod error;
pub mod pagerank;
pub mod search;
pub mod tfidf;
pub mod webpage;

pub use config::{PageRankParameters, RankingParameters, SearchConfig};
pub use error::{AnalyzerError, Result};
pub use pagerank::PageRankAnalyzer;
pub use search::{SearchHit, SearchIndex};
pub use tfidf::TfIdfAnalyzer;
pub use webpage::Webpage;
