use std::cmp::Ordering;

use search_containers::sorting::top_k_sort;
use search_containers::{ChainedHashSet, DoubleLinkedList};

use crate::config::SearchConfig;
use crate::error::{AnalyzerError, Result};
use crate::pagerank::PageRankAnalyzer;
use crate::tfidf::TfIdfAnalyzer;
use crate::webpage::Webpage;

/// A page matched by a query, with the scores that placed it.
#[derive(Clone, Debug)]
pub struct SearchHit {
    pub uri: String,
    pub relevance: f64,
    pub page_rank: f64,
    pub score: f64,
}

impl PartialEq for SearchHit {
    fn eq(&self, other: &Self) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}

/// Orders by combined score; equal scores fall back to reverse URI order so
/// that, once results are listed best-first, ties read alphabetically.
impl PartialOrd for SearchHit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match self.score.partial_cmp(&other.score)? {
            Ordering::Equal => Some(other.uri.cmp(&self.uri)),
            ordering => Some(ordering),
        }
    }
}

/// Both analyzers over one corpus, blended into a single ranking.
#[derive(Debug)]
pub struct SearchIndex {
    uris: DoubleLinkedList<String>,
    relevance: TfIdfAnalyzer,
    page_rank: PageRankAnalyzer,
    relevance_weight: f64,
}

impl SearchIndex {
    pub fn new(pages: &ChainedHashSet<Webpage>, config: &SearchConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            uris: pages.iter().map(|page| page.uri().to_string()).collect(),
            relevance: TfIdfAnalyzer::new(pages),
            page_rank: PageRankAnalyzer::new(pages, &config.page_rank)?,
            relevance_weight: config.ranking.relevance_weight,
        })
    }

    pub fn relevance(&self) -> &TfIdfAnalyzer {
        &self.relevance
    }

    pub fn page_rank(&self) -> &PageRankAnalyzer {
        &self.page_rank
    }

    /// `w * relevance + (1 - w) * page_rank` with `w` the relevance weight.
    pub fn combined_score(&self, relevance: f64, page_rank: f64) -> f64 {
        self.relevance_weight * relevance + (1.0 - self.relevance_weight) * page_rank
    }

    /// Returns up to `limit` pages with non-zero relevance, best first.
    pub fn search<S: AsRef<str>>(
        &self,
        query: &[S],
        limit: usize,
    ) -> Result<DoubleLinkedList<SearchHit>> {
        let mut hits = DoubleLinkedList::new();
        for uri in &self.uris {
            let relevance = self.relevance.compute_relevance(query, uri)?;
            if relevance <= 0.0 {
                continue;
            }
            let page_rank = self.page_rank.compute_page_rank(uri)?;
            hits.add(SearchHit {
                uri: uri.clone(),
                relevance,
                page_rank,
                score: self.combined_score(relevance, page_rank),
            });
        }

        let k = isize::try_from(limit).map_err(|_| {
            AnalyzerError::InvalidParameter(format!("result limit too large: {limit}"))
        })?;
        let ascending = top_k_sort(k, hits)?;
        tracing::debug!(terms = query.len(), hits = ascending.len(), "search finished");
        Ok(ascending.into_iter().rev().collect())
    }
}
