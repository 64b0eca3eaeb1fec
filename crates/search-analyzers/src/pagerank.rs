use search_containers::{ChainedHashDictionary, ChainedHashSet, Dictionary};

use crate::config::PageRankParameters;
use crate::error::{AnalyzerError, Result};
use crate::webpage::Webpage;

/// Directed link graph restricted to the corpus, in adjacency-set form.
type LinkGraph = ChainedHashDictionary<String, ChainedHashSet<String>>;
type Ranks = ChainedHashDictionary<String, f64>;

/// PageRank scores for every page of a corpus.
///
/// Each iteration computes
/// `rank'(v) = (1 - d) / N + d * sum(rank(u) / out_degree(u))` over pages
/// `u` linking to `v`. A page without outbound links spreads its rank evenly
/// over every page, itself included. Iteration stops once no rank moves by
/// more than epsilon, or after `limit` iterations.
#[derive(Debug)]
pub struct PageRankAnalyzer {
    page_ranks: Ranks,
    iterations: u32,
    converged: bool,
}

impl PageRankAnalyzer {
    pub fn new(pages: &ChainedHashSet<Webpage>, params: &PageRankParameters) -> Result<Self> {
        params.validate()?;
        let graph = make_graph(pages);
        let analyzer = Self::iterate(&graph, params)?;
        tracing::info!(
            pages = graph.len(),
            iterations = analyzer.iterations,
            converged = analyzer.converged,
            "computed page ranks"
        );
        Ok(analyzer)
    }

    /// Builds from positional parameters: decay, convergence threshold and
    /// iteration cap.
    pub fn with_parameters(
        pages: &ChainedHashSet<Webpage>,
        decay: f64,
        epsilon: f64,
        limit: u32,
    ) -> Result<Self> {
        let params = PageRankParameters {
            decay,
            epsilon,
            limit,
        };
        Self::new(pages, &params)
    }

    pub fn compute_page_rank(&self, page_uri: &str) -> Result<f64> {
        self.page_ranks
            .get(page_uri)
            .copied()
            .map_err(|_| AnalyzerError::UnknownPage(page_uri.to_string()))
    }

    /// Number of iterations that actually ran.
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Whether iteration stopped because ranks settled rather than at the limit.
    pub fn converged(&self) -> bool {
        self.converged
    }

    pub fn page_ranks(&self) -> &ChainedHashDictionary<String, f64> {
        &self.page_ranks
    }

    fn iterate(graph: &LinkGraph, params: &PageRankParameters) -> Result<Self> {
        let count = graph.len() as f64;
        let decay = params.decay;
        let teleport = (1.0 - decay) / count;

        let mut ranks: Ranks = graph.keys().map(|uri| (uri.clone(), 1.0 / count)).collect();
        if graph.is_empty() {
            return Ok(Self {
                page_ranks: ranks,
                iterations: 0,
                converged: true,
            });
        }

        for iteration in 1..=params.limit {
            let mut next: Ranks = graph.keys().map(|uri| (uri.clone(), teleport)).collect();
            let mut dead_end_share = 0.0;

            for (uri, links) in graph {
                let rank = *ranks.get(uri.as_str())?;
                if links.is_empty() {
                    dead_end_share += decay * rank / count;
                    continue;
                }
                let share = decay * rank / links.len() as f64;
                for link in links {
                    *next.get_mut(link.as_str())? += share;
                }
            }

            let mut max_delta: f64 = 0.0;
            for (uri, old) in &ranks {
                let new = next.get_mut(uri.as_str())?;
                *new += dead_end_share;
                max_delta = max_delta.max((*new - old).abs());
            }
            tracing::debug!(iteration, max_delta, "page rank iteration");

            ranks = next;
            if max_delta <= params.epsilon {
                return Ok(Self {
                    page_ranks: ranks,
                    iterations: iteration,
                    converged: true,
                });
            }
        }

        tracing::warn!(
            limit = params.limit,
            "page rank stopped at iteration limit without converging"
        );
        Ok(Self {
            page_ranks: ranks,
            iterations: params.limit,
            converged: false,
        })
    }
}

/// One node per page; edges to distinct in-corpus pages other than itself.
fn make_graph(pages: &ChainedHashSet<Webpage>) -> LinkGraph {
    let mut graph = ChainedHashDictionary::new();
    for page in pages {
        let mut links = ChainedHashSet::new();
        for link in page.links() {
            if link != page.uri() && pages.contains(link.as_str()) {
                links.add(link.clone());
            }
        }
        graph.put(page.uri().to_string(), links);
    }
    graph
}
