use search_containers::{ChainedHashDictionary, ChainedHashSet, Dictionary};

use crate::error::{AnalyzerError, Result};
use crate::webpage::Webpage;

/// Sparse vector from word to weight.
pub type TermVector = ChainedHashDictionary<String, f64>;

/// Scores how relevant a page is to a query by TF-IDF cosine similarity.
///
/// IDF scores, per-document TF-IDF vectors and their Euclidean norms are all
/// computed once at construction; queries only build the (small) query vector.
#[derive(Debug)]
pub struct TfIdfAnalyzer {
    idf_scores: TermVector,
    document_vectors: ChainedHashDictionary<String, TermVector>,
    document_norms: ChainedHashDictionary<String, f64>,
}

impl TfIdfAnalyzer {
    pub fn new(pages: &ChainedHashSet<Webpage>) -> Self {
        let idf_scores = compute_idf_scores(pages);

        let mut document_vectors = ChainedHashDictionary::new();
        let mut document_norms = ChainedHashDictionary::new();
        for page in pages {
            let vector: TermVector = term_frequencies(page.words())
                .into_iter()
                .map(|(word, tf)| {
                    let idf = idf_scores.get_or_default(word.as_str());
                    (word, tf * idf)
                })
                .collect();
            document_norms.put(page.uri().to_string(), norm(&vector));
            document_vectors.put(page.uri().to_string(), vector);
        }

        tracing::info!(
            documents = document_vectors.len(),
            vocabulary = idf_scores.len(),
            "built tf-idf index"
        );

        Self {
            idf_scores,
            document_vectors,
            document_norms,
        }
    }

    /// Cosine similarity between the query's TF-IDF vector and the page's.
    ///
    /// Query words that never occur in the corpus are dropped. Returns 0.0
    /// when either vector has zero length.
    pub fn compute_relevance<I, S>(&self, query: I, page_uri: &str) -> Result<f64>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let unknown = || AnalyzerError::UnknownPage(page_uri.to_string());
        let document_vector = self.document_vectors.get(page_uri).map_err(|_| unknown())?;
        let document_norm = *self.document_norms.get(page_uri).map_err(|_| unknown())?;

        let query_vector = self.query_vector(query);
        let numerator: f64 = query_vector
            .iter()
            .map(|(word, weight)| weight * document_vector.get_or_default(word.as_str()))
            .sum();

        let denominator = document_norm * norm(&query_vector);
        if denominator == 0.0 {
            return Ok(0.0);
        }
        Ok(numerator / denominator)
    }

    /// The precomputed TF-IDF vector of a corpus page.
    pub fn document_vector(&self, page_uri: &str) -> Option<&TermVector> {
        self.document_vectors.get(page_uri).ok()
    }

    pub fn idf(&self, word: &str) -> Option<f64> {
        self.idf_scores.get(word).ok().copied()
    }

    pub fn document_count(&self) -> usize {
        self.document_vectors.len()
    }

    fn query_vector<I, S>(&self, query: I) -> TermVector
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        term_frequencies(query)
            .into_iter()
            .filter_map(|(word, tf)| {
                let idf = *self.idf_scores.get(word.as_str()).ok()?;
                Some((word, tf * idf))
            })
            .collect()
    }
}

/// `ln(documents / documents containing the word)` for every word in the corpus.
fn compute_idf_scores(pages: &ChainedHashSet<Webpage>) -> TermVector {
    let mut containing: TermVector = ChainedHashDictionary::new();
    for page in pages {
        let unique: ChainedHashSet<&str> = page.words().iter().map(String::as_str).collect();
        for word in &unique {
            increment(&mut containing, word, 1.0);
        }
    }

    let documents = pages.len() as f64;
    containing
        .into_iter()
        .map(|(word, count)| (word, (documents / count).ln()))
        .collect()
}

/// Occurrence count of each word divided by the total number of words.
fn term_frequencies<I, S>(words: I) -> TermVector
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts: TermVector = ChainedHashDictionary::new();
    let mut total = 0usize;
    for word in words {
        increment(&mut counts, word.as_ref(), 1.0);
        total += 1;
    }

    let total = total as f64;
    counts
        .into_iter()
        .map(|(word, count)| (word, count / total))
        .collect()
}

fn increment(counts: &mut TermVector, word: &str, by: f64) {
    match counts.get_mut(word) {
        Ok(count) => *count += by,
        Err(_) => {
            counts.put(word.to_string(), by);
        }
    }
}

fn norm(vector: &TermVector) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}
