use std::borrow::Borrow;
use std::hash::{Hash, Hasher};

use search_containers::DoubleLinkedList;

/// A crawled page: its URI, its word tokens and its outbound links.
///
/// Tokens arrive already normalized by the crawler. Pages are identified by
/// URI alone, so two pages with the same URI are the same page in a corpus.
#[derive(Clone, Debug)]
pub struct Webpage {
    uri: String,
    words: DoubleLinkedList<String>,
    links: DoubleLinkedList<String>,
}

impl Webpage {
    pub fn new<W, L>(uri: impl Into<String>, words: W, links: L) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        L: IntoIterator,
        L::Item: Into<String>,
    {
        Self {
            uri: uri.into(),
            words: words.into_iter().map(Into::into).collect(),
            links: links.into_iter().map(Into::into).collect(),
        }
    }

    pub fn uri(&self) -> &str {
        &self.uri
    }

    pub fn words(&self) -> &DoubleLinkedList<String> {
        &self.words
    }

    pub fn links(&self) -> &DoubleLinkedList<String> {
        &self.links
    }
}

impl PartialEq for Webpage {
    fn eq(&self, other: &Self) -> bool {
        self.uri == other.uri
    }
}

impl Eq for Webpage {}

impl Hash for Webpage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.uri.hash(state);
    }
}

/// Lets a page set be probed by URI.
impl Borrow<str> for Webpage {
    fn borrow(&self) -> &str {
        &self.uri
    }
}
