use search_analyzers::Webpage;
use search_containers::ChainedHashSet;

/// Page with words but no outbound links.
#[allow(dead_code)]
pub fn page(uri: &str, words: &[&str]) -> Webpage {
    Webpage::new(uri, words.iter().copied(), std::iter::empty::<&str>())
}

/// Page whose only content is its outbound links.
#[allow(dead_code)]
pub fn linked_page(uri: &str, links: &[&str]) -> Webpage {
    Webpage::new(uri, std::iter::empty::<&str>(), links.iter().copied())
}

pub fn corpus(pages: Vec<Webpage>) -> ChainedHashSet<Webpage> {
    pages.into_iter().collect()
}

/// Two pages sharing "cat": A = [cat, dog], B = [cat, cat, fish].
#[allow(dead_code)]
pub fn cat_dog_fish() -> ChainedHashSet<Webpage> {
    corpus(vec![
        page("http://a.example", &["cat", "dog"]),
        page("http://b.example", &["cat", "cat", "fish"]),
    ])
}

#[allow(dead_code)]
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
