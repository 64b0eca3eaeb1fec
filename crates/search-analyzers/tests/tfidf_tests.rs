mod fixtures;

use fixtures::{assert_close, cat_dog_fish, corpus, page};
use search_analyzers::{AnalyzerError, TfIdfAnalyzer};
use search_containers::{DoubleLinkedList, Dictionary};

const A: &str = "http://a.example";
const B: &str = "http://b.example";

#[test]
fn idf_scores_follow_document_frequency() {
    let analyzer = TfIdfAnalyzer::new(&cat_dog_fish());
    assert_close(analyzer.idf("cat").unwrap(), 0.0);
    assert_close(analyzer.idf("dog").unwrap(), 2f64.ln());
    assert_close(analyzer.idf("fish").unwrap(), 2f64.ln());
    assert_eq!(analyzer.idf("bird"), None);
    assert_eq!(analyzer.document_count(), 2);
}

#[test]
fn document_vectors_weight_tf_by_idf() {
    let analyzer = TfIdfAnalyzer::new(&cat_dog_fish());

    let a = analyzer.document_vector(A).unwrap();
    assert_close(*a.get("dog").unwrap(), 0.5 * 2f64.ln());
    assert_close(*a.get("cat").unwrap(), 0.0);

    let b = analyzer.document_vector(B).unwrap();
    assert_close(*b.get("fish").unwrap(), 2f64.ln() / 3.0);
    assert!(!b.contains_key("dog"));

    assert!(analyzer.document_vector("http://nowhere.example").is_none());
}

#[test]
fn page_with_query_word_outranks_page_without() {
    let analyzer = TfIdfAnalyzer::new(&cat_dog_fish());
    let relevance_a = analyzer.compute_relevance(["dog"], A).unwrap();
    let relevance_b = analyzer.compute_relevance(["dog"], B).unwrap();
    assert!(relevance_a > relevance_b);
    assert_close(relevance_a, 1.0);
    assert_close(relevance_b, 0.0);
}

#[test]
fn unknown_query_words_are_dropped() {
    let analyzer = TfIdfAnalyzer::new(&cat_dog_fish());
    let relevance = analyzer.compute_relevance(["dog", "zebra"], A).unwrap();
    assert_close(relevance, 1.0);
}

#[test]
fn zero_norm_query_scores_zero() {
    let analyzer = TfIdfAnalyzer::new(&cat_dog_fish());
    // "cat" appears everywhere, so its idf and the query norm are both zero.
    assert_eq!(analyzer.compute_relevance(["cat"], A).unwrap(), 0.0);
    assert_eq!(analyzer.compute_relevance(["zebra"], A).unwrap(), 0.0);
    assert_eq!(analyzer.compute_relevance(Vec::<String>::new(), A).unwrap(), 0.0);
}

#[test]
fn empty_document_scores_zero() {
    let pages = corpus(vec![page(A, &["dog"]), page(B, &[])]);
    let analyzer = TfIdfAnalyzer::new(&pages);
    assert_eq!(analyzer.compute_relevance(["dog"], B).unwrap(), 0.0);
    assert_eq!(analyzer.document_vector(B).unwrap().len(), 0);
}

#[test]
fn unknown_page_is_an_error() {
    let analyzer = TfIdfAnalyzer::new(&cat_dog_fish());
    let result = analyzer.compute_relevance(["dog"], "http://nowhere.example");
    assert!(matches!(result, Err(AnalyzerError::UnknownPage(uri)) if uri == "http://nowhere.example"));
}

#[test]
fn query_from_linked_list() {
    let analyzer = TfIdfAnalyzer::new(&cat_dog_fish());
    let query: DoubleLinkedList<String> = ["fish".to_string()].into_iter().collect();
    assert_close(analyzer.compute_relevance(&query, B).unwrap(), 1.0);
    assert_close(analyzer.compute_relevance(&query, A).unwrap(), 0.0);
}

#[test]
fn repeated_query_terms_shift_weight() {
    let pages = corpus(vec![
        page(A, &["red", "blue"]),
        page(B, &["red", "red", "red", "blue"]),
        page("http://c.example", &["green"]),
    ]);
    let analyzer = TfIdfAnalyzer::new(&pages);

    let red_heavy = ["red", "red", "red", "blue"];
    let on_b = analyzer.compute_relevance(red_heavy, B).unwrap();
    let on_a = analyzer.compute_relevance(red_heavy, A).unwrap();
    assert_close(on_b, 1.0);
    assert!(on_a < on_b);
    assert!(on_a > 0.0);
}
