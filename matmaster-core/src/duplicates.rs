//! Fuzzy duplicate detection over descriptions and material codes.
//!
//! Scores are distances in `0.0..=1.0`, lower meaning closer. A material is
//! scored by its best key, comparing the raw lowercased strings, their
//! word-sorted forms so that "10mm Steel Rod" finds "Steel Rod 10mm", and
//! every run of key words as long as the query so that a partial description
//! such as "Steel Rod" still finds "Steel Rod 10mm".

use strsim::normalized_levenshtein;

use crate::types::{DuplicateMatch, MatchType, Material};

/// Hits scoring above this distance are discarded.
pub const DUPLICATE_SCORE_THRESHOLD: f64 = 0.3;

/// Matches at or below this similarity are not reported.
pub const MIN_SIMILARITY: f64 = 0.7;

const EXACT_SCORE: f64 = 0.1;

fn sorted_words(value: &str) -> String {
    let mut words: Vec<&str> = value.split_whitespace().collect();
    words.sort_unstable();
    words.join(" ")
}

/// Best similarity of `query` against any window of consecutive key words
/// with the same word count as the query.
fn partial_similarity(query: &str, key: &str) -> f64 {
    let query_len = query.split_whitespace().count();
    let words: Vec<&str> = key.split_whitespace().collect();
    if query_len == 0 || words.len() <= query_len {
        return 0.0;
    }
    words
        .windows(query_len)
        .map(|window| normalized_levenshtein(query, &window.join(" ")))
        .fold(0.0, f64::max)
}

fn key_score(query: &str, query_sorted: &str, key: &str) -> f64 {
    let key = key.to_lowercase();
    let direct = normalized_levenshtein(query, &key);
    let reordered = normalized_levenshtein(query_sorted, &sorted_words(&key));
    let partial = partial_similarity(query, &key);
    1.0 - direct.max(reordered).max(partial)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn match_type(score: f64) -> MatchType {
    if score < EXACT_SCORE {
        MatchType::Exact
    } else if score < DUPLICATE_SCORE_THRESHOLD {
        MatchType::Similar
    } else {
        MatchType::Fuzzy
    }
}

/// Materials resembling `description`, closest first.
pub fn find_duplicates(description: &str, materials: &[Material]) -> Vec<DuplicateMatch> {
    let query = description.trim().to_lowercase();
    if query.is_empty() {
        return Vec::new();
    }
    let query_sorted = sorted_words(&query);

    let mut hits: Vec<(f64, &Material)> = materials
        .iter()
        .map(|material| {
            let score = key_score(&query, &query_sorted, &material.description)
                .min(key_score(&query, &query_sorted, &material.material_code));
            (score, material)
        })
        .filter(|(score, _)| *score <= DUPLICATE_SCORE_THRESHOLD)
        .collect();
    hits.sort_by(|a, b| a.0.total_cmp(&b.0));

    hits.into_iter()
        .map(|(score, material)| DuplicateMatch {
            material: material.clone(),
            similarity: round2(1.0 - score),
            match_type: match_type(score),
        })
        .filter(|m| m.similarity > MIN_SIMILARITY)
        .collect()
}
