use ahash::{AHashMap, AHashSet};
use itertools::Itertools;
use once_cell::sync::Lazy;
use rayon::prelude::*;
use regex::Regex;

/// Sparse l2-normalized term vector: vocabulary index -> weight.
pub type TermVector = AHashMap<usize, f64>;

// Tokens are runs of two or more word characters, lowercased.
static TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w\w+\b").unwrap());

static STOP_WORDS: Lazy<AHashSet<&'static str>> = Lazy::new(|| {
    [
        "about", "above", "after", "again", "against", "all", "also", "am", "an", "and", "any",
        "are", "as", "at", "be", "because", "been", "before", "being", "below", "between", "both",
        "but", "by", "can", "cannot", "could", "did", "do", "does", "doing", "down", "during",
        "each", "few", "for", "from", "further", "had", "has", "have", "having", "he", "her",
        "here", "hers", "him", "his", "how", "if", "in", "into", "is", "it", "its", "itself",
        "just", "me", "more", "most", "my", "myself", "no", "nor", "not", "now", "of", "off",
        "on", "once", "only", "or", "other", "our", "ours", "out", "over", "own", "same", "she",
        "should", "so", "some", "such", "than", "that", "the", "their", "theirs", "them", "then",
        "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
        "very", "was", "we", "were", "what", "when", "where", "which", "while", "who", "whom",
        "why", "will", "with", "would", "you", "your", "yours", "yourself",
    ]
    .into_iter()
    .collect()
});

/// Unigrams (stop words removed) plus bigrams over the surviving unigrams.
fn terms(message: &str) -> Vec<String> {
    let lower = message.to_lowercase();
    let unigrams: Vec<&str> = TOKEN
        .find_iter(&lower)
        .map(|m| m.as_str())
        .filter(|t| !STOP_WORDS.contains(t))
        .collect();
    let mut out: Vec<String> = unigrams.iter().map(|t| (*t).to_string()).collect();
    out.extend(
        unigrams
            .iter()
            .tuple_windows()
            .map(|(a, b)| format!("{a} {b}")),
    );
    out
}

/// Build TF-IDF vectors over the message corpus. The vocabulary is capped at
/// the `max_vocabulary` terms with the highest total corpus count, ties broken
/// lexicographically so the result is reproducible. IDF is smoothed
/// (ln((1+n)/(1+df)) + 1) and every vector is l2-normalized, so cosine
/// similarity reduces to a dot product.
pub fn vectorize(messages: &[String], max_vocabulary: usize) -> Vec<TermVector> {
    let doc_terms: Vec<AHashMap<String, usize>> = messages
        .iter()
        .map(|m| {
            let mut counts = AHashMap::new();
            for t in terms(m) {
                *counts.entry(t).or_insert(0) += 1;
            }
            counts
        })
        .collect();

    let mut corpus_count: AHashMap<&str, usize> = AHashMap::new();
    let mut doc_freq: AHashMap<&str, usize> = AHashMap::new();
    for doc in &doc_terms {
        for (t, c) in doc {
            *corpus_count.entry(t.as_str()).or_insert(0) += c;
            *doc_freq.entry(t.as_str()).or_insert(0) += 1;
        }
    }

    let mut ranked: Vec<(&str, usize)> = corpus_count.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(max_vocabulary);

    let n = messages.len() as f64;
    let vocab: AHashMap<&str, usize> = ranked
        .iter()
        .enumerate()
        .map(|(idx, (t, _))| (*t, idx))
        .collect();
    let idf: Vec<f64> = ranked
        .iter()
        .map(|(t, _)| ((1.0 + n) / (1.0 + doc_freq[t] as f64)).ln() + 1.0)
        .collect();

    doc_terms
        .iter()
        .map(|doc| {
            let mut v: TermVector = AHashMap::new();
            for (t, c) in doc {
                if let Some(&idx) = vocab.get(t.as_str()) {
                    v.insert(idx, *c as f64 * idf[idx]);
                }
            }
            let norm = v.values().map(|w| w * w).sum::<f64>().sqrt();
            if norm > 0.0 {
                for w in v.values_mut() {
                    *w /= norm;
                }
            }
            v
        })
        .collect()
}

/// Full pairwise cosine similarity matrix. Symmetric, diagonal forced to 1.0
/// (a message always matches itself, even when every token is a stop word).
/// Rows are computed in parallel; this is the quadratic hot spot.
pub fn similarity_matrix(vectors: &[TermVector]) -> Vec<Vec<f64>> {
    let n = vectors.len();
    (0..n)
        .into_par_iter()
        .map(|i| {
            (0..n)
                .map(|j| if i == j { 1.0 } else { dot(&vectors[i], &vectors[j]) })
                .collect()
        })
        .collect()
}

fn dot(a: &TermVector, b: &TermVector) -> f64 {
    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    small
        .iter()
        .filter_map(|(idx, w)| large.get(idx).map(|x| w * x))
        .sum()
}
