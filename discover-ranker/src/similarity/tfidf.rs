//! Term-frequency / inverse-document-frequency weighting of short texts.
//!
//! Rows become sparse, L2-normalised term vectors so that cosine similarity
//! reduces to a dot product.

use std::cmp::Ordering;
use std::collections::HashMap;

use super::stopwords::is_stop_word;

/// Largest vocabulary retained, ranked by corpus-wide term frequency.
pub(crate) const MAX_FEATURES: usize = 1000;

/// Sparse term weights ordered by term id.
#[derive(Debug, Clone, PartialEq, Default)]
pub(crate) struct TermVector {
    weights: Vec<(usize, f64)>,
}

impl TermVector {
    /// Whether no retained term occurs in the row.
    pub(crate) const fn is_zero(&self) -> bool {
        self.weights.is_empty()
    }

    /// Cosine similarity with another normalised vector, clamped to `0..=1`.
    #[expect(
        clippy::float_arithmetic,
        reason = "dot product of sparse weight vectors"
    )]
    pub(crate) fn cosine(&self, other: &Self) -> f64 {
        let mut left = self.weights.iter().peekable();
        let mut right = other.weights.iter().peekable();
        let mut sum = 0.0_f64;
        loop {
            let (Some(&(left_term, left_weight)), Some(&(right_term, right_weight))) =
                (left.peek().copied(), right.peek().copied())
            else {
                break;
            };
            match left_term.cmp(&right_term) {
                Ordering::Less => {
                    left.next();
                }
                Ordering::Greater => {
                    right.next();
                }
                Ordering::Equal => {
                    sum += left_weight * right_weight;
                    left.next();
                    right.next();
                }
            }
        }
        sum.clamp(0.0, 1.0)
    }
}

/// Vectors for every document plus the size of the retained vocabulary.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Weighted {
    pub(crate) vocabulary: usize,
    pub(crate) vectors: Vec<TermVector>,
}

/// Split `text` into lower-case word tokens of two or more characters,
/// dropping stop words.
pub(crate) fn tokenise(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|ch: char| !(ch.is_alphanumeric() || ch == '_'))
        .filter(|token| token.chars().nth(1).is_some())
        .map(str::to_lowercase)
        .filter(|token| !is_stop_word(token))
}

/// Fit a vocabulary on `documents` and weight each of them against it.
pub(crate) fn fit_transform<'a, I>(documents: I, max_features: usize) -> Weighted
where
    I: IntoIterator<Item = &'a str>,
{
    let counted: Vec<HashMap<String, usize>> =
        documents.into_iter().map(term_counts).collect();

    let mut corpus: HashMap<&str, (usize, usize)> = HashMap::new();
    for doc in &counted {
        for (term, count) in doc {
            let entry = corpus.entry(term.as_str()).or_default();
            entry.0 += count;
            entry.1 += 1;
        }
    }

    let mut ranked: Vec<(&str, usize, usize)> = corpus
        .into_iter()
        .map(|(term, (frequency, doc_frequency))| (term, frequency, doc_frequency))
        .collect();
    ranked.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(right.0)));
    ranked.truncate(max_features);
    ranked.sort_by(|left, right| left.0.cmp(right.0));

    let documents_seen = counted.len();
    let vocabulary: HashMap<&str, (usize, f64)> = ranked
        .iter()
        .enumerate()
        .map(|(id, &(term, _, doc_frequency))| {
            (term, (id, smooth_idf(documents_seen, doc_frequency)))
        })
        .collect();
    let vectors = counted
        .iter()
        .map(|doc| weigh(doc, &vocabulary))
        .collect();
    Weighted {
        vocabulary: vocabulary.len(),
        vectors,
    }
}

fn term_counts(text: &str) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for token in tokenise(text) {
        *counts.entry(token).or_insert(0) += 1;
    }
    counts
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "smoothed idf over document counts far below 2^52"
)]
fn smooth_idf(documents: usize, doc_frequency: usize) -> f64 {
    let numerator = (documents + 1) as f64;
    let denominator = (doc_frequency + 1) as f64;
    (numerator / denominator).ln() + 1.0
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "raw counts scaled by idf then L2-normalised"
)]
fn weigh(doc: &HashMap<String, usize>, vocabulary: &HashMap<&str, (usize, f64)>) -> TermVector {
    let mut weights: Vec<(usize, f64)> = doc
        .iter()
        .filter_map(|(term, &count)| {
            vocabulary
                .get(term.as_str())
                .map(|&(id, idf)| (id, count as f64 * idf))
        })
        .collect();
    weights.sort_by_key(|&(id, _)| id);
    let norm = weights
        .iter()
        .map(|&(_, weight)| weight * weight)
        .sum::<f64>()
        .sqrt();
    if norm > 0.0 {
        for entry in &mut weights {
            entry.1 /= norm;
        }
    }
    TermVector { weights }
}
