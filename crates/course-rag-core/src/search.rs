//! Lexical overlap retrieval over a [`CourseSnapshot`].
//!
//! # Scoring
//!
//! 1. Lowercase the query, split on whitespace, collapse into a term set.
//! 2. For each chunk, build the same kind of term set over its content.
//! 3. `overlap = |query ∩ chunk|`. Chunks with no overlap are dropped.
//! 4. `score = overlap / max(|query|, 1)`, so scores fall in `(0, 1]`.
//! 5. Stable sort by score (desc); ties keep course order, then chunk order.
//! 6. Truncate to `top_k`.
//!
//! This is a full scan of every chunk per query, which is fine for the
//! small in-memory corpora this crate targets.

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::models::Chunk;
use crate::store::CourseSnapshot;

/// Lowercased, deduplicated query terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTerms {
    terms: HashSet<String>,
}

impl QueryTerms {
    pub fn parse(query: &str) -> Self {
        Self {
            terms: term_set(query),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains(term)
    }
}

/// A chunk paired with its overlap score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredChunk {
    /// Fraction of query terms found in the chunk, in `(0, 1]`.
    pub score: f64,
    pub chunk: Chunk,
}

/// Lowercase `text` and split it into a set of whitespace-delimited terms.
pub fn term_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Score one piece of content against the query terms.
///
/// Returns `None` when no query term occurs in `content`.
pub fn score_overlap(query: &QueryTerms, content: &str) -> Option<f64> {
    let chunk_terms = term_set(content);
    let overlap = query
        .terms
        .iter()
        .filter(|t| chunk_terms.contains(t.as_str()))
        .count();
    if overlap == 0 {
        return None;
    }
    Some(overlap as f64 / query.len().max(1) as f64)
}

/// Rank every chunk in `snapshot` against `query` and keep the best `top_k`.
///
/// `top_k <= 0` returns nothing. Fewer matches than `top_k` returns all of
/// them. Equal scores keep their enumeration order.
pub fn retrieve(snapshot: &CourseSnapshot, query: &str, top_k: i64) -> Vec<ScoredChunk> {
    if top_k <= 0 {
        return Vec::new();
    }
    let limit = usize::try_from(top_k).unwrap_or(usize::MAX);

    let terms = QueryTerms::parse(query);
    if terms.is_empty() {
        return Vec::new();
    }

    let mut scored: Vec<(f64, &Chunk)> = snapshot
        .chunks()
        .filter_map(|chunk| score_overlap(&terms, &chunk.content).map(|s| (s, chunk)))
        .collect();

    // `sort_by` is stable; equal scores stay in visit order.
    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));
    scored.truncate(limit);

    tracing::debug!(
        terms = terms.len(),
        hits = scored.len(),
        "retrieved chunks for query"
    );

    scored
        .into_iter()
        .map(|(score, chunk)| ScoredChunk {
            score,
            chunk: chunk.clone(),
        })
        .collect()
}
