//! The engine contract that frontends (HTTP, CLI) call into.
//!
//! | Method | Purpose |
//! |--------|---------|
//! | [`load`](CourseEngine::load) | Replace the whole store with a new catalog |
//! | [`query`](CourseEngine::query) | Validate, retrieve, and synthesize an answer |
//! | [`list_courses`](CourseEngine::list_courses) | Summarize loaded courses |
//!
//! Each call reads one consistent snapshot of the store.

use std::sync::Arc;

use crate::answer::synthesize;
use crate::chunk::DEFAULT_MAX_CHARS;
use crate::error::QueryError;
use crate::models::{CourseRecord, CourseSummary, SourceRef};
use crate::search::{retrieve, ScoredChunk};
use crate::store::{CourseSnapshot, CourseStore};

/// Number of chunks a query returns when the caller does not say.
pub const DEFAULT_TOP_K: i64 = 3;

/// Chunking and retrieval settings, decoupled from application config.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineSettings {
    /// Chunk bound in characters.
    pub max_chars: usize,
    /// `top_k` used when a query omits it.
    pub default_top_k: i64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
            default_top_k: DEFAULT_TOP_K,
        }
    }
}

/// Result of a successful query.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryAnswer {
    pub answer: String,
    /// Ranked hits, best first.
    pub hits: Vec<ScoredChunk>,
}

impl QueryAnswer {
    /// Source references in rank order.
    pub fn sources(&self) -> Vec<SourceRef> {
        self.hits.iter().map(|h| SourceRef::from(&h.chunk)).collect()
    }
}

/// Course store plus the settings used to fill and query it.
#[derive(Debug, Default)]
pub struct CourseEngine {
    store: CourseStore,
    settings: EngineSettings,
}

impl CourseEngine {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            store: CourseStore::new(),
            settings,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    /// Replace every loaded course with `records`.
    pub fn load(&self, records: &[CourseRecord]) -> Arc<CourseSnapshot> {
        self.store.load(records, self.settings.max_chars)
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    pub fn snapshot(&self) -> Arc<CourseSnapshot> {
        self.store.snapshot()
    }

    /// Rank chunks for `query`. No validation; a blank query simply matches nothing.
    pub fn retrieve(&self, query: &str, top_k: i64) -> Vec<ScoredChunk> {
        retrieve(&self.store.snapshot(), query, top_k)
    }

    /// Answer `question` from the loaded courses.
    ///
    /// `top_k` falls back to the configured default. A blank or
    /// whitespace-only question is rejected with [`QueryError::EmptyQuestion`].
    pub fn query(&self, question: &str, top_k: Option<i64>) -> Result<QueryAnswer, QueryError> {
        if question.trim().is_empty() {
            return Err(QueryError::EmptyQuestion);
        }
        let top_k = top_k.unwrap_or(self.settings.default_top_k);
        let hits = self.retrieve(question, top_k);
        let answer = synthesize(question, hits.iter().map(|h| &h.chunk));
        Ok(QueryAnswer { answer, hits })
    }

    /// One entry per loaded course, in load order.
    pub fn list_courses(&self) -> Vec<CourseSummary> {
        self.store.snapshot().summaries()
    }
}
