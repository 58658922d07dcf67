//! In-memory course store.
//!
//! The store holds one immutable [`CourseSnapshot`] behind an `Arc`. A load
//! builds the replacement snapshot off to the side and then swaps the
//! pointer under a short write lock, so readers always work on a complete
//! snapshot and never see a half-rebuilt store.

use std::sync::{Arc, PoisonError, RwLock};

use indexmap::IndexMap;

use crate::chunk::chunk_course;
use crate::models::{Chunk, CourseRecord, CourseSummary};

/// Immutable mapping from course id to that course's ordered chunks.
///
/// Iteration follows insertion order. Loading the same id twice keeps the
/// first position and the last chunks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseSnapshot {
    courses: IndexMap<String, Vec<Chunk>>,
}

impl CourseSnapshot {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Chunk every record and collect the results into a snapshot.
    pub fn build(records: &[CourseRecord], max_chars: usize) -> Self {
        let mut courses = IndexMap::with_capacity(records.len());
        for rec in records {
            let chunks = chunk_course(&rec.id, &rec.title, rec.text(), max_chars);
            courses.insert(rec.id.clone(), chunks);
        }
        Self { courses }
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn contains(&self, course_id: &str) -> bool {
        self.courses.contains_key(course_id)
    }

    /// Chunks for one course, or `None` if it was never loaded.
    pub fn get(&self, course_id: &str) -> Option<&[Chunk]> {
        self.courses.get(course_id).map(Vec::as_slice)
    }

    pub fn courses(&self) -> impl Iterator<Item = (&str, &[Chunk])> {
        self.courses
            .iter()
            .map(|(id, chunks)| (id.as_str(), chunks.as_slice()))
    }

    /// Every chunk, course by course, in chunk order.
    pub fn chunks(&self) -> impl Iterator<Item = &Chunk> {
        self.courses.values().flatten()
    }

    pub fn total_chunks(&self) -> usize {
        self.courses.values().map(Vec::len).sum()
    }

    /// One summary per course. Courses without chunks fall back to their id
    /// as the title.
    pub fn summaries(&self) -> Vec<CourseSummary> {
        self.courses()
            .map(|(id, chunks)| CourseSummary {
                id: id.to_string(),
                title: chunks
                    .first()
                    .map(|c| c.title.clone())
                    .unwrap_or_else(|| id.to_string()),
                num_chunks: chunks.len(),
            })
            .collect()
    }
}

/// Shared store holding the current [`CourseSnapshot`].
#[derive(Debug, Default)]
pub struct CourseStore {
    current: RwLock<Arc<CourseSnapshot>>,
}

impl CourseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current snapshot. Later loads do not affect the returned value.
    pub fn snapshot(&self) -> Arc<CourseSnapshot> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Replace the whole store with a freshly chunked catalog.
    pub fn load(&self, records: &[CourseRecord], max_chars: usize) -> Arc<CourseSnapshot> {
        let snapshot = Arc::new(CourseSnapshot::build(records, max_chars));
        self.replace(Arc::clone(&snapshot));
        tracing::info!(
            courses = snapshot.len(),
            chunks = snapshot.total_chunks(),
            "course store reloaded"
        );
        snapshot
    }

    /// Swap in a prebuilt snapshot.
    pub fn replace(&self, snapshot: Arc<CourseSnapshot>) {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *guard = snapshot;
    }

    pub fn clear(&self) {
        self.replace(Arc::new(CourseSnapshot::empty()));
    }
}
