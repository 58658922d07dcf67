//! Core data models shared by the store, retriever, and HTTP layer.

use serde::{Deserialize, Serialize};

/// One bounded span of a course's text.
///
/// Chunks are created by [`chunk_course`](crate::chunk::chunk_course) and
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Identifier of the owning course.
    pub course_id: String,
    /// Copy of the owning course's title.
    pub title: String,
    /// Trimmed chunk text. Never empty.
    pub content: String,
    /// Zero-based position within the course.
    pub chunk_index: usize,
}

/// A course as supplied to the loader.
///
/// `content` may be absent or `null` in the catalog; both read as empty text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: Option<String>,
}

impl CourseRecord {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: Some(content.into()),
        }
    }

    /// Course body text, empty when none was supplied.
    pub fn text(&self) -> &str {
        self.content.as_deref().unwrap_or("")
    }
}

/// Reference to a retrieved chunk, as returned in query `sources`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRef {
    pub course_id: String,
    pub title: String,
    pub chunk_index: usize,
}

impl From<&Chunk> for SourceRef {
    fn from(chunk: &Chunk) -> Self {
        Self {
            course_id: chunk.course_id.clone(),
            title: chunk.title.clone(),
            chunk_index: chunk.chunk_index,
        }
    }
}

/// Listing entry for one loaded course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub num_chunks: usize,
}
