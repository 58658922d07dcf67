//! Greedy word-packing text chunker.
//!
//! Splits course text into [`Chunk`]s whose content stays within a
//! character bound. Splitting happens only between words; there is no
//! sentence or paragraph awareness.
//!
//! # Algorithm
//!
//! 1. Split the text on whitespace into words, keeping their order.
//! 2. Before appending a word, check whether `buffer + word + 1 separator`
//!    would exceed `max_chars`.
//! 3. If it would, flush the trimmed buffer as a chunk and start a new one.
//! 4. Append the word and a single space to the buffer.
//! 5. Flush whatever remains once the words run out.
//!
//! Because the check runs before appending, a single word longer than
//! `max_chars` is never split: it lands alone in its own chunk.
//!
//! Lengths are counted in `char`s, not bytes.
//!
//! # Example
//!
//! ```rust
//! use course_rag_core::chunk::{chunk_course, DEFAULT_MAX_CHARS};
//!
//! let chunks = chunk_course("ml101", "ML Basics", "Supervised learning uses labels.", DEFAULT_MAX_CHARS);
//! assert_eq!(chunks.len(), 1);
//! assert_eq!(chunks[0].chunk_index, 0);
//! assert_eq!(chunks[0].content, "Supervised learning uses labels.");
//! ```

use crate::models::Chunk;

/// Default chunk bound, in characters.
pub const DEFAULT_MAX_CHARS: usize = 200;

/// Split `text` into word-packed chunks of at most `max_chars` characters.
///
/// # Guarantees
///
/// - Empty or whitespace-only text yields no chunks.
/// - Chunk indices are contiguous: `0, 1, 2, …, N-1`.
/// - Joining chunk contents with single spaces reproduces the word sequence.
/// - Every chunk fits `max_chars` unless it is one oversized word.
pub fn chunk_course(course_id: &str, title: &str, text: &str, max_chars: usize) -> Vec<Chunk> {
    let mut chunks = Vec::new();
    let mut buf = String::new();
    let mut buf_chars = 0usize;
    let mut chunk_index = 0usize;

    for word in text.split_whitespace() {
        let word_chars = word.chars().count();

        if buf_chars + word_chars + 1 > max_chars {
            let trimmed = buf.trim();
            if !trimmed.is_empty() {
                chunks.push(make_chunk(course_id, title, chunk_index, trimmed));
                chunk_index += 1;
            }
            buf.clear();
            buf_chars = 0;
        }

        buf.push_str(word);
        buf.push(' ');
        buf_chars += word_chars + 1;
    }

    let trimmed = buf.trim();
    if !trimmed.is_empty() {
        chunks.push(make_chunk(course_id, title, chunk_index, trimmed));
    }

    chunks
}

fn make_chunk(course_id: &str, title: &str, index: usize, content: &str) -> Chunk {
    Chunk {
        course_id: course_id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        chunk_index: index,
    }
}
