//! Answer synthesis from ranked chunks.
//!
//! Plain templating: each chunk becomes a `[title]: content` line, the lines
//! are wrapped between a lead-in and a closing sentence that quotes the
//! question. No model is called and nothing is truncated or deduplicated.

use crate::models::Chunk;

/// Returned when retrieval found nothing.
pub const FALLBACK_ANSWER: &str = "I couldn't find relevant course material for your question.";

const LEAD_IN: &str = "Based on the course materials:";

/// Build the answer text for `query` from `chunks`, in the given order.
pub fn synthesize<'a, I>(query: &str, chunks: I) -> String
where
    I: IntoIterator<Item = &'a Chunk>,
{
    let context = chunks
        .into_iter()
        .map(|c| format!("[{}]: {}", c.title, c.content))
        .collect::<Vec<_>>()
        .join("\n");

    if context.is_empty() {
        return FALLBACK_ANSWER.to_string();
    }

    format!(
        "{}\n\n{}\n\nThis information is relevant to your query: \"{}\"",
        LEAD_IN, context, query
    )
}
