//! `coursebot query`: answer a question from the command line.

use anyhow::Result;
use course_rag_core::engine::CourseEngine;

/// Answer `question` and print the answer followed by ranked sources.
pub fn run_query(engine: &CourseEngine, question: &str, top_k: Option<i64>) -> Result<()> {
    let result = engine.query(question, top_k)?;

    println!("{}", result.answer);

    if result.hits.is_empty() {
        return Ok(());
    }

    println!();
    println!("Sources:");
    for (i, hit) in result.hits.iter().enumerate() {
        println!(
            "{}. [{:.2}] {} #{} / {}",
            i + 1,
            hit.score,
            hit.chunk.course_id,
            hit.chunk.chunk_index,
            hit.chunk.title
        );
    }

    Ok(())
}
