//! # Course RAG Core
//!
//! Pure retrieval logic for Course RAG: data models, the word-packing
//! chunker, the snapshot-swapping course store, lexical overlap retrieval,
//! and template answer synthesis.
//!
//! This crate performs no I/O and pulls in no async runtime. Every
//! operation is synchronous and runs to completion.
//!
//! ```rust
//! use course_rag_core::engine::CourseEngine;
//! use course_rag_core::models::CourseRecord;
//!
//! let engine = CourseEngine::default();
//! engine.load(&[CourseRecord::new("dl201", "Deep Learning", "Neural networks learn features.")]);
//!
//! let answer = engine.query("neural networks", None).unwrap();
//! assert_eq!(answer.sources()[0].course_id, "dl201");
//! ```

pub mod answer;
pub mod chunk;
pub mod engine;
pub mod error;
pub mod models;
pub mod search;
pub mod store;
