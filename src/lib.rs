//! # Course RAG
//!
//! Answers free-text questions about a set of courses. Course text is split
//! into bounded chunks, chunks are ranked by lexical overlap with the
//! question, and the best ones are stitched into a templated answer.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────┐   ┌─────────────┐   ┌──────────────┐
//! │  Catalog   │──▶│   Chunker   │──▶│ Course Store │
//! │   (JSON)   │   │ word-packed │   │  (snapshot)  │
//! └────────────┘   └─────────────┘   └──────┬───────┘
//!                                           │
//!                      ┌────────────────────┤
//!                      ▼                    ▼
//!                 ┌──────────┐        ┌──────────┐
//!                 │   CLI    │        │   HTTP   │
//!                 │coursebot │        │  (axum)  │
//!                 └──────────┘        └──────────┘
//! ```
//!
//! The retrieval logic itself lives in [`course_rag_core`]; this crate adds
//! configuration, catalog loading, the HTTP server, and the CLI.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`loader`] | JSON course catalog loading |
//! | [`server`] | HTTP API |
//! | [`query`] | `coursebot query` command |
//! | [`courses`] | `coursebot courses` command |

pub mod config;
pub mod courses;
pub mod loader;
pub mod query;
pub mod server;
