//! End-to-end tests for the HTTP API.
//!
//! Each test serves the real router on an ephemeral port and talks to it
//! with `reqwest`.

use course_rag::config::Config;
use course_rag::server::serve;
use course_rag_core::engine::CourseEngine;
use course_rag_core::models::CourseRecord;
use serde_json::{json, Value};
use std::sync::Arc;

// ─── Helpers ────────────────────────────────────────────────────────

fn sample_courses() -> Vec<CourseRecord> {
    vec![
        CourseRecord::new(
            "ml101",
            "Introduction to Machine Learning",
            "Machine learning is a subset of artificial intelligence that enables \
             systems to learn from data. Supervised learning uses labeled datasets \
             to train models that can make predictions. Common algorithms include \
             linear regression, decision trees, and support vector machines.",
        ),
        CourseRecord::new(
            "dl201",
            "Deep Learning Fundamentals",
            "Deep learning uses neural networks with multiple layers to model \
             complex patterns. Convolutional neural networks excel at image \
             recognition tasks. Recurrent neural networks handle sequential data \
             like text and time series.",
        ),
    ]
}

/// Start a server over `engine` and return its base URL.
async fn spawn_server(engine: Arc<CourseEngine>) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        serve(listener, engine).await.unwrap();
    });
    format!("http://{}", addr)
}

async fn loaded_server() -> (Arc<CourseEngine>, String) {
    let engine = Arc::new(CourseEngine::new(Config::minimal().engine_settings()));
    engine.load(&sample_courses());
    let base = spawn_server(engine.clone()).await;
    (engine, base)
}

async fn post_query(base: &str, body: Value) -> reqwest::Response {
    reqwest::Client::new()
        .post(format!("{}/api/query", base))
        .json(&body)
        .send()
        .await
        .unwrap()
}

// ─── Root ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_root_returns_ok() {
    let (_engine, base) = loaded_server().await;
    let resp = reqwest::get(format!("{}/", base)).await.unwrap();
    assert_eq!(resp.status(), 200);
    let data: Value = resp.json().await.unwrap();
    assert_eq!(data["status"], "ok");
    assert!(data["message"].is_string());
}

// ─── /api/courses ───────────────────────────────────────────────────

#[tokio::test]
async fn test_courses_empty_when_none_loaded() {
    let engine = Arc::new(CourseEngine::default());
    let base = spawn_server(engine).await;
    let resp = reqwest::get(format!("{}/api/courses", base)).await.unwrap();
    assert_eq!(resp.status(), 200);
    let data: Value = resp.json().await.unwrap();
    assert_eq!(data["courses"], json!([]));
}

#[tokio::test]
async fn test_courses_returns_loaded_courses() {
    let (_engine, base) = loaded_server().await;
    let data: Value = reqwest::get(format!("{}/api/courses", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let courses = data["courses"].as_array().unwrap();
    let ids: Vec<&str> = courses.iter().map(|c| c["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["ml101", "dl201"]);
    for course in courses {
        assert!(course["num_chunks"].as_u64().unwrap() > 0);
        assert!(course["title"].is_string());
    }
}

#[tokio::test]
async fn test_courses_reflect_reload() {
    let (engine, base) = loaded_server().await;
    engine.load(&[CourseRecord {
        id: "empty".to_string(),
        title: "Empty".to_string(),
        content: None,
    }]);
    let data: Value = reqwest::get(format!("{}/api/courses", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(
        data["courses"],
        json!([{"id": "empty", "title": "empty", "num_chunks": 0}])
    );
}

// ─── /api/query ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_query_returns_answer() {
    let (_engine, base) = loaded_server().await;
    let resp = post_query(&base, json!({"question": "What is machine learning?"})).await;
    assert_eq!(resp.status(), 200);
    let data: Value = resp.json().await.unwrap();
    assert!(data["answer"].is_string());
    assert!(data["sources"].is_array());
}

#[tokio::test]
async fn test_query_sources_shape_and_rank() {
    let (_engine, base) = loaded_server().await;
    let data: Value = post_query(&base, json!({"question": "neural networks"}))
        .await
        .json()
        .await
        .unwrap();
    let sources = data["sources"].as_array().unwrap();
    assert!(!sources.is_empty());
    assert_eq!(sources[0]["course_id"], "dl201");
    for source in sources {
        assert!(source["course_id"].is_string());
        assert!(source["title"].is_string());
        assert!(source["chunk_index"].is_u64());
    }
    let answer = data["answer"].as_str().unwrap();
    assert!(answer.contains("Deep Learning Fundamentals"));
    assert!(answer.contains("\"neural networks\""));
}

#[tokio::test]
async fn test_query_respects_top_k() {
    let (_engine, base) = loaded_server().await;
    let data: Value = post_query(&base, json!({"question": "learning", "top_k": 1}))
        .await
        .json()
        .await
        .unwrap();
    assert!(data["sources"].as_array().unwrap().len() <= 1);
}

#[tokio::test]
async fn test_query_zero_top_k_uses_fallback() {
    let (_engine, base) = loaded_server().await;
    let resp = post_query(&base, json!({"question": "learning", "top_k": 0})).await;
    assert_eq!(resp.status(), 200);
    let data: Value = resp.json().await.unwrap();
    assert_eq!(data["sources"], json!([]));
    assert!(data["answer"]
        .as_str()
        .unwrap()
        .to_lowercase()
        .contains("couldn't find"));
}

#[tokio::test]
async fn test_query_no_results() {
    let (_engine, base) = loaded_server().await;
    let resp = post_query(&base, json!({"question": "xyznonexistent"})).await;
    assert_eq!(resp.status(), 200);
    let data: Value = resp.json().await.unwrap();
    assert_eq!(data["sources"], json!([]));
}

#[tokio::test]
async fn test_query_whitespace_only_question() {
    let (_engine, base) = loaded_server().await;
    let resp = post_query(&base, json!({"question": "   "})).await;
    assert_eq!(resp.status(), 422);
    let data: Value = resp.json().await.unwrap();
    assert_eq!(data["error"]["code"], "validation_error");
    assert_eq!(data["error"]["message"], "Question cannot be empty");
}

#[tokio::test]
async fn test_query_missing_question_field() {
    let (_engine, base) = loaded_server().await;
    let resp = post_query(&base, json!({})).await;
    assert_eq!(resp.status(), 422);
    let data: Value = resp.json().await.unwrap();
    assert_eq!(data["error"]["code"], "validation_error");
}

#[tokio::test]
async fn test_query_wrong_question_type() {
    let (_engine, base) = loaded_server().await;
    let resp = post_query(&base, json!({"question": 42})).await;
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn test_query_invalid_content_type() {
    let (_engine, base) = loaded_server().await;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/query", base))
        .header("content-type", "text/plain")
        .body("not json")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
}

#[tokio::test]
async fn test_query_malformed_json() {
    let (_engine, base) = loaded_server().await;
    let resp = reqwest::Client::new()
        .post(format!("{}/api/query", base))
        .header("content-type", "application/json")
        .body("{\"question\": ")
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 422);
}
