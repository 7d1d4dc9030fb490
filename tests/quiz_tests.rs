// tests/quiz_tests.rs

use std::sync::Arc;

use serde_json::{Value, json};
use trivia_api::{
    models::question::NewQuestion, routes, state::AppState, store::memory::MemoryStore,
};

async fn spawn_app(store: Arc<MemoryStore>) -> String {
    let app = routes::create_router(AppState::new(store));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Four Entertainment questions, two Sports questions.
fn quiz_store() -> Arc<MemoryStore> {
    let store = MemoryStore::with_default_categories();
    for (i, category) in [5, 5, 5, 5, 6, 6].into_iter().enumerate() {
        store.add_question(NewQuestion {
            question: format!("Quiz question {}", i),
            answer: "a".to_string(),
            difficulty: 2,
            category,
        });
    }
    Arc::new(store)
}

async fn ask(client: &reqwest::Client, address: &str, body: Value) -> (u16, Value) {
    let response = client
        .post(format!("{}/quizzes", address))
        .json(&body)
        .send()
        .await
        .expect("Failed to execute request");
    let status = response.status().as_u16();
    (status, response.json().await.unwrap())
}

#[tokio::test]
async fn can_get_quiz_question() {
    let address = spawn_app(quiz_store()).await;
    let client = reqwest::Client::new();

    let (status, body) = ask(
        &client,
        &address,
        json!({
            "previous_questions": [21],
            "quiz_category": {"id": "5", "type": "Entertainment"}
        }),
    )
    .await;

    assert_eq!(status, 200);
    assert_eq!(body["success"], true);
    assert_eq!(body["question"]["category"], 5);
}

#[tokio::test]
async fn quiz_session_never_repeats_and_ends_with_404() {
    let address = spawn_app(quiz_store()).await;
    let client = reqwest::Client::new();
    let mut previous: Vec<i64> = Vec::new();

    // Walk a whole session the way the front end does.
    for _ in 0..4 {
        let (status, body) = ask(
            &client,
            &address,
            json!({"previous_questions": previous, "quiz_category": {"id": 5}}),
        )
        .await;
        assert_eq!(status, 200);

        let id = body["question"]["id"].as_i64().unwrap();
        assert!(!previous.contains(&id), "question {} was repeated", id);
        assert_eq!(body["question"]["category"], 5);
        previous.push(id);
    }

    let (status, body) = ask(
        &client,
        &address,
        json!({"previous_questions": previous, "quiz_category": {"id": 5}}),
    )
    .await;

    assert_eq!(status, 404);
    assert_eq!(
        body,
        json!({"success": false, "error": 404, "message": "No questions left in this category"})
    );
}

#[tokio::test]
async fn category_zero_draws_from_every_category() {
    let store = quiz_store();
    let all_ids = store.question_ids();
    let address = spawn_app(store).await;
    let client = reqwest::Client::new();

    let mut seen: Vec<i64> = Vec::new();
    for _ in 0..all_ids.len() {
        let (status, body) = ask(
            &client,
            &address,
            json!({"previous_questions": seen, "quiz_category": {"type": "click", "id": 0}}),
        )
        .await;
        assert_eq!(status, 200);
        seen.push(body["question"]["id"].as_i64().unwrap());
    }

    seen.sort();
    assert_eq!(seen, all_ids);
}

#[tokio::test]
async fn previous_questions_defaults_to_empty() {
    let address = spawn_app(quiz_store()).await;
    let client = reqwest::Client::new();

    let (status, body) = ask(&client, &address, json!({"quiz_category": {"id": 6}})).await;

    assert_eq!(status, 200);
    assert_eq!(body["question"]["category"], 6);
}

#[tokio::test]
async fn unknown_category_has_no_questions() {
    let address = spawn_app(quiz_store()).await;
    let client = reqwest::Client::new();

    let (status, _) = ask(
        &client,
        &address,
        json!({"previous_questions": [], "quiz_category": {"id": 42}}),
    )
    .await;

    assert_eq!(status, 404);
}

#[tokio::test]
async fn missing_or_malformed_category_is_bad_request() {
    let address = spawn_app(quiz_store()).await;
    let client = reqwest::Client::new();

    let (status, body) = ask(&client, &address, json!({"previous_questions": []})).await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Quiz category required");

    let (status, body) = ask(
        &client,
        &address,
        json!({"previous_questions": [], "quiz_category": {"id": "sports"}}),
    )
    .await;
    assert_eq!(status, 400);
    assert_eq!(body["message"], "Bad request");
}

#[tokio::test]
async fn quiz_store_failure_is_bad_request() {
    let store = quiz_store();
    store.set_failing(true);
    let address = spawn_app(store).await;
    let client = reqwest::Client::new();

    let (status, _) = ask(
        &client,
        &address,
        json!({"previous_questions": [], "quiz_category": {"id": 5}}),
    )
    .await;

    assert_eq!(status, 400);
}
