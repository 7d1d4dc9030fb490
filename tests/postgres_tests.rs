// tests/postgres_tests.rs
//
// Runs against a real Postgres. Needs DATABASE_URL and is ignored by default:
//   DATABASE_URL=postgres://... cargo test --test postgres_tests -- --ignored

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use trivia_api::{
    models::question::NewQuestion,
    routes,
    state::AppState,
    store::{TriviaStore, postgres::PgStore},
};

async fn pg_store() -> PgStore {
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&database_url)
        .await
        .expect("Failed to connect to Postgres for testing. Make sure DATABASE_URL is set.");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("Failed to migrate database");

    PgStore::new(pool)
}

async fn spawn_app(store: PgStore) -> String {
    let app = routes::create_router(AppState::new(Arc::new(store)));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    address
}

/// Category id no seeded or concurrently running test uses.
fn private_category() -> i64 {
    (uuid::Uuid::new_v4().as_u128() % 1_000_000_000) as i64 + 1_000
}

/// Short token to make question text unique per test run.
fn marker() -> String {
    uuid::Uuid::new_v4().simple().to_string()[..12].to_string()
}

async fn insert(store: &PgStore, text: &str, category: i64) -> i64 {
    store
        .insert_question(&NewQuestion {
            question: text.to_string(),
            answer: "a".to_string(),
            difficulty: 3,
            category,
        })
        .await
        .expect("Failed to insert question")
        .id
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn seed_migration_installs_categories() {
    let store = pg_store().await;

    let categories = store.categories().await.unwrap();
    assert!(categories.len() >= 6);

    let art = store.category(2).await.unwrap().expect("category 2 seeded");
    assert_eq!(art.category_type, "Art");
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn insert_returns_row_and_delete_reports_rows() {
    let store = pg_store().await;
    let text = format!("Inserted {}", marker());

    let created = store
        .insert_question(&NewQuestion {
            question: text.clone(),
            answer: "Blood".to_string(),
            difficulty: 4,
            category: 1,
        })
        .await
        .unwrap();

    assert_eq!(created.question, text);
    assert_eq!(created.answer, "Blood");
    assert_eq!(created.difficulty, 4);
    assert_eq!(created.category, 1);
    assert_eq!(store.question(created.id).await.unwrap(), Some(created.clone()));

    assert!(store.delete_question(created.id).await.unwrap());
    assert!(!store.delete_question(created.id).await.unwrap());
    assert_eq!(store.question(created.id).await.unwrap(), None);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn category_filter_is_exact() {
    let store = pg_store().await;
    let category = private_category();
    let inside = insert(&store, "Exact match", category).await;
    insert(&store, "Neighbour", category + 1).await;

    let questions = store.questions_in_category(category).await.unwrap();

    assert_eq!(questions.len(), 1);
    assert_eq!(questions[0].id, inside);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn search_matches_literally_and_ignores_case() {
    let store = pg_store().await;
    let tag = marker();
    let percent = insert(&store, &format!("Is {} 100% sure?", tag), 1).await;
    insert(&store, &format!("Is {} 1000 sure?", tag), 1).await;
    insert(&store, &format!("Is {} a_b?", tag), 1).await;

    let term = format!("{} 100%", tag.to_uppercase());
    let found = store.search_questions(&term).await.unwrap();
    assert_eq!(found.iter().map(|q| q.id).collect::<Vec<_>>(), vec![percent]);
    assert_eq!(store.count_matching(&term).await.unwrap(), 1);

    // `_` would match any single character if it were not escaped.
    assert_eq!(store.count_matching(&format!("{} a_b", tag)).await.unwrap(), 1);
    assert_eq!(store.count_matching(&format!("{} 1_00", tag)).await.unwrap(), 0);
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn random_question_respects_category_and_exclusions() {
    let store = pg_store().await;
    let category = private_category();
    let first = insert(&store, "Quiz one", category).await;
    let second = insert(&store, "Quiz two", category).await;
    let third = insert(&store, "Quiz three", category).await;

    let any = store.random_question(Some(category), &[]).await.unwrap().unwrap();
    assert_eq!(any.category, category);

    for _ in 0..10 {
        let picked = store
            .random_question(Some(category), &[first, second])
            .await
            .unwrap()
            .unwrap();
        assert_eq!(picked.id, third);
    }

    let none = store
        .random_question(Some(category), &[first, second, third])
        .await
        .unwrap();
    assert!(none.is_none());

    assert!(store.random_question(None, &[]).await.unwrap().is_some());
}

#[tokio::test]
#[ignore = "requires DATABASE_URL"]
async fn api_over_postgres_deletes_once_and_ends_quizzes() {
    let store = pg_store().await;
    let category = private_category();
    let only = insert(&store, "Lonely question", category).await;
    let address = spawn_app(store).await;
    let client = reqwest::Client::new();

    let quiz = |previous: Vec<i64>| {
        client
            .post(format!("{}/quizzes", address))
            .json(&serde_json::json!({
                "previous_questions": previous,
                "quiz_category": {"id": category.to_string()}
            }))
            .send()
    };

    let response = quiz(vec![]).await.unwrap();
    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["question"]["id"], only);

    let response = quiz(vec![only]).await.unwrap();
    assert_eq!(response.status().as_u16(), 404);

    let url = format!("{}/questions/{}", address, only);
    let first = client.delete(&url).send().await.unwrap();
    assert_eq!(first.status().as_u16(), 200);
    let second = client.delete(&url).send().await.unwrap();
    assert_eq!(second.status().as_u16(), 404);
}
