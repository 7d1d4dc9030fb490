// src/routes.rs

use axum::{
    Router,
    http::{Method, header},
    routing::{delete, get, post},
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    docs,
    error::AppError,
    handlers::{category, question, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Registers the category, question and quiz routes plus `/openapi.json`.
/// * Answers unknown paths with the JSON 404 envelope.
/// * Applies global middleware (Trace, CORS open to every origin).
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/categories", get(category::list_categories))
        .route(
            "/categories/{id}/questions",
            get(category::questions_by_category),
        )
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route("/questions/search", post(question::search_questions))
        .route("/questions/{id}", delete(question::delete_question))
        .route("/quizzes", post(quiz::next_question))
        .route("/openapi.json", get(docs::openapi_json))
        .fallback(not_found)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound(None)
}
