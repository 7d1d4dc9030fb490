// src/handlers/quiz.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    extract::AppJson,
    models::quiz::{QuizQuestion, QuizRequest},
    state::DynStore,
};

/// Picks the next quiz question at random.
///
/// * Restricted to `quiz_category.id`. Id `0` ("ALL") draws from every category.
/// * Never returns an id listed in `previous_questions`.
/// * Once every question of the category has been asked, answers 404
///   "No questions left in this category" so the client can end the quiz.
#[utoipa::path(
    post,
    path = "/quizzes",
    tag = "Quizzes",
    request_body = QuizRequest,
    responses(
        (status = 200, description = "Next question", body = QuizQuestion),
        (status = 400, description = "Invalid body or store failure", body = crate::error::ErrorBody),
        (status = 404, description = "No questions left", body = crate::error::ErrorBody)
    )
)]
pub async fn next_question(
    State(store): State<DynStore>,
    AppJson(req): AppJson<QuizRequest>,
) -> Result<impl IntoResponse, AppError> {
    let category = req
        .quiz_category
        .ok_or_else(|| AppError::bad_request("Quiz category required"))?;

    let question = store
        .random_question(category.filter(), &req.previous_questions)
        .await?
        .ok_or_else(|| {
            tracing::debug!(
                "Quiz exhausted for category {} after {} questions",
                category.id,
                req.previous_questions.len()
            );
            AppError::not_found("No questions left in this category")
        })?;

    Ok(Json(QuizQuestion {
        success: true,
        question,
    }))
}
