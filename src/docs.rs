// src/docs.rs

use axum::Json;
use utoipa::OpenApi;

use crate::{
    error::ErrorBody,
    handlers::{category, question, quiz},
    models::{
        category::{CategoriesResponse, Category},
        question::{
            CreateQuestionRequest, MessageResponse, Question, QuestionList, QuestionPage,
            SearchRequest,
        },
        quiz::{QuizCategory, QuizQuestion, QuizRequest},
    },
};

/// OpenAPI description of every route.
#[derive(OpenApi)]
#[openapi(
    info(title = "Trivia API", description = "Questions, categories and quizzes for the trivia game."),
    paths(
        category::list_categories,
        category::questions_by_category,
        question::list_questions,
        question::delete_question,
        question::create_question,
        question::search_questions,
        quiz::next_question,
    ),
    components(schemas(
        Category,
        CategoriesResponse,
        Question,
        QuestionPage,
        QuestionList,
        CreateQuestionRequest,
        SearchRequest,
        MessageResponse,
        QuizCategory,
        QuizRequest,
        QuizQuestion,
        ErrorBody,
    )),
    tags(
        (name = "Categories", description = "Read-only category listing"),
        (name = "Questions", description = "Question listing, search, creation and deletion"),
        (name = "Quizzes", description = "Random quiz questions")
    )
)]
pub struct ApiDoc;

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
