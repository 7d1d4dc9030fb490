// src/handlers/question.rs

use axum::{Json, extract::State, response::IntoResponse};

use crate::{
    error::AppError,
    extract::{AppJson, AppPath, AppQuery},
    handlers::current_category,
    models::{
        category::category_map,
        question::{
            CreateQuestionRequest, ListParams, MessageResponse, QuestionList, QuestionPage,
            SearchRequest,
        },
    },
    state::DynStore,
};

pub const QUESTIONS_PER_PAGE: usize = 10;

/// Slices `items[(page-1)*10 .. page*10]`. Pages below 1 or past the end are empty.
pub fn paginate<T>(items: Vec<T>, page: i64) -> Vec<T> {
    if page < 1 {
        return Vec::new();
    }
    let start = usize::try_from(page - 1)
        .unwrap_or(usize::MAX)
        .saturating_mul(QUESTIONS_PER_PAGE);

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}

/// Lists one page of questions together with every category.
///
/// All questions are loaded and sliced in memory. `currentCategory` is the
/// label of the first question overall, whatever page was requested.
#[utoipa::path(
    get,
    path = "/questions",
    tag = "Questions",
    params(("page" = Option<i64>, Query, description = "1-based page, 10 questions per page")),
    responses(
        (status = 200, description = "One page of questions", body = QuestionPage),
        (status = 400, description = "Store failure", body = crate::error::ErrorBody)
    )
)]
pub async fn list_questions(
    State(store): State<DynStore>,
    AppQuery(params): AppQuery<ListParams>,
) -> Result<impl IntoResponse, AppError> {
    let questions = store.questions().await?;
    let categories = category_map(store.categories().await?);

    let total_questions = questions.len();
    let current_category = questions
        .first()
        .and_then(|q| categories.get(&q.category))
        .cloned();

    Ok(Json(QuestionPage {
        success: true,
        questions: paginate(questions, params.page()),
        total_questions,
        categories,
        current_category,
    }))
}

/// Deletes a question by ID.
/// Any failure, from a missing row to a store error, answers 404.
#[utoipa::path(
    delete,
    path = "/questions/{id}",
    tag = "Questions",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question deleted", body = MessageResponse),
        (status = 404, description = "No such question", body = crate::error::ErrorBody)
    )
)]
pub async fn delete_question(
    State(store): State<DynStore>,
    AppPath(id): AppPath<i64>,
) -> Result<impl IntoResponse, AppError> {
    let store_failure = |e: sqlx::Error| {
        tracing::error!("Failed to delete question {}: {:?}", id, e);
        AppError::NotFound(None)
    };

    let question = store
        .question(id)
        .await
        .map_err(store_failure)?
        .ok_or(AppError::NotFound(None))?;

    if !store.delete_question(question.id).await.map_err(store_failure)? {
        return Err(AppError::NotFound(None));
    }

    tracing::info!("Deleted question {}", question.id);
    Ok(Json(MessageResponse::new("Question deleted successfully")))
}

/// Creates a new question.
/// Reports only the first missing field, checked in the order
/// question, answer, difficulty, category.
#[utoipa::path(
    post,
    path = "/questions",
    tag = "Questions",
    request_body = CreateQuestionRequest,
    responses(
        (status = 200, description = "Question added", body = MessageResponse),
        (status = 400, description = "Missing field or store failure", body = crate::error::ErrorBody)
    )
)]
pub async fn create_question(
    State(store): State<DynStore>,
    AppJson(payload): AppJson<CreateQuestionRequest>,
) -> Result<impl IntoResponse, AppError> {
    let new_question = payload.into_new_question().inspect_err(|e| {
        tracing::debug!("Rejected question: {}", e);
    })?;

    let created = store.insert_question(&new_question).await?;

    tracing::info!("Created question {} in category {}", created.id, created.category);
    Ok(Json(MessageResponse::new("Question added successfully")))
}

/// Case-insensitive substring search over question text. No pagination.
#[utoipa::path(
    post,
    path = "/questions/search",
    tag = "Questions",
    request_body = SearchRequest,
    responses(
        (status = 200, description = "Matching questions", body = QuestionList),
        (status = 400, description = "Missing term or store failure", body = crate::error::ErrorBody)
    )
)]
pub async fn search_questions(
    State(store): State<DynStore>,
    AppJson(payload): AppJson<SearchRequest>,
) -> Result<impl IntoResponse, AppError> {
    let term = payload
        .search_term
        .ok_or_else(|| AppError::bad_request("Search term required"))?;

    let questions = store.search_questions(&term).await?;
    let total_questions = store.count_matching(&term).await?;
    let current_category = current_category(store.as_ref(), &questions).await?;

    Ok(Json(QuestionList {
        success: true,
        questions,
        total_questions,
        current_category,
    }))
}
