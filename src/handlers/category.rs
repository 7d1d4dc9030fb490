// src/handlers/category.rs

use axum::{
    Json,
    extract::{Path, State, rejection::PathRejection},
    response::IntoResponse,
};

use crate::{
    error::AppError,
    handlers::current_category,
    models::{
        category::{CategoriesResponse, category_map},
        question::QuestionList,
    },
    state::DynStore,
};

/// Lists every category as an id → label map.
#[utoipa::path(
    get,
    path = "/categories",
    tag = "Categories",
    responses(
        (status = 200, description = "All categories", body = CategoriesResponse),
        (status = 400, description = "Store failure", body = crate::error::ErrorBody)
    )
)]
pub async fn list_categories(State(store): State<DynStore>) -> Result<impl IntoResponse, AppError> {
    let categories = store.categories().await?;

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(categories),
    }))
}

/// Lists every question of one category. No pagination.
#[utoipa::path(
    get,
    path = "/categories/{id}/questions",
    tag = "Categories",
    params(("id" = i64, Path, description = "Category id")),
    responses(
        (status = 200, description = "Questions of the category", body = QuestionList),
        (status = 400, description = "Store failure or non-integer id", body = crate::error::ErrorBody)
    )
)]
pub async fn questions_by_category(
    State(store): State<DynStore>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, AppError> {
    // Unlike question ids, a bad category id is a bad request, not a missing resource.
    let Path(id) = path.map_err(|rejection| {
        tracing::debug!("Rejected category id: {}", rejection.body_text());
        AppError::BadRequest(None)
    })?;

    let questions = store.questions_in_category(id).await?;
    let current_category = current_category(store.as_ref(), &questions).await?;

    Ok(Json(QuestionList {
        success: true,
        total_questions: questions.len() as i64,
        questions,
        current_category,
    }))
}
