// src/models/question.rs

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::prelude::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

use crate::{error::AppError, models::flex};

/// Represents the 'questions' table in the database.
/// Serializes to the wire format shared by every question-returning endpoint.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize, ToSchema)]
pub struct Question {
    pub id: i64,

    /// The text of the question.
    pub question: String,

    pub answer: String,

    /// Id of the category; not checked against the categories table.
    pub category: i64,

    pub difficulty: i32,
}

/// A fully validated question ready for insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i64,
}

/// DTO for creating a new question.
/// Fields arrive as raw JSON so that presence is checked, in order, before
/// any type: a mistyped `difficulty` must not hide a missing `question`.
#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct CreateQuestionRequest {
    #[validate(required(message = "Question required"))]
    #[schema(value_type = Option<String>)]
    pub question: Option<Value>,

    #[validate(required(message = "Answer required"))]
    #[schema(value_type = Option<String>)]
    pub answer: Option<Value>,

    #[validate(required(message = "Question difficulty required"))]
    #[schema(value_type = Option<i32>)]
    pub difficulty: Option<Value>,

    #[validate(required(message = "Category required"))]
    #[schema(value_type = Option<i64>)]
    pub category: Option<Value>,
}

/// Order in which missing fields are reported; only the first one is.
const FIELD_ORDER: [&str; 4] = ["question", "answer", "difficulty", "category"];

fn first_failure(errors: &ValidationErrors) -> AppError {
    let field_errors = errors.field_errors();

    FIELD_ORDER
        .iter()
        .filter_map(|field| field_errors.get(*field))
        .filter_map(|errs| errs.first())
        .find_map(|err| err.message.as_ref())
        .map(|msg| AppError::bad_request(msg.to_string()))
        .unwrap_or(AppError::BadRequest(None))
}

fn text(value: Option<Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s),
        _ => None,
    }
}

impl CreateQuestionRequest {
    /// Reports the first missing field, then rejects any mistyped value
    /// with a generic bad request.
    pub fn into_new_question(self) -> Result<NewQuestion, AppError> {
        if let Err(validation_errors) = self.validate() {
            return Err(first_failure(&validation_errors));
        }

        let difficulty = self.difficulty.as_ref().and_then(flex::int_value);
        let category = self.category.as_ref().and_then(flex::int_value);

        match (text(self.question), text(self.answer), difficulty, category) {
            (Some(question), Some(answer), Some(difficulty), Some(category)) => Ok(NewQuestion {
                question,
                answer,
                difficulty,
                category,
            }),
            _ => Err(AppError::BadRequest(None)),
        }
    }
}

/// Query parameters for listing questions.
/// `page` stays a string so an unparsable value falls back to the first page.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub page: Option<String>,
}

impl ListParams {
    pub fn page(&self) -> i64 {
        self.page
            .as_deref()
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(1)
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct SearchRequest {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// One page of the full question list.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPage {
    pub success: bool,
    pub questions: Vec<Question>,
    /// Count of all questions, not just this page.
    pub total_questions: usize,
    #[schema(value_type = Object)]
    pub categories: crate::models::category::CategoryMap,
    /// Label of the category of the first question overall, not of this page.
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuestionList {
    pub success: bool,
    pub questions: Vec<Question>,
    pub total_questions: i64,
    /// Label of the category of the first question in `questions`.
    pub current_category: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}
