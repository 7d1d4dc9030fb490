// src/models/quiz.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{flex, question::Question};

/// Category id the quiz front end sends for its "ALL" choice.
pub const ALL_CATEGORIES: i64 = 0;

#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizCategory {
    /// Category to draw from. `0` draws from every category (the quiz "ALL" choice).
    #[serde(deserialize_with = "flex::int")]
    #[schema(value_type = i64)]
    pub id: i64,

    /// Label echoed back by the client; not used for selection.
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
}

impl QuizCategory {
    /// Category filter for the store; `None` means every category.
    pub fn filter(&self) -> Option<i64> {
        (self.id != ALL_CATEGORIES).then_some(self.id)
    }
}

/// DTO for asking the next quiz question.
/// The client accumulates `previous_questions` across a quiz session.
#[derive(Debug, Deserialize, ToSchema)]
pub struct QuizRequest {
    #[serde(default)]
    pub previous_questions: Vec<i64>,
    pub quiz_category: Option<QuizCategory>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct QuizQuestion {
    pub success: bool,
    pub question: Question,
}
