// src/handlers/mod.rs

pub mod category;
pub mod question;
pub mod quiz;

use crate::{models::question::Question, store::TriviaStore};

/// Label of the category of the first question, the `currentCategory` of
/// list responses. `None` for an empty list or an unknown category id.
pub(crate) async fn current_category(
    store: &dyn TriviaStore,
    questions: &[Question],
) -> Result<Option<String>, sqlx::Error> {
    match questions.first() {
        Some(first) => Ok(store
            .category(first.category)
            .await?
            .map(|c| c.category_type)),
        None => Ok(None),
    }
}
