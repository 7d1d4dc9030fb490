// src/store/mod.rs

//! Persistence seam. Handlers only see [`TriviaStore`]; `main` decides which
//! implementation backs it.

#[cfg(any(test, feature = "test-support"))]
pub mod memory;
pub mod postgres;

use async_trait::async_trait;

use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

pub type StoreResult<T> = Result<T, sqlx::Error>;

/// Everything the API needs from the relational store.
///
/// Question listings come back ordered by id so that pagination and the
/// "first question" of a result set are stable between calls.
#[async_trait]
pub trait TriviaStore: Send + Sync + 'static {
    async fn categories(&self) -> StoreResult<Vec<Category>>;

    async fn category(&self, id: i64) -> StoreResult<Option<Category>>;

    async fn questions(&self) -> StoreResult<Vec<Question>>;

    async fn question(&self, id: i64) -> StoreResult<Option<Question>>;

    /// Questions whose category equals `category` exactly.
    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>>;

    /// Case-insensitive substring match on the question text only.
    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>>;

    /// Number of questions [`TriviaStore::search_questions`] would return.
    async fn count_matching(&self, term: &str) -> StoreResult<i64>;

    /// A random question outside `exclude`, limited to `category` when given.
    async fn random_question(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> StoreResult<Option<Question>>;

    async fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question>;

    /// Returns `true` if the question existed and was removed.
    async fn delete_question(&self, id: i64) -> StoreResult<bool>;
}

/// Wraps `term` in `%` wildcards for `ILIKE`, escaping the pattern
/// metacharacters it contains so they match literally.
pub fn like_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}
