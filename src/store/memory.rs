// src/store/memory.rs

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use rand::seq::SliceRandom;

use super::{StoreResult, TriviaStore};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// In-process `TriviaStore` backing the test suites.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    categories: Vec<Category>,
    questions: Vec<Question>,
    next_id: i64,
    failing: bool,
}

/// The six categories the seed migration installs.
pub const DEFAULT_CATEGORIES: [(i64, &str); 6] = [
    (1, "Science"),
    (2, "Art"),
    (3, "Geography"),
    (4, "History"),
    (5, "Entertainment"),
    (6, "Sports"),
];

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding [`DEFAULT_CATEGORIES`] and no questions.
    pub fn with_default_categories() -> Self {
        let store = Self::new();
        {
            let mut inner = store.lock();
            inner.categories = DEFAULT_CATEGORIES
                .iter()
                .map(|(id, label)| Category {
                    id: *id,
                    category_type: label.to_string(),
                })
                .collect();
        }
        store
    }

    /// Inserts without going through the async trait.
    pub fn add_question(&self, new: NewQuestion) -> Question {
        self.lock().insert(&new)
    }

    /// While set, every store call fails as if the database were unreachable.
    pub fn set_failing(&self, failing: bool) {
        self.lock().failing = failing;
    }

    pub fn question_ids(&self) -> Vec<i64> {
        self.lock().questions.iter().map(|q| q.id).collect()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read(&self) -> StoreResult<MutexGuard<'_, Inner>> {
        let inner = self.lock();
        if inner.failing {
            return Err(sqlx::Error::PoolTimedOut);
        }
        Ok(inner)
    }
}

impl Inner {
    fn insert(&mut self, new: &NewQuestion) -> Question {
        self.next_id += 1;
        let question = Question {
            id: self.next_id,
            question: new.question.clone(),
            answer: new.answer.clone(),
            category: new.category,
            difficulty: new.difficulty,
        };
        self.questions.push(question.clone());
        question
    }

    fn matching<'a>(&'a self, term: &str) -> impl Iterator<Item = &'a Question> + 'a {
        let needle = term.to_lowercase();
        self.questions
            .iter()
            .filter(move |q| q.question.to_lowercase().contains(&needle))
    }
}

#[async_trait]
impl TriviaStore for MemoryStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        Ok(self.read()?.categories.clone())
    }

    async fn category(&self, id: i64) -> StoreResult<Option<Category>> {
        Ok(self.read()?.categories.iter().find(|c| c.id == id).cloned())
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.questions.clone())
    }

    async fn question(&self, id: i64) -> StoreResult<Option<Question>> {
        Ok(self.read()?.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        Ok(self
            .read()?
            .questions
            .iter()
            .filter(|q| q.category == category)
            .cloned()
            .collect())
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        Ok(self.read()?.matching(term).cloned().collect())
    }

    async fn count_matching(&self, term: &str) -> StoreResult<i64> {
        Ok(self.read()?.matching(term).count() as i64)
    }

    async fn random_question(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> StoreResult<Option<Question>> {
        let inner = self.read()?;
        let eligible: Vec<&Question> = inner
            .questions
            .iter()
            .filter(|q| category.is_none_or(|c| q.category == c))
            .filter(|q| !exclude.contains(&q.id))
            .collect();

        Ok(eligible.choose(&mut rand::thread_rng()).map(|q| (*q).clone()))
    }

    async fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question> {
        let mut inner = self.read()?;
        Ok(inner.insert(new))
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        let mut inner = self.read()?;
        let before = inner.questions.len();
        inner.questions.retain(|q| q.id != id);
        Ok(inner.questions.len() < before)
    }
}
