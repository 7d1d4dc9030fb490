// src/store/postgres.rs

use async_trait::async_trait;
use sqlx::PgPool;

use super::{StoreResult, TriviaStore, like_pattern};
use crate::models::{
    category::Category,
    question::{NewQuestion, Question},
};

/// `TriviaStore` over a Postgres pool. Queries are checked at runtime so the
/// crate builds without a live database.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TriviaStore for PgStore {
    async fn categories(&self) -> StoreResult<Vec<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    async fn category(&self, id: i64) -> StoreResult<Option<Category>> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    async fn questions(&self) -> StoreResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await
    }

    async fn question(&self, id: i64) -> StoreResult<Option<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    async fn questions_in_category(&self, category: i64) -> StoreResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = $1
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }

    async fn search_questions(&self, term: &str) -> StoreResult<Vec<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE question ILIKE $1
            ORDER BY id
            "#,
        )
        .bind(like_pattern(term))
        .fetch_all(&self.pool)
        .await
    }

    async fn count_matching(&self, term: &str) -> StoreResult<i64> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM questions WHERE question ILIKE $1")
            .bind(like_pattern(term))
            .fetch_one(&self.pool)
            .await
    }

    async fn random_question(
        &self,
        category: Option<i64>,
        exclude: &[i64],
    ) -> StoreResult<Option<Question>> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE ($1::BIGINT IS NULL OR category = $1)
              AND NOT (id = ANY($2))
            ORDER BY RANDOM()
            LIMIT 1
            "#,
        )
        .bind(category)
        .bind(exclude)
        .fetch_optional(&self.pool)
        .await
    }

    async fn insert_question(&self, new: &NewQuestion) -> StoreResult<Question> {
        sqlx::query_as::<_, Question>(
            r#"
            INSERT INTO questions (question, answer, difficulty, category)
            VALUES ($1, $2, $3, $4)
            RETURNING id, question, answer, category, difficulty
            "#,
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(new.difficulty)
        .bind(new.category)
        .fetch_one(&self.pool)
        .await
    }

    async fn delete_question(&self, id: i64) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
