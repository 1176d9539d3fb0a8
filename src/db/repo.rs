//! Repository layer for database operations.

use crate::domain::{Category, NewQuestion, Question};
use sqlx::sqlite::SqlitePool;

/// Repository for question and category storage. Holds all persistent state;
/// handlers go through it and keep nothing of their own across requests.
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Repository { pool }
    }

    /// All categories in id order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_categories(&self) -> Result<Vec<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories ORDER BY id")
            .fetch_all(&self.pool)
            .await
    }

    /// Look up a single category by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_category(&self, id: i64) -> Result<Option<Category>, sqlx::Error> {
        sqlx::query_as::<_, Category>("SELECT id, type FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// All questions in id (creation) order.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn list_questions(&self) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
    }

    /// Questions whose category column matches the given id text exactly.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn questions_by_category(&self, category: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE category = ?
            ORDER BY id
            "#,
        )
        .bind(category)
        .fetch_all(&self.pool)
        .await
    }

    /// Case-insensitive substring search over the question text only.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn search_questions(&self, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question, answer, category, difficulty
            FROM questions
            WHERE LOWER(question) LIKE '%' || LOWER(?) || '%'
            ORDER BY id
            "#,
        )
        .bind(term)
        .fetch_all(&self.pool)
        .await
    }

    /// Look up a single question by id.
    ///
    /// # Errors
    /// Returns an error if the query fails.
    pub async fn get_question(&self, id: i64) -> Result<Option<Question>, sqlx::Error> {
        sqlx::query_as::<_, Question>(
            "SELECT id, question, answer, category, difficulty FROM questions WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Insert a validated question and return its assigned id.
    ///
    /// # Errors
    /// Returns an error if the store rejects the write.
    pub async fn insert_question(&self, new: &NewQuestion) -> Result<i64, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO questions (question, answer, category, difficulty) VALUES (?, ?, ?, ?)",
        )
        .bind(&new.question)
        .bind(&new.answer)
        .bind(&new.category)
        .bind(new.difficulty)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_rowid())
    }

    /// Delete a question by id. Returns false when no row matched.
    ///
    /// # Errors
    /// Returns an error if the delete fails.
    pub async fn delete_question(&self, id: i64) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
