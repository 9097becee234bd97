use crate::db::connection::DbPool;
use crate::db::models::Question;
use chrono::{DateTime, Utc};
use sqlx::Error;

pub async fn create_question(
    pool: &DbPool,
    question_text: &str,
    pub_date: DateTime<Utc>,
) -> Result<Question, Error> {
    let id = sqlx::query("INSERT INTO questions (question_text, pub_date) VALUES ($1, $2)")
        .bind(question_text)
        .bind(pub_date)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(Question {
        id,
        question_text: question_text.to_string(),
        pub_date,
    })
}

pub async fn get_question(pool: &DbPool, question_id: i64) -> Result<Option<Question>, Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question_text, pub_date FROM questions WHERE id = $1",
    )
    .bind(question_id)
    .fetch_optional(pool)
    .await
}

/// Like [`get_question`], but hides questions whose `pub_date` is after `now`.
pub async fn get_published_question(
    pool: &DbPool,
    question_id: i64,
    now: DateTime<Utc>,
) -> Result<Option<Question>, Error> {
    sqlx::query_as::<_, Question>(
        "SELECT id, question_text, pub_date FROM questions WHERE id = $1 AND pub_date <= $2",
    )
    .bind(question_id)
    .bind(now)
    .fetch_optional(pool)
    .await
}

/// Questions published at or before `now`, newest first. `None` means no limit.
pub async fn latest_published_questions(
    pool: &DbPool,
    now: DateTime<Utc>,
    limit: Option<i64>,
) -> Result<Vec<Question>, Error> {
    // SQLite treats a negative LIMIT as unbounded.
    sqlx::query_as::<_, Question>(
        "SELECT id, question_text, pub_date FROM questions WHERE pub_date <= $1 ORDER BY pub_date DESC, id DESC LIMIT $2",
    )
    .bind(now)
    .bind(limit.unwrap_or(-1))
    .fetch_all(pool)
    .await
}

/// Returns false if there was no such question. Choices go with it.
pub async fn delete_question(pool: &DbPool, question_id: i64) -> Result<bool, Error> {
    let result = sqlx::query("DELETE FROM questions WHERE id = $1")
        .bind(question_id)
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}
