use crate::db::connection::DbPool;
use crate::db::models::Choice;
use sqlx::Error;

pub async fn create_choice(
    pool: &DbPool,
    question_id: i64,
    choice_text: &str,
    votes: i64,
) -> Result<Choice, Error> {
    let id = sqlx::query("INSERT INTO choices (question_id, choice_text, votes) VALUES ($1, $2, $3)")
        .bind(question_id)
        .bind(choice_text)
        .bind(votes)
        .execute(pool)
        .await?
        .last_insert_rowid();

    Ok(Choice {
        id,
        question_id,
        choice_text: choice_text.to_string(),
        votes,
    })
}

pub async fn get_choices(pool: &DbPool, question_id: i64) -> Result<Vec<Choice>, Error> {
    sqlx::query_as::<_, Choice>(
        "SELECT id, question_id, choice_text, votes FROM choices WHERE question_id = $1 ORDER BY id",
    )
    .bind(question_id)
    .fetch_all(pool)
    .await
}

/// Adds one vote to `choice_id`. Returns false when the choice does not
/// belong to `question_id`.
pub async fn record_vote(pool: &DbPool, question_id: i64, choice_id: i64) -> Result<bool, Error> {
    let result =
        sqlx::query("UPDATE choices SET votes = votes + 1 WHERE id = $1 AND question_id = $2")
            .bind(choice_id)
            .bind(question_id)
            .execute(pool)
            .await?;

    Ok(result.rows_affected() == 1)
}
