use crate::db::{self, Choice, Question};
use crate::error::PollError;
use crate::startup::AppState;
use crate::views::question_id;
use axum::{
    extract::{Extension, Json, Path, rejection::PathRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// A question must offer at least this many choices to be created here.
pub const MIN_CHOICES: usize = 2;

// Request/Response DTOs
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub question_text: String,
    pub pub_date: Option<DateTime<Utc>>,
    pub choices: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub id: i64,
    pub question_text: String,
    pub pub_date: String,
    pub was_published_recently: bool,
    pub choices: Vec<ChoiceResponse>,
}

#[derive(Debug, Serialize)]
pub struct ChoiceResponse {
    pub id: i64,
    pub choice_text: String,
    pub votes: i64,
}

impl QuestionResponse {
    fn new(question: Question, choices: Vec<Choice>, now: DateTime<Utc>) -> Self {
        QuestionResponse {
            id: question.id,
            was_published_recently: question.was_published_recently(now),
            pub_date: question.pub_date.to_rfc3339(),
            question_text: question.question_text,
            choices: choices
                .into_iter()
                .map(|choice| ChoiceResponse {
                    id: choice.id,
                    choice_text: choice.choice_text,
                    votes: choice.votes,
                })
                .collect(),
        }
    }
}

fn validate(payload: &CreateQuestionRequest) -> Result<(), PollError> {
    if payload.question_text.trim().is_empty() {
        return Err(PollError::InvalidRequest(
            "question_text must not be empty".to_string(),
        ));
    }

    if payload.choices.len() < MIN_CHOICES {
        return Err(PollError::InvalidRequest(format!(
            "a question needs at least {MIN_CHOICES} choices"
        )));
    }

    if payload.choices.iter().any(|c| c.trim().is_empty()) {
        return Err(PollError::InvalidRequest(
            "choice text must not be empty".to_string(),
        ));
    }

    Ok(())
}

/// Create a question together with its choices
pub async fn create_question(
    Extension(app_state): Extension<AppState>,
    Json(payload): Json<CreateQuestionRequest>,
) -> Result<impl IntoResponse, PollError> {
    validate(&payload)?;

    let now = app_state.now();
    let pub_date = payload.pub_date.unwrap_or(now);

    let question = db::create_question(&app_state.db, &payload.question_text, pub_date).await?;

    let mut choices = Vec::with_capacity(payload.choices.len());
    for choice_text in &payload.choices {
        choices.push(db::create_choice(&app_state.db, question.id, choice_text, 0).await?);
    }

    info!(
        question_id = question.id,
        choices = choices.len(),
        "question created"
    );

    Ok((
        StatusCode::CREATED,
        Json(QuestionResponse::new(question, choices, now)),
    ))
}

/// Every published question, newest first
pub async fn list_questions(
    Extension(app_state): Extension<AppState>,
) -> Result<impl IntoResponse, PollError> {
    let now = app_state.now();
    let questions = db::latest_published_questions(&app_state.db, now, None).await?;

    let mut responses = Vec::with_capacity(questions.len());
    for question in questions {
        let choices = db::get_choices(&app_state.db, question.id).await?;
        responses.push(QuestionResponse::new(question, choices, now));
    }

    Ok((StatusCode::OK, Json(responses)))
}

pub async fn get_question(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, PollError> {
    let now = app_state.now();
    let question = db::get_published_question(&app_state.db, question_id(path)?, now)
        .await?
        .ok_or(PollError::QuestionNotFound)?;
    let choices = db::get_choices(&app_state.db, question.id).await?;

    Ok((
        StatusCode::OK,
        Json(QuestionResponse::new(question, choices, now)),
    ))
}

/// Delete a question and, through the foreign key, its choices
pub async fn delete_question(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, PollError> {
    let question_id = question_id(path)?;
    if !db::delete_question(&app_state.db, question_id).await? {
        return Err(PollError::QuestionNotFound);
    }

    info!(question_id, "question deleted");

    Ok((
        StatusCode::OK,
        Json(json!({
            "success": true,
            "message": "Question deleted successfully"
        })),
    ))
}
