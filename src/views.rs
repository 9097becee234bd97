use crate::db::{self, Choice, Question};
use crate::error::PollError;
use crate::routes::Route;
use crate::startup::AppState;
use crate::templates;
use axum::{
    Form,
    extract::{
        Extension, Path,
        rejection::{FormRejection, PathRejection},
    },
    response::{Html, IntoResponse, Redirect, Response},
};
use serde::Deserialize;

/// How many questions the index page shows.
pub const LATEST_QUESTION_LIMIT: i64 = 5;
pub const EMPTY_INDEX_MESSAGE: &str = "No polls are available.";
pub const NO_CHOICE_SELECTED: &str = "You didn't select a choice.";

// Page contexts. Each one renders itself through `templates`.
#[derive(Debug)]
pub struct IndexPage {
    pub latest_question_list: Vec<Question>,
}

#[derive(Debug)]
pub struct DetailPage {
    pub question: Question,
    pub choices: Vec<Choice>,
    pub error_message: Option<String>,
}

#[derive(Debug)]
pub struct ResultsPage {
    pub question: Question,
    pub choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
pub struct VoteForm {
    pub choice: Option<String>,
}

impl IntoResponse for IndexPage {
    fn into_response(self) -> Response {
        Html(templates::render_index(&self)).into_response()
    }
}

impl IntoResponse for DetailPage {
    fn into_response(self) -> Response {
        Html(templates::render_detail(&self)).into_response()
    }
}

impl IntoResponse for ResultsPage {
    fn into_response(self) -> Response {
        Html(templates::render_results(&self)).into_response()
    }
}

/// An id that cannot name a stored question (not a number, or out of range)
/// is reported the same way as a question that does not exist.
pub fn question_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, PollError> {
    match path {
        Ok(Path(question_id)) => Ok(question_id),
        Err(rejection) => {
            debug!("unparsable question id: {rejection}");
            Err(PollError::QuestionNotFound)
        }
    }
}

// Future questions are treated exactly like missing ones.
async fn published_question(app_state: &AppState, question_id: i64) -> Result<Question, PollError> {
    db::get_published_question(&app_state.db, question_id, app_state.now())
        .await?
        .ok_or(PollError::QuestionNotFound)
}

/// The latest published questions, newest first
pub async fn index(Extension(app_state): Extension<AppState>) -> Result<IndexPage, PollError> {
    let latest_question_list = db::latest_published_questions(
        &app_state.db,
        app_state.now(),
        Some(LATEST_QUESTION_LIMIT),
    )
    .await?;

    debug!(count = latest_question_list.len(), "rendering poll index");

    Ok(IndexPage {
        latest_question_list,
    })
}

pub async fn detail(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<DetailPage, PollError> {
    let question = published_question(&app_state, question_id(path)?).await?;
    let choices = db::get_choices(&app_state.db, question.id).await?;

    Ok(DetailPage {
        question,
        choices,
        error_message: None,
    })
}

pub async fn results(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<ResultsPage, PollError> {
    let question = published_question(&app_state, question_id(path)?).await?;
    let choices = db::get_choices(&app_state.db, question.id).await?;

    Ok(ResultsPage { question, choices })
}

/// Record a vote, then send the browser to the results page so a reload
/// does not vote twice.
pub async fn vote(
    Extension(app_state): Extension<AppState>,
    path: Result<Path<i64>, PathRejection>,
    form: Result<Form<VoteForm>, FormRejection>,
) -> Result<Response, PollError> {
    let question_id = question_id(path)?;
    let question = published_question(&app_state, question_id).await?;

    // A body that is not a form counts as no choice at all.
    let choice = match form {
        Ok(Form(form)) => form.choice,
        Err(rejection) => {
            debug!("vote form rejected: {rejection}");
            None
        }
    };

    let selected = choice
        .as_deref()
        .and_then(|choice| choice.trim().parse::<i64>().ok());

    let recorded = match selected {
        Some(choice_id) => db::record_vote(&app_state.db, question.id, choice_id).await?,
        None => false,
    };

    if !recorded {
        warn!(question_id, choice = ?choice, "vote without a valid choice");
        let choices = db::get_choices(&app_state.db, question.id).await?;
        let page = DetailPage {
            question,
            choices,
            error_message: Some(NO_CHOICE_SELECTED.to_string()),
        };
        return Ok(page.into_response());
    }

    info!(question_id, choice_id = ?selected, "vote recorded");
    Ok(Redirect::to(&Route::Results(question.id).path()).into_response())
}
