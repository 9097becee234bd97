use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::net::AddrParseError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PollError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
    #[error("Question not found")]
    QuestionNotFound,
    #[error("No reverse match for {0}")]
    NoReverseMatch(String),
    #[error("Database error: {0}")]
    DatabaseError(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid BIND_ADDR {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: AddrParseError,
    },
}

impl PollError {
    pub fn status(&self) -> StatusCode {
        match self {
            PollError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            PollError::QuestionNotFound => StatusCode::NOT_FOUND,
            PollError::NoReverseMatch(_) | PollError::DatabaseError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for PollError {
    fn into_response(self) -> Response {
        let status = self.status();
        let error_message = match &self {
            PollError::InvalidRequest(_) => "Invalid request",
            PollError::QuestionNotFound => "Question not found",
            PollError::NoReverseMatch(_) => "Route not found",
            PollError::DatabaseError(_) => "Database error",
        };

        if status.is_server_error() {
            error!("{self}");
        }

        let body = Json(json!({
            "error": error_message,
            "details": self.to_string()
        }));

        (status, body).into_response()
    }
}

impl From<sqlx::Error> for PollError {
    fn from(error: sqlx::Error) -> Self {
        PollError::DatabaseError(error.to_string())
    }
}
