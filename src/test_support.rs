use crate::clock::FixedClock;
use crate::db::{self, Choice, DbPool, Question};
use crate::routes;
use crate::startup::AppState;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use axum::response::Response;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::sync::Arc;
use tower::ServiceExt;

/// The instant every test treats as "now".
pub fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 14, 12, 0, 0).unwrap()
}

pub async fn test_pool() -> DbPool {
    db::init_db("sqlite::memory:")
        .await
        .expect("in-memory database")
}

pub async fn test_state() -> AppState {
    AppState::new(test_pool().await, Arc::new(FixedClock(fixed_now())))
}

/// Creates a question published `days` from now (negative for the past).
pub async fn create_question(pool: &DbPool, question_text: &str, days: i64) -> Question {
    db::create_question(pool, question_text, fixed_now() + Duration::days(days))
        .await
        .expect("create question")
}

pub async fn create_choice(
    pool: &DbPool,
    question_id: i64,
    choice_text: &str,
    votes: i64,
) -> Choice {
    db::create_choice(pool, question_id, choice_text, votes)
        .await
        .expect("create choice")
}

pub async fn send(app_state: &AppState, request: Request<Body>) -> Response {
    routes::app(app_state.clone())
        .oneshot(request)
        .await
        .expect("router is infallible")
}

pub async fn body_string(response: Response) -> String {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

pub async fn get(app_state: &AppState, uri: &str) -> (StatusCode, String) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = send(app_state, request).await;
    let status = response.status();
    (status, body_string(response).await)
}

pub async fn post_form(app_state: &AppState, uri: &str, form: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app_state, request).await
}

pub async fn send_json(
    app_state: &AppState,
    method: &str,
    uri: &str,
    payload: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match payload {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    let response = send(app_state, request).await;
    let status = response.status();
    let body = body_string(response).await;
    let value = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_str(&body).expect("json body")
    };
    (status, value)
}
