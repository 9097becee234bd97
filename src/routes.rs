use crate::error::PollError;
use crate::startup::AppState;
use crate::{api, views};
use axum::{
    Router,
    extract::Extension,
    http::{
        Method, StatusCode,
        header::{ACCEPT, CONTENT_TYPE},
    },
    response::{IntoResponse, Redirect},
    routing::{get, post},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

pub const APP_NAMESPACE: &str = "polls";

/// Every named page of the polls app.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Index,
    Detail(i64),
    Results(i64),
    Vote(i64),
}

impl Route {
    pub fn name(&self) -> &'static str {
        match self {
            Route::Index => "index",
            Route::Detail(_) => "detail",
            Route::Results(_) => "results",
            Route::Vote(_) => "vote",
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Index => format!("/{APP_NAMESPACE}/"),
            Route::Detail(id) => format!("/{APP_NAMESPACE}/{id}/"),
            Route::Results(id) => format!("/{APP_NAMESPACE}/{id}/results/"),
            Route::Vote(id) => format!("/{APP_NAMESPACE}/{id}/vote/"),
        }
    }
}

/// Resolves a route name such as `polls:detail` (or just `detail`) plus its
/// arguments to a path.
pub fn reverse(name: &str, args: &[i64]) -> Result<String, PollError> {
    let local = match name.split_once(':') {
        Some((APP_NAMESPACE, local)) => local,
        Some(_) => return Err(PollError::NoReverseMatch(name.to_string())),
        None => name,
    };

    let route = match (local, args) {
        ("index", []) => Route::Index,
        ("detail", [id]) => Route::Detail(*id),
        ("results", [id]) => Route::Results(*id),
        ("vote", [id]) => Route::Vote(*id),
        _ => {
            return Err(PollError::NoReverseMatch(format!(
                "{name} with {} argument(s)",
                args.len()
            )));
        }
    };

    Ok(route.path())
}

pub fn app(app_state: AppState) -> Router {
    Router::new()
        .route("/polls", get(|| async { Redirect::permanent("/polls/") }))
        .route("/polls/", get(views::index))
        .route("/polls/:question_id/", get(views::detail))
        .route("/polls/:question_id/results/", get(views::results))
        .route("/polls/:question_id/vote/", post(views::vote))
        .route(
            "/api/questions",
            get(api::list_questions).post(api::create_question),
        )
        .route(
            "/api/questions/:question_id",
            get(api::get_question).delete(api::delete_question),
        )
        .layer(Extension(app_state))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::mirror_request())
                .allow_credentials(true)
                .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE, ACCEPT]),
        )
        .fallback(handler_404)
}

async fn handler_404() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, "nothing to see here")
}
