//! Browser-facing handlers. Every action is a form POST that redirects back
//! to `/`, which renders the view for the session's current step.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, Redirect},
    Form, Json,
};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use shared::{
    domain::Language,
    error::{ApiError, ErrorCode},
    protocol::OrderDraft,
};
use tracing::{debug, error};

use crate::{api, app_state::AppState, render::SessionView, sessions::session_from_jar};

type PageError = (StatusCode, Json<ApiError>);

#[derive(Debug, Deserialize)]
pub(crate) struct IndexQuery {
    platform: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LanguageForm {
    lang: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PlanForm {
    #[serde(default)]
    plan: String,
}

pub(crate) async fn index(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Query(q): Query<IndexQuery>,
) -> Result<(CookieJar, Html<String>), PageError> {
    let (jar, session_id) = session_from_jar(jar);
    let view = state
        .api
        .sessions
        .with_session(session_id, SessionView::capture)
        .await;
    let body = state
        .renderer
        .render(&view, q.platform.as_deref(), &state.site)
        .map_err(|e| {
            error!(error = %e, step = %view.step, "failed to render page");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ApiError::new(ErrorCode::Internal, "failed to render page")),
            )
        })?;
    Ok((jar, Html(body)))
}

pub(crate) async fn change_language(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<LanguageForm>,
) -> Result<(CookieJar, Redirect), PageError> {
    let lang = form
        .lang
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(str::parse::<Language>)
        .transpose()
        .map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new(ErrorCode::Validation, e.to_string())),
            )
        })?;
    let (jar, session_id) = session_from_jar(jar);
    let lang = api::set_language(&state.api, session_id, lang).await;
    debug!(session = %session_id, %lang, "language changed");
    Ok((jar, Redirect::to("/")))
}

pub(crate) async fn select_plan(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<PlanForm>,
) -> (CookieJar, Redirect) {
    let (jar, session_id) = session_from_jar(jar);
    if let Err(e) = api::select_plan(&state.api, session_id, form.plan).await {
        debug!(session = %session_id, error = %e.message, "plan selection ignored");
    }
    (jar, Redirect::to("/"))
}

pub(crate) async fn submit_order(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(draft): Form<OrderDraft>,
) -> (CookieJar, Redirect) {
    let (jar, session_id) = session_from_jar(jar);
    match api::submit_checkout(&state.api, session_id, draft).await {
        Ok(outcome) => debug!(session = %session_id, ?outcome, "order form submitted"),
        Err(e) => debug!(session = %session_id, error = %e.message, "order form rejected"),
    }
    (jar, Redirect::to("/"))
}

pub(crate) async fn back(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let (jar, session_id) = session_from_jar(jar);
    if let Err(e) = api::go_back(&state.api, session_id).await {
        debug!(session = %session_id, error = %e.message, "back ignored");
    }
    (jar, Redirect::to("/"))
}

pub(crate) async fn home(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Redirect) {
    let (jar, session_id) = session_from_jar(jar);
    api::go_home(&state.api, session_id).await;
    (jar, Redirect::to("/"))
}
