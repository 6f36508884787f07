use std::{net::SocketAddr, sync::Arc};

use axum::{
    extract::{DefaultBodyLimit, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use lead_gateway::OrderGateway;
use serde::Deserialize;
use shared::{
    domain::Language,
    error::{ApiError, ErrorCode},
    protocol::{CheckoutSnapshot, OrderDraft, PlanSummary, SubmissionResult},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod api;
mod app_state;
mod config;
mod pages;
mod render;
mod sessions;

use api::ApiContext;
use app_state::AppState;
use config::load_settings;
use render::{Renderer, SiteInfo};
use sessions::{session_from_jar, SessionStore};

#[derive(Debug, Deserialize)]
struct PlansQuery {
    lang: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let settings = load_settings()?;
    let gateway = OrderGateway::new(settings.gateway_config()?);
    if gateway.is_demo() {
        info!("no collection endpoint configured; orders are logged only");
    }

    let state = AppState {
        api: ApiContext {
            sessions: SessionStore::new(settings.max_sessions, settings.default_language),
            gateway,
        },
        renderer: Renderer::new()?,
        site: SiteInfo {
            whatsapp_number: settings.whatsapp_number.clone(),
        },
    };
    let app = build_router(Arc::new(state), settings.max_body_bytes);

    let addr: SocketAddr = settings.bind_addr.parse()?;
    info!(%addr, "server listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

fn build_router(state: Arc<AppState>, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/", get(pages::index))
        .route("/language", post(pages::change_language))
        .route("/plans/select", post(pages::select_plan))
        .route("/order", post(pages::submit_order))
        .route("/order/back", post(pages::back))
        .route("/home", post(pages::home))
        .route("/api/plans", get(http_list_plans))
        .route("/api/orders", post(http_submit_order))
        .route("/api/checkout", get(http_checkout_snapshot))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(DefaultBodyLimit::max(max_body_bytes)),
        )
        .with_state(state)
}

async fn healthz() -> &'static str {
    "ok"
}

async fn http_list_plans(
    State(state): State<Arc<AppState>>,
    Query(q): Query<PlansQuery>,
) -> Result<Json<Vec<PlanSummary>>, (StatusCode, Json<ApiError>)> {
    let lang = match q.lang.as_deref().filter(|raw| !raw.trim().is_empty()) {
        Some(raw) => raw.parse::<Language>().map_err(|e| {
            (
                StatusCode::BAD_REQUEST,
                Json(ApiError::new(ErrorCode::Validation, e.to_string())),
            )
        })?,
        None => state.api.sessions.default_language(),
    };
    Ok(Json(api::list_plans(lang)))
}

async fn http_submit_order(
    State(state): State<Arc<AppState>>,
    Json(draft): Json<OrderDraft>,
) -> Result<Json<SubmissionResult>, (StatusCode, Json<ApiError>)> {
    api::submit_order(&state.api, draft)
        .await
        .map(Json)
        .map_err(|e| (status_for(e.code), Json(e)))
}

async fn http_checkout_snapshot(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> (CookieJar, Json<CheckoutSnapshot>) {
    let (jar, session_id) = session_from_jar(jar);
    let snapshot = api::checkout_snapshot(&state.api, session_id).await;
    (jar, Json(snapshot))
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
