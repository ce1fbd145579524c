//! Axum router and handlers for the web UI.

use crate::page::{self, FormState, Outcome};
use crate::pipeline::Pipeline;
use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pipeline: Arc<Pipeline>,
}

impl AppState {
    pub fn new(pipeline: Pipeline) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
        }
    }
}

/// Form fields posted by the page
#[derive(Debug, Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    pub url: String,
    /// Present (as "on") only when the checkbox is ticked
    #[serde(default)]
    pub show_full: Option<String>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/summarize", post(summarize))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(page::render(&FormState::default(), &Outcome::Idle))
}

async fn health() -> &'static str {
    "ok"
}

async fn summarize(State(state): State<AppState>, Form(form): Form<SummarizeForm>) -> Html<String> {
    let url = form.url.trim();
    let show_full = form.show_full.is_some();

    let outcome = if url.is_empty() {
        Outcome::MissingUrl
    } else {
        let result = state.pipeline.run(url).await;
        if let Err(e) = &result {
            tracing::warn!(%url, stage = ?e.stage(), error = %e, "summarisation failed");
        }
        Outcome::from_result(result, show_full)
    };

    Html(page::render(&FormState { url, show_full }, &outcome))
}
