use axum::{
    Form, Json, Router,
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use askama::Template;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{CorsLayer, Any};

use crate::{models::GenerateRequest, page::IndexPage, pdf::generate_script_pdf, shell::{Shell, ShellState}};

#[derive(Clone)]
pub struct AppState {
    pub shell: Arc<Shell>,
}

#[derive(Debug, Deserialize)]
pub struct PromptForm {
    #[serde(default)]
    pub prompt: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/generate", post(generate_form))
        .route("/trends/:index/select", post(select_trend))
        .route("/api/state", get(shell_state))
        .route("/api/generate", post(generate_json))
        .route("/api/script.pdf", get(export_script))
        .route("/health", get(health))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}

pub async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let page = IndexPage::from(&state.shell.snapshot());
    page.render().map(Html).map_err(|e| {
        tracing::error!("❌ Page render failed: {}", e);
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

pub async fn generate_form(State(state): State<AppState>, Form(form): Form<PromptForm>) -> Redirect {
    if state.shell.submit_prompt(&form.prompt).await.is_none() && !state.shell.snapshot().is_generating() {
        // Nothing ran; keep what the user typed.
        state.shell.set_prompt(&form.prompt);
    }
    Redirect::to("/")
}

pub async fn select_trend(Path(index): Path<usize>, State(state): State<AppState>) -> Result<Redirect, StatusCode> {
    let prompt = state.shell.select_trend(index).ok_or(StatusCode::NOT_FOUND)?;
    tracing::info!("🎯 Trend {} selected, prompt set to: {}", index, prompt);
    Ok(Redirect::to("/"))
}

pub async fn shell_state(State(state): State<AppState>) -> Json<ShellState> {
    Json(state.shell.snapshot())
}

pub async fn generate_json(State(state): State<AppState>, Json(body): Json<GenerateRequest>) -> Response {
    if body.prompt.trim().is_empty() {
        return (StatusCode::BAD_REQUEST, Json(json!({"error": "Prompt is required"}))).into_response();
    }
    match state.shell.submit_prompt(&body.prompt).await {
        Some(result) => Json(result).into_response(),
        None => (StatusCode::CONFLICT, Json(json!({"error": "A generation is already in progress"}))).into_response(),
    }
}

pub async fn export_script(State(state): State<AppState>) -> Response {
    let snapshot = state.shell.snapshot();
    let Some(result) = snapshot.result else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match generate_script_pdf(&snapshot.prompt, &result) {
        Ok(bytes) => (
            StatusCode::OK,
            [
                (header::CONTENT_TYPE, "application/pdf"),
                (header::CONTENT_DISPOSITION, "attachment; filename=\"viral_video_script.pdf\""),
            ],
            bytes,
        ).into_response(),
        Err(e) => {
            tracing::error!("❌ Script export failed: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "service": "ViralCraft AI",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
