// File: src/routes.rs
// Purpose: HTTP handlers for rendering and validating the employee form

use axum::{
    extract::State,
    response::{Html, IntoResponse, Redirect},
    routing::{get, post},
    Form, Json, Router,
};
use employee_form::{
    Config, Dialog, ErrorMap, FieldKind, FieldValues, FormController, SubmissionResult,
};
use serde::Serialize;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::pages;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

/// JSON body returned by `POST /api/validate`
#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub result: SubmissionResult,
    pub dialog: Dialog,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/submit", post(submit_handler))
        .route("/reset", post(reset_handler))
        .route("/api/validate", post(validate_handler))
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler() -> Html<String> {
    Html(pages::form_page(&FieldValues::default(), &ErrorMap::new(), None).into_string())
}

/// Each request gets its own controller; nothing is kept between submits
async fn submit_handler(
    State(state): State<AppState>,
    Form(values): Form<FieldValues>,
) -> Html<String> {
    let mut form = FormController::with_dialog_config(state.config.dialog.clone());
    for field in FieldKind::ALL {
        form.set_field(field, values.get(field));
    }
    form.submit();

    let dialog = form.dialog();
    Html(pages::form_page(form.values(), form.errors(), dialog.as_ref()).into_string())
}

async fn reset_handler() -> impl IntoResponse {
    Redirect::to("/")
}

async fn validate_handler(
    State(state): State<AppState>,
    Json(values): Json<FieldValues>,
) -> Json<ValidateResponse> {
    let result = SubmissionResult::evaluate(&values);
    let dialog = Dialog::with_config(&result, &state.config.dialog);
    Json(ValidateResponse { result, dialog })
}

async fn health_handler() -> &'static str {
    "ok"
}
