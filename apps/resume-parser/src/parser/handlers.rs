//! Axum route handlers for the Parse API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};

use crate::errors::AppError;
use crate::parser::models::{ParseRequest, ParseResponse};
use crate::state::AppState;

/// POST /parse
///
/// Extracts potential skills from raw resume text. Empty text is valid and
/// yields an empty list; only a missing or mistyped body is rejected.
pub async fn handle_parse(
    State(state): State<AppState>,
    payload: Result<Json<ParseRequest>, JsonRejection>,
) -> Result<Json<ParseResponse>, AppError> {
    let Json(request) = payload?;

    let response = state.extractor.extract(&request.resume_text);

    Ok(Json(response))
}
