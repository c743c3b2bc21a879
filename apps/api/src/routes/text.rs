//! Handlers for the text helpers: spell correction and LLM-backed
//! description suggestions. Both delegate to the capability traits in
//! `AppState`; neither touches an external service directly.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;
use crate::suggestion::SuggestionKind;

#[derive(Debug, Deserialize)]
pub struct SpellcheckRequest {
    pub text: Option<String>,
}

/// POST /resume/spellcheck
///
/// Returns the original text alongside its corrected form.
pub async fn spellcheck(
    State(state): State<AppState>,
    Json(request): Json<SpellcheckRequest>,
) -> Result<Json<Value>, AppError> {
    let text = request
        .text
        .ok_or_else(|| AppError::Validation("Text is required".to_string()))?;

    let after = state.spell.correct(&text);

    Ok(Json(json!({ "before": text, "after": after })))
}

#[derive(Debug, Deserialize)]
pub struct SuggestionRequest {
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

/// POST /suggestion
///
/// Asks the suggestion provider for an improved section description.
pub async fn suggest(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> Result<Json<Value>, AppError> {
    let description = request.description.filter(|d| !d.is_empty());
    let kind = request.kind.filter(|k| !k.is_empty());

    let (Some(description), Some(kind)) = (description, kind) else {
        return Err(AppError::Validation(
            "Description and type are required".to_string(),
        ));
    };

    let kind = SuggestionKind::parse(&kind).ok_or_else(|| {
        AppError::Validation("Invalid type: must be 'education' or 'experience'".to_string())
    })?;

    let suggestion = state.suggestions.improve(&description, kind).await?;

    Ok(Json(json!({ "suggestion": suggestion })))
}
