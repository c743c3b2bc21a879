//! Description-improvement suggestions behind an injected capability trait.

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::AppError;
use crate::llm_client::GeminiClient;

/// Which resume section a description belongs to. Drives prompt selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionKind {
    Education,
    Experience,
}

impl SuggestionKind {
    pub fn parse(kind: &str) -> Option<Self> {
        match kind {
            "education" => Some(SuggestionKind::Education),
            "experience" => Some(SuggestionKind::Experience),
            _ => None,
        }
    }
}

/// Produces an improved description for a resume section.
///
/// Carried in `AppState` as `Arc<dyn SuggestionProvider>` so the handler
/// never talks to the generative-text API directly and tests can stub it.
#[async_trait]
pub trait SuggestionProvider: Send + Sync {
    async fn improve(&self, description: &str, kind: SuggestionKind) -> Result<String, AppError>;
}

/// Gemini-backed provider used in production.
pub struct GeminiSuggestionProvider {
    client: GeminiClient,
}

impl GeminiSuggestionProvider {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl SuggestionProvider for GeminiSuggestionProvider {
    async fn improve(&self, description: &str, kind: SuggestionKind) -> Result<String, AppError> {
        let prompt = build_prompt(description, kind);
        self.client
            .generate(&prompt)
            .await
            .map_err(|e| AppError::Llm(e.to_string()))
    }
}

fn build_prompt(description: &str, kind: SuggestionKind) -> String {
    match kind {
        SuggestionKind::Education => format!(
            "Improve the following education experience description for resume: {description}"
        ),
        SuggestionKind::Experience => format!(
            "Improve the following professional experience description for resume: {description}"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_varies_by_kind() {
        let education = build_prompt("Studied compilers", SuggestionKind::Education);
        let experience = build_prompt("Wrote Rust services", SuggestionKind::Experience);

        assert!(education.contains("education experience description"));
        assert!(education.ends_with("Studied compilers"));
        assert!(experience.contains("professional experience description"));
        assert!(experience.ends_with("Wrote Rust services"));
    }

    #[test]
    fn parse_rejects_unknown_kinds() {
        assert_eq!(SuggestionKind::parse("education"), Some(SuggestionKind::Education));
        assert_eq!(SuggestionKind::parse("experience"), Some(SuggestionKind::Experience));
        assert_eq!(SuggestionKind::parse("hobby"), None);
    }
}
