use std::sync::Arc;

use crate::spellcheck::SpellCorrector;
use crate::store::SharedStore;
use crate::suggestion::SuggestionProvider;

/// Shared application state injected into all route handlers via Axum
/// extractors. The store is constructor-injected (never a module global)
/// and its lifecycle is tied to server startup.
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    /// Pluggable spelling engine. Default: `EditDistanceCorrector`.
    pub spell: Arc<dyn SpellCorrector>,
    /// Pluggable suggestion backend. Default: `GeminiSuggestionProvider`.
    pub suggestions: Arc<dyn SuggestionProvider>,
}
