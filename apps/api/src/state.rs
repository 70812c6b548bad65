use std::sync::Arc;

use crate::completion::CompletionClient;
use crate::lessons::LessonsCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Both outbound clients are trait objects constructed once at startup and
/// passed in explicitly — no process-global client, and tests substitute
/// doubles without touching handler code.
#[derive(Clone)]
pub struct AppState {
    pub lessons: Arc<dyn LessonsCatalog>,
    pub completion: Arc<dyn CompletionClient>,
}
