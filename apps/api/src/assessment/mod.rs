// Assessment Orchestrator: exam generation and answer grading.
// All model calls go through the completion module — no direct API calls here.

pub mod handlers;
pub mod prompts;

mod generator;
mod grader;

pub use generator::generate_exam;
pub use grader::{grade_answers, AnswerSubmission};

use crate::completion::CompletionError;
use crate::errors::AppError;

/// Maps a completion-client failure onto the operation's error contract:
/// API failures forward their status, everything else is the generic 500 lane.
fn completion_failure(context: &str, err: CompletionError) -> AppError {
    match err {
        CompletionError::Api { status, message } => AppError::Upstream {
            status,
            message: context.to_string(),
            detail: message,
        },
        other => AppError::Internal(other.into()),
    }
}
