//! Exam generation — fetches the lesson catalog and asks the completion API
//! for a 20-question leveled English test.

use serde_json::Value;

use crate::assessment::completion_failure;
use crate::assessment::prompts::{EXAM_PROMPT_TEMPLATE, EXAM_SYSTEM};
use crate::completion::{ChatMessage, ChatParams, CompletionClient};
use crate::errors::AppError;
use crate::lessons::{LessonsCatalog, LessonsError};

const EXAM_PARAMS: ChatParams = ChatParams {
    temperature: 0.7,
    max_tokens: 2000,
};

const EXAM_CONTEXT: &str = "Error al generar el examen";

/// Generates a leveled English test seeded with the current lesson catalog.
///
/// The completion output is returned as parsed JSON, unmodified — the test
/// shape is the model's responsibility and is not validated field by field.
pub async fn generate_exam(
    lessons: &dyn LessonsCatalog,
    completion: &dyn CompletionClient,
) -> Result<Value, AppError> {
    let names = lessons.lesson_names().await.map_err(|e| match e {
        LessonsError::Api { status, message } => AppError::Upstream {
            status,
            message: EXAM_CONTEXT.to_string(),
            detail: message,
        },
        LessonsError::Http(e) => AppError::Internal(e.into()),
    })?;

    if names.is_empty() {
        return Err(AppError::NotFound("No se encontraron lecciones".to_string()));
    }

    let prompt = EXAM_PROMPT_TEMPLATE.replace("{lesson_names}", &names.join(", "));
    let messages = [ChatMessage::system(EXAM_SYSTEM), ChatMessage::user(prompt)];

    let raw = completion
        .chat(&messages, EXAM_PARAMS)
        .await
        .map_err(|e| completion_failure(EXAM_CONTEXT, e))?;

    serde_json::from_str(&raw).map_err(|e| AppError::Parse {
        message: "Error al procesar la respuesta de OpenAI".to_string(),
        detail: e.to_string(),
    })
}
