//! Axum route handlers for the assessment API.

use axum::{extract::State, Json};
use serde::Serialize;
use serde_json::Value;

use crate::assessment::{generate_exam, grade_answers, AnswerSubmission};
use crate::errors::AppError;
use crate::state::AppState;

/// Envelope for successful responses: `{ "success": true, "data": ... }`.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
    pub data: Value,
}

impl SuccessResponse {
    fn new(data: Value) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// GET /crearExamen
///
/// Builds a 20-question leveled English test from the lesson catalog.
pub async fn handle_create_exam(
    State(state): State<AppState>,
) -> Result<Json<SuccessResponse>, AppError> {
    let test = generate_exam(state.lessons.as_ref(), state.completion.as_ref()).await?;
    Ok(Json(SuccessResponse::new(test)))
}

/// POST /entregarNivelDeIngles
///
/// Grades submitted answers and returns the CEFR level report.
/// The body is validated by hand so malformed shapes produce the documented
/// 400 messages instead of the framework's rejection.
pub async fn handle_submit_level(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<SuccessResponse>, AppError> {
    let body = body.map(|Json(v)| v).unwrap_or(Value::Null);
    let submissions = parse_submissions(&body)?;

    let result = grade_answers(state.completion.as_ref(), &submissions).await?;
    Ok(Json(SuccessResponse::new(result)))
}

/// Validates the request body in order, first failure wins: `questions` must
/// be an array, and every element must carry string `question` and `answer`
/// fields.
fn parse_submissions(body: &Value) -> Result<Vec<AnswerSubmission>, AppError> {
    let questions = body
        .get("questions")
        .and_then(Value::as_array)
        .ok_or_else(|| {
            AppError::Validation("Formato incorrecto: se esperaba un array de preguntas".to_string())
        })?;

    questions
        .iter()
        .map(|q| {
            let question = q.get("question").and_then(Value::as_str);
            let answer = q.get("answer").and_then(Value::as_str);
            match (question, answer) {
                (Some(question), Some(answer)) => Ok(AnswerSubmission {
                    question: question.to_string(),
                    answer: answer.to_string(),
                }),
                _ => Err(AppError::Validation(
                    "Cada pregunta debe tener una clave 'question' y una clave 'answer', ambas de tipo string."
                        .to_string(),
                )),
            }
        })
        .collect()
}
