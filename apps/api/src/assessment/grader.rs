//! Answer grading — sends submitted answers to the completion API and
//! validates the returned level report.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crate::assessment::completion_failure;
use crate::assessment::prompts::{GRADING_PROMPT_TEMPLATE, GRADING_SYSTEM};
use crate::completion::{strip_json_fences, ChatMessage, ChatParams, CompletionClient};
use crate::errors::AppError;

const GRADING_PARAMS: ChatParams = ChatParams {
    temperature: 0.7,
    max_tokens: 1000,
};

const GRADING_CONTEXT: &str = "Error al procesar la evaluación con OpenAI";

/// One submitted question/answer pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerSubmission {
    pub question: String,
    pub answer: String,
}

/// Grades a set of submitted answers and returns the level report as parsed
/// JSON. The report must carry a truthy `nivel` and a `recomendaciones`
/// array; anything else is an invalid payload, returned with the partial
/// result attached for diagnosis.
pub async fn grade_answers(
    completion: &dyn CompletionClient,
    submissions: &[AnswerSubmission],
) -> Result<Value, AppError> {
    let answers_json =
        serde_json::to_string(submissions).map_err(|e| AppError::Internal(e.into()))?;
    let prompt = GRADING_PROMPT_TEMPLATE.replace("{answers_json}", &answers_json);
    let messages = [ChatMessage::system(GRADING_SYSTEM), ChatMessage::user(prompt)];

    let raw = completion
        .chat(&messages, GRADING_PARAMS)
        .await
        .map_err(|e| completion_failure(GRADING_CONTEXT, e))?;

    let result: Value =
        serde_json::from_str(strip_json_fences(&raw)).map_err(|e| AppError::Parse {
            message: "La respuesta de OpenAI no se pudo parsear correctamente.".to_string(),
            detail: e.to_string(),
        })?;

    if !is_truthy(result.get("nivel"))
        || !result.get("recomendaciones").is_some_and(Value::is_array)
    {
        return Err(AppError::InvalidPayload {
            message:
                "Respuesta de OpenAI inválida: faltan claves esperadas 'nivel' o 'recomendaciones'."
                    .to_string(),
            data: result,
        });
    }

    info!("computed English level: {}", result["nivel"]);

    Ok(result)
}

/// JSON truthiness as the grading contract defines it: absent, null, false,
/// zero and the empty string all fail the `nivel` check.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{CannedCompletion, FailingCompletion};
    use serde_json::json;

    fn submission(question: &str, answer: &str) -> AnswerSubmission {
        AnswerSubmission {
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }

    #[tokio::test]
    async fn test_fenced_reply_is_stripped_and_parsed() {
        let completion = CannedCompletion::replying(
            "```json\n{\"nivel\":\"B1\",\"recomendaciones\":[\"Review comparatives\"]}\n```",
        );

        let result = grade_answers(&completion, &[submission("Q1", "a) taller")])
            .await
            .unwrap();

        assert_eq!(
            result,
            json!({"nivel": "B1", "recomendaciones": ["Review comparatives"]})
        );
    }

    #[tokio::test]
    async fn test_unfenced_reply_parses_as_is() {
        let completion =
            CannedCompletion::replying(r#"{"nivel":"A2","recomendaciones":[]}"#);

        let result = grade_answers(&completion, &[submission("Q1", "hello")])
            .await
            .unwrap();

        assert_eq!(result["nivel"], json!("A2"));
    }

    #[tokio::test]
    async fn test_prompt_embeds_serialized_submissions() {
        let completion =
            CannedCompletion::replying(r#"{"nivel":"C1","recomendaciones":[]}"#);

        grade_answers(&completion, &[submission("Q1", "a) taller")])
            .await
            .unwrap();

        let prompt = completion.last_user_prompt().unwrap();
        assert!(prompt.contains(r#"{"question":"Q1","answer":"a) taller"}"#));

        let params = completion.last_params().unwrap();
        assert_eq!(params.max_tokens, 1000);
    }

    #[tokio::test]
    async fn test_missing_nivel_is_invalid_payload_with_data() {
        let completion = CannedCompletion::replying(r#"{"recomendaciones":[]}"#);

        let result = grade_answers(&completion, &[submission("Q1", "x")]).await;

        match result {
            Err(AppError::InvalidPayload { data, .. }) => {
                assert_eq!(data, json!({"recomendaciones": []}));
            }
            other => panic!("expected invalid payload, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_empty_string_nivel_is_invalid_payload() {
        let completion =
            CannedCompletion::replying(r#"{"nivel":"","recomendaciones":[]}"#);

        let result = grade_answers(&completion, &[submission("Q1", "x")]).await;
        assert!(matches!(result, Err(AppError::InvalidPayload { .. })));
    }

    #[tokio::test]
    async fn test_non_array_recomendaciones_is_invalid_payload() {
        let completion =
            CannedCompletion::replying(r#"{"nivel":"B2","recomendaciones":"repasa"}"#);

        let result = grade_answers(&completion, &[submission("Q1", "x")]).await;
        assert!(matches!(result, Err(AppError::InvalidPayload { .. })));
    }

    #[tokio::test]
    async fn test_non_json_reply_is_parse_error() {
        let completion = CannedCompletion::replying("nivel: B1");

        let result = grade_answers(&completion, &[submission("Q1", "x")]).await;
        assert!(matches!(result, Err(AppError::Parse { .. })));
    }

    #[tokio::test]
    async fn test_completion_api_error_forwards_status() {
        let result =
            grade_answers(&FailingCompletion { status: 502 }, &[submission("Q1", "x")]).await;

        match result {
            Err(AppError::Upstream { status, .. }) => assert_eq!(status, 502),
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[test]
    fn test_is_truthy_json_semantics() {
        assert!(!is_truthy(None));
        assert!(!is_truthy(Some(&Value::Null)));
        assert!(!is_truthy(Some(&json!(false))));
        assert!(!is_truthy(Some(&json!(0))));
        assert!(!is_truthy(Some(&json!(""))));
        assert!(is_truthy(Some(&json!("B1"))));
        assert!(is_truthy(Some(&json!(2))));
        assert!(is_truthy(Some(&json!({"a": 1}))));
    }
}
