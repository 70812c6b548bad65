// All completion prompt constants for the assessment module.
// Both prompts demand JSON-only output; the grader still defends against
// fenced replies before parsing.

/// System prompt for exam generation.
pub const EXAM_SYSTEM: &str = "You are a helpful assistant that creates English tests. \
    Please generate the response in valid JSON format.";

/// Exam generation prompt template. Replace `{lesson_names}` before sending.
pub const EXAM_PROMPT_TEMPLATE: &str = r#"Based on the following topics: {lesson_names}, generate an English level test with 20 questions in "JSON and nothing else" the first 5 questions will be A1, the other 5 A2, the following 5 will be B1 and B2 and the last five will be C1 and C2 level format following this structure:
{
  "title": "English Level Test",
  "questions": [
    {
      "question": "Question 1: How do you greet someone in the morning?",
      "type": "text",
      "answer": "Your answer here"
    },
    {
      "question": "Question 2: Choose the correct comparative form: 'She is ____ than her sister.'",
      "type": "multiple_choice",
      "options": [
        "a) tall",
        "b) taller",
        "c) tallest"
      ],
      "answer": "b) taller"
    }
  ]
}"#;

/// System prompt for answer grading.
pub const GRADING_SYSTEM: &str = "You are a helpful assistant that evaluates English test answers. \
    Provide the response in valid JSON format with recommendations for each question.";

/// Grading prompt template. Replace `{answers_json}` before sending.
pub const GRADING_PROMPT_TEMPLATE: &str = r#"Evaluate the following test answers and provide the results in this format if all questions are answered correctly then the level is C2, the other ones you have to determine the recommendations for each question must be in spanish the answer must be in Json and nothing else:
{
  "nivel": "A1, A2, B1 .... C2",
  "recomendaciones": [
    "Recommendation for question 1",
    "Recommendation for question 2",
    ...
  ]
}

Answers: {answers_json}"#;
