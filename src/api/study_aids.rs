//! Study aid generation handlers
//!
//! POST /generate_notes, POST /generate_flashcards, POST /generate_questions

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ApiError, ApiResult};
use crate::normalize::{self, Flashcard};
use crate::services::CompletionResult;
use crate::AppState;

const NOTES_FALLBACK: &str = "Could not generate notes for this topic.";

/// Request body shared by the study aid endpoints
#[derive(Debug, Deserialize)]
pub struct TopicRequest {
    #[serde(default)]
    pub topic: String,
}

/// POST /generate_notes response
#[derive(Debug, Serialize)]
pub struct NotesResponse {
    pub notes: String,
}

/// POST /generate_flashcards response
#[derive(Debug, Serialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
}

/// POST /generate_questions response
#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<String>,
}

fn require_topic(topic: &str) -> ApiResult<()> {
    if topic.trim().is_empty() {
        return Err(ApiError::BadRequest("Topic is required".to_string()));
    }
    Ok(())
}

/// POST /generate_notes
///
/// Generates markdown-formatted notes for a topic. An upstream failure or
/// empty completion degrades to a literal placeholder string.
pub async fn generate_notes(
    State(state): State<AppState>,
    Json(request): Json<TopicRequest>,
) -> ApiResult<Json<NotesResponse>> {
    require_topic(&request.topic)?;

    let prompt = format!(
        "Provide concise, well-structured, and comprehensive notes for the academic topic: \
         \"{}\". Format the notes using Markdown. Ensure clear headings and subheadings, use \
         bullet points for lists, and include blank lines between paragraphs and sections for \
         excellent readability and proper spacing. Focus on essential concepts, definitions, \
         and important facts.",
        request.topic
    );

    let notes = match state.gemini.complete(&prompt, None).await {
        CompletionResult::Text(text) if !text.is_empty() => text,
        _ => NOTES_FALLBACK.to_string(),
    };

    Ok(Json(NotesResponse { notes }))
}

/// POST /generate_flashcards
///
/// Generates 5-7 question/answer pairs for a topic. Entries missing either
/// side are dropped; an upstream failure degrades to an empty list.
pub async fn generate_flashcards(
    State(state): State<AppState>,
    Json(request): Json<TopicRequest>,
) -> ApiResult<Json<FlashcardsResponse>> {
    require_topic(&request.topic)?;

    let prompt = format!(
        "Generate 5-7 distinct flashcards (question/answer pairs) for the academic topic: \
         \"{}\". Each flashcard should be an object with a 'front' (question) and 'back' \
         (answer) key. Return them as a JSON array of objects.\n\nExample format:\n[\n  \
         {{ \"front\": \"What is Python?\", \"back\": \"A high-level, interpreted programming \
         language.\" }},\n  {{ \"front\": \"Key features of Python?\", \"back\": \"Readability, \
         extensive libraries, dynamic typing, etc.\" }}\n]\n",
        request.topic
    );

    let schema = json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "front": { "type": "STRING" },
                "back": { "type": "STRING" }
            },
            "propertyOrdering": ["front", "back"]
        }
    });

    let flashcards = normalize::flashcards(state.gemini.complete(&prompt, Some(schema)).await);

    Ok(Json(FlashcardsResponse { flashcards }))
}

/// POST /generate_questions
///
/// Generates 3-5 open-ended questions for a topic. An upstream failure
/// degrades to an empty list.
pub async fn generate_questions(
    State(state): State<AppState>,
    Json(request): Json<TopicRequest>,
) -> ApiResult<Json<QuestionsResponse>> {
    require_topic(&request.topic)?;

    let prompt = format!(
        "Generate 3-5 important subjective (open-ended) questions for the academic topic: \
         \"{}\". These questions should encourage critical thinking and deeper understanding. \
         Return them as a JSON array of strings.\n\nExample format:\n[\n  \"Discuss the \
         implications of X on Y.\",\n  \"Compare and contrast A and B, providing relevant \
         examples.\"\n]\n",
        request.topic
    );

    let schema = json!({
        "type": "ARRAY",
        "items": { "type": "STRING" }
    });

    let questions = normalize::questions(state.gemini.complete(&prompt, Some(schema)).await);

    Ok(Json(QuestionsResponse { questions }))
}

/// Build study aid routes
pub fn study_aid_routes() -> Router<AppState> {
    Router::new()
        .route("/generate_notes", post(generate_notes))
        .route("/generate_flashcards", post(generate_flashcards))
        .route("/generate_questions", post(generate_questions))
}
