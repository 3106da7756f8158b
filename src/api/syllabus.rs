//! Syllabus extraction handlers
//!
//! POST /extract_title, POST /extract_topics

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ApiError, ApiResult};
use crate::normalize;
use crate::services::CompletionResult;
use crate::AppState;

/// Request body shared by the syllabus extraction endpoints
#[derive(Debug, Deserialize)]
pub struct SyllabusRequest {
    #[serde(default)]
    pub syllabus_text: String,
}

/// POST /extract_title response
#[derive(Debug, Serialize)]
pub struct TitleResponse {
    /// Extracted title; null when the completion service failed
    pub title: Option<String>,
}

/// POST /extract_topics response
#[derive(Debug, Serialize)]
pub struct TopicsResponse {
    pub topics: Vec<String>,
}

/// POST /extract_title
///
/// Extracts the main course title from raw syllabus text. An upstream
/// failure surfaces as a null title, never as an error status.
pub async fn extract_title(
    State(state): State<AppState>,
    Json(request): Json<SyllabusRequest>,
) -> ApiResult<Json<TitleResponse>> {
    if request.syllabus_text.trim().is_empty() {
        return Err(ApiError::BadRequest("Syllabus text is required".to_string()));
    }

    let prompt = format!(
        "From the following syllabus text, identify and extract the main course title or \
         syllabus title. Respond with only the title string. If no clear title is found, \
         respond with \"Unknown Course\".\n\nSyllabus:\n{}\n",
        request.syllabus_text
    );

    let title = match state.gemini.complete(&prompt, None).await {
        CompletionResult::Text(text) => Some(text),
        _ => None,
    };

    Ok(Json(TitleResponse { title }))
}

/// POST /extract_topics
///
/// Extracts distinct academic topics as a flat list of strings. Entries
/// the completion service returns without a usable topic are dropped; an
/// upstream failure degrades to an empty list.
pub async fn extract_topics(
    State(state): State<AppState>,
    Json(request): Json<SyllabusRequest>,
) -> ApiResult<Json<TopicsResponse>> {
    if request.syllabus_text.trim().is_empty() {
        return Err(ApiError::BadRequest("Syllabus text is required".to_string()));
    }

    let prompt = format!(
        "Extract key academic topics or subjects from the following syllabus text. Focus on \
         main, distinct topics that someone would learn about. Return them as a JSON array of \
         objects, where each object has a single key 'topic'. Do not include introductory \
         phrases like 'introduction to' or 'basics of' unless the topic specifically requires \
         it for clarity.\n\nSyllabus:\n{}\n",
        request.syllabus_text
    );

    let schema = json!({
        "type": "ARRAY",
        "items": {
            "type": "OBJECT",
            "properties": {
                "topic": { "type": "STRING" }
            },
            "propertyOrdering": ["topic"]
        }
    });

    let topics = normalize::topics(state.gemini.complete(&prompt, Some(schema)).await);

    Ok(Json(TopicsResponse { topics }))
}

/// Build syllabus extraction routes
pub fn syllabus_routes() -> Router<AppState> {
    Router::new()
        .route("/extract_title", post(extract_title))
        .route("/extract_topics", post(extract_topics))
}
