//! Video suggestion handler
//!
//! POST /suggest_video

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::selection::{select_candidate, Selection};
use crate::services::CompletionResult;
use crate::AppState;

/// POST /suggest_video request
#[derive(Debug, Deserialize)]
pub struct SuggestVideoRequest {
    #[serde(default)]
    pub topic: String,
}

/// Final video suggestion shape
#[derive(Debug, Serialize)]
pub struct VideoSuggestion {
    pub title: String,
    pub url: String,
}

/// POST /suggest_video
///
/// Searches YouTube for a lecture-style video on the topic. When the
/// search yields no candidates (or fails), falls back to asking the
/// completion service for a plausible suggestion; when that also fails,
/// answers with the literal failure sentinel.
pub async fn suggest_video(
    State(state): State<AppState>,
    Json(request): Json<SuggestVideoRequest>,
) -> ApiResult<Json<VideoSuggestion>> {
    if request.topic.trim().is_empty() {
        return Err(ApiError::BadRequest("Topic is required".to_string()));
    }

    let search_query = format!(
        "{} academic lecture full course tutorial explanation",
        request.topic
    );
    let candidates = state.youtube.search(&search_query).await;

    match select_candidate(&candidates) {
        Selection::KeywordMatch(candidate) | Selection::FirstResult(candidate) => {
            Ok(Json(VideoSuggestion {
                url: candidate.watch_url(),
                title: candidate.title,
            }))
        }
        Selection::NoCandidates => {
            tracing::warn!(
                topic = %request.topic,
                "YouTube search found no suitable video, falling back to generated suggestion"
            );
            Ok(Json(generate_suggestion(&state, &request.topic).await))
        }
    }
}

/// Ask the completion service to fabricate a plausible video suggestion.
///
/// The returned URL is generated by the model and is not verified to
/// exist.
async fn generate_suggestion(state: &AppState, topic: &str) -> VideoSuggestion {
    let prompt = format!(
        "For the academic topic \"{topic}\", suggest a plausible YouTube video title and a \
         realistic YouTube URL. The URL should follow the format \
         'https://www.youtube.com/watch?v=xxxxxxxxxxx' where 'xxxxxxxxxxx' is a valid-looking \
         YouTube video ID (e.g., 11 characters, alphanumeric). Prioritize topics that are \
         likely to have educational content. Ensure the video title is concise and directly \
         related to the topic. Return the response as a JSON object with 'title' and 'url' \
         keys.\n\nExample:\n{{\n  \"title\": \"Introduction to Python Programming Tutorial\",\n  \
         \"url\": \"https://www.youtube.com/watch?v=rfscVS0vtbw\"\n}}\n\nTopic: {topic}\n"
    );

    let schema = json!({
        "type": "OBJECT",
        "properties": {
            "title": { "type": "STRING" },
            "url": { "type": "STRING" }
        },
        "propertyOrdering": ["title", "url"]
    });

    if let CompletionResult::Structured(value) = state.gemini.complete(&prompt, Some(schema)).await
    {
        if let (Some(title), Some(url)) = (
            value.get("title").and_then(Value::as_str),
            value.get("url").and_then(Value::as_str),
        ) {
            return VideoSuggestion {
                title: title.to_string(),
                url: url.to_string(),
            };
        }
        tracing::warn!("generated video suggestion is missing title or url");
    }

    VideoSuggestion {
        title: "Failed to suggest video".to_string(),
        url: "#".to_string(),
    }
}

/// Build video suggestion routes
pub fn video_routes() -> Router<AppState> {
    Router::new().route("/suggest_video", post(suggest_video))
}
