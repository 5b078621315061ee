use std::sync::Arc;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::routing::{get, post};
use serde::{Deserialize, Serialize};

use crate::assistant::{self, GREETING, SUGGESTIONS, Suggestion};
use crate::error::AppError;
use crate::state::AppState;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/assistant/suggestions", get(suggestions))
        .route("/assistant/messages", post(send_message))
}

#[derive(Serialize)]
pub struct SuggestionsResponse {
    pub greeting: &'static str,
    pub suggestions: [Suggestion; 4],
}

#[derive(Deserialize)]
pub struct MessageRequest {
    pub message: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub reply: &'static str,
}

async fn suggestions() -> Json<SuggestionsResponse> {
    Json(SuggestionsResponse {
        greeting: GREETING,
        suggestions: SUGGESTIONS,
    })
}

async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MessageRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    if payload.message.trim().is_empty() {
        return Err(AppError::BadRequest("message cannot be empty".to_string()));
    }

    state.metrics.assistant_messages_total.inc();
    Ok(Json(MessageResponse {
        reply: assistant::reply(&payload.message),
    }))
}
