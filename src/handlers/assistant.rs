use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::forms::EventForm;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::success;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DescriptionRequest {
    pub title: String,
    pub category: String,
    pub mode: Option<String>,
    pub description: String,
}

#[derive(Debug, Serialize)]
pub struct DescriptionSuggestion {
    pub suggestion: String,
}

/// Produces a description suggestion for the client to accept or dismiss.
/// The simulated wait runs on the blocking pool so other requests carry on.
pub async fn suggest_description(
    State(state): State<AppState>,
    Json(request): Json<DescriptionRequest>,
) -> Result<Response, AppError> {
    if request.description.is_empty()
        && (request.title.trim().is_empty() || request.category.trim().is_empty())
    {
        return Err(AppError::BadRequest(
            "A title and category are needed to generate a description".to_string(),
        ));
    }

    let assistant = state.assistant.clone();
    let suggestion = tokio::task::spawn_blocking(move || {
        let mut form = EventForm::new();
        form.title = request.title;
        form.category = request.category;
        if let Some(mode) = request.mode {
            form.mode = mode;
        }
        form.description = request.description;
        form.request_suggestion(&*assistant).map(str::to_string)
    })
    .await
    .map_err(|e| AppError::InternalServerError(e.to_string()))??;

    Ok(success(
        DescriptionSuggestion { suggestion },
        "Suggestion ready",
    ))
}
