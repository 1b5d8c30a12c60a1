use axum::extract::{Path, State};
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::forms::EventForm;
use crate::models::Event;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, empty_success, success};

/// Body of the create and edit requests: the raw values of the event dialog.
/// Omitted optional fields keep the form's current value: the defaults on
/// create, the stored event's values on edit.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventPayload {
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub mode: Option<String>,
    pub capacity: Option<i64>,
    pub category: String,
    pub status: Option<String>,
    pub tags: Option<Vec<String>>,
}

impl EventPayload {
    fn fill(self, form: &mut EventForm) {
        form.title = self.title;
        form.description = self.description;
        form.date = self.date;
        form.time = self.time;
        form.location = self.location;
        if let Some(mode) = self.mode {
            form.mode = mode;
        }
        if let Some(capacity) = self.capacity {
            form.capacity = capacity;
        }
        form.category = self.category;
        if let Some(status) = self.status {
            form.status = status;
        }
        if let Some(tags) = self.tags {
            form.replace_tags(tags);
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventListItem {
    #[serde(flatten)]
    pub event: Event,
    pub capacity_percentage: u32,
}

impl From<&Event> for EventListItem {
    fn from(event: &Event) -> Self {
        Self {
            event: event.clone(),
            capacity_percentage: event.capacity_percentage(),
        }
    }
}

pub async fn list_events(State(state): State<AppState>) -> Response {
    let dashboard = state.dashboard.read().await;
    let items: Vec<EventListItem> = dashboard.events.list().iter().map(Into::into).collect();
    success(items, "Events retrieved")
}

pub async fn get_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let dashboard = state.dashboard.read().await;
    let event = dashboard
        .events
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' does not exist", id)))?;
    Ok(success(EventListItem::from(event), "Event retrieved"))
}

pub async fn create_event(
    State(state): State<AppState>,
    Json(payload): Json<EventPayload>,
) -> Result<Response, AppError> {
    let mut form = EventForm::new();
    payload.fill(&mut form);
    let submission = form.submit()?;

    let event = state.dashboard.write().await.events.apply(submission)?;
    Ok(created(event, "Event created"))
}

pub async fn update_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EventPayload>,
) -> Result<Response, AppError> {
    let mut dashboard = state.dashboard.write().await;
    let existing = dashboard
        .events
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Event '{}' does not exist", id)))?;

    let mut form = EventForm::edit(existing);
    payload.fill(&mut form);
    let submission = form.submit()?;

    let event = dashboard.events.apply(submission)?;
    Ok(success(event, "Event updated"))
}

pub async fn delete_event(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    state.dashboard.write().await.events.delete(id);
    empty_success("Event deleted")
}

pub async fn duplicate_event(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Response, AppError> {
    let event = state.dashboard.write().await.events.duplicate_by_id(id)?;
    Ok(created(event, "Event duplicated"))
}
