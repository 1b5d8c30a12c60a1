use axum::extract::State;
use axum::response::Response;
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::assistant::insights;
use crate::models::{Notification, NotificationPreferences, PreferenceKey};
use crate::state::AppState;
use crate::utils::response::success;

pub async fn get_stats(State(state): State<AppState>) -> Response {
    let stats = state.dashboard.read().await.stats();
    success(stats, "Statistics computed")
}

pub async fn get_insights() -> Response {
    success(insights(), "Insights retrieved")
}

pub async fn get_profile(State(state): State<AppState>) -> Response {
    let dashboard = state.dashboard.read().await;
    success(&dashboard.organizer, "Profile retrieved")
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NotificationFeed<'a> {
    notifications: &'a [Notification],
    unread_count: usize,
}

pub async fn list_notifications(State(state): State<AppState>) -> Response {
    let dashboard = state.dashboard.read().await;
    let feed = NotificationFeed {
        notifications: &dashboard.notifications,
        unread_count: dashboard.unread_notifications(),
    };
    success(feed, "Notifications retrieved")
}

pub async fn get_preferences(State(state): State<AppState>) -> Response {
    let preferences = state.dashboard.read().await.preferences;
    success(preferences, "Notification preferences retrieved")
}

pub async fn save_preferences(
    State(state): State<AppState>,
    Json(preferences): Json<NotificationPreferences>,
) -> Response {
    state.dashboard.write().await.preferences = preferences;
    info!(?preferences, "Notification preferences saved");
    success(preferences, "Settings saved successfully")
}

#[derive(Debug, Deserialize)]
pub struct TogglePayload {
    pub key: PreferenceKey,
}

pub async fn toggle_preference(
    State(state): State<AppState>,
    Json(payload): Json<TogglePayload>,
) -> Response {
    let mut dashboard = state.dashboard.write().await;
    let enabled = dashboard.preferences.toggle(payload.key);
    info!(key = ?payload.key, enabled, "Notification preference toggled");
    success(dashboard.preferences, "Notification preference toggled")
}
