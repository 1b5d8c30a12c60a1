use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::config::{create_cors_layer, security_headers};
use crate::handlers::{assistant, dashboard, events, health_check, proposals};
use crate::state::AppState;

pub fn create_routes(state: AppState, production: bool) -> Router {
    let api = Router::new()
        .route("/events", get(events::list_events).post(events::create_event))
        .route(
            "/events/:id",
            get(events::get_event)
                .put(events::update_event)
                .delete(events::delete_event),
        )
        .route("/events/:id/duplicate", post(events::duplicate_event))
        .route(
            "/proposals",
            get(proposals::list_proposals).post(proposals::submit_proposal),
        )
        .route("/stats", get(dashboard::get_stats))
        .route("/insights", get(dashboard::get_insights))
        .route("/profile", get(dashboard::get_profile))
        .route("/notifications", get(dashboard::list_notifications))
        .route(
            "/settings/notifications",
            get(dashboard::get_preferences).put(dashboard::save_preferences),
        )
        .route(
            "/settings/notifications/toggle",
            post(dashboard::toggle_preference),
        )
        .route("/assistant/description", post(assistant::suggest_description));

    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .with_state(state);

    security_headers(router, production)
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
}
