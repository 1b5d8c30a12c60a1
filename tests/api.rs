use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use eventpro_server::assistant::{Delay, DescriptionAssistant, NoDelay};
use eventpro_server::routes::create_routes;
use eventpro_server::state::{AppState, Dashboard};

const TECH_CONFERENCE_ID: &str = "00000000-0000-0000-0000-000000000001";
const MISSING_ID: &str = "6f1c2a5e-0000-4000-8000-000000000000";

fn build_test_router() -> Router {
    let delay: Box<dyn Delay> = Box::new(NoDelay);
    let state = AppState::new(
        Dashboard::seeded("Sarah Johnson"),
        DescriptionAssistant::new(delay),
    );
    create_routes(state, false)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn new_event_body() -> Value {
    json!({
        "title": "X",
        "description": "Y",
        "date": "2026-03-14",
        "time": "10:00",
        "location": "Main Hall",
        "capacity": 100,
        "category": "Technology",
        "tags": ["rust", " rust ", ""]
    })
}

#[tokio::test]
async fn health_check_reports_ok() {
    let app = build_test_router();
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
}

#[tokio::test]
async fn create_event_starts_as_draft_without_attendees() {
    let app = build_test_router();

    let (status, body) = send(&app, Method::POST, "/api/events", Some(new_event_body())).await;
    assert_eq!(status, StatusCode::CREATED);
    let event = &body["data"];
    assert_eq!(event["attendees"], 0);
    assert_eq!(event["status"], "draft");
    assert_eq!(event["mode"], "in-person");
    assert_eq!(event["proposalStatus"], Value::Null);
    assert_eq!(event["tags"], json!(["rust"]));

    let (_, list) = send(&app, Method::GET, "/api/events", None).await;
    let events = list["data"].as_array().unwrap();
    assert_eq!(events.len(), 4);
    assert_eq!(events[0]["id"], event["id"]);
    assert_eq!(events[0]["capacityPercentage"], 0);
}

#[tokio::test]
async fn create_event_rejects_invalid_capacity() {
    let app = build_test_router();
    let mut body = new_event_body();
    body["capacity"] = json!(0);

    let (status, response) = send(&app, Method::POST, "/api/events", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["success"], false);
    assert_eq!(response["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(response["error"]["details"]["field"], "capacity");

    let (_, stats) = send(&app, Method::GET, "/api/stats", None).await;
    assert_eq!(stats["data"]["totalEvents"], 3);
}

#[tokio::test]
async fn update_event_keeps_id_attendees_and_proposal_status() {
    let app = build_test_router();
    let mut body = new_event_body();
    body["title"] = json!("Tech Conference 2026");
    body["status"] = json!("cancelled");

    let uri = format!("/api/events/{}", TECH_CONFERENCE_ID);
    let (status, response) = send(&app, Method::PUT, &uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    let event = &response["data"];
    assert_eq!(event["id"], TECH_CONFERENCE_ID);
    assert_eq!(event["attendees"], 247);
    assert_eq!(event["title"], "Tech Conference 2026");
    assert_eq!(event["status"], "cancelled");
    assert_eq!(event["proposalStatus"], "approved");
}

#[tokio::test]
async fn update_event_without_capacity_or_tags_keeps_stored_values() {
    let app = build_test_router();
    let uri = format!("/api/events/{}", TECH_CONFERENCE_ID);
    let (_, before) = send(&app, Method::GET, &uri, None).await;

    let mut body = new_event_body();
    body.as_object_mut().unwrap().remove("capacity");
    body.as_object_mut().unwrap().remove("tags");
    body["title"] = json!("Tech Conference 2026");

    let (status, response) = send(&app, Method::PUT, &uri, Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    let event = &response["data"];
    assert_eq!(event["title"], "Tech Conference 2026");
    assert_eq!(event["capacity"], 500);
    assert_eq!(event["tags"], before["data"]["tags"]);
    assert_eq!(event["tags"].as_array().unwrap().len(), 3);
    assert_eq!(event["mode"], "hybrid");
    assert_eq!(event["status"], "published");
}

#[tokio::test]
async fn create_event_without_capacity_uses_default() {
    let app = build_test_router();
    let mut body = new_event_body();
    body.as_object_mut().unwrap().remove("capacity");
    body.as_object_mut().unwrap().remove("tags");

    let (status, response) = send(&app, Method::POST, "/api/events", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(response["data"]["capacity"], 50);
    assert_eq!(response["data"]["tags"], json!([]));
}

#[tokio::test]
async fn update_and_duplicate_of_missing_event_are_not_found() {
    let app = build_test_router();
    let uri = format!("/api/events/{}", MISSING_ID);

    let (status, body) = send(&app, Method::PUT, &uri, Some(new_event_body())).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"]["code"], "NOT_FOUND");

    let uri = format!("/api/events/{}/duplicate", MISSING_ID);
    let (status, _) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_event_is_idempotent() {
    let app = build_test_router();
    let uri = format!("/api/events/{}", TECH_CONFERENCE_ID);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::GET, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, stats) = send(&app, Method::GET, "/api/stats", None).await;
    assert_eq!(stats["data"]["totalEvents"], 2);
    assert_eq!(stats["data"]["totalAttendees"], 78);
    assert_eq!(stats["data"]["publishedEvents"], 1);
}

#[tokio::test]
async fn duplicate_event_resets_lifecycle_fields() {
    let app = build_test_router();
    let uri = format!("/api/events/{}/duplicate", TECH_CONFERENCE_ID);

    let (status, body) = send(&app, Method::POST, &uri, None).await;
    assert_eq!(status, StatusCode::CREATED);
    let copy = &body["data"];
    assert_ne!(copy["id"], TECH_CONFERENCE_ID);
    assert_eq!(copy["title"], "Tech Conference 2025 (Copy)");
    assert_eq!(copy["status"], "draft");
    assert_eq!(copy["attendees"], 0);
    assert_eq!(copy["proposalStatus"], Value::Null);
    assert_eq!(copy["capacity"], 500);
    assert_eq!(copy["mode"], "hybrid");
}

#[tokio::test]
async fn submit_proposal_composes_notes_and_is_pending() {
    let app = build_test_router();
    let body = json!({
        "eventTitle": "Spring Hackathon",
        "eventDate": "2026-04-18",
        "expectedAttendees": 120,
        "venue": "Engineering Building",
        "eventType": "Workshop",
        "duration": "Half day",
        "budget": "$5,000 - $10,000",
        "purpose": "Test",
        "safetyMeasures": "None",
        "notes": ""
    });

    let (status, response) = send(&app, Method::POST, "/api/proposals", Some(body)).await;
    assert_eq!(status, StatusCode::CREATED);
    let proposal = &response["data"];
    assert_eq!(proposal["status"], "pending");
    assert_eq!(proposal["organizerName"], "Sarah Johnson");
    assert_eq!(
        proposal["notes"],
        "Type: Workshop | Duration: Half day | Budget: $5,000 - $10,000 | Purpose: Test | Safety: None"
    );
    assert!(proposal.get("eventType").is_none());

    let (_, stats) = send(&app, Method::GET, "/api/stats", None).await;
    assert_eq!(stats["data"]["approvedProposals"], 1);
    assert_eq!(stats["data"]["pendingProposals"], 2);

    let (_, list) = send(&app, Method::GET, "/api/proposals", None).await;
    assert_eq!(list["data"][0]["eventTitle"], "Spring Hackathon");
}

#[tokio::test]
async fn submit_proposal_requires_safety_measures() {
    let app = build_test_router();
    let body = json!({
        "eventTitle": "Spring Hackathon",
        "eventDate": "2026-04-18",
        "venue": "Engineering Building",
        "eventType": "Workshop",
        "duration": "Half day",
        "budget": "Under $5,000",
        "purpose": "Test"
    });

    let (status, response) = send(&app, Method::POST, "/api/proposals", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response["error"]["details"]["field"], "safetyMeasures");
}

#[tokio::test]
async fn assistant_generates_and_enhances() {
    let app = build_test_router();

    let request = json!({ "title": "Gallery Night", "category": "Arts & Culture", "mode": "virtual" });
    let (status, body) = send(&app, Method::POST, "/api/assistant/description", Some(request)).await;
    assert_eq!(status, StatusCode::OK);
    let suggestion = body["data"]["suggestion"].as_str().unwrap();
    assert!(suggestion.starts_with("Immerse yourself in creativity at Gallery Night"));
    assert!(suggestion.contains("This virtual event"));

    let request = json!({ "title": "Gallery Night", "category": "Arts & Culture", "description": "Art." });
    let (_, body) = send(&app, Method::POST, "/api/assistant/description", Some(request)).await;
    assert!(body["data"]["suggestion"]
        .as_str()
        .unwrap()
        .starts_with("Art.\n\nWhat to Expect:"));

    let request = json!({ "title": "", "category": "" });
    let (status, _) = send(&app, Method::POST, "/api/assistant/description", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn assistant_rejects_unknown_mode() {
    let app = build_test_router();

    let request = json!({ "title": "Gallery Night", "category": "Arts & Culture", "mode": "remote" });
    let (status, body) = send(&app, Method::POST, "/api/assistant/description", Some(request)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["details"]["field"], "mode");
}

#[tokio::test]
async fn notification_preferences_toggle_and_save() {
    let app = build_test_router();

    let (_, body) = send(&app, Method::GET, "/api/settings/notifications", None).await;
    assert_eq!(body["data"]["marketingEmails"], false);

    let toggle = json!({ "key": "marketingEmails" });
    let (_, body) = send(&app, Method::POST, "/api/settings/notifications/toggle", Some(toggle)).await;
    assert_eq!(body["data"]["marketingEmails"], true);

    let mut saved = body["data"].clone();
    saved["emailNotifications"] = json!(false);
    let (status, _) = send(&app, Method::PUT, "/api/settings/notifications", Some(saved)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, "/api/settings/notifications", None).await;
    assert_eq!(body["data"]["emailNotifications"], false);
    assert_eq!(body["data"]["marketingEmails"], true);
}

#[tokio::test]
async fn read_only_dashboard_panels() {
    let app = build_test_router();

    let (_, body) = send(&app, Method::GET, "/api/notifications", None).await;
    assert_eq!(body["data"]["unreadCount"], 2);
    assert_eq!(body["data"]["notifications"][0]["type"], "approval");

    let (_, body) = send(&app, Method::GET, "/api/insights", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 3);

    let (_, body) = send(&app, Method::GET, "/api/profile", None).await;
    assert_eq!(body["data"]["licenseId"], "ORG-2024-5847");
    assert_eq!(body["data"]["verification"]["identity"], true);

    let (_, body) = send(&app, Method::GET, "/api/stats", None).await;
    assert_eq!(body["data"]["totalAttendees"], 325);
    assert_eq!(body["data"]["publishedEvents"], 2);
}
