use axum::extract::State;
use axum::response::Response;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;

use crate::forms::proposal_form::{ProposalForm, DEFAULT_EXPECTED_ATTENDEES};
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{created, success};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProposalPayload {
    pub event_title: String,
    pub event_date: String,
    pub expected_attendees: i64,
    pub venue: String,
    pub event_type: String,
    pub duration: String,
    pub budget: String,
    pub purpose: String,
    pub safety_measures: String,
    pub notes: String,
}

impl Default for ProposalPayload {
    fn default() -> Self {
        Self {
            event_title: String::new(),
            event_date: String::new(),
            expected_attendees: DEFAULT_EXPECTED_ATTENDEES,
            venue: String::new(),
            event_type: String::new(),
            duration: String::new(),
            budget: String::new(),
            purpose: String::new(),
            safety_measures: String::new(),
            notes: String::new(),
        }
    }
}

impl From<ProposalPayload> for ProposalForm {
    fn from(payload: ProposalPayload) -> Self {
        ProposalForm {
            event_title: payload.event_title,
            event_date: payload.event_date,
            expected_attendees: payload.expected_attendees,
            venue: payload.venue,
            event_type: payload.event_type,
            duration: payload.duration,
            budget: payload.budget,
            purpose: payload.purpose,
            safety_measures: payload.safety_measures,
            notes: payload.notes,
        }
    }
}

pub async fn list_proposals(State(state): State<AppState>) -> Response {
    let dashboard = state.dashboard.read().await;
    success(dashboard.proposals.list(), "Proposals retrieved")
}

pub async fn submit_proposal(
    State(state): State<AppState>,
    Json(payload): Json<ProposalPayload>,
) -> Result<Response, AppError> {
    let draft = ProposalForm::from(payload).submit()?;
    let today = Utc::now().date_naive();

    let proposal = state.dashboard.write().await.proposals.create(draft, today);
    Ok(created(proposal, "Proposal submitted for review"))
}
