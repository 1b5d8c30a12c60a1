use serde::Serialize;

use crate::models::{Event, EventStatus, Proposal, ProposalStatus};

/// Headline numbers of the dashboard, recomputed from the collections on
/// every call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_events: usize,
    pub total_attendees: u64,
    pub published_events: usize,
    pub approved_proposals: usize,
    pub pending_proposals: usize,
}

impl DashboardStats {
    pub fn compute(events: &[Event], proposals: &[Proposal]) -> Self {
        Self {
            total_events: events.len(),
            total_attendees: total_attendees(events),
            published_events: count_events_with_status(events, EventStatus::Published),
            approved_proposals: count_proposals_with_status(proposals, ProposalStatus::Approved),
            pending_proposals: count_proposals_with_status(proposals, ProposalStatus::Pending),
        }
    }
}

pub fn total_attendees(events: &[Event]) -> u64 {
    events.iter().map(|event| u64::from(event.attendees)).sum()
}

pub fn count_events_with_status(events: &[Event], status: EventStatus) -> usize {
    events.iter().filter(|event| event.status == status).count()
}

pub fn count_proposals_with_status(proposals: &[Proposal], status: ProposalStatus) -> usize {
    proposals
        .iter()
        .filter(|proposal| proposal.status == status)
        .count()
}
