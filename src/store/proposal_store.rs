use chrono::NaiveDate;
use tracing::info;
use uuid::Uuid;

use crate::models::{Proposal, ProposalDraft, ProposalStatus};

/// Newest-first collection of proposals submitted by one organizer.
#[derive(Debug, Clone)]
pub struct ProposalStore {
    organizer_name: String,
    proposals: Vec<Proposal>,
}

impl ProposalStore {
    pub fn new(organizer_name: impl Into<String>) -> Self {
        Self::with_proposals(organizer_name, Vec::new())
    }

    pub fn with_proposals(organizer_name: impl Into<String>, proposals: Vec<Proposal>) -> Self {
        Self {
            organizer_name: organizer_name.into(),
            proposals,
        }
    }

    pub fn organizer_name(&self) -> &str {
        &self.organizer_name
    }

    pub fn list(&self) -> &[Proposal] {
        &self.proposals
    }

    pub fn len(&self) -> usize {
        self.proposals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// Files a new proposal as pending review. `submitted_on` is the date the
    /// caller considers "today".
    pub fn create(&mut self, draft: ProposalDraft, submitted_on: NaiveDate) -> Proposal {
        let proposal = Proposal {
            id: Uuid::new_v4(),
            event_title: draft.event_title,
            organizer_name: self.organizer_name.clone(),
            submitted_date: submitted_on,
            status: ProposalStatus::Pending,
            event_date: draft.event_date,
            expected_attendees: draft.expected_attendees,
            venue: draft.venue,
            notes: Some(draft.notes),
        };
        info!(
            proposal_id = %proposal.id,
            event_title = %proposal.event_title,
            "Proposal submitted"
        );
        self.proposals.insert(0, proposal.clone());
        proposal
    }
}
