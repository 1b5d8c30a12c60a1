use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Authority review state mirrored onto an event. Set from outside the
/// event store; the store only ever copies or clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Pending => "pending",
            ProposalStatus::Approved => "approved",
            ProposalStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for ProposalStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(ProposalStatus::Pending),
            "approved" => Ok(ProposalStatus::Approved),
            "rejected" => Ok(ProposalStatus::Rejected),
            _ => Err(format!("Unknown proposal status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: Uuid,
    pub event_title: String,
    pub organizer_name: String,
    pub submitted_date: NaiveDate,
    pub status: ProposalStatus,
    pub event_date: NaiveDate,
    pub expected_attendees: u32,
    pub venue: String,
    pub notes: Option<String>,
}

/// What a proposal submission carries. Identity, organizer, submission date
/// and status are filled in by the proposal store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalDraft {
    pub event_title: String,
    pub event_date: NaiveDate,
    pub expected_attendees: u32,
    pub venue: String,
    pub notes: String,
}
