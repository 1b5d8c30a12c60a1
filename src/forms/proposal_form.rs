use tracing::debug;

use super::{at_least_one, coerce_number, parse_date, required, FormError};
use crate::models::ProposalDraft;

pub const DEFAULT_EXPECTED_ATTENDEES: i64 = 50;

pub const EVENT_TYPES: [&str; 8] = [
    "Conference",
    "Workshop",
    "Festival",
    "Exhibition",
    "Concert",
    "Seminar",
    "Community Event",
    "Other",
];

pub const DURATIONS: [&str; 4] = ["1-2 hours", "Half day", "Full day", "Multiple days"];

pub const BUDGET_RANGES: [&str; 5] = [
    "Under $5,000",
    "$5,000 - $10,000",
    "$10,000 - $25,000",
    "$25,000 - $50,000",
    "Over $50,000",
];

/// Field state of the "submit proposal to authority" dialog.
#[derive(Debug, Clone)]
pub struct ProposalForm {
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

impl Default for ProposalForm {
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

impl ProposalForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_expected_attendees_input(&mut self, input: &str) {
        self.expected_attendees = coerce_number(input);
    }

    pub fn validate(&self) -> Result<ProposalDraft, FormError> {
        let event_title = required("eventTitle", &self.event_title)?;
        let event_date = parse_date("eventDate", &self.event_date)?;
        let duration = required("duration", &self.duration)?;
        let venue = required("venue", &self.venue)?;
        let event_type = required("eventType", &self.event_type)?;
        let expected_attendees = at_least_one("expectedAttendees", self.expected_attendees)?;
        let budget = required("budget", &self.budget)?;
        let purpose = required("purpose", &self.purpose)?;
        let safety_measures = required("safetyMeasures", &self.safety_measures)?;

        Ok(ProposalDraft {
            event_title,
            event_date,
            expected_attendees,
            venue,
            notes: compose_notes(
                &event_type,
                &duration,
                &budget,
                &purpose,
                &safety_measures,
                self.notes.trim(),
            ),
        })
    }

    /// Validates and packages the proposal. The intake-only fields survive
    /// solely inside the composed `notes` line.
    pub fn submit(&self) -> Result<ProposalDraft, FormError> {
        self.validate().map_err(|err| {
            debug!(error = %err, "Proposal form rejected");
            err
        })
    }

    pub fn cancel(self) {}
}

/// Flattens the intake fields into one `|`-separated line. The
/// "Additional" segment only appears when there are extra notes.
pub fn compose_notes(
    event_type: &str,
    duration: &str,
    budget: &str,
    purpose: &str,
    safety_measures: &str,
    additional: &str,
) -> String {
    let mut notes = format!(
        "Type: {} | Duration: {} | Budget: {} | Purpose: {} | Safety: {}",
        event_type, duration, budget, purpose, safety_measures
    );
    if !additional.is_empty() {
        notes.push_str(" | Additional: ");
        notes.push_str(additional);
    }
    notes
}
