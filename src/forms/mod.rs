use thiserror::Error;
use uuid::Uuid;

use crate::models::EventDraft;

pub mod event_form;
pub mod proposal_form;

pub use event_form::EventForm;
pub use proposal_form::ProposalForm;

/// Date format of the form's calendar inputs.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The first rule a form failed. Forms refuse to produce a draft until every
/// required field is valid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be a date in YYYY-MM-DD format, got '{value}'")]
    InvalidDate { field: &'static str, value: String },

    #[error("{field} must be a 24-hour time in HH:MM format, got '{value}'")]
    InvalidTime { field: &'static str, value: String },

    #[error("{field} must be at least {min}")]
    BelowMinimum { field: &'static str, min: u32 },

    #[error("'{value}' is not a valid {field}")]
    InvalidChoice { field: &'static str, value: String },
}

/// Outcome of confirming the event form.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    Create(EventDraft),
    Update(Uuid, EventDraft),
}

/// Number inputs hand back text; anything that is not an integer counts as 0.
pub fn coerce_number(input: &str) -> i64 {
    input.trim().parse().unwrap_or(0)
}

pub(crate) fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    Ok(trimmed.to_string())
}

pub(crate) fn at_least_one(field: &'static str, value: i64) -> Result<u32, FormError> {
    match u32::try_from(value) {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(FormError::BelowMinimum { field, min: 1 }),
    }
}

pub(crate) fn parse_date(field: &'static str, value: &str) -> Result<chrono::NaiveDate, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required(field));
    }
    chrono::NaiveDate::parse_from_str(trimmed, DATE_FORMAT).map_err(|_| FormError::InvalidDate {
        field,
        value: value.to_string(),
    })
}
