use chrono::NaiveTime;
use tracing::debug;
use uuid::Uuid;

use super::{at_least_one, coerce_number, parse_date, required, FormError, Submission};
use crate::assistant::{Delay, DescriptionAssistant};
use crate::models::{
    event::TIME_FORMAT, Category, Event, EventDraft, EventMode, EventStatus, ProposalStatus, Tags,
};

pub const DEFAULT_CAPACITY: i64 = 50;

/// Field state of the create/edit event dialog.
///
/// Text fields hold whatever the controls currently show; nothing is parsed
/// until [`EventForm::submit`]. Tags are the exception: they are committed one
/// at a time and the set never holds a blank or duplicate label.
#[derive(Debug, Clone)]
pub struct EventForm {
    editing: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub date: String,
    pub time: String,
    pub location: String,
    pub mode: String,
    pub capacity: i64,
    pub category: String,
    pub status: String,
    proposal_status: Option<ProposalStatus>,
    tags: Tags,
    suggestion: Option<String>,
}

impl Default for EventForm {
    fn default() -> Self {
        Self {
            editing: None,
            title: String::new(),
            description: String::new(),
            date: String::new(),
            time: String::new(),
            location: String::new(),
            mode: EventMode::default().as_str().to_string(),
            capacity: DEFAULT_CAPACITY,
            category: String::new(),
            status: EventStatus::default().as_str().to_string(),
            proposal_status: None,
            tags: Tags::new(),
            suggestion: None,
        }
    }
}

impl EventForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the form pre-filled from an existing event.
    pub fn edit(event: &Event) -> Self {
        Self {
            editing: Some(event.id),
            title: event.title.clone(),
            description: event.description.clone(),
            date: event.date.to_string(),
            time: event.time.format(TIME_FORMAT).to_string(),
            location: event.location.clone(),
            mode: event.mode.as_str().to_string(),
            capacity: i64::from(event.capacity),
            category: event.category.label().to_string(),
            status: event.status.as_str().to_string(),
            proposal_status: event.proposal_status,
            tags: event.tags.clone(),
            suggestion: None,
        }
    }

    pub fn editing(&self) -> Option<Uuid> {
        self.editing
    }

    /// Sets capacity from the raw text of a number input.
    pub fn set_capacity_input(&mut self, input: &str) {
        self.capacity = coerce_number(input);
    }

    pub fn tags(&self) -> &Tags {
        &self.tags
    }

    /// Commits the tag input. Blank or already-present tags are ignored.
    pub fn commit_tag(&mut self, input: &str) -> bool {
        self.tags.insert(input)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    /// Drops the current tags and commits each input in order.
    pub fn replace_tags<I, S>(&mut self, inputs: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tags = Tags::new();
        for input in inputs {
            self.commit_tag(input.as_ref());
        }
    }

    pub fn suggestion(&self) -> Option<&str> {
        self.suggestion.as_deref()
    }

    /// Generation needs a title and a category to pick a template from.
    pub fn can_generate(&self) -> bool {
        !self.title.trim().is_empty() && !self.category.trim().is_empty()
    }

    /// Asks the assistant for a description and stages it as a suggestion.
    /// An empty description is generated from scratch; otherwise the current
    /// text is enhanced. The description itself is left untouched.
    pub fn request_suggestion<D: Delay>(
        &mut self,
        assistant: &DescriptionAssistant<D>,
    ) -> Result<&str, FormError> {
        let mode = choice::<EventMode>("mode", &self.mode)?;
        let category = self.category.parse::<Category>().ok();
        let text = assistant.enhance(&self.description, &self.title, category, mode);
        Ok(self.suggestion.insert(text).as_str())
    }

    pub fn stage_suggestion(&mut self, text: impl Into<String>) {
        self.suggestion = Some(text.into());
    }

    /// Replaces the description with the staged suggestion.
    pub fn accept_suggestion(&mut self) -> bool {
        match self.suggestion.take() {
            Some(text) => {
                self.description = text;
                true
            }
            None => false,
        }
    }

    pub fn dismiss_suggestion(&mut self) {
        self.suggestion = None;
    }

    pub fn validate(&self) -> Result<EventDraft, FormError> {
        let title = required("title", &self.title)?;
        let description = required("description", &self.description)?;
        let date = parse_date("date", &self.date)?;
        let time = parse_time(&self.time)?;
        let location = required("location", &self.location)?;
        let capacity = at_least_one("capacity", self.capacity)?;
        let category = choice::<Category>("category", &self.category)?;
        let mode = choice::<EventMode>("mode", &self.mode)?;
        let status = choice::<EventStatus>("status", &self.status)?;

        Ok(EventDraft {
            title,
            description,
            date,
            time,
            location,
            mode,
            capacity,
            category,
            tags: self.tags.clone(),
            status,
            proposal_status: self.proposal_status,
        })
    }

    /// Validates the fields and packages them for the event store: a create
    /// for a fresh form, an update for one opened with [`EventForm::edit`].
    pub fn submit(&self) -> Result<Submission, FormError> {
        let draft = self.validate().map_err(|err| {
            debug!(error = %err, "Event form rejected");
            err
        })?;

        Ok(match self.editing {
            Some(id) => Submission::Update(id, draft),
            None => Submission::Create(draft),
        })
    }

    /// Discards all field state.
    pub fn cancel(self) {}
}

fn parse_time(value: &str) -> Result<NaiveTime, FormError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormError::Required("time"));
    }
    NaiveTime::parse_from_str(trimmed, TIME_FORMAT).map_err(|_| FormError::InvalidTime {
        field: "time",
        value: value.to_string(),
    })
}

fn choice<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T, FormError> {
    if value.trim().is_empty() {
        return Err(FormError::Required(field));
    }
    value.parse().map_err(|_| FormError::InvalidChoice {
        field,
        value: value.to_string(),
    })
}
