use tracing::{debug, info};
use uuid::Uuid;

use super::StoreError;
use crate::forms::Submission;
use crate::models::{Event, EventDraft, EventStatus};

/// Suffix appended to the title of a duplicated event.
pub const COPY_SUFFIX: &str = " (Copy)";

/// Newest-first collection of the organizer's events.
#[derive(Debug, Default, Clone)]
pub struct EventStore {
    events: Vec<Event>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a store over an existing newest-first list, e.g. seed data.
    pub fn with_events(events: Vec<Event>) -> Self {
        Self { events }
    }

    pub fn list(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: Uuid) -> Option<&Event> {
        self.events.iter().find(|event| event.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn create(&mut self, draft: EventDraft) -> Event {
        let event = Event::from_draft(self.fresh_id(), 0, draft);
        info!(event_id = %event.id, title = %event.title, "Event created");
        self.events.insert(0, event.clone());
        event
    }

    /// Overwrites every editable field of the event. `id` and `attendees`
    /// are kept from the stored record.
    pub fn update(&mut self, id: Uuid, draft: EventDraft) -> Result<Event, StoreError> {
        let slot = self
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(StoreError::EventNotFound(id))?;

        *slot = Event::from_draft(slot.id, slot.attendees, draft);
        info!(event_id = %id, "Event updated");
        Ok(slot.clone())
    }

    /// Removes the event if present. Deleting an unknown id is a no-op.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.events.len();
        self.events.retain(|event| event.id != id);
        let removed = self.events.len() != before;
        if removed {
            info!(event_id = %id, "Event deleted");
        } else {
            debug!(event_id = %id, "Delete ignored, event not present");
        }
        removed
    }

    pub fn duplicate(&mut self, source: &Event) -> Event {
        let copy = Event {
            id: self.fresh_id(),
            title: format!("{}{}", source.title, COPY_SUFFIX),
            status: EventStatus::Draft,
            attendees: 0,
            proposal_status: None,
            ..source.clone()
        };
        info!(source_id = %source.id, event_id = %copy.id, "Event duplicated");
        self.events.insert(0, copy.clone());
        copy
    }

    /// Looks the source up by id before duplicating it.
    pub fn duplicate_by_id(&mut self, id: Uuid) -> Result<Event, StoreError> {
        let source = self.get(id).cloned().ok_or(StoreError::EventNotFound(id))?;
        Ok(self.duplicate(&source))
    }

    /// Routes an event form submission to create or update.
    pub fn apply(&mut self, submission: Submission) -> Result<Event, StoreError> {
        match submission {
            Submission::Create(draft) => Ok(self.create(draft)),
            Submission::Update(id, draft) => self.update(id, draft),
        }
    }

    fn fresh_id(&self) -> Uuid {
        loop {
            let id = Uuid::new_v4();
            if self.get(id).is_none() {
                return id;
            }
        }
    }
}
