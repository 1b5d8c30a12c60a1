pub mod event;
pub mod notification;
pub mod organizer;
pub mod proposal;

pub use event::{Category, Event, EventDraft, EventMode, EventStatus, Tags};
pub use notification::{Notification, NotificationKind, NotificationPreferences, PreferenceKey};
pub use organizer::{Organizer, Verification};
pub use proposal::{Proposal, ProposalDraft, ProposalStatus};
