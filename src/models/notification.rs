use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Event,
    Approval,
    Attendance,
    System,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Relative label such as "2 hours ago".
    pub time: String,
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PreferenceKey {
    EmailNotifications,
    PushNotifications,
    EventReminders,
    ProposalUpdates,
    AttendeeMessages,
    MarketingEmails,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationPreferences {
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub event_reminders: bool,
    pub proposal_updates: bool,
    pub attendee_messages: bool,
    pub marketing_emails: bool,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_notifications: true,
            push_notifications: true,
            event_reminders: true,
            proposal_updates: true,
            attendee_messages: false,
            marketing_emails: false,
        }
    }
}

impl NotificationPreferences {
    fn slot(&mut self, key: PreferenceKey) -> &mut bool {
        match key {
            PreferenceKey::EmailNotifications => &mut self.email_notifications,
            PreferenceKey::PushNotifications => &mut self.push_notifications,
            PreferenceKey::EventReminders => &mut self.event_reminders,
            PreferenceKey::ProposalUpdates => &mut self.proposal_updates,
            PreferenceKey::AttendeeMessages => &mut self.attendee_messages,
            PreferenceKey::MarketingEmails => &mut self.marketing_emails,
        }
    }

    /// Flips one toggle and returns its new value.
    pub fn toggle(&mut self, key: PreferenceKey) -> bool {
        let slot = self.slot(key);
        *slot = !*slot;
        *slot
    }
}

pub fn unread_count(notifications: &[Notification]) -> usize {
    notifications.iter().filter(|n| !n.read).count()
}
