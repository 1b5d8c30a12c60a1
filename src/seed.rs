//! Fixture the in-memory stores start from. Every restart returns to this data.

use chrono::{NaiveDate, NaiveTime};
use uuid::Uuid;

use crate::models::{
    Category, Event, EventMode, EventStatus, Notification, NotificationKind, Organizer, Proposal,
    ProposalStatus, Tags, Verification,
};

pub const DEFAULT_ORGANIZER_NAME: &str = "Sarah Johnson";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("seed dates are valid calendar dates")
}

fn time(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).expect("seed times are valid clock values")
}

fn tags(labels: &[&str]) -> Tags {
    labels.iter().collect()
}

pub fn events() -> Vec<Event> {
    vec![
        Event {
            id: Uuid::from_u128(1),
            title: "Tech Conference 2025".to_string(),
            description: "Annual technology conference featuring industry leaders".to_string(),
            date: date(2025, 11, 15),
            time: time(9, 0),
            location: "Convention Center, San Francisco".to_string(),
            mode: EventMode::Hybrid,
            capacity: 500,
            category: Category::Technology,
            tags: tags(&["conference", "networking", "tech"]),
            status: EventStatus::Published,
            attendees: 247,
            proposal_status: Some(ProposalStatus::Approved),
        },
        Event {
            id: Uuid::from_u128(2),
            title: "Web Development Workshop".to_string(),
            description: "Hands-on workshop for learning modern web development".to_string(),
            date: date(2025, 11, 8),
            time: time(14, 0),
            location: "Online via Zoom".to_string(),
            mode: EventMode::Virtual,
            capacity: 100,
            category: Category::Education,
            tags: tags(&["workshop", "coding", "web-dev"]),
            status: EventStatus::Published,
            attendees: 78,
            proposal_status: Some(ProposalStatus::Approved),
        },
        Event {
            id: Uuid::from_u128(3),
            title: "Startup Pitch Night".to_string(),
            description: "Evening event for startups to pitch their ideas to investors".to_string(),
            date: date(2025, 11, 20),
            time: time(18, 0),
            location: "Innovation Hub, Austin".to_string(),
            mode: EventMode::InPerson,
            capacity: 150,
            category: Category::Business,
            tags: tags(&["startup", "pitch", "investment"]),
            status: EventStatus::Draft,
            attendees: 0,
            proposal_status: Some(ProposalStatus::Pending),
        },
    ]
}

pub fn proposals() -> Vec<Proposal> {
    vec![
        Proposal {
            id: Uuid::from_u128(101),
            event_title: "Tech Conference 2025".to_string(),
            organizer_name: DEFAULT_ORGANIZER_NAME.to_string(),
            submitted_date: date(2025, 10, 1),
            status: ProposalStatus::Approved,
            event_date: date(2025, 11, 15),
            expected_attendees: 500,
            venue: "Convention Center, San Francisco".to_string(),
            notes: Some("Annual event with confirmed sponsors".to_string()),
        },
        Proposal {
            id: Uuid::from_u128(102),
            event_title: "Community Art Exhibition".to_string(),
            organizer_name: DEFAULT_ORGANIZER_NAME.to_string(),
            submitted_date: date(2025, 10, 25),
            status: ProposalStatus::Pending,
            event_date: date(2025, 12, 5),
            expected_attendees: 200,
            venue: "City Art Gallery".to_string(),
            notes: Some("Showcasing local artists".to_string()),
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    let entry = |id: &str, kind, title: &str, message: &str, time: &str, read| Notification {
        id: id.to_string(),
        kind,
        title: title.to_string(),
        message: message.to_string(),
        time: time.to_string(),
        read,
    };

    vec![
        entry(
            "1",
            NotificationKind::Approval,
            "Proposal Approved",
            "Your event \"Tech Conference 2025\" has been approved by the authorities.",
            "2 hours ago",
            false,
        ),
        entry(
            "2",
            NotificationKind::Attendance,
            "High Registration Rate",
            "Web Development Workshop has reached 78% capacity.",
            "5 hours ago",
            false,
        ),
        entry(
            "3",
            NotificationKind::Event,
            "Event Reminder",
            "Your event \"Web Development Workshop\" starts in 3 days.",
            "1 day ago",
            true,
        ),
        entry(
            "4",
            NotificationKind::System,
            "New Feature Available",
            "AI-powered description generator is now available for all events.",
            "2 days ago",
            true,
        ),
    ]
}

pub fn organizer(name: &str) -> Organizer {
    Organizer {
        name: name.to_string(),
        headline: "Professional Event Manager".to_string(),
        email: "sarah.johnson@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        organization: "Tech Events Inc.".to_string(),
        license_id: "ORG-2024-5847".to_string(),
        member_since: "Jan 2024".to_string(),
        rating: "98%".to_string(),
        verification: Verification {
            email: true,
            phone: true,
            identity: true,
        },
    }
}
