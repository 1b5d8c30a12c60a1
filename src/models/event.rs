use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::proposal::ProposalStatus;

/// Time format used by the event form's clock input.
pub const TIME_FORMAT: &str = "%H:%M";

mod time_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use super::TIME_FORMAT;

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&time.format(TIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&raw, TIME_FORMAT).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventMode {
    InPerson,
    Virtual,
    Hybrid,
}

impl Default for EventMode {
    fn default() -> Self {
        EventMode::InPerson
    }
}

impl EventMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventMode::InPerson => "in-person",
            EventMode::Virtual => "virtual",
            EventMode::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for EventMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "in-person" => Ok(EventMode::InPerson),
            "virtual" => Ok(EventMode::Virtual),
            "hybrid" => Ok(EventMode::Hybrid),
            _ => Err(format!("Unknown event mode: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Draft,
    Published,
    Cancelled,
}

impl Default for EventStatus {
    fn default() -> Self {
        EventStatus::Draft
    }
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventStatus::Draft => "draft",
            EventStatus::Published => "published",
            EventStatus::Cancelled => "cancelled",
        }
    }
}

impl FromStr for EventStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(EventStatus::Draft),
            "published" => Ok(EventStatus::Published),
            "cancelled" => Ok(EventStatus::Cancelled),
            _ => Err(format!("Unknown event status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Technology,
    Business,
    Education,
    #[serde(rename = "Arts & Culture")]
    ArtsAndCulture,
    #[serde(rename = "Sports & Fitness")]
    SportsAndFitness,
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
    Music,
    #[serde(rename = "Health & Wellness")]
    HealthAndWellness,
    Community,
    Other,
}

impl Category {
    /// Display order of the category picker.
    pub const ALL: [Category; 10] = [
        Category::Technology,
        Category::Business,
        Category::Education,
        Category::ArtsAndCulture,
        Category::SportsAndFitness,
        Category::FoodAndDrink,
        Category::Music,
        Category::HealthAndWellness,
        Category::Community,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Education => "Education",
            Category::ArtsAndCulture => "Arts & Culture",
            Category::SportsAndFitness => "Sports & Fitness",
            Category::FoodAndDrink => "Food & Drink",
            Category::Music => "Music",
            Category::HealthAndWellness => "Health & Wellness",
            Category::Community => "Community",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|category| category.label() == s)
            .copied()
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Insertion-ordered tag labels without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Tags(Vec<String>);

impl Tags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a trimmed tag. Returns `false` and leaves the set untouched when
    /// the input is blank or already present.
    pub fn insert(&mut self, raw: &str) -> bool {
        let tag = raw.trim();
        if tag.is_empty() || self.contains(tag) {
            return false;
        }
        self.0.push(tag.to_string());
        true
    }

    pub fn remove(&mut self, tag: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != tag);
        self.0.len() != before
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|existing| existing == tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Tags {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut tags = Tags::new();
        for tag in iter {
            tags.insert(tag.as_ref());
        }
        tags
    }
}

impl From<Vec<String>> for Tags {
    fn from(raw: Vec<String>) -> Self {
        raw.into_iter().collect()
    }
}

impl From<Tags> for Vec<String> {
    fn from(tags: Tags) -> Self {
        tags.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    pub time: NaiveTime,
    pub location: String,
    pub mode: EventMode,
    pub capacity: u32,
    pub category: Category,
    pub tags: Tags,
    pub status: EventStatus,
    pub attendees: u32,
    pub proposal_status: Option<ProposalStatus>,
}

/// The user-editable part of an event. `id` and `attendees` are owned by the
/// store and never travel through a draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub date: NaiveDate,
    #[serde(with = "time_format")]
    pub time: NaiveTime,
    pub location: String,
    pub mode: EventMode,
    pub capacity: u32,
    pub category: Category,
    pub tags: Tags,
    pub status: EventStatus,
    pub proposal_status: Option<ProposalStatus>,
}

impl Event {
    pub fn from_draft(id: Uuid, attendees: u32, draft: EventDraft) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            date: draft.date,
            time: draft.time,
            location: draft.location,
            mode: draft.mode,
            capacity: draft.capacity,
            category: draft.category,
            tags: draft.tags,
            status: draft.status,
            attendees,
            proposal_status: draft.proposal_status,
        }
    }

    /// Rounded share of capacity already taken, as shown on the event list.
    pub fn capacity_percentage(&self) -> u32 {
        if self.capacity == 0 {
            return 0;
        }
        (f64::from(self.attendees) / f64::from(self.capacity) * 100.0).round() as u32
    }
}
