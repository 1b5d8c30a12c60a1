use serde::{Deserialize, Serialize};

/// The signed-in organizer. There is exactly one per running service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Organizer {
    pub name: String,
    pub headline: String,
    pub email: String,
    pub phone: String,
    pub organization: String,
    pub license_id: String,
    pub member_since: String,
    pub rating: String,
    pub verification: Verification,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub email: bool,
    pub phone: bool,
    pub identity: bool,
}

impl Verification {
    pub fn is_fully_verified(&self) -> bool {
        self.email && self.phone && self.identity
    }
}
